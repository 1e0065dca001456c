//! Recipe summary output model
//!
//! The per-recipe result: minimum total cost plus the aggregated nutrient
//! profile at that cost. Nutrients are keyed by name in a `BTreeMap` so the
//! serialized mapping is always in ascending name order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::NutrientFact;

/// Result of costing a single recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub cheapest_cost: f64,
    pub nutrients_at_cheapest_cost: BTreeMap<String, NutrientFact>,
}

/// The full batch output, keyed by recipe name
pub type RecipeSummaries = BTreeMap<String, RecipeSummary>;
