//! Recipe model
//!
//! A recipe owns an ordered sequence of line items, each pairing an
//! ingredient with the quantity the recipe requires.

use serde::{Deserialize, Serialize};

use super::{Ingredient, Quantity};

/// One ingredient requirement within a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub ingredient: Ingredient,
    pub quantity: Quantity,
}

/// A recipe: the top-level unit of computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub line_items: Vec<LineItem>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, line_items: Vec<LineItem>) -> Self {
        Self {
            name: name.into(),
            line_items,
        }
    }
}
