//! Costing module
//!
//! Cheapest-offer selection, per-recipe cost and nutrient aggregation, and
//! the batch driver over all recipes.

pub mod aggregator;
pub mod driver;
pub mod selector;

use thiserror::Error;

use crate::conversion::ConversionError;

/// Costing error types
///
/// Nothing here is caught and suppressed: any failure aborts the enclosing
/// recipe computation and, through the driver, the whole batch.
#[derive(Debug, Error)]
pub enum CostingError {
    /// No product (or no supplier offer) resolves for a line item's ingredient
    #[error("no products found for ingredient: {0}")]
    MissingProduct(String),

    /// A unit conversion failed with no applicable fallback
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Result type for costing operations
pub type CostingResult<T> = Result<T, CostingError>;

pub use aggregator::summarize_recipe;
pub use driver::summarize_recipes;
pub use selector::{cost_per_base_unit, select_cheapest};
