//! Batch driver
//!
//! Summarizes every recipe in the catalog into a name-keyed mapping. There is
//! no per-recipe isolation: the first failure aborts the whole batch.

use tracing::info;

use crate::catalog::Catalog;
use crate::models::RecipeSummaries;

use super::aggregator::summarize_recipe;
use super::CostingResult;

/// Summarize all recipes in the catalog, keyed by recipe name
pub fn summarize_recipes(catalog: &Catalog) -> CostingResult<RecipeSummaries> {
    let mut summaries = RecipeSummaries::new();

    for recipe in catalog.recipes() {
        let summary = summarize_recipe(catalog, recipe)?;
        info!(
            recipe = %recipe.name,
            cost = summary.cheapest_cost,
            nutrients = summary.nutrients_at_cheapest_cost.len(),
            "recipe summarized"
        );
        summaries.insert(recipe.name.clone(), summary);
    }

    Ok(summaries)
}
