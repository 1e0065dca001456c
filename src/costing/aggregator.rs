//! Per-recipe cost and nutrient aggregation
//!
//! Folds a recipe's line items into a running cost total and a nutrient
//! accumulator keyed by nutrient name. Each fold step selects the cheapest
//! supplier offer for the line item's ingredient, converts the required
//! quantity into that offer's unit, and adds the owning product's nutrient
//! facts (normalized to base units) to the accumulator.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::Catalog;
use crate::conversion::convert;
use crate::models::{LineItem, NutrientFact, Recipe, RecipeSummary, SupplierOffer};

use super::selector::{cost_per_base_unit, select_cheapest};
use super::{CostingError, CostingResult};

/// Accumulator threaded through the line-item fold
///
/// Owned exclusively by the in-flight `summarize_recipe` call; each fold step
/// consumes it and returns the updated value.
#[derive(Debug, Default)]
struct RecipeAccumulator {
    total_cost: f64,
    nutrients: BTreeMap<String, NutrientFact>,
}

impl RecipeAccumulator {
    fn fold_line_item(mut self, catalog: &Catalog, line: &LineItem) -> CostingResult<Self> {
        let products = catalog.products_for(&line.ingredient);

        let offers: Vec<&SupplierOffer> = products
            .iter()
            .flat_map(|p| p.supplier_offers.iter())
            .collect();
        if offers.is_empty() {
            return Err(CostingError::MissingProduct(line.ingredient.name.clone()));
        }

        let cheapest = select_cheapest(&offers)?;

        // express the recipe's requirement in the offer's own unit
        let required = convert(
            &line.quantity,
            cheapest.packaged.unit,
            cheapest.packaged.dimension,
        )?;

        let unit_cost = cost_per_base_unit(cheapest)?;
        let line_cost = unit_cost * required.amount;
        self.total_cost += line_cost;

        debug!(
            ingredient = %line.ingredient.name,
            supplier = %cheapest.supplier_name,
            cost = line_cost,
            "line item costed"
        );

        // an offer belongs to exactly one product; that product's nutrient
        // facts are the ones folded for this line item
        let owner = products
            .iter()
            .find(|p| p.supplier_offers.iter().any(|o| std::ptr::eq(o, cheapest)))
            .expect("selected offer belongs to one of the scanned products");

        for fact in &owner.nutrient_facts {
            let normalized = fact.in_base_units()?;
            self.nutrients
                .entry(normalized.nutrient_name.clone())
                .and_modify(|existing| {
                    // normalized facts share the base unit; amounts add directly
                    existing.quantity_amount.amount += normalized.quantity_amount.amount;
                })
                .or_insert(normalized);
        }

        Ok(self)
    }

    fn into_summary(self) -> RecipeSummary {
        RecipeSummary {
            cheapest_cost: self.total_cost,
            nutrients_at_cheapest_cost: self.nutrients,
        }
    }
}

/// Compute the cheapest total cost and aggregate nutrient profile for a recipe
///
/// Fails fast with `MissingProduct` when a line item's ingredient resolves to
/// no product or no offer; conversion failures propagate unchanged. No
/// partial summary is ever produced.
pub fn summarize_recipe(catalog: &Catalog, recipe: &Recipe) -> CostingResult<RecipeSummary> {
    let mut acc = RecipeAccumulator::default();
    for line in &recipe.line_items {
        acc = acc.fold_line_item(catalog, line)?;
    }
    Ok(acc.into_summary())
}
