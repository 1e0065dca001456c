//! Product, supplier offer, and nutrient fact models
//!
//! One product groups all supplier offers and nutrition data for one way of
//! sourcing an ingredient.

use serde::{Deserialize, Serialize};

use crate::conversion::{convert, ConversionResult};

use super::{Ingredient, Quantity};

/// A specific supplier's priced package of a product
///
/// The price is denominated over the packaged quantity (e.g. 3.00 per
/// 1000 grams). The supplier name is carried for logging only and never
/// participates in selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOffer {
    pub supplier_name: String,
    pub price: f64,
    pub packaged: Quantity,
}

/// Nutrient content per base unit of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientFact {
    pub nutrient_name: String,
    pub quantity_amount: Quantity,
}

impl NutrientFact {
    /// Normalize the fact's amount to its dimension's base unit
    /// (grams, millilitres, or whole).
    pub fn in_base_units(&self) -> ConversionResult<NutrientFact> {
        let dimension = self.quantity_amount.dimension;
        let normalized = convert(&self.quantity_amount, dimension.base_unit(), dimension)?;
        Ok(NutrientFact {
            nutrient_name: self.nutrient_name.clone(),
            quantity_amount: normalized,
        })
    }
}

/// A sourceable product for an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub ingredient: Ingredient,
    pub supplier_offers: Vec<SupplierOffer>,
    pub nutrient_facts: Vec<NutrientFact>,
}
