//! Data models
//!
//! Value types shared by the conversion engine, catalog, and costing modules.

mod ingredient;
mod product;
mod recipe;
mod summary;
mod unit;

pub use ingredient::Ingredient;
pub use product::{NutrientFact, Product, SupplierOffer};
pub use recipe::{LineItem, Recipe};
pub use summary::{RecipeSummaries, RecipeSummary};
pub use unit::{Dimension, Quantity, UnitName};
