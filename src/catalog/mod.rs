//! Product and recipe catalog
//!
//! The data-access collaborator: holds every known recipe and every sourceable
//! product, loaded from a JSON document. A builtin fixture catalog is embedded
//! in the binary; a file path can override it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Ingredient, Product, Recipe};

/// Embedded fixture catalog
pub const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Expected summaries for the embedded fixture catalog
pub const BUILTIN_EXPECTED: &str = include_str!("../../data/expected.json");

/// Catalog loading error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// All known recipes and products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>, products: Vec<Product>) -> Self {
        Self { recipes, products }
    }

    /// Parse a catalog from a JSON document
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// All recipes, in catalog order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// All products sourcing the given ingredient
    pub fn products_for(&self, ingredient: &Ingredient) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.ingredient.name == ingredient.name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::from_json(BUILTIN_CATALOG).unwrap();
        assert!(!catalog.recipes().is_empty());

        // every line item must resolve to at least one product with offers
        for recipe in catalog.recipes() {
            for line in &recipe.line_items {
                let products = catalog.products_for(&line.ingredient);
                assert!(
                    !products.is_empty(),
                    "no products for {}",
                    line.ingredient.name
                );
                assert!(products.iter().any(|p| !p.supplier_offers.is_empty()));
            }
        }
    }

    #[test]
    fn test_products_for_filters_by_ingredient() {
        let catalog = Catalog::from_json(BUILTIN_CATALOG).unwrap();
        let products = catalog.products_for(&Ingredient::new("Eggs"));
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| p.ingredient.name == "Eggs"));
    }

    #[test]
    fn test_unknown_ingredient_resolves_to_nothing() {
        let catalog = Catalog::from_json(BUILTIN_CATALOG).unwrap();
        assert!(catalog
            .products_for(&Ingredient::new("Saffron"))
            .is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{\"recipes\": 7}").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
