//! Ingredient model
//!
//! An ingredient is identified by its display name; line items and products
//! both refer to the same ingredient by that name.

use serde::{Deserialize, Serialize};

/// A recipe ingredient identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
