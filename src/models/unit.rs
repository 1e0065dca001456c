//! Unit of measure types
//!
//! Names, dimensions, and the `Quantity` value type all other modules share.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Measurement dimension a unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Mass units (grams, kilograms)
    Mass,
    /// Volume units (millilitres, litres, cups, spoons)
    Volume,
    /// Discrete/count units (whole items such as eggs)
    Whole,
}

impl Dimension {
    /// The canonical base unit costs and nutrients are compared in:
    /// grams for mass, millilitres for volume, whole for count.
    pub fn base_unit(&self) -> UnitName {
        match self {
            Dimension::Mass => UnitName::Grams,
            Dimension::Volume => UnitName::Millilitres,
            Dimension::Whole => UnitName::Whole,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dimension::Mass => "mass",
            Dimension::Volume => "volume",
            Dimension::Whole => "whole",
        };
        f.write_str(s)
    }
}

/// Enumerated unit identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitName {
    Cups,
    Grams,
    Kilograms,
    Litres,
    Millilitres,
    Teaspoons,
    Tablespoons,
    Whole,
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnitName::Cups => "cups",
            UnitName::Grams => "grams",
            UnitName::Kilograms => "kilograms",
            UnitName::Litres => "litres",
            UnitName::Millilitres => "millilitres",
            UnitName::Teaspoons => "teaspoons",
            UnitName::Tablespoons => "tablespoons",
            UnitName::Whole => "whole",
        };
        f.write_str(s)
    }
}

/// An amount expressed in a unit of measure
///
/// Immutable value: conversions produce a new `Quantity`, never mutate the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: UnitName,
    pub dimension: Dimension,
}

impl Quantity {
    pub fn new(amount: f64, unit: UnitName, dimension: Dimension) -> Self {
        Self {
            amount,
            unit,
            dimension,
        }
    }

    /// Convenience constructor for a mass quantity in grams
    pub fn grams(amount: f64) -> Self {
        Self::new(amount, UnitName::Grams, Dimension::Mass)
    }

    /// Convenience constructor for a volume quantity in millilitres
    pub fn millilitres(amount: f64) -> Self {
        Self::new(amount, UnitName::Millilitres, Dimension::Volume)
    }

    /// Convenience constructor for a count quantity in whole items
    pub fn whole(amount: f64) -> Self {
        Self::new(amount, UnitName::Whole, Dimension::Whole)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
