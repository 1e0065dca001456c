//! Conversion factor table
//!
//! Fixed directed factors between unit name/dimension pairs. A lookup that
//! misses the forward direction falls back to the reciprocal of the reverse
//! entry, so each physical relationship is listed once.

use crate::models::{Dimension, UnitName};

// ============================================================================
// Volume factors (to millilitres)
// ============================================================================

/// Millilitres per metric cup
pub const ML_PER_CUP: f64 = 250.0;
/// Millilitres per teaspoon
pub const ML_PER_TSP: f64 = 5.0;
/// Millilitres per tablespoon
pub const ML_PER_TBSP: f64 = 15.0;
/// Millilitres per litre
pub const ML_PER_LITRE: f64 = 1000.0;

// ============================================================================
// Mass factors (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;

// ============================================================================
// Cross-dimension factors
// ============================================================================

/// Grams per millilitre: dairy-cream density, the only liquid the catalogue
/// prices by mass
pub const G_PER_ML: f64 = 1.03;
/// Grams per whole item: average large egg
pub const G_PER_WHOLE: f64 = 50.0;

/// A directed conversion factor between two unit/dimension pairs
struct FactorEntry {
    from: (UnitName, Dimension),
    to: (UnitName, Dimension),
    factor: f64,
}

const FACTOR_TABLE: &[FactorEntry] = &[
    FactorEntry {
        from: (UnitName::Cups, Dimension::Volume),
        to: (UnitName::Millilitres, Dimension::Volume),
        factor: ML_PER_CUP,
    },
    FactorEntry {
        from: (UnitName::Teaspoons, Dimension::Volume),
        to: (UnitName::Millilitres, Dimension::Volume),
        factor: ML_PER_TSP,
    },
    FactorEntry {
        from: (UnitName::Tablespoons, Dimension::Volume),
        to: (UnitName::Millilitres, Dimension::Volume),
        factor: ML_PER_TBSP,
    },
    FactorEntry {
        from: (UnitName::Litres, Dimension::Volume),
        to: (UnitName::Millilitres, Dimension::Volume),
        factor: ML_PER_LITRE,
    },
    FactorEntry {
        from: (UnitName::Kilograms, Dimension::Mass),
        to: (UnitName::Grams, Dimension::Mass),
        factor: G_PER_KG,
    },
    FactorEntry {
        from: (UnitName::Millilitres, Dimension::Volume),
        to: (UnitName::Grams, Dimension::Mass),
        factor: G_PER_ML,
    },
    FactorEntry {
        from: (UnitName::Whole, Dimension::Whole),
        to: (UnitName::Grams, Dimension::Mass),
        factor: G_PER_WHOLE,
    },
];

/// Look up the direct factor between two unit/dimension pairs
///
/// A forward table entry wins; otherwise the reverse entry's reciprocal is
/// used. Returns None when the table holds neither direction.
pub fn direct_factor(from: (UnitName, Dimension), to: (UnitName, Dimension)) -> Option<f64> {
    for entry in FACTOR_TABLE {
        if entry.from == from && entry.to == to {
            return Some(entry.factor);
        }
    }
    for entry in FACTOR_TABLE {
        if entry.from == to && entry.to == from {
            return Some(1.0 / entry.factor);
        }
    }
    None
}
