//! Unit conversion engine
//!
//! Converts a quantity into another unit, within or across dimensions.
//! Resolution order: identity short-circuit, direct table factor, then a
//! pivot-chain registry keyed by (source dimension, target dimension). New
//! cross-dimension rules are added as registry chains, never by widening the
//! direct table lookup.

use thiserror::Error;
use tracing::debug;

use crate::models::{Dimension, Quantity, UnitName};

use super::units::direct_factor;

/// Conversion failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("no conversion factor from {from_unit} ({from_dimension}) to {to_unit} ({to_dimension})")]
    NoDirectConversion {
        from_unit: UnitName,
        from_dimension: Dimension,
        to_unit: UnitName,
        to_dimension: Dimension,
    },
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convert a quantity using only the direct factor table
///
/// Fails with `NoDirectConversion` when the table holds no factor for the
/// requested unit pair.
pub fn convert_direct(
    quantity: &Quantity,
    to_unit: UnitName,
    to_dimension: Dimension,
) -> ConversionResult<Quantity> {
    let factor = direct_factor(
        (quantity.unit, quantity.dimension),
        (to_unit, to_dimension),
    )
    .ok_or(ConversionError::NoDirectConversion {
        from_unit: quantity.unit,
        from_dimension: quantity.dimension,
        to_unit,
        to_dimension,
    })?;

    Ok(Quantity::new(quantity.amount * factor, to_unit, to_dimension))
}

/// Ordered intermediate units to chain through when no direct factor exists
/// for a (source dimension, target dimension) pair
///
/// Same-dimension chains pivot through the dimension's base unit so pairs
/// like cups -> litres convert in two direct steps.
fn pivot_chain(from: Dimension, to: Dimension) -> Option<&'static [(UnitName, Dimension)]> {
    match (from, to) {
        (Dimension::Volume, Dimension::Volume) => {
            Some(&[(UnitName::Millilitres, Dimension::Volume)])
        }
        (Dimension::Mass, Dimension::Mass) => Some(&[(UnitName::Grams, Dimension::Mass)]),
        (Dimension::Volume, Dimension::Mass) => Some(&[
            (UnitName::Millilitres, Dimension::Volume),
            (UnitName::Grams, Dimension::Mass),
        ]),
        (Dimension::Whole, Dimension::Mass) => Some(&[(UnitName::Grams, Dimension::Mass)]),
        _ => None,
    }
}

/// Convert a quantity into the target unit, applying fallback pivot chains
/// when no direct factor exists
///
/// The source quantity is returned unchanged when unit and dimension already
/// match. When neither a direct factor nor a chain for the dimension pair
/// exists, the original direct-conversion failure is propagated unchanged.
pub fn convert(
    quantity: &Quantity,
    to_unit: UnitName,
    to_dimension: Dimension,
) -> ConversionResult<Quantity> {
    if quantity.unit == to_unit && quantity.dimension == to_dimension {
        return Ok(*quantity);
    }

    let direct_err = match convert_direct(quantity, to_unit, to_dimension) {
        Ok(converted) => return Ok(converted),
        Err(err) => err,
    };

    let chain = match pivot_chain(quantity.dimension, to_dimension) {
        Some(chain) => chain,
        None => return Err(direct_err),
    };

    debug!(
        from = %quantity.unit,
        to = %to_unit,
        "no direct factor, converting through pivot chain"
    );

    let mut current = *quantity;
    for &(unit, dimension) in chain {
        if current.unit != unit || current.dimension != dimension {
            current = convert_direct(&current, unit, dimension)?;
        }
    }
    if current.unit != to_unit || current.dimension != to_dimension {
        current = convert_direct(&current, to_unit, to_dimension)?;
    }

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::units::{G_PER_ML, G_PER_WHOLE, ML_PER_CUP, ML_PER_TSP};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_identity_is_exact() {
        let q = Quantity::new(0.3, UnitName::Cups, Dimension::Volume);
        let out = convert(&q, UnitName::Cups, Dimension::Volume).unwrap();
        assert_eq!(out, q);
    }

    #[test]
    fn test_direct_conversion() {
        let q = Quantity::new(0.5, UnitName::Cups, Dimension::Volume);
        let out = convert(&q, UnitName::Millilitres, Dimension::Volume).unwrap();
        assert_close(out.amount, 0.5 * ML_PER_CUP);
        assert_eq!(out.unit, UnitName::Millilitres);

        let q = Quantity::new(0.25, UnitName::Kilograms, Dimension::Mass);
        let out = convert(&q, UnitName::Grams, Dimension::Mass).unwrap();
        assert_close(out.amount, 250.0);
    }

    #[test]
    fn test_same_dimension_pivot_through_base_unit() {
        // cups -> litres has no direct factor; goes via millilitres
        let q = Quantity::new(2.0, UnitName::Cups, Dimension::Volume);
        let out = convert(&q, UnitName::Litres, Dimension::Volume).unwrap();
        assert_close(out.amount, 0.5);
        assert_eq!(out.unit, UnitName::Litres);

        // teaspoons -> cups likewise
        let q = Quantity::new(50.0, UnitName::Teaspoons, Dimension::Volume);
        let out = convert(&q, UnitName::Cups, Dimension::Volume).unwrap();
        assert_close(out.amount, 50.0 * ML_PER_TSP / ML_PER_CUP);
    }

    #[test]
    fn test_round_trip_recovers_amount() {
        let pairs = [
            (UnitName::Cups, UnitName::Litres, Dimension::Volume),
            (UnitName::Teaspoons, UnitName::Tablespoons, Dimension::Volume),
            (UnitName::Kilograms, UnitName::Grams, Dimension::Mass),
            (UnitName::Litres, UnitName::Millilitres, Dimension::Volume),
        ];

        for (a, b, dim) in pairs {
            let original = Quantity::new(1.7, a, dim);
            let there = convert(&original, b, dim).unwrap();
            let back = convert(&there, a, dim).unwrap();
            assert_close(back.amount, original.amount);
        }
    }

    #[test]
    fn test_volume_to_mass_via_millilitres() {
        let q = Quantity::new(0.5, UnitName::Cups, Dimension::Volume);
        let out = convert(&q, UnitName::Grams, Dimension::Mass).unwrap();
        assert_close(out.amount, 0.5 * ML_PER_CUP * G_PER_ML);
        assert_eq!(out.unit, UnitName::Grams);
        assert_eq!(out.dimension, Dimension::Mass);
    }

    #[test]
    fn test_volume_to_mass_reaches_non_base_target() {
        // the chain ends in grams; a kilogram target needs one more step
        let q = Quantity::new(4.0, UnitName::Litres, Dimension::Volume);
        let out = convert(&q, UnitName::Kilograms, Dimension::Mass).unwrap();
        assert_close(out.amount, 4.0 * 1000.0 * G_PER_ML / 1000.0);
        assert_eq!(out.unit, UnitName::Kilograms);
    }

    #[test]
    fn test_whole_to_mass() {
        let q = Quantity::whole(2.0);
        let out = convert(&q, UnitName::Grams, Dimension::Mass).unwrap();
        assert_close(out.amount, 2.0 * G_PER_WHOLE);

        let out = convert(&q, UnitName::Kilograms, Dimension::Mass).unwrap();
        assert_close(out.amount, 0.1);
    }

    #[test]
    fn test_no_chain_propagates_original_failure() {
        // whole -> volume has neither a table factor nor a registered chain
        let q = Quantity::whole(3.0);
        let err = convert(&q, UnitName::Millilitres, Dimension::Volume).unwrap_err();
        assert_eq!(
            err,
            ConversionError::NoDirectConversion {
                from_unit: UnitName::Whole,
                from_dimension: Dimension::Whole,
                to_unit: UnitName::Millilitres,
                to_dimension: Dimension::Volume,
            }
        );
    }

    #[test]
    fn test_density_factor_is_reversible() {
        // grams -> millilitres resolves through the reciprocal table lookup
        let q = Quantity::grams(103.0);
        let out = convert(&q, UnitName::Millilitres, Dimension::Volume).unwrap();
        assert_close(out.amount, 100.0);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let q = Quantity::new(1.0, UnitName::Litres, Dimension::Volume);
        let _ = convert(&q, UnitName::Millilitres, Dimension::Volume).unwrap();
        assert_eq!(q.amount, 1.0);
        assert_eq!(q.unit, UnitName::Litres);
    }
}
