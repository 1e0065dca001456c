//! Supplier offer selection
//!
//! Normalizes every offer to a cost per base unit of its own dimension and
//! keeps the cheapest one found by a linear scan.

use crate::conversion::{convert, ConversionResult};
use crate::models::SupplierOffer;

use super::CostingResult;

/// Price of one base unit (gram, millilitre, or whole item) of the offer's
/// packaged quantity
pub fn cost_per_base_unit(offer: &SupplierOffer) -> ConversionResult<f64> {
    let dimension = offer.packaged.dimension;
    let base = convert(&offer.packaged, dimension.base_unit(), dimension)?;
    Ok(offer.price / base.amount)
}

/// Pick the offer with the strictly lowest cost per base unit
///
/// Ties keep whichever offer was encountered first, so the result is stable
/// in input order. Precondition: the aggregator has already verified at least
/// one offer exists; an empty slice is an invariant violation, not a runtime
/// error.
pub fn select_cheapest<'a>(offers: &[&'a SupplierOffer]) -> CostingResult<&'a SupplierOffer> {
    let (first, rest) = offers
        .split_first()
        .expect("select_cheapest requires at least one offer");

    let mut cheapest = *first;
    let mut cheapest_cost = cost_per_base_unit(cheapest)?;

    for &offer in rest {
        let cost = cost_per_base_unit(offer)?;
        if cost < cheapest_cost {
            cheapest = offer;
            cheapest_cost = cost;
        }
    }

    Ok(cheapest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dimension, Quantity, UnitName};

    fn offer(supplier: &str, price: f64, packaged: Quantity) -> SupplierOffer {
        SupplierOffer {
            supplier_name: supplier.to_string(),
            price,
            packaged,
        }
    }

    #[test]
    fn test_cost_per_base_unit_in_base_denomination() {
        let o = offer("Sweet Supply Co", 2.0, Quantity::grams(1000.0));
        assert!((cost_per_base_unit(&o).unwrap() - 0.002).abs() < 1e-12);
    }

    #[test]
    fn test_cost_per_base_unit_reduces_packaged_quantity() {
        // 5.00 per litre is 0.005 per millilitre
        let o = offer(
            "Dairy Direct",
            5.0,
            Quantity::new(1.0, UnitName::Litres, Dimension::Volume),
        );
        assert!((cost_per_base_unit(&o).unwrap() - 0.005).abs() < 1e-12);

        // 4.20 per dozen is 0.35 per egg
        let o = offer("Henhouse Co", 4.2, Quantity::whole(12.0));
        assert!((cost_per_base_unit(&o).unwrap() - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_single_offer_is_returned_regardless_of_cost() {
        let o = offer("Spice World", 9999.0, Quantity::millilitres(1.0));
        let offers = [&o];
        let picked = select_cheapest(&offers).unwrap();
        assert_eq!(picked.supplier_name, "Spice World");
    }

    #[test]
    fn test_cheapest_normalized_cost_wins() {
        // 1.20 per 300 ml (0.004/ml) loses to 3.00 per 1000 g (0.003/g)
        let pricey = offer("Corner Market", 1.2, Quantity::millilitres(300.0));
        let cheap = offer("Dairy Direct", 3.0, Quantity::grams(1000.0));
        let offers = [&pricey, &cheap];
        let picked = select_cheapest(&offers).unwrap();
        assert_eq!(picked.supplier_name, "Dairy Direct");
    }

    #[test]
    fn test_tie_keeps_first_in_input_order() {
        let a = offer("First Co", 2.0, Quantity::grams(1000.0));
        let b = offer("Second Co", 1.0, Quantity::grams(500.0));
        let offers = [&a, &b];
        assert_eq!(select_cheapest(&offers).unwrap().supplier_name, "First Co");

        let offers = [&b, &a];
        assert_eq!(select_cheapest(&offers).unwrap().supplier_name, "Second Co");
    }

    #[test]
    #[should_panic(expected = "at least one offer")]
    fn test_empty_offer_set_is_an_invariant_violation() {
        let offers: [&SupplierOffer; 0] = [];
        let _ = select_cheapest(&offers);
    }
}
