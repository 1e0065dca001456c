//! Result verification
//!
//! Compares a computed batch of recipe summaries against an expected fixture,
//! reporting every mismatch as a human-readable description. Costs and
//! nutrient amounts are compared within an absolute float tolerance.

use crate::models::RecipeSummaries;

/// Absolute tolerance for cost and nutrient amount comparisons
pub const TOLERANCE: f64 = 1e-6;

/// Compare computed summaries against expected ones
///
/// Returns one description per mismatch; an empty list means the results
/// match.
pub fn compare(actual: &RecipeSummaries, expected: &RecipeSummaries) -> Vec<String> {
    let mut mismatches = Vec::new();

    for name in expected.keys() {
        if !actual.contains_key(name) {
            mismatches.push(format!("missing recipe: {name}"));
        }
    }
    for name in actual.keys() {
        if !expected.contains_key(name) {
            mismatches.push(format!("unexpected recipe: {name}"));
        }
    }

    for (name, want) in expected {
        let got = match actual.get(name) {
            Some(got) => got,
            None => continue,
        };

        if (got.cheapest_cost - want.cheapest_cost).abs() > TOLERANCE {
            mismatches.push(format!(
                "{name}: cheapest cost {} != expected {}",
                got.cheapest_cost, want.cheapest_cost
            ));
        }

        for nutrient in want.nutrients_at_cheapest_cost.keys() {
            if !got.nutrients_at_cheapest_cost.contains_key(nutrient) {
                mismatches.push(format!("{name}: missing nutrient {nutrient}"));
            }
        }
        for nutrient in got.nutrients_at_cheapest_cost.keys() {
            if !want.nutrients_at_cheapest_cost.contains_key(nutrient) {
                mismatches.push(format!("{name}: unexpected nutrient {nutrient}"));
            }
        }

        for (nutrient, want_fact) in &want.nutrients_at_cheapest_cost {
            let got_fact = match got.nutrients_at_cheapest_cost.get(nutrient) {
                Some(f) => f,
                None => continue,
            };

            let got_q = got_fact.quantity_amount;
            let want_q = want_fact.quantity_amount;
            if (got_q.amount - want_q.amount).abs() > TOLERANCE {
                mismatches.push(format!(
                    "{name}/{nutrient}: amount {} != expected {}",
                    got_q.amount, want_q.amount
                ));
            }
            if got_q.unit != want_q.unit || got_q.dimension != want_q.dimension {
                mismatches.push(format!(
                    "{name}/{nutrient}: unit {} ({}) != expected {} ({})",
                    got_q.unit, got_q.dimension, want_q.unit, want_q.dimension
                ));
            }
        }
    }

    mismatches
}
