//! larder
//!
//! Recipe costing engine: selects the cheapest supplier offer per ingredient
//! after normalizing quantities to comparable base units, and aggregates the
//! resulting nutrient profile per recipe.

pub mod build_info;
pub mod catalog;
pub mod conversion;
pub mod costing;
pub mod models;
pub mod verify;
