//! Unit conversion module
//!
//! Direct factor table plus the multi-step conversion engine.

pub mod converter;
pub mod units;

pub use converter::{convert, convert_direct, ConversionError, ConversionResult};
pub use units::direct_factor;
