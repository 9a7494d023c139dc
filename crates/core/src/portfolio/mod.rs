//! Portfolio aggregation - metrics derived from the full asset set.

pub mod valuation;

pub use valuation::*;
