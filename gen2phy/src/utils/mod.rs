//! Utilities for gen2phy: small, reusable helpers used across the crate.
//!
//! Unit conversion between microsecond durations and sample counts lives
//! here so the transmit and receive sides round the same way.

pub mod units;

pub use units::*;
