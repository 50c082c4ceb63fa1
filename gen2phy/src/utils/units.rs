//! Microsecond to sample-count conversions.
//!
//! Durations are `f64` microseconds; counts are `usize`. Negative products
//! clamp to zero.

use crate::constants::US_PER_SEC;

/// Samples per microsecond at `sample_rate` Hz.
pub fn samples_per_us(sample_rate: f64) -> f64 {
    sample_rate / US_PER_SEC
}

/// Round `us * per_us` to the nearest sample (halves away from zero).
pub fn samples_round(us: f64, per_us: f64) -> usize {
    (us * per_us).round().max(0.0) as usize
}

/// Round `us * per_us` up.
pub fn samples_ceil(us: f64, per_us: f64) -> usize {
    (us * per_us).ceil().max(0.0) as usize
}

/// Truncate `us * per_us` down.
pub fn samples_floor(us: f64, per_us: f64) -> usize {
    (us * per_us).floor().max(0.0) as usize
}
