//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the canonical configurations and synthetic
//! tag bursts so tests across the crate and tests/ directory share them.
#![allow(dead_code)]

use crate::receiver::ReceiverConfig;
use crate::timing::RfidConfig;

/// 40 kHz BLF, Tari 25 us, ratio 2, 2 MS/s. No pilot tone.
#[doc(hidden)]
pub fn low_blf_config() -> RfidConfig {
    RfidConfig::derive(40e3, 25.0, 2.0, 2e6).expect("low BLF reference config is valid")
}

/// 640 kHz BLF, Tari 6.25 us, ratio 2, 2 MS/s. Pilot tone enabled.
#[doc(hidden)]
pub fn high_blf_config() -> RfidConfig {
    RfidConfig::derive(640e3, 6.25, 2.0, 2e6).expect("high BLF reference config is valid")
}

#[doc(hidden)]
pub fn low_blf_receiver() -> ReceiverConfig {
    ReceiverConfig::configure(&low_blf_config())
}

#[doc(hidden)]
pub fn high_blf_receiver() -> ReceiverConfig {
    ReceiverConfig::configure(&high_blf_config())
}

/// Synthetic baseband burst: `lead` carrier samples, the FM0 preamble
/// scaled by `gain`, then one template length of carrier. Every sample is
/// offset by `dc`.
#[doc(hidden)]
pub fn fm0_preamble_burst(rx: &ReceiverConfig, lead: usize, gain: f64, dc: f64) -> Vec<f64> {
    let template = rx.preamble().taps();
    let mut out = vec![dc; lead];
    out.extend(template.iter().map(|t| gain * t + dc));
    out.extend(std::iter::repeat(dc).take(template.len()));
    out
}
