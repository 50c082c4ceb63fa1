// gen2phy-rs/gen2phy/src/timing/frt.rs

//! Tag link-frequency tolerance (FrT) by BLF band.
//!
//! The table is ordered and searched linearly. The single-point bands at
//! exactly 320 kHz and 640 kHz differ from their open neighbours and must
//! stay that way.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
struct FrtBand {
    low: f64,
    low_inclusive: bool,
    high: f64,
    high_inclusive: bool,
    frt: f64,
}

impl FrtBand {
    const fn new(low: f64, low_inclusive: bool, high: f64, high_inclusive: bool, frt: f64) -> Self {
        Self {
            low,
            low_inclusive,
            high,
            high_inclusive,
            frt,
        }
    }

    fn contains(&self, blf: f64) -> bool {
        let above = if self.low_inclusive {
            blf >= self.low
        } else {
            blf > self.low
        };
        let below = if self.high_inclusive {
            blf <= self.high
        } else {
            blf < self.high
        };
        above && below
    }
}

const FRT_BANDS: [FrtBand; 7] = [
    FrtBand::new(40e3, true, 107e3, false, 0.04),
    FrtBand::new(107e3, true, 160e3, true, 0.07),
    FrtBand::new(160e3, false, 256e3, true, 0.10),
    FrtBand::new(256e3, false, 320e3, false, 0.12),
    FrtBand::new(320e3, true, 320e3, true, 0.10),
    FrtBand::new(320e3, false, 640e3, false, 0.22),
    FrtBand::new(640e3, true, 640e3, true, 0.15),
];

/// Look up the fractional timing tolerance for a backscatter link
/// frequency in Hz.
pub fn frt_for_blf(tag_blf: f64) -> Result<f64> {
    FRT_BANDS
        .iter()
        .find(|band| band.contains(tag_blf))
        .map(|band| band.frt)
        .ok_or(Error::BlfOutOfBandLookup { blf: tag_blf })
}
