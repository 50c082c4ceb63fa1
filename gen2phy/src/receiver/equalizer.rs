// gen2phy-rs/gen2phy/src/receiver/equalizer.rs

use crate::constants::{EQ_MASK_FIRST, EQ_MASK_LAST};

/// Selects the mid-burst preamble samples used for channel-gain estimation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EqualizerMask {
    taps: Vec<f64>,
    norm: f64,
}

impl EqualizerMask {
    /// Zero vector of `len` with unity at 1-indexed samples 2..=7.
    pub fn new(len: usize) -> Self {
        let mut taps = vec![0.0; len];
        for tap in taps
            .iter_mut()
            .take(EQ_MASK_LAST)
            .skip(EQ_MASK_FIRST - 1)
        {
            *tap = 1.0;
        }
        let ones = taps.iter().filter(|&&t| t == 1.0).count();
        Self {
            taps,
            norm: 1.0 / ones.max(1) as f64,
        }
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Number of unity taps
    pub fn active(&self) -> usize {
        self.taps.iter().filter(|&&t| t == 1.0).count()
    }

    /// `1 / active`
    pub fn norm(&self) -> f64 {
        self.norm
    }
}
