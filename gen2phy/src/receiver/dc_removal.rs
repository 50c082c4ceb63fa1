// gen2phy-rs/gen2phy/src/receiver/dc_removal.rs

//! Carrier-level estimate taken just before an expected tag reply.

use crate::utils::samples_floor;

/// Running-mean DC estimator over half of the minimum T1 window.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DcRemoval {
    len: usize,
    gain: f64,
}

impl DcRemoval {
    /// `len = floor(t1_min / 2 * samples_per_us)`, at least one sample.
    pub fn new(t1_min_us: f64, samples_per_us: f64) -> Self {
        let len = samples_floor(t1_min_us / 2.0, samples_per_us).max(1);
        Self {
            len,
            gain: 1.0 / len as f64,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Mean of the last `len` samples of `carrier`. Shorter input is averaged
    /// over what is there; empty input gives 0.
    pub fn estimate(&self, carrier: &[f64]) -> f64 {
        if carrier.is_empty() {
            return 0.0;
        }
        let window = &carrier[carrier.len().saturating_sub(self.len)..];
        let sum: f64 = window.iter().sum();
        if window.len() == self.len {
            sum * self.gain
        } else {
            sum / window.len() as f64
        }
    }

    /// Subtract `level` from every sample.
    pub fn remove(&self, samples: &mut [f64], level: f64) {
        samples.iter_mut().for_each(|s| *s -= level);
    }
}
