// gen2phy-rs/gen2phy/src/receiver/preamble.rs

use crate::constants::{FM0_PREAMBLE, SEARCH_SLACK_SAMPLES};
use crate::timing::Durations;
use crate::utils::{samples_ceil, samples_floor, samples_round};

/// Receive-sample bounds for the coarse preamble search.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub t1_min: usize,
    pub t1_max: usize,
    pub pilot: usize,
    pub pilot_min: usize,
    pub pilot_max: usize,
    /// Number of candidate offsets for the coarse correlation
    pub search: usize,
}

impl SearchWindow {
    pub fn new(durations: &Durations, samples_per_us: f64) -> Self {
        let t1_min = samples_floor(durations.t1_min, samples_per_us);
        let t1_max = samples_ceil(durations.t1_max, samples_per_us);
        let pilot = samples_round(durations.pilot, samples_per_us);
        let pilot_min = samples_floor(durations.pilot_min, samples_per_us);
        let pilot_max = samples_ceil(durations.pilot_max, samples_per_us);

        let search = (t1_max - t1_min) + (pilot_max - pilot_min) + SEARCH_SLACK_SAMPLES;

        Self {
            t1_min,
            t1_max,
            pilot,
            pilot_min,
            pilot_max,
            search,
        }
    }
}

/// FM0 preamble expanded to receive samples, used for coarse correlation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PreambleTemplate {
    taps: Vec<f64>,
    norm: f64,
}

impl PreambleTemplate {
    /// Repeat every preamble chip `samples_per_symbol` times.
    pub fn new(samples_per_symbol: usize) -> Self {
        let taps: Vec<f64> = FM0_PREAMBLE
            .iter()
            .flat_map(|&chip| std::iter::repeat(chip as f64).take(samples_per_symbol))
            .collect();
        let norm = 1.0 / taps.len().max(1) as f64;
        Self { taps, norm }
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    /// `1 / len`
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Normalised correlation of the template with `window[..len]`. Returns
    /// `None` when the window is too short.
    pub fn correlate(&self, window: &[f64]) -> Option<f64> {
        if window.len() < self.taps.len() {
            return None;
        }
        let acc: f64 = self.taps.iter().zip(window).map(|(t, x)| t * x).sum();
        Some(acc * self.norm)
    }
}
