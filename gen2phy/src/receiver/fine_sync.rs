// gen2phy-rs/gen2phy/src/receiver/fine_sync.rs

/// Two-chip "11" kernel used to refine the preamble edge.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FineSyncKernel {
    taps: Vec<f64>,
    peek_left: usize,
    peek_len: usize,
    norm: f64,
}

impl FineSyncKernel {
    pub fn new(samples_per_symbol: usize) -> Self {
        let taps = vec![1.0; 2 * samples_per_symbol];
        let sum: f64 = taps.iter().sum();
        Self {
            taps,
            peek_left: samples_per_symbol.saturating_sub(2),
            peek_len: (2 * samples_per_symbol).saturating_sub(2),
            norm: if sum > 0.0 { 1.0 / sum } else { 0.0 },
        }
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Samples examined before the coarse estimate
    pub fn peek_left(&self) -> usize {
        self.peek_left
    }

    /// Total candidate offsets
    pub fn peek_len(&self) -> usize {
        self.peek_len
    }

    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub(crate) fn correlate(&self, window: &[f64]) -> Option<f64> {
        if window.len() < self.taps.len() {
            return None;
        }
        let acc: f64 = self.taps.iter().zip(window).map(|(k, x)| k * x).sum();
        Some(acc * self.norm)
    }
}
