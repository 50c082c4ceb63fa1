// gen2phy-rs/gen2phy/src/receiver/matched_filter.rs

/// Box filter matched to one FM0 half-symbol.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedFilter {
    taps: Vec<f64>,
}

impl MatchedFilter {
    /// `samples_per_symbol` taps of `1 / samples_per_symbol`.
    pub fn new(samples_per_symbol: usize) -> Self {
        let len = samples_per_symbol.max(1);
        Self {
            taps: vec![1.0 / len as f64; len],
        }
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Causal FIR with zero initial state. The output has the same length as
    /// the input.
    pub fn apply(&self, input: &[f64]) -> Vec<f64> {
        (0..input.len())
            .map(|n| {
                self.taps
                    .iter()
                    .enumerate()
                    .take_while(|(k, _)| *k <= n)
                    .map(|(k, h)| h * input[n - k])
                    .sum::<f64>()
            })
            .collect()
    }
}
