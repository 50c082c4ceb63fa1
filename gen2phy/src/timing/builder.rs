// gen2phy-rs/gen2phy/src/timing/builder.rs

use crate::Result;
use crate::constants::{
    DEFAULT_BLF_HZ, DEFAULT_TARI_RATIO, DEFAULT_TARI_US, DEFAULT_TX_SAMPLE_RATE_HZ,
};
use crate::timing::RfidConfig;

/// Helper to construct an `RfidConfig`, starting from the defaults
/// (40 kHz BLF, Tari 25 us, ratio 2.0, 2 MS/s transmit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RfidConfigBuilder {
    tag_blf: f64,
    tari: f64,
    tari_ratio: f64,
    tx_sample_rate: f64,
}

impl RfidConfigBuilder {
    pub fn new() -> Self {
        Self {
            tag_blf: DEFAULT_BLF_HZ,
            tari: DEFAULT_TARI_US,
            tari_ratio: DEFAULT_TARI_RATIO,
            tx_sample_rate: DEFAULT_TX_SAMPLE_RATE_HZ,
        }
    }

    /// Backscatter link frequency in Hz
    pub fn tag_blf(mut self, hz: f64) -> Self {
        self.tag_blf = hz;
        self
    }

    /// Tari in microseconds
    pub fn tari(mut self, us: f64) -> Self {
        self.tari = us;
        self
    }

    pub fn tari_ratio(mut self, ratio: f64) -> Self {
        self.tari_ratio = ratio;
        self
    }

    /// Transmit sample rate in Hz
    pub fn tx_sample_rate(mut self, hz: f64) -> Self {
        self.tx_sample_rate = hz;
        self
    }

    /// Consume the builder and validate/derive the configuration.
    pub fn build(self) -> Result<RfidConfig> {
        RfidConfig::derive(
            self.tag_blf,
            self.tari,
            self.tari_ratio,
            self.tx_sample_rate,
        )
    }
}

impl Default for RfidConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
