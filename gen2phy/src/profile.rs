// gen2phy-rs/gen2phy/src/profile.rs

use crate::Result;
use crate::receiver::ReceiverConfig;
use crate::timing::RfidConfig;

/// Timing and receiver configuration for one operating session, as handed
/// to the hardware layer. Build one profile per channel.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderProfile {
    timing: RfidConfig,
    receiver: ReceiverConfig,
}

impl ReaderProfile {
    pub fn new(tag_blf: f64, tari: f64, tari_ratio: f64, tx_sample_rate: f64) -> Result<Self> {
        let timing = RfidConfig::derive(tag_blf, tari, tari_ratio, tx_sample_rate)?;
        Ok(Self::from_timing(timing))
    }

    pub fn from_timing(timing: RfidConfig) -> Self {
        let receiver = ReceiverConfig::configure(&timing);
        Self { timing, receiver }
    }

    pub fn timing(&self) -> &RfidConfig {
        &self.timing
    }

    pub fn receiver(&self) -> &ReceiverConfig {
        &self.receiver
    }
}
