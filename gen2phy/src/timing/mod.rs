// gen2phy-rs/gen2phy/src/timing/mod.rs

//! Protocol timing derivation.
//!
//! `RfidConfig::derive` turns BLF, Tari, Tari ratio and the transmit sample
//! rate into every duration the air interface needs.

pub mod builder;
pub mod durations;
pub mod frt;
pub mod tx;

pub use builder::RfidConfigBuilder;
pub use durations::Durations;
pub use frt::frt_for_blf;
pub use tx::TxConfig;

use crate::constants::*;
use crate::types::DivideRatio;
use crate::{Error, Result};

/// Validated reader timing configuration. Immutable once built; derive a
/// new one to reconfigure.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RfidConfig {
    tag_blf: f64,
    tari: f64,
    tari_ratio: f64,
    tx_sample_rate: f64,
    div_ratio: DivideRatio,
    pilot_enabled: bool,
    frt: f64,
    durations: Durations,
    tx: TxConfig,
}

impl RfidConfig {
    /// Validate the inputs and derive the full timing record.
    ///
    /// Checks run in a fixed order: Tari, BLF, Tari ratio, the TRCAL bound,
    /// then the transmit sample rate. The first failure is returned.
    pub fn derive(tag_blf: f64, tari: f64, tari_ratio: f64, tx_sample_rate: f64) -> Result<Self> {
        if !(TARI_MIN_US..=TARI_MAX_US).contains(&tari) {
            return Err(Error::InvalidTariRange { tari });
        }
        if !(BLF_MIN_HZ..=BLF_MAX_HZ).contains(&tag_blf) {
            return Err(Error::InvalidBlfRange { blf: tag_blf });
        }
        if !(TARI_RATIO_MIN..=TARI_RATIO_MAX).contains(&tari_ratio) {
            return Err(Error::InvalidTariRatio { ratio: tari_ratio });
        }

        let div_ratio = DivideRatio::for_blf(tag_blf);
        let pilot_enabled = tag_blf > DIV_RATIO_THRESHOLD_HZ;
        let frt = frt_for_blf(tag_blf)?;
        log::debug!(
            "deriving timing: blf={} Hz tari={} us ratio={} dr={} pilot={} frt={}",
            tag_blf,
            tari,
            tari_ratio,
            div_ratio,
            pilot_enabled,
            frt
        );

        let durations = Durations::compute(tag_blf, tari, tari_ratio, div_ratio, pilot_enabled, frt);
        if !durations.trcal_in_bounds() {
            return Err(Error::InvalidTrcalBound {
                trcal: durations.trcal,
                rtcal: durations.rtcal,
            });
        }

        if !tx_sample_rate.is_finite() || tx_sample_rate <= 0.0 {
            return Err(Error::InvalidSampleRate {
                rate: tx_sample_rate,
            });
        }
        let tx = TxConfig::compute(&durations, tx_sample_rate);
        log::trace!("durations: {:?}", durations);
        log::trace!("tx samples: {:?}", tx);

        Ok(Self {
            tag_blf,
            tari,
            tari_ratio,
            tx_sample_rate,
            div_ratio,
            pilot_enabled,
            frt,
            durations,
            tx,
        })
    }

    pub fn builder() -> RfidConfigBuilder {
        RfidConfigBuilder::new()
    }

    /// Backscatter link frequency (Hz)
    pub fn tag_blf(&self) -> f64 {
        self.tag_blf
    }

    /// Tari (us)
    pub fn tari(&self) -> f64 {
        self.tari
    }

    pub fn tari_ratio(&self) -> f64 {
        self.tari_ratio
    }

    /// Transmit sample rate (Hz)
    pub fn tx_sample_rate(&self) -> f64 {
        self.tx_sample_rate
    }

    pub fn div_ratio(&self) -> DivideRatio {
        self.div_ratio
    }

    pub fn pilot_enabled(&self) -> bool {
        self.pilot_enabled
    }

    /// Fractional timing tolerance
    pub fn frt(&self) -> f64 {
        self.frt
    }

    pub fn durations(&self) -> &Durations {
        &self.durations
    }

    pub fn tx(&self) -> &TxConfig {
        &self.tx
    }
}
