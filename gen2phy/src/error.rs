// gen2phy-rs/gen2phy/src/error.rs

use thiserror::Error;

/// Configuration errors. Every variant is detected while building an
/// `RfidConfig`; nothing downstream can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("tari out of range: {tari} us (expected 6.25..=25)")]
    InvalidTariRange { tari: f64 },

    #[error("backscatter link frequency out of range: {blf} Hz (expected 40000..=640000)")]
    InvalidBlfRange { blf: f64 },

    #[error("tari ratio out of range: {ratio} (expected 1.5..=2.0)")]
    InvalidTariRatio { ratio: f64 },

    #[error("trcal {trcal} us violates 1.1*rtcal..=3*rtcal for rtcal {rtcal} us")]
    InvalidTrcalBound { trcal: f64, rtcal: f64 },

    #[error("no FrT tolerance band for {blf} Hz")]
    BlfOutOfBandLookup { blf: f64 },

    #[error("invalid transmit sample rate: {rate} Hz")]
    InvalidSampleRate { rate: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
