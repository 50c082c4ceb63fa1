// gen2phy-rs/gen2phy/src/constants.rs
//! Air-interface and receiver constants used across the crate

/// Legal Tari range in microseconds
pub const TARI_MIN_US: f64 = 6.25;
pub const TARI_MAX_US: f64 = 25.0;

/// Legal backscatter link frequency range in Hz
pub const BLF_MIN_HZ: f64 = 40e3;
pub const BLF_MAX_HZ: f64 = 640e3;

/// Legal data-1 / data-0 ratio
pub const TARI_RATIO_MIN: f64 = 1.5;
pub const TARI_RATIO_MAX: f64 = 2.0;

/// BLF above which the divide ratio switches to 64/3 and the pilot tone is
/// enabled
pub const DIV_RATIO_THRESHOLD_HZ: f64 = 320e3;

/// TRCAL must lie within [TRCAL_MIN_FACTOR, TRCAL_MAX_FACTOR] * RTCAL
pub const TRCAL_MIN_FACTOR: f64 = 1.1;
pub const TRCAL_MAX_FACTOR: f64 = 3.0;

/// Delimiter duration (us)
pub const DELIM_US: f64 = 12.5;

/// Unmodulated carrier before the first command (us)
pub const CW_START_US: f64 = 50.0;

/// Minimum pulse width (us) and its Tari fraction
pub const PW_MIN_US: f64 = 2.0;
pub const PW_TARI_FACTOR: f64 = 0.4;

/// Fixed slack (us) around T1
pub const T1_SLACK_US: f64 = 2.0;

/// T1 is at least this many tag periods
pub const T1_TPRI_FACTOR: f64 = 10.0;

/// T2 window in tag periods
pub const T2_MIN_TPRI: f64 = 3.0;
pub const T2_MAX_TPRI: f64 = 20.0;

/// Pilot tone length in FM0 zero symbols
pub const PILOT_SYMBOLS: usize = 12;

/// Microseconds per second
pub const US_PER_SEC: f64 = 1e6;

/// Receive samples per FM0 half-symbol (chip)
pub const SAMPLES_PER_SYMBOL: usize = 4;

/// Receive sample rate as a multiple of BLF
pub const RX_OVERSAMPLE: f64 = 8.0;

/// FM0 preamble, one entry per half-symbol
pub const FM0_PREAMBLE: [i8; 12] = [1, 1, -1, 1, -1, -1, 1, -1, -1, -1, 1, 1];

/// Extra search samples for matched-filter group delay and jitter
pub const SEARCH_SLACK_SAMPLES: usize = 5;

/// Equalizer unity taps, 1-indexed inclusive
pub const EQ_MASK_FIRST: usize = 2;
pub const EQ_MASK_LAST: usize = 7;

/// Builder defaults
pub const DEFAULT_BLF_HZ: f64 = 40e3;
pub const DEFAULT_TARI_US: f64 = 25.0;
pub const DEFAULT_TARI_RATIO: f64 = 2.0;
pub const DEFAULT_TX_SAMPLE_RATE_HZ: f64 = 2e6;
