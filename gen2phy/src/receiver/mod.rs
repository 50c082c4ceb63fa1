// gen2phy-rs/gen2phy/src/receiver/mod.rs

//! Receive-chain constants in the sample domain.
//!
//! The receiver runs at 8x BLF, i.e. four samples per FM0 half-symbol.
//! Everything here is a pure function of an already validated
//! `RfidConfig`, so configuration cannot fail.

pub mod dc_removal;
pub mod equalizer;
pub mod fine_sync;
pub mod matched_filter;
pub mod preamble;
pub mod sync;

pub use dc_removal::DcRemoval;
pub use equalizer::EqualizerMask;
pub use fine_sync::FineSyncKernel;
pub use matched_filter::MatchedFilter;
pub use preamble::{PreambleTemplate, SearchWindow};
pub use sync::{CoarseSync, FineSync, coarse_sync, equalize, estimate_channel_gain, fine_sync};

use crate::constants::{FM0_PREAMBLE, PILOT_SYMBOLS, RX_OVERSAMPLE, SAMPLES_PER_SYMBOL};
use crate::timing::RfidConfig;
use crate::types::ReaderReceive;
use crate::utils::samples_per_us;

/// Sample-domain receive configuration derived from an `RfidConfig`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverConfig {
    rx_sample_rate: f64,
    samples_per_symbol: usize,
    samples_per_us: f64,
    pilot_enabled: bool,
    matched_filter: MatchedFilter,
    dc_removal: DcRemoval,
    search_window: SearchWindow,
    preamble: PreambleTemplate,
    equalizer: EqualizerMask,
    fine_sync: FineSyncKernel,
}

impl ReceiverConfig {
    pub fn configure(config: &RfidConfig) -> Self {
        let rx_sample_rate = config.tag_blf() * RX_OVERSAMPLE;
        let samples_per_symbol = SAMPLES_PER_SYMBOL;
        let per_us = samples_per_us(rx_sample_rate);
        let durations = config.durations();

        let matched_filter = MatchedFilter::new(samples_per_symbol);
        let dc_removal = DcRemoval::new(durations.t1_min, per_us);
        let search_window = SearchWindow::new(durations, per_us);
        let preamble = PreambleTemplate::new(samples_per_symbol);
        let equalizer = EqualizerMask::new(preamble.len());
        let fine_sync = FineSyncKernel::new(samples_per_symbol);

        log::debug!(
            "receiver: rate={} Hz dc_len={} t1=[{}, {}] pilot=[{}, {}] search={}",
            rx_sample_rate,
            dc_removal.len(),
            search_window.t1_min,
            search_window.t1_max,
            search_window.pilot_min,
            search_window.pilot_max,
            search_window.search
        );

        Self {
            rx_sample_rate,
            samples_per_symbol,
            samples_per_us: per_us,
            pilot_enabled: config.pilot_enabled(),
            matched_filter,
            dc_removal,
            search_window,
            preamble,
            equalizer,
            fine_sync,
        }
    }

    /// Receive sample rate (Hz), 8x BLF
    pub fn rx_sample_rate(&self) -> f64 {
        self.rx_sample_rate
    }

    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }

    pub fn samples_per_us(&self) -> f64 {
        self.samples_per_us
    }

    pub fn matched_filter(&self) -> &MatchedFilter {
        &self.matched_filter
    }

    pub fn dc_removal(&self) -> &DcRemoval {
        &self.dc_removal
    }

    pub fn search_window(&self) -> &SearchWindow {
        &self.search_window
    }

    pub fn preamble(&self) -> &PreambleTemplate {
        &self.preamble
    }

    pub fn equalizer(&self) -> &EqualizerMask {
        &self.equalizer
    }

    pub fn fine_sync(&self) -> &FineSyncKernel {
        &self.fine_sync
    }

    /// Receive samples spanned by a complete tag reply: pilot tone (if any),
    /// preamble, data bits and the trailing dummy 1.
    pub fn response_samples(&self, reply: ReaderReceive) -> usize {
        let pilot_chips = if self.pilot_enabled {
            2 * PILOT_SYMBOLS
        } else {
            0
        };
        let chips = pilot_chips + FM0_PREAMBLE.len() + 2 * reply.expected_bits() + 2;
        chips * self.samples_per_symbol
    }
}
