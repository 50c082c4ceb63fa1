// gen2phy-rs/gen2phy/src/timing/tx.rs

//! Transmit sample counts.
//!
//! Each field has its own rounding rule. PW rounds to nearest; the data-0,
//! data-1 and RTcal high times round up before PW is subtracted; TRcal
//! rounds to nearest. Do not unify them.

use crate::timing::Durations;
use crate::types::ReaderCommand;
use crate::utils::{samples_ceil, samples_per_us, samples_round};

/// Transmit-side sample counts at a given sample rate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxConfig {
    /// Low pulse ending every reader symbol
    pub pw: usize,
    pub data0_hi: usize,
    pub data1_hi: usize,
    pub rtcal_hi: usize,
    pub trcal_hi: usize,
    pub delim: usize,
    pub cw_start: usize,
}

impl TxConfig {
    pub(crate) fn compute(durations: &Durations, tx_sample_rate: f64) -> Self {
        let per_us = samples_per_us(tx_sample_rate);

        let pw = samples_round(durations.pw, per_us);
        let data0_hi = samples_ceil(durations.data0, per_us).saturating_sub(pw);
        let data1_hi = samples_ceil(durations.data1, per_us).saturating_sub(pw);
        let rtcal_hi = samples_ceil(durations.rtcal, per_us).saturating_sub(pw);
        let trcal_hi = samples_round(durations.trcal, per_us).saturating_sub(pw);

        Self {
            pw,
            data0_hi,
            data1_hi,
            rtcal_hi,
            trcal_hi,
            delim: samples_round(durations.delim, per_us),
            cw_start: samples_round(durations.cw_start, per_us),
        }
    }

    pub fn data0_samples(&self) -> usize {
        self.data0_hi + self.pw
    }

    pub fn data1_samples(&self) -> usize {
        self.data1_hi + self.pw
    }

    pub fn rtcal_samples(&self) -> usize {
        self.rtcal_hi + self.pw
    }

    pub fn trcal_samples(&self) -> usize {
        self.trcal_hi + self.pw
    }

    /// Delimiter, data-0 and RTcal.
    pub fn frame_sync_samples(&self) -> usize {
        self.delim + self.data0_samples() + self.rtcal_samples()
    }

    /// Frame-sync followed by TRcal.
    pub fn preamble_samples(&self) -> usize {
        self.frame_sync_samples() + self.trcal_samples()
    }

    /// Samples preceding the first data bit of `cmd`.
    pub fn command_start_samples(&self, cmd: ReaderCommand) -> usize {
        if cmd.uses_preamble() {
            self.preamble_samples()
        } else {
            self.frame_sync_samples()
        }
    }
}
