// gen2phy-rs/gen2phy/src/timing/durations.rs

use crate::constants::*;
use crate::types::DivideRatio;

/// Air-interface durations in microseconds.
///
/// Every field is computed once from the validated inputs and never
/// changes afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Durations {
    pub delim: f64,
    pub pw: f64,
    pub data0: f64,
    pub data1: f64,
    pub rtcal: f64,
    pub trcal: f64,
    pub t1: f64,
    pub t1_min: f64,
    pub t1_max: f64,
    pub t2_min: f64,
    pub t2_max: f64,
    pub pilot: f64,
    pub pilot_min: f64,
    pub pilot_max: f64,
    pub cw_start: f64,
    /// Tag backscatter period
    pub tpri: f64,
}

impl Durations {
    /// Compute all durations. Inputs are assumed to be range-checked
    /// already; the TRCAL bound is checked by the caller on the result.
    pub(crate) fn compute(
        tag_blf: f64,
        tari: f64,
        tari_ratio: f64,
        div_ratio: DivideRatio,
        pilot_enabled: bool,
        frt: f64,
    ) -> Self {
        let pw = (PW_TARI_FACTOR * tari).max(PW_MIN_US);
        let data0 = tari;
        let data1 = tari * tari_ratio;
        let tpri = US_PER_SEC / tag_blf;

        let delim = DELIM_US;
        let rtcal = data0 + data1;
        let trcal = div_ratio.value() * US_PER_SEC / tag_blf;

        let cw_start = CW_START_US;
        let t1 = rtcal.max(T1_TPRI_FACTOR * tpri);
        let t1_min = t1 * (1.0 - frt) - T1_SLACK_US;
        let t1_max = t1 * (1.0 + frt) + T1_SLACK_US;
        let t2_min = T2_MIN_TPRI * tpri;
        let t2_max = T2_MAX_TPRI * tpri;

        let pilot = if pilot_enabled {
            PILOT_SYMBOLS as f64 * tpri
        } else {
            0.0
        };
        let pilot_min = pilot * (1.0 - frt);
        let pilot_max = pilot * (1.0 + frt);

        Self {
            delim,
            pw,
            data0,
            data1,
            rtcal,
            trcal,
            t1,
            t1_min,
            t1_max,
            t2_min,
            t2_max,
            pilot,
            pilot_min,
            pilot_max,
            cw_start,
            tpri,
        }
    }

    /// Whether TRCAL lies within the legal multiple of RTCAL.
    pub fn trcal_in_bounds(&self) -> bool {
        let low = TRCAL_MIN_FACTOR * self.rtcal;
        let high = TRCAL_MAX_FACTOR * self.rtcal;
        self.trcal >= low && self.trcal <= high
    }
}
