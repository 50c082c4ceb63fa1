// gen2phy-rs/gen2phy/src/receiver/sync.rs

//! Burst synchronisation and channel-gain estimation.
//!
//! Coarse sync slides the full preamble template over the search window and
//! keeps the offset with the largest |correlation|. Fine sync then peeks a
//! few samples around that offset with the two-chip kernel and refines the
//! peak with a three-point parabola. The gain estimate only looks at the
//! samples selected by the equalizer mask.

use crate::receiver::ReceiverConfig;

/// Result of the coarse preamble search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoarseSync {
    /// Absolute sample index of the preamble start
    pub index: usize,
    /// Normalised correlation at `index` (signed)
    pub correlation: f64,
}

/// Result of the fine edge search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FineSync {
    /// Sample index with the strongest kernel response
    pub index: usize,
    /// `index` refined to a fractional sample position
    pub position: f64,
    pub correlation: f64,
}

/// Search `config.search_window().search` offsets starting at `start`.
///
/// Offsets whose template span runs past the end of `samples` are skipped.
/// Returns `None` if no offset fits.
pub fn coarse_sync(samples: &[f64], start: usize, config: &ReceiverConfig) -> Option<CoarseSync> {
    let template = config.preamble();
    let mut best: Option<CoarseSync> = None;

    for index in start..start.saturating_add(config.search_window().search) {
        let Some(window) = samples.get(index..) else {
            break;
        };
        let Some(correlation) = template.correlate(window) else {
            break;
        };
        if best.is_none_or(|b| correlation.abs() > b.correlation.abs()) {
            best = Some(CoarseSync { index, correlation });
        }
    }

    if let Some(b) = best {
        log::trace!("coarse sync: index={} corr={:.4}", b.index, b.correlation);
    }
    best
}

/// Refine a coarse preamble index with the fine-sync kernel.
pub fn fine_sync(samples: &[f64], coarse_index: usize, config: &ReceiverConfig) -> Option<FineSync> {
    let kernel = config.fine_sync();
    let first = coarse_index.saturating_sub(kernel.peek_left());

    let scores: Vec<(usize, f64)> = (first..first + kernel.peek_len())
        .map_while(|i| {
            samples
                .get(i..)
                .and_then(|w| kernel.correlate(w))
                .map(|c| (i, c))
        })
        .collect();

    let (peak, &(index, correlation)) = scores
        .iter()
        .enumerate()
        .fold(None, |acc: Option<(usize, &(usize, f64))>, (n, s)| match acc {
            Some((_, best)) if best.1.abs() >= s.1.abs() => acc,
            _ => Some((n, s)),
        })?;

    let mut position = index as f64;
    if peak > 0 && peak + 1 < scores.len() {
        let ym = scores[peak - 1].1.abs();
        let y0 = correlation.abs();
        let yp = scores[peak + 1].1.abs();
        let denom = ym - 2.0 * y0 + yp;
        if denom != 0.0 {
            position += 0.5 * (ym - yp) / denom;
        }
    }

    Some(FineSync {
        index,
        position,
        correlation,
    })
}

/// Signed channel gain from the masked preamble samples starting at
/// `start`.
pub fn estimate_channel_gain(samples: &[f64], start: usize, config: &ReceiverConfig) -> Option<f64> {
    let template = config.preamble().taps();
    let mask = config.equalizer();
    let window = samples.get(start..start.checked_add(template.len())?)?;

    let acc: f64 = window
        .iter()
        .zip(template)
        .zip(mask.taps())
        .map(|((x, t), m)| x * t * m)
        .sum();
    Some(acc * mask.norm())
}

/// Divide every sample by `gain`. A zero gain leaves the samples untouched.
pub fn equalize(samples: &mut [f64], gain: f64) {
    if gain == 0.0 {
        return;
    }
    samples.iter_mut().for_each(|s| *s /= gain);
}
