#[path = "../common/mod.rs"]
mod common;

use gen2phy::receiver::{coarse_sync, equalize, estimate_channel_gain, fine_sync};
use gen2phy::test_support;

#[test]
fn full_chain_recovers_burst() {
    common::init_logger();
    let rx = test_support::low_blf_receiver();
    let dc = 0.3;
    let carrier_len = rx.dc_removal().len();
    let offset = 4;
    let mut samples =
        common::fixtures::carrier_then_preamble(&rx, carrier_len + offset, 0.6, dc, 64);

    let level = rx.dc_removal().estimate(&samples[..carrier_len]);
    assert!((level - dc).abs() < 1e-12);
    rx.dc_removal().remove(&mut samples, level);

    let coarse = coarse_sync(&samples, carrier_len, &rx).unwrap();
    assert_eq!(coarse.index, carrier_len + offset);

    let fine = fine_sync(&samples, coarse.index, &rx).unwrap();
    assert_eq!(fine.index, coarse.index);

    let gain = estimate_channel_gain(&samples, fine.index, &rx).unwrap();
    assert!((gain - 0.6).abs() < 1e-9);

    equalize(&mut samples, gain);
    let peak = coarse_sync(&samples, carrier_len, &rx).unwrap();
    assert!((peak.correlation - 1.0).abs() < 1e-9);
}

#[test]
fn matched_filter_delays_coarse_peak() {
    let rx = test_support::low_blf_receiver();
    let burst = test_support::fm0_preamble_burst(&rx, 2, 1.0, 0.0);
    let filtered = rx.matched_filter().apply(&burst);
    let coarse = coarse_sync(&filtered, 0, &rx).unwrap();
    // group delay of a 4-tap box is 1.5 samples
    assert!(coarse.index >= 2 && coarse.index <= 5, "index {}", coarse.index);
}

#[test]
fn high_blf_search_spans_pilot_uncertainty() {
    let rx = test_support::high_blf_receiver();
    let w = rx.search_window();
    assert!(w.search > w.pilot_max - w.pilot_min);

    let lead = w.search - 1;
    let burst = test_support::fm0_preamble_burst(&rx, lead, 1.0, 0.0);
    let coarse = coarse_sync(&burst, 0, &rx).unwrap();
    assert_eq!(coarse.index, lead);
}
