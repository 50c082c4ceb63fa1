#[path = "../common/mod.rs"]
mod common;

use gen2phy::ReaderCommand;
use gen2phy::timing::RfidConfig;

#[test]
fn reference_low_counts() {
    let tx = *common::fixtures::reference_low().tx();
    assert_eq!(tx.pw, 19);
    assert_eq!(tx.data0_samples(), 48);
    assert_eq!(tx.data1_samples(), 95);
    assert_eq!(tx.rtcal_samples(), 143);
    assert_eq!(tx.trcal_samples(), 400);
}

#[test]
fn trcal_rounds_to_nearest() {
    // 640 kHz: TRCAL = 33.33 us -> 66.67 samples at 2 MS/s -> 67
    let cfg = common::fixtures::reference_high();
    let tx = cfg.tx();
    // PW = max(2.5, 2) = 2.5 us -> 5 samples
    assert_eq!(tx.pw, 5);
    assert_eq!(tx.trcal_hi, 67 - 5);
    // RTCAL = 18.75 us -> ceil(37.5) = 38
    assert_eq!(tx.rtcal_hi, 38 - 5);
}

#[test]
fn query_carries_trcal() {
    let cfg = RfidConfig::derive(160e3, 12.5, 1.5, 4e6).unwrap();
    let tx = cfg.tx();
    let query = tx.command_start_samples(ReaderCommand::Query);
    let rep = tx.command_start_samples(ReaderCommand::QueryRep);
    assert_eq!(query - rep, tx.trcal_samples());
}

#[test]
fn counts_scale_with_sample_rate() {
    let slow = RfidConfig::derive(40e3, 25.0, 2.0, 1e6).unwrap();
    let fast = RfidConfig::derive(40e3, 25.0, 2.0, 4e6).unwrap();
    assert_eq!(fast.tx().pw, 4 * slow.tx().pw);
    assert_eq!(fast.tx().cw_start, 4 * slow.tx().cw_start);
    assert_eq!(fast.durations(), slow.durations());
}
