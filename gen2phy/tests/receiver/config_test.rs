#[path = "../common/mod.rs"]
mod common;

use gen2phy::ReaderReceive;
use gen2phy::profile::ReaderProfile;
use gen2phy::receiver::ReceiverConfig;
use gen2phy::timing::RfidConfig;

#[test]
fn fixed_shapes_for_every_band() -> anyhow::Result<()> {
    common::init_logger();
    for (blf, tari) in common::fixtures::VALID_BLF_TARI {
        let rx = ReceiverConfig::configure(&RfidConfig::derive(blf, tari, 2.0, 2e6)?);

        assert_eq!(rx.rx_sample_rate(), 8.0 * blf);
        assert_eq!(rx.samples_per_symbol(), 4);

        let mf_sum: f64 = rx.matched_filter().taps().iter().sum();
        assert!((mf_sum - 1.0).abs() < 1e-12);

        assert_eq!(rx.preamble().len(), 12 * rx.samples_per_symbol());
        assert_eq!(rx.equalizer().taps().len(), rx.preamble().len());
        assert_eq!(rx.equalizer().active(), 6);

        let kernel = rx.fine_sync();
        assert_eq!(kernel.taps().len(), 2 * rx.samples_per_symbol());
        assert_eq!(kernel.peek_left(), rx.samples_per_symbol() - 2);
        assert_eq!(kernel.peek_len(), 2 * rx.samples_per_symbol() - 2);
        let kernel_sum: f64 = kernel.taps().iter().sum();
        assert!((kernel.norm() * kernel_sum - 1.0).abs() < 1e-12);
    }
    Ok(())
}

#[test]
fn dc_window_follows_t1_min() {
    let cfg = common::fixtures::reference_high();
    let rx = ReceiverConfig::configure(&cfg);
    let expected = (cfg.durations().t1_min / 2.0 * rx.samples_per_us()).floor() as usize;
    assert_eq!(rx.dc_removal().len(), expected);
    assert!((rx.dc_removal().gain() * expected as f64 - 1.0).abs() < 1e-12);
}

#[test]
fn search_window_covers_t1_and_pilot() {
    let cfg = common::fixtures::reference_high();
    let rx = ReceiverConfig::configure(&cfg);
    let w = rx.search_window();
    let spu = rx.samples_per_us();
    let d = cfg.durations();

    assert_eq!(w.t1_min, (d.t1_min * spu).floor() as usize);
    assert_eq!(w.t1_max, (d.t1_max * spu).ceil() as usize);
    assert_eq!(w.pilot_min, (d.pilot_min * spu).floor() as usize);
    assert_eq!(w.pilot_max, (d.pilot_max * spu).ceil() as usize);
    assert_eq!(w.search, (w.t1_max - w.t1_min) + (w.pilot_max - w.pilot_min) + 5);
}

#[test]
fn pilot_lengthens_replies() {
    let low = ReaderProfile::new(320e3, 6.25, 2.0, 2e6).unwrap();
    let high = ReaderProfile::new(640e3, 6.25, 2.0, 2e6).unwrap();
    let extra = high.receiver().response_samples(ReaderReceive::Epc)
        - low.receiver().response_samples(ReaderReceive::Epc);
    // 12 pilot symbols, 2 chips each, 4 samples per chip
    assert_eq!(extra, 96);
}
