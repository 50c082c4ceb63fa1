#[path = "../common/mod.rs"]
mod common;

use gen2phy::timing::{RfidConfig, frt_for_blf};
use gen2phy::{DivideRatio, Error};

#[test]
fn low_blf_reference_values() -> anyhow::Result<()> {
    common::init_logger();
    let cfg = common::fixtures::reference_low();

    assert_eq!(cfg.div_ratio(), DivideRatio::Eight);
    assert!(!cfg.pilot_enabled());

    let d = cfg.durations();
    assert_eq!(d.pilot, 0.0);
    assert_eq!(d.rtcal, 71.25);
    assert_eq!(d.trcal, 200.0);
    assert!(d.trcal >= 1.1 * d.rtcal && d.trcal <= 3.0 * d.rtcal);
    assert_eq!(d.data1, 47.5);
    assert_eq!(d.pw, 9.5);
    Ok(())
}

#[test]
fn high_blf_reference_values() {
    let cfg = common::fixtures::reference_high();

    assert_eq!(cfg.div_ratio(), DivideRatio::SixtyFourThirds);
    assert!(cfg.pilot_enabled());
    assert_eq!(cfg.frt(), 0.15);
    assert!((cfg.durations().pilot - 18.75).abs() < 1e-9);
    assert!((cfg.durations().tpri - 1.5625).abs() < 1e-12);
}

#[test]
fn boundary_rejections() {
    assert_eq!(
        RfidConfig::derive(39_999.0, 25.0, 2.0, 2e6).unwrap_err(),
        Error::InvalidBlfRange { blf: 39_999.0 }
    );
    assert_eq!(
        RfidConfig::derive(640_001.0, 6.25, 2.0, 2e6).unwrap_err(),
        Error::InvalidBlfRange { blf: 640_001.0 }
    );
    assert_eq!(
        RfidConfig::derive(40e3, 25.0, 1.49, 2e6).unwrap_err(),
        Error::InvalidTariRatio { ratio: 1.49 }
    );
    assert!(matches!(
        RfidConfig::derive(40e3, 6.24, 2.0, 2e6),
        Err(Error::InvalidTariRange { .. })
    ));
    assert!(matches!(
        RfidConfig::derive(40e3, 25.01, 2.0, 2e6),
        Err(Error::InvalidTariRange { .. })
    ));
    assert!(matches!(
        RfidConfig::derive(40e3, 25.0, 2.01, 2e6),
        Err(Error::InvalidTariRatio { .. })
    ));
}

#[test]
fn sample_rate_rejections() {
    for rate in [0.0, -2e6, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            RfidConfig::derive(40e3, 25.0, 2.0, rate),
            Err(Error::InvalidSampleRate { .. })
        ));
    }
}

#[test]
fn valid_grid_orders_t1() -> anyhow::Result<()> {
    for (blf, tari) in common::fixtures::VALID_BLF_TARI {
        let cfg = RfidConfig::derive(blf, tari, 2.0, 2e6)?;
        let d = cfg.durations();
        assert!(d.t1_min <= d.t1 && d.t1 <= d.t1_max, "blf {}", blf);
        assert_eq!(d.t1, d.rtcal.max(10.0 * d.tpri));
        assert_eq!(cfg.frt(), frt_for_blf(blf)?);
        assert_eq!(cfg.pilot_enabled(), blf > 320e3);
    }
    Ok(())
}

#[test]
fn derive_twice_is_identical() {
    let a = RfidConfig::derive(256e3, 6.25, 1.75, 3.2e6).unwrap();
    let b = RfidConfig::derive(256e3, 6.25, 1.75, 3.2e6).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        format!("{:?}", a.durations()),
        format!("{:?}", b.durations())
    );
}

#[test]
fn builder_matches_derive() -> anyhow::Result<()> {
    let built = RfidConfig::builder()
        .tag_blf(320e3)
        .tari(6.25)
        .tari_ratio(2.0)
        .tx_sample_rate(4e6)
        .build()?;
    assert_eq!(built, RfidConfig::derive(320e3, 6.25, 2.0, 4e6)?);
    // 320 kHz is its own FrT band and still uses DR=8
    assert_eq!(built.frt(), 0.10);
    assert_eq!(built.div_ratio(), DivideRatio::Eight);
    assert!(!built.pilot_enabled());
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn config_serializes() -> anyhow::Result<()> {
    let cfg = common::fixtures::reference_low();
    let json = serde_json::to_string(&cfg)?;
    let back: RfidConfig = serde_json::from_str(&json)?;
    assert_eq!(back, cfg);
    Ok(())
}
