//! Property tests: local civil time survives a trip through Julian Date.

use chrono::{NaiveDate, NaiveDateTime};
use janma_time::{jd_to_local, local_to_jd};
use proptest::prelude::*;

fn naive(days: i64, secs: u32) -> NaiveDateTime {
    let base = NaiveDate::from_ymd_opt(1800, 1, 1).unwrap();
    (base + chrono::Days::new(days as u64))
        .and_hms_opt(secs / 3600, (secs / 60) % 60, secs % 60)
        .unwrap()
}

proptest! {
    #[test]
    fn local_jd_local_within_one_second(
        days in 0i64..109_500,
        secs in 0u32..86_400,
        quarter_hours in -48i32..=56,
    ) {
        let offset = quarter_hours as f64 * 0.25;
        let t = naive(days, secs);
        let back = jd_to_local(local_to_jd(t, offset), offset).unwrap();
        prop_assert!((back - t).num_milliseconds().abs() <= 1000);
    }

    #[test]
    fn jd_local_jd_within_one_second(
        jd in 2_378_497.0f64..2_488_069.0,
        quarter_hours in -48i32..=56,
    ) {
        let offset = quarter_hours as f64 * 0.25;
        let local = jd_to_local(jd, offset).unwrap();
        let again = local_to_jd(local, offset);
        prop_assert!(((again - jd) * 86_400.0).abs() <= 1.0);
    }
}
