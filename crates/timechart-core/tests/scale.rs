// File: crates/timechart-core/tests/scale.rs
// Purpose: Time scale mapping/inversion and TimeRange behaviour.

use chrono::{Duration, TimeZone, Utc};
use timechart_core::time_range::time_from_millis;
use timechart_core::{compute_time_scale, LayoutError, TimeRange, TimeScale};

#[test]
fn maps_midpoint_to_half_width() {
    let scale = compute_time_scale(Some(TimeRange::from_millis(0, 100_000).unwrap()), 705.0, true).unwrap();
    assert!((scale.apply(time_from_millis(50_000)) - 352.5).abs() < 1e-9);
    assert_eq!(scale.apply(time_from_millis(0)), 0.0);
    assert!((scale.apply(time_from_millis(100_000)) - 705.0).abs() < 1e-9);
    assert_eq!(scale.invert(352.5), time_from_millis(50_000));
    assert_eq!(scale.range(), (0.0, 705.0));
    assert!(scale.is_utc());
}

#[test]
fn extrapolates_outside_domain() {
    let scale = TimeScale::new(Some(TimeRange::from_millis(1_000, 2_000).unwrap()), 100.0, false).unwrap();
    assert!((scale.apply(time_from_millis(500)) + 50.0).abs() < 1e-9);
    assert_eq!(scale.invert(150.0), time_from_millis(2_500));
}

#[test]
fn zero_length_domain_collapses_to_begin() {
    let scale = TimeScale::new(Some(TimeRange::from_millis(42, 42).unwrap()), 300.0, false).unwrap();
    assert_eq!(scale.apply(time_from_millis(42)), 0.0);
    assert_eq!(scale.invert(123.0), time_from_millis(42));
}

#[test]
fn rejects_missing_range_and_empty_plot() {
    assert_eq!(TimeScale::new(None, 100.0, false).unwrap_err(), LayoutError::MissingTimeRange);
    let r = TimeRange::from_millis(0, 10).unwrap();
    assert_eq!(TimeScale::new(Some(r), 0.0, false).unwrap_err(), LayoutError::NonPositivePlotWidth { plot_width: 0.0 });
    let err = TimeScale::new(Some(r), -3.0, false).unwrap_err();
    assert_eq!(err, LayoutError::NonPositivePlotWidth { plot_width: -3.0 });
    assert!(err.is_fatal());
    assert_eq!(err.to_string(), "plot width -3px must be positive and finite");
    assert!(matches!(
        TimeScale::new(Some(r), f64::INFINITY, false),
        Err(LayoutError::NonPositivePlotWidth { .. })
    ));
}

#[test]
fn local_domain_is_the_same_instants() {
    let r = TimeRange::from_millis(86_400_000, 2 * 86_400_000).unwrap();
    let scale = TimeScale::new(Some(r), 10.0, false).unwrap();
    let (b, e) = scale.local_domain();
    assert_eq!(b.timestamp_millis(), 86_400_000);
    assert_eq!(e.timestamp_millis(), 2 * 86_400_000);
}

#[test]
fn time_range_queries() {
    let a = TimeRange::from_millis(0, 100).unwrap();
    let b = TimeRange::from_millis(50, 150).unwrap();
    let c = TimeRange::from_millis(200, 300).unwrap();
    assert!(a.contains(time_from_millis(0)) && a.contains(time_from_millis(100)));
    assert!(!a.contains(time_from_millis(101)));
    assert!(a.overlaps(&b) && !a.overlaps(&c));
    assert_eq!(a.extents(&c), TimeRange::from_millis(0, 300).unwrap());
    assert!(TimeRange::from_millis(10, 20).unwrap().within(&a));
    assert_eq!(a.shifted(Duration::milliseconds(-40)), TimeRange::from_millis(-40, 60).unwrap());
    assert_eq!(a.duration(), Duration::milliseconds(100));
    assert_eq!(TimeRange::between(time_from_millis(9), time_from_millis(3)), TimeRange::from_millis(3, 9).unwrap());
}

#[test]
fn relative_presets_end_at_now() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let day = TimeRange::last_day(now);
    assert_eq!(day.end(), now);
    assert_eq!(day.duration(), Duration::days(1));
    assert_eq!(TimeRange::last_seven_days(now).duration(), Duration::days(7));
    assert_eq!(TimeRange::last_year(now).duration(), Duration::days(365));
}

#[test]
fn serializes_as_millisecond_pair() {
    let r = TimeRange::from_millis(1_000, 2_500).unwrap();
    assert_eq!(serde_json::to_string(&r).unwrap(), "[1000,2500]");
    let back: TimeRange = serde_json::from_str("[1000,2500]").unwrap();
    assert_eq!(back, r);
    assert!(serde_json::from_str::<TimeRange>("[5,1]").is_err());
}
