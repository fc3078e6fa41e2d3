use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use proptest::prelude::*;
use ritmo::{AggregationFunc, Ritmo, RitmoError, Sample, find_parameters};

fn start() -> DateTime<Utc> {
    // 2016-01-01T00:00:00Z
    DateTime::from_timestamp(1_451_606_400, 0).unwrap()
}

/// Synthetic 2000-point series mirroring the data shapes the finder is
/// deployed against.
fn series(kind: &str, step_s: i64) -> Vec<Sample> {
    let day = 86_400.0;
    let week = 604_800.0;
    (0..2000i64)
        .map(|i| {
            let ts = start() + TimeDelta::seconds(step_s * (i + 1));
            let value = match kind {
                "flat" => 10.0,
                "daily" => (2.0 * std::f64::consts::PI * (step_s * i) as f64 / day).sin(),
                "weekly" => (2.0 * std::f64::consts::PI * (step_s * i) as f64 / week).sin(),
                "binary" => {
                    if (i / 100) % 2 == 1 {
                        1.0
                    } else {
                        0.0
                    }
                }
                other => panic!("unknown series kind {other}"),
            };
            Sample::new(ts, value)
        })
        .collect()
}

#[test]
fn flat_series_aggregates_coarsely_with_sum_and_no_calendar_encoders() {
    let bundle = find_parameters(&series("flat", 300)).expect("flat series");
    assert!(bundle.agg_info.window > Duration::from_secs(300));
    assert_eq!(bundle.agg_info.func, AggregationFunc::Sum);
    assert!(bundle.model_info.encoders.time_of_day.is_none());
    assert!(bundle.model_info.encoders.day_of_week.is_none());
}

#[test]
fn daily_series_averages_and_enables_the_time_of_day_encoder() {
    let bundle = find_parameters(&series("daily", 300)).expect("daily series");
    assert!(bundle.agg_info.window > Duration::from_secs(300));
    assert_eq!(bundle.agg_info.func, AggregationFunc::Mean);
    assert!(bundle.model_info.encoders.time_of_day.is_some());
    assert!(bundle.model_info.encoders.day_of_week.is_none());
}

#[test]
fn weekly_series_averages_but_enables_no_calendar_encoders() {
    let bundle = find_parameters(&series("weekly", 7200)).expect("weekly series");
    assert!(bundle.agg_info.window > Duration::from_secs(7200));
    assert_eq!(bundle.agg_info.func, AggregationFunc::Mean);
    // Weekly structure never enables the time-of-day encoder, and the
    // day-of-week encoder is product-disabled.
    assert!(bundle.model_info.encoders.time_of_day.is_none());
    assert!(bundle.model_info.encoders.day_of_week.is_none());
}

#[test]
fn binary_transactions_sum_with_no_calendar_encoders() {
    let bundle = find_parameters(&series("binary", 300)).expect("binary series");
    assert!(bundle.agg_info.window >= Duration::from_secs(300));
    assert_eq!(bundle.agg_info.func, AggregationFunc::Sum);
    assert!(bundle.model_info.encoders.time_of_day.is_none());
    assert!(bundle.model_info.encoders.day_of_week.is_none());
}

#[test]
fn value_encoder_is_always_present() {
    for kind in ["flat", "daily", "weekly", "binary"] {
        let bundle = find_parameters(&series(kind, 300)).expect(kind);
        assert!(bundle.model_info.encoders.value.resolution >= 0.001);
    }
}

#[test]
fn window_never_exceeds_the_volume_ceiling() {
    for kind in ["flat", "daily", "weekly", "binary"] {
        let bundle = find_parameters(&series(kind, 300)).expect(kind);
        // 2000 points at 300s with a 1000-row guardrail cap the window at
        // twice the native interval.
        assert!(bundle.agg_info.window <= Duration::from_secs(600));
        assert!(bundle.agg_info.window >= Duration::from_secs(300));
    }
}

#[test]
fn unordered_input_is_sorted_internally() {
    let mut samples = series("daily", 300);
    samples.reverse();
    let bundle = find_parameters(&samples).expect("reversed input");
    assert_eq!(bundle.agg_info.func, AggregationFunc::Mean);
    assert!(bundle.model_info.encoders.time_of_day.is_some());
}

#[test]
fn duplicate_timestamps_are_rejected() {
    let mut samples = series("flat", 300);
    samples[10].ts = samples[9].ts;
    assert!(matches!(
        find_parameters(&samples),
        Err(RitmoError::MalformedSeries(_))
    ));
}

#[test]
fn non_finite_values_are_rejected() {
    let mut samples = series("flat", 300);
    samples[5].value = f64::NAN;
    assert!(matches!(
        find_parameters(&samples),
        Err(RitmoError::MalformedSeries(_))
    ));
}

#[test]
fn too_short_series_fails_fast() {
    let samples = &series("flat", 300)[..1];
    assert!(matches!(
        find_parameters(samples),
        Err(RitmoError::InsufficientData(_))
    ));
}

#[test]
fn bundle_serializes_with_stable_encoder_names() {
    let bundle = find_parameters(&series("daily", 300)).expect("daily series");
    let json = serde_json::to_value(&bundle).expect("serialize bundle");
    assert!(json["modelInfo"]["encoders"]["timeOfDay"].is_object());
    assert!(json["modelInfo"]["encoders"]["dayOfWeek"].is_null());
    assert!(json["modelInfo"]["encoders"]["value"]["resolution"].is_number());
    assert!(json["aggInfo"]["windowSize"].is_object());
    assert_eq!(json["aggInfo"]["func"], "mean");
}

#[test]
fn builder_rejects_out_of_range_configuration() {
    assert!(matches!(
        Ritmo::builder().peak_threshold(0.0).build(),
        Err(RitmoError::InvalidConfig(_))
    ));
    assert!(matches!(
        Ritmo::builder().peak_threshold(1.5).build(),
        Err(RitmoError::InvalidConfig(_))
    ));
    assert!(matches!(
        Ritmo::builder().scale_count(1).build(),
        Err(RitmoError::InvalidConfig(_))
    ));
    assert!(matches!(
        Ritmo::builder().scale_multiplier(-4.0).build(),
        Err(RitmoError::InvalidConfig(_))
    ));
    assert!(matches!(
        Ritmo::builder().min_rows_after_aggregation(0).build(),
        Err(RitmoError::InvalidConfig(_))
    ));
    assert!(matches!(
        Ritmo::builder()
            .daily_period(Duration::from_secs(0))
            .build(),
        Err(RitmoError::InvalidConfig(_))
    ));
}

#[test]
fn custom_volume_guardrail_changes_the_skip_boundary() {
    // With the guardrail above the sample count, aggregation is skipped and
    // the window equals the native interval.
    let finder = Ritmo::builder()
        .min_rows_after_aggregation(5000)
        .build()
        .expect("build");
    let bundle = finder
        .find_parameters(&series("daily", 300))
        .expect("daily series");
    assert_eq!(bundle.agg_info.window, Duration::from_secs(300));
}

#[test]
fn analysis_caps_at_the_most_recent_rows() {
    let finder = Ritmo::builder()
        .max_analysis_rows(1500)
        .build()
        .expect("build");
    let bundle = finder
        .find_parameters(&series("daily", 300))
        .expect("daily series");
    // The capped row count lowers the volume ceiling to 1.5x the interval.
    assert!(bundle.agg_info.window <= Duration::from_secs(450));
    assert!(bundle.agg_info.window > Duration::from_secs(300));
}

#[test]
fn identical_input_yields_identical_bundles() {
    let samples = series("daily", 300);
    let a = find_parameters(&samples).expect("first run");
    let b = find_parameters(&samples).expect("second run");
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn short_well_formed_series_keep_the_native_window(
        values in proptest::collection::vec(-100.0f64..100.0, 30..120),
        step_s in 60i64..3600,
    ) {
        let samples: Vec<Sample> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Sample::new(start() + TimeDelta::seconds(step_s * i as i64), *v))
            .collect();
        let bundle = find_parameters(&samples).unwrap();
        // Below the volume guardrail, aggregation is a no-op at the native
        // interval and the value encoder is still emitted.
        prop_assert_eq!(bundle.agg_info.window, Duration::from_secs(step_s as u64));
        prop_assert!(bundle.model_info.encoders.value.resolution >= 0.001);
    }
}
