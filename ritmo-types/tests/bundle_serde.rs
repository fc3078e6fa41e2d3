use std::time::Duration;

use ritmo_types::{
    AggregationFunc, AggregationSpec, CalendarEncoder, EncoderSet, FinderConfig, ModelSpec,
    ParameterBundle, ValueEncoder,
};

#[test]
fn aggregation_spec_wire_names() {
    let spec = AggregationSpec {
        window: Duration::from_secs(600),
        func: AggregationFunc::Sum,
    };

    let json = serde_json::to_value(&spec).expect("serialize aggregation spec");
    assert_eq!(json["func"], "sum");
    assert!(json.get("windowSize").is_some());

    let de: AggregationSpec = serde_json::from_value(json).expect("deserialize aggregation spec");
    assert_eq!(de, spec);
}

#[test]
fn aggregation_func_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&AggregationFunc::Mean).expect("serialize mean"),
        "\"mean\""
    );
    assert_eq!(
        serde_json::to_string(&AggregationFunc::Sum).expect("serialize sum"),
        "\"sum\""
    );
}

#[test]
fn encoder_set_serializes_absent_encoders_as_null() {
    let set = EncoderSet {
        value: ValueEncoder { resolution: 0.05 },
        time_of_day: Some(CalendarEncoder {
            width: 21,
            radius: 9.49,
        }),
        day_of_week: None,
    };

    let json = serde_json::to_value(set).expect("serialize encoder set");
    assert!(json["timeOfDay"].is_object());
    assert!(json["dayOfWeek"].is_null());
    let res = json["value"]["resolution"].as_f64().expect("resolution");
    assert!((res - 0.05).abs() < 1e-12);
}

#[test]
fn parameter_bundle_roundtrip() {
    let bundle = ParameterBundle {
        agg_info: AggregationSpec {
            window: Duration::from_millis(1_200_000),
            func: AggregationFunc::Mean,
        },
        model_info: ModelSpec {
            encoders: EncoderSet {
                value: ValueEncoder { resolution: 0.001 },
                time_of_day: None,
                day_of_week: None,
            },
        },
    };

    let json = serde_json::to_string(&bundle).expect("serialize bundle");
    let de: ParameterBundle = serde_json::from_str(&json).expect("deserialize bundle");
    assert_eq!(de, bundle);
}

#[test]
fn finder_config_defaults_are_documented_values() {
    let cfg = FinderConfig::default();
    assert!((cfg.peak_threshold - 0.2).abs() < f64::EPSILON);
    assert_eq!(cfg.scale_count, 50);
    assert!((cfg.scale_multiplier - 4.0).abs() < f64::EPSILON);
    assert_eq!(cfg.min_rows_after_aggregation, 1000);
    assert_eq!(cfg.max_analysis_rows, 20_000);
    assert_eq!(cfg.daily_period.as_secs(), 86_400);
    assert_eq!(cfg.weekly_period.as_secs(), 604_800);
}
