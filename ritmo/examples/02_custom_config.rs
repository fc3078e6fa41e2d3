//! Tune the finder per deployment and inspect the intermediate profile.
//!
//! Run with: `cargo run -p ritmo --example 02_custom_config`
//! Add `--features tracing` and set `RUST_LOG=debug` to see stage logs.

use chrono::{DateTime, TimeDelta};
use ritmo::{Ritmo, Sample, median_sampling_interval, periodicity_profile, resample_to_uniform};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let start = DateTime::from_timestamp(1_704_067_200, 0).expect("valid timestamp");
    let samples: Vec<Sample> = (0..3000)
        .map(|i| {
            let ts = start + TimeDelta::seconds(600 * i);
            // Hour-scale oscillation on top of a slow drift.
            let value = (i as f64 / 6.0).sin() * 4.0 + i as f64 * 0.01;
            Sample::new(ts, value)
        })
        .collect();

    let finder = Ritmo::builder()
        .peak_threshold(0.25)
        .min_rows_after_aggregation(500)
        .build()?;
    let bundle = finder.find_parameters(&samples)?;
    println!("bundle: {}", serde_json::to_string_pretty(&bundle)?);

    // The same components are callable piecewise.
    let interval = median_sampling_interval(&samples)?;
    let uniform = resample_to_uniform(&samples, interval)?;
    let values: Vec<f64> = uniform.iter().map(|s| s.value).collect();
    let profile = periodicity_profile(&values, interval, 50, 4.0)?;
    println!(
        "dominant scale: {}s",
        profile.dominant_scale()?.num_seconds()
    );
    Ok(())
}
