//! Infer aggregation and encoder parameters for a synthetic daily series.
//!
//! Run with: `cargo run -p ritmo --example 01_infer_params`

use chrono::{DateTime, TimeDelta};
use ritmo::{Sample, find_parameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = DateTime::from_timestamp(1_704_067_200, 0).expect("valid timestamp");
    let day = 86_400.0;

    // A day-periodic signal sampled every 5 minutes for a week.
    let samples: Vec<Sample> = (0..2016)
        .map(|i| {
            let ts = start + TimeDelta::seconds(300 * i);
            let value = (2.0 * std::f64::consts::PI * (300 * i) as f64 / day).sin();
            Sample::new(ts, value)
        })
        .collect();

    let bundle = find_parameters(&samples)?;
    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}
