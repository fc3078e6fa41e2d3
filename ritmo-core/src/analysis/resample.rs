use chrono::{DateTime, TimeDelta};

use crate::RitmoError;
use crate::types::{Sample, ensure_series_well_formed};

/// Project a series onto a uniform time grid via linear interpolation.
///
/// The grid starts at the first sample's timestamp, steps by `step`, and
/// ends at or before the last sample's timestamp, so every grid point lies
/// inside the original span and no extrapolation is ever performed. Output
/// length is `floor((last - first) / step) + 1`. Both upsampling (`step`
/// below the native spacing, inserting interpolated points) and
/// downsampling (`step` above it) are supported, and the result is
/// deterministic for any valid positive `step`.
///
/// # Errors
/// - `RitmoError::InvalidInterval` if `step` is zero or negative.
/// - `RitmoError::InsufficientData` if fewer than 2 samples are given.
/// - `RitmoError::MalformedSeries` if timestamps are not strictly
///   increasing or a value is non-finite.
pub fn resample_to_uniform(
    samples: &[Sample],
    step: TimeDelta,
) -> Result<Vec<Sample>, RitmoError> {
    let step_ms = step.num_milliseconds();
    if step_ms <= 0 {
        return Err(RitmoError::invalid_interval(format!(
            "resampling step must be positive, got {step_ms}ms"
        )));
    }
    if samples.len() < 2 {
        return Err(RitmoError::insufficient_data(format!(
            "need at least 2 samples to resample, got {}",
            samples.len()
        )));
    }
    ensure_series_well_formed(samples)?;

    let first_ms = samples[0].ts.timestamp_millis();
    let last_ms = samples[samples.len() - 1].ts.timestamp_millis();
    let n_out = usize::try_from((last_ms - first_ms) / step_ms + 1).map_err(|_| {
        RitmoError::invalid_interval(format!("grid of step {step_ms}ms is not representable"))
    })?;

    let mut out = Vec::with_capacity(n_out);
    // Index of the segment [left, left + 1] bracketing the current grid
    // point; grid points are ascending, so it only ever moves forward.
    let mut left = 0usize;
    for i in 0..n_out {
        let t = first_ms + (i as i64) * step_ms;
        while left + 2 < samples.len() && samples[left + 1].ts.timestamp_millis() < t {
            left += 1;
        }
        let t0 = samples[left].ts.timestamp_millis();
        let t1 = samples[left + 1].ts.timestamp_millis();
        let v0 = samples[left].value;
        let v1 = samples[left + 1].value;
        let frac = (t - t0) as f64 / (t1 - t0) as f64;
        let ts = DateTime::from_timestamp_millis(t).ok_or_else(|| {
            RitmoError::malformed_series(format!("grid timestamp {t}ms is out of range"))
        })?;
        out.push(Sample::new(ts, v0 + (v1 - v0) * frac));
    }
    Ok(out)
}
