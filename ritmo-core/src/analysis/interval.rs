use chrono::TimeDelta;

use crate::RitmoError;
use crate::types::{Sample, ensure_monotonic_timestamps};

/// Estimate the representative spacing between successive observations.
///
/// Returns the median of the consecutive-pair timestamp differences, in
/// milliseconds. The median resists the outlier gaps left by missing data,
/// which would drag a mean toward coarser intervals. For an even number of
/// differences the two middle values are averaged at integer-millisecond
/// precision.
///
/// ```
/// use chrono::DateTime;
/// use ritmo_core::{Sample, median_sampling_interval};
///
/// let samples: Vec<Sample> = (0..24)
///     .map(|i| Sample::new(DateTime::from_timestamp(i * 3600, 0).unwrap(), 0.0))
///     .collect();
/// let interval = median_sampling_interval(&samples).unwrap();
/// assert_eq!(interval.num_milliseconds(), 3_600_000);
/// ```
///
/// # Errors
/// - `RitmoError::InsufficientData` if fewer than 2 samples are given.
/// - `RitmoError::MalformedSeries` if timestamps are not strictly
///   increasing.
pub fn median_sampling_interval(samples: &[Sample]) -> Result<TimeDelta, RitmoError> {
    if samples.len() < 2 {
        return Err(RitmoError::insufficient_data(format!(
            "need at least 2 samples to estimate a sampling interval, got {}",
            samples.len()
        )));
    }
    ensure_monotonic_timestamps(samples)?;

    let mut deltas: Vec<i64> = samples
        .windows(2)
        .map(|pair| (pair[1].ts - pair[0].ts).num_milliseconds())
        .collect();
    deltas.sort_unstable();

    let mid = deltas.len() / 2;
    let median_ms = if deltas.len() % 2 == 1 {
        deltas[mid]
    } else {
        (deltas[mid - 1] + deltas[mid]) / 2
    };
    Ok(TimeDelta::milliseconds(median_ms))
}
