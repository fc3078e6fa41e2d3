//! The sample/series model shared by all analysis components.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RitmoError;

/// One observation: an absolute millisecond-resolution timestamp and a
/// finite real value.
///
/// A series is an ordered slice of samples, strictly increasing in `ts`;
/// duplicate timestamps are a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Absolute time of the observation.
    pub ts: DateTime<Utc>,
    /// Observed value.
    pub value: f64,
}

impl Sample {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: f64) -> Self {
        Self { ts, value }
    }
}

/// Ensure timestamps are strictly increasing.
///
/// # Errors
/// Returns `Err(RitmoError::MalformedSeries)` on the first duplicate or
/// out-of-order timestamp.
pub fn ensure_monotonic_timestamps(samples: &[Sample]) -> Result<(), RitmoError> {
    for pair in samples.windows(2) {
        if pair[1].ts <= pair[0].ts {
            return Err(RitmoError::malformed_series(format!(
                "non-increasing timestamp at {}",
                pair[1].ts
            )));
        }
    }
    Ok(())
}

/// Ensure every value is finite.
///
/// # Errors
/// Returns `Err(RitmoError::MalformedSeries)` on the first NaN or infinite
/// value.
pub fn ensure_finite_values(samples: &[Sample]) -> Result<(), RitmoError> {
    for s in samples {
        if !s.value.is_finite() {
            return Err(RitmoError::malformed_series(format!(
                "non-finite value at {}",
                s.ts
            )));
        }
    }
    Ok(())
}

/// Ensure the series is usable by the analysis stages: strictly increasing
/// timestamps and finite values.
///
/// # Errors
/// Returns `Err(RitmoError::MalformedSeries)` on the first violation.
pub fn ensure_series_well_formed(samples: &[Sample]) -> Result<(), RitmoError> {
    ensure_monotonic_timestamps(samples)?;
    ensure_finite_values(samples)
}
