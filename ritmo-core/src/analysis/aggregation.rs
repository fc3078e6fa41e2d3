use std::collections::HashSet;

use chrono::TimeDelta;
use ritmo_types::AggregationFunc;

use crate::analysis::wavelet::PeriodicityProfile;

/// Fraction of distinct values below which data is treated as
/// indicator-like (binary flags, transaction counts) rather than
/// continuous.
const DISTINCT_FRACTION_THRESH: f64 = 0.2;

/// Choose the reducer appropriate to the value distribution.
///
/// Indicator-like data accumulates with [`AggregationFunc::Sum`], since
/// averaging counts would wash out the measured quantity; continuous data
/// averages with [`AggregationFunc::Mean`]. The classifier is the fraction
/// of distinct values (by bit pattern) over the total count, compared
/// against `0.2`.
///
/// An empty sequence classifies as continuous.
#[must_use]
pub fn select_aggregation_func(values: &[f64]) -> AggregationFunc {
    if values.is_empty() {
        return AggregationFunc::Mean;
    }
    let mut distinct: HashSet<u64> = HashSet::new();
    for v in values {
        distinct.insert(v.to_bits());
    }
    let fraction = distinct.len() as f64 / values.len() as f64;
    if fraction < DISTINCT_FRACTION_THRESH {
        AggregationFunc::Sum
    } else {
        AggregationFunc::Mean
    }
}

/// Convert the periodicity profile into a concrete aggregation window.
///
/// Walks the scales from the low end and takes the first one whose power
/// reaches `thresh` relative to the profile maximum: aggregating past that
/// scale would destroy the finest periodic structure worth keeping, while
/// aggregating up to it discards only noise. The candidate is then clamped
/// to the volume ceiling
/// `num_data_pts / min_rows_after_aggregation * sampling_interval` and
/// floored at the native interval.
///
/// Two degenerate paths:
/// - fewer than `min_rows_after_aggregation` raw samples: aggregation is
///   skipped entirely and the native interval is returned, whatever the
///   profile looks like;
/// - a powerless profile (flat-line input): there is no structure to
///   preserve, so the window goes straight to the volume ceiling.
#[must_use]
pub fn select_aggregation_window(
    profile: &PeriodicityProfile,
    thresh: f64,
    sampling_interval: TimeDelta,
    num_data_pts: usize,
    min_rows_after_aggregation: usize,
) -> TimeDelta {
    let min_rows = min_rows_after_aggregation.max(1);
    if num_data_pts < min_rows {
        return sampling_interval;
    }

    let interval_ms = sampling_interval.num_milliseconds() as f64;
    let max_window_ms = num_data_pts as f64 / min_rows as f64 * interval_ms;

    let max_power = profile.max_power();
    let candidate_ms = if max_power > 0.0 {
        let mut chosen = profile.scales_ms().last().copied().unwrap_or(interval_ms);
        for (scale, power) in profile.scales_ms().iter().zip(profile.powers()) {
            if power / max_power >= thresh {
                chosen = *scale;
                break;
            }
        }
        chosen
    } else {
        max_window_ms
    };

    let window_ms = candidate_ms.min(max_window_ms).max(interval_ms);
    TimeDelta::milliseconds(window_ms.round() as i64)
}
