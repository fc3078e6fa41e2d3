use ritmo_types::EncoderFlags;

use crate::analysis::wavelet::PeriodicityProfile;

/// Product switch for the day-of-week encoder.
///
/// Weekly detection is still computed and logged, but the emitted flag is
/// forced off: this deployment never enables a day-of-week encoder.
/// Flipping this constant is a product decision, not a bug fix.
pub const WEEKLY_ENCODER_ENABLED: bool = false;

/// Minimum power at a reference period, relative to the profile maximum,
/// for the profile to count as periodic at that period.
const PERIOD_POWER_THRESH: f64 = 0.5;

/// Decide which calendar encoders the periodicity profile justifies.
///
/// A reference period is detected when the profile is pronounced — it has
/// at least one strict interior local maximum — and the power at the scale
/// nearest the period (in log space) reaches half the profile maximum.
/// Flat and powerless profiles detect nothing; a weekly-only peak leaves
/// the daily power near zero, so it detects nothing either.
///
/// `use_day_of_week` is forced `false` by [`WEEKLY_ENCODER_ENABLED`]
/// regardless of the detection outcome.
#[must_use]
pub fn select_encoder_flags(
    profile: &PeriodicityProfile,
    daily_period_ms: f64,
    weekly_period_ms: f64,
) -> EncoderFlags {
    let daily = period_detected(profile, daily_period_ms);
    let weekly = period_detected(profile, weekly_period_ms);
    #[cfg(feature = "tracing")]
    if weekly && !WEEKLY_ENCODER_ENABLED {
        tracing::debug!(
            "weekly periodicity detected, but the day-of-week encoder is product-disabled"
        );
    }
    EncoderFlags {
        use_time_of_day: daily,
        use_day_of_week: weekly && WEEKLY_ENCODER_ENABLED,
    }
}

fn period_detected(profile: &PeriodicityProfile, period_ms: f64) -> bool {
    let max_power = profile.max_power();
    if max_power <= 0.0 || !has_interior_peak(profile.powers()) {
        return false;
    }
    let Some(idx) = nearest_scale_index(profile.scales_ms(), period_ms) else {
        return false;
    };
    profile.powers()[idx] / max_power >= PERIOD_POWER_THRESH
}

/// A strict interior local maximum distinguishes a peaked profile from a
/// flat or monotonic one.
fn has_interior_peak(powers: &[f64]) -> bool {
    powers
        .windows(3)
        .any(|w| w[1] > w[0] && w[1] > w[2])
}

/// Index of the scale nearest `period_ms` in log space, or `None` when the
/// period lies outside the probed range and the profile therefore carries
/// no information about it.
fn nearest_scale_index(scales_ms: &[f64], period_ms: f64) -> Option<usize> {
    let first = *scales_ms.first()?;
    let last = *scales_ms.last()?;
    if period_ms < first || period_ms > last {
        return None;
    }
    let target = period_ms.ln();
    let mut best = 0usize;
    let mut best_dist = f64::INFINITY;
    for (i, s) in scales_ms.iter().enumerate() {
        let d = (s.ln() - target).abs();
        if d < best_dist {
            best_dist = d;
            best = i;
        }
    }
    Some(best)
}
