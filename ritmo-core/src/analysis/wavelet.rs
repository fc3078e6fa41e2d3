//! Continuous-wavelet-transform periodicity analysis.
//!
//! Probes a logarithmically spaced bank of ricker (Mexican-hat) widths and
//! reduces each scale's coefficient vector to the variance of wavelet power
//! across time. A genuine periodic signal of period `P` produces a profile
//! maximum near the time scale matching `P`; flat or aperiodic signals
//! produce no pronounced peak.

use chrono::TimeDelta;
use rayon::prelude::*;

use crate::RitmoError;

/// The largest probed width spans `1 / WIDTH_SPAN_DIVISOR` of the series.
const WIDTH_SPAN_DIVISOR: f64 = 20.0;

/// Kernel length per width, capped at the series length.
const KERNEL_POINTS_PER_WIDTH: f64 = 10.0;

/// Scale-indexed power distribution produced by the CWT stage.
///
/// Candidate time scales are durations in milliseconds, strictly ascending;
/// power values are aligned with them by index. Produced jointly and
/// immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicityProfile {
    scales_ms: Vec<f64>,
    powers: Vec<f64>,
}

impl PeriodicityProfile {
    /// Assemble a profile from matching scale and power vectors.
    ///
    /// # Errors
    /// Returns `Err(RitmoError::MalformedSeries)` if the lengths differ, a
    /// scale is non-positive or non-finite, or a power is negative or
    /// non-finite.
    pub fn from_parts(scales_ms: Vec<f64>, powers: Vec<f64>) -> Result<Self, RitmoError> {
        if scales_ms.len() != powers.len() {
            return Err(RitmoError::malformed_series(format!(
                "profile length mismatch: {} scales vs {} powers",
                scales_ms.len(),
                powers.len()
            )));
        }
        if scales_ms.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(RitmoError::malformed_series(
                "profile scales must be positive and finite",
            ));
        }
        if powers.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(RitmoError::malformed_series(
                "profile powers must be non-negative and finite",
            ));
        }
        Ok(Self { scales_ms, powers })
    }

    /// Number of probed scales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scales_ms.len()
    }

    /// Whether the profile holds no scales.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales_ms.is_empty()
    }

    /// Candidate time scales in milliseconds, ascending.
    #[must_use]
    pub fn scales_ms(&self) -> &[f64] {
        &self.scales_ms
    }

    /// Power values aligned with [`scales_ms`](Self::scales_ms).
    #[must_use]
    pub fn powers(&self) -> &[f64] {
        &self.powers
    }

    /// Largest power in the profile, or `0.0` for an empty profile.
    #[must_use]
    pub fn max_power(&self) -> f64 {
        self.powers.iter().copied().fold(0.0, f64::max)
    }

    /// The time scale carrying the most power.
    ///
    /// # Errors
    /// Returns `Err(RitmoError::DegenerateSignal)` when no scale carries any
    /// power (a flat-line input); such a profile has no meaningful maximum.
    pub fn dominant_scale(&self) -> Result<TimeDelta, RitmoError> {
        let mut best_idx = 0usize;
        let mut best_power = 0.0f64;
        for (i, &p) in self.powers.iter().enumerate() {
            if p > best_power {
                best_power = p;
                best_idx = i;
            }
        }
        if best_power <= 0.0 {
            return Err(RitmoError::degenerate_signal(
                "profile carries no power; periodicity is undefined",
            ));
        }
        Ok(TimeDelta::milliseconds(self.scales_ms[best_idx].round() as i64))
    }
}

/// Compute the periodicity profile of a uniformly resampled value sequence.
///
/// Probes `scale_count` ricker widths logarithmically spaced from 1 up to
/// `values.len() / 20`, convolves the sequence with each kernel, and
/// reduces each scale to the variance of squared coefficient magnitude
/// across time. The time scale reported for width `w` is
/// `w * sampling_interval * scale_multiplier`.
///
/// A sequence whose values are all identical carries no periodic structure
/// and yields an all-zero profile instead of an error: a flat line is a
/// valid, if uninteresting, input.
///
/// Per-scale computations are independent and run as a parallel map,
/// assembled back in scale order, so the output is bitwise identical
/// regardless of thread count.
///
/// # Errors
/// - `RitmoError::InsufficientData` if `values.len() <= 20`, which leaves
///   no room for the width grid.
/// - `RitmoError::InvalidInterval` if `sampling_interval` is not positive.
/// - `RitmoError::MalformedSeries` if a value is non-finite.
/// - `RitmoError::InvalidConfig` if `scale_count < 2` or `scale_multiplier`
///   is not a positive finite number.
pub fn periodicity_profile(
    values: &[f64],
    sampling_interval: TimeDelta,
    scale_count: usize,
    scale_multiplier: f64,
) -> Result<PeriodicityProfile, RitmoError> {
    let interval_ms = sampling_interval.num_milliseconds();
    if interval_ms <= 0 {
        return Err(RitmoError::invalid_interval(format!(
            "sampling interval must be positive, got {interval_ms}ms"
        )));
    }
    if scale_count < 2 {
        return Err(RitmoError::invalid_config(format!(
            "need at least 2 scales, got {scale_count}"
        )));
    }
    if !scale_multiplier.is_finite() || scale_multiplier <= 0.0 {
        return Err(RitmoError::invalid_config(format!(
            "scale multiplier must be positive and finite, got {scale_multiplier}"
        )));
    }
    let n = values.len();
    if (n as f64) <= WIDTH_SPAN_DIVISOR {
        return Err(RitmoError::insufficient_data(format!(
            "periodicity analysis needs more than {WIDTH_SPAN_DIVISOR} points, got {n}"
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(RitmoError::malformed_series(
            "non-finite value in resampled series",
        ));
    }

    let widths = log_spaced_widths(n, scale_count);
    let scales_ms: Vec<f64> = widths
        .iter()
        .map(|w| w * interval_ms as f64 * scale_multiplier)
        .collect();

    if is_constant(values) {
        #[cfg(feature = "tracing")]
        tracing::warn!(len = n, "flat-line series; reporting an all-zero periodicity profile");
        let zeros = vec![0.0; scales_ms.len()];
        return PeriodicityProfile::from_parts(scales_ms, zeros);
    }

    let powers: Vec<f64> = widths
        .par_iter()
        .map(|&w| variance_of_power(values, w))
        .collect();

    PeriodicityProfile::from_parts(scales_ms, powers)
}

/// Widths logarithmically spaced from 1 to `n / WIDTH_SPAN_DIVISOR`,
/// inclusive on both ends.
fn log_spaced_widths(n: usize, count: usize) -> Vec<f64> {
    let hi = (n as f64 / WIDTH_SPAN_DIVISOR).log10();
    (0..count)
        .map(|i| 10f64.powf(hi * i as f64 / (count as f64 - 1.0)))
        .collect()
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

/// Ricker (Mexican-hat) kernel of `points` samples with width parameter
/// `a`, normalized so kernels of different widths are comparable.
fn ricker_kernel(points: usize, a: f64) -> Vec<f64> {
    let norm = 2.0 / ((3.0 * a).sqrt() * std::f64::consts::PI.powf(0.25));
    let center = (points as f64 - 1.0) / 2.0;
    (0..points)
        .map(|i| {
            let x = i as f64 - center;
            let xsq = (x / a) * (x / a);
            norm * (1.0 - xsq) * (-xsq / 2.0).exp()
        })
        .collect()
}

/// Same-length zero-padded convolution of `data` with `kernel`.
fn convolve_same(data: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = data.len();
    let m = kernel.len();
    let offset = (m - 1) / 2;
    let mut out = vec![0.0; n];
    for (i, slot) in out.iter_mut().enumerate() {
        let k = i + offset;
        let j_lo = k.saturating_sub(m - 1);
        let j_hi = n.min(k + 1);
        let mut acc = 0.0;
        for j in j_lo..j_hi {
            acc += data[j] * kernel[k - j];
        }
        *slot = acc;
    }
    out
}

/// Reduce one scale to the variance of squared coefficient magnitude across
/// time.
fn variance_of_power(values: &[f64], width: f64) -> f64 {
    let points = ((KERNEL_POINTS_PER_WIDTH * width) as usize).clamp(2, values.len());
    let kernel = ricker_kernel(points, width);
    let coeffs = convolve_same(values, &kernel);
    let n = coeffs.len() as f64;
    let mean_power = coeffs.iter().map(|c| c * c).sum::<f64>() / n;
    coeffs
        .iter()
        .map(|c| {
            let p = c * c;
            (p - mean_power) * (p - mean_power)
        })
        .sum::<f64>()
        / n
}
