use std::time::Duration;

use chrono::TimeDelta;

use ritmo_core::{
    RitmoError, Sample, median_sampling_interval, periodicity_profile, resample_to_uniform,
    select_aggregation_func, select_aggregation_window, select_encoder_flags,
};
use ritmo_types::{
    AggregationSpec, CalendarEncoder, EncoderFlags, EncoderSet, FinderConfig, ModelSpec,
    ParameterBundle, ValueEncoder,
};

/// Number of buckets the observed value range is divided into for the value
/// encoder's resolution.
const VALUE_ENCODER_BUCKETS: f64 = 130.0;

/// Smallest permitted value-encoder resolution.
const MIN_VALUE_RESOLUTION: f64 = 0.001;

/// Time-of-day encoder shape: 21 active bits over a 9.49 hour radius.
const TIME_OF_DAY_ENCODER: CalendarEncoder = CalendarEncoder {
    width: 21,
    radius: 9.49,
};

/// Day-of-week encoder shape, kept alongside the product-disabled weekly
/// flag so enabling it stays a one-constant change.
const DAY_OF_WEEK_ENCODER: CalendarEncoder = CalendarEncoder {
    width: 21,
    radius: 1.0,
};

/// Parameter finder configured for a deployment.
///
/// Build one with [`Ritmo::builder`] and reuse it across series; it holds
/// only validated configuration.
pub struct Ritmo {
    cfg: FinderConfig,
}

/// Builder for constructing a [`Ritmo`] finder with custom configuration.
pub struct RitmoBuilder {
    cfg: FinderConfig,
}

impl Default for RitmoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RitmoBuilder {
    /// Create a builder with the documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: FinderConfig::default(),
        }
    }

    /// Relative threshold for the aggregation-window search (default 0.2).
    ///
    /// Lower values preserve fainter periodic structure and pick smaller
    /// windows; higher values aggregate more aggressively.
    #[must_use]
    pub const fn peak_threshold(mut self, v: f64) -> Self {
        self.cfg.peak_threshold = v;
        self
    }

    /// Number of wavelet widths probed by the analyzer (default 50).
    #[must_use]
    pub const fn scale_count(mut self, v: usize) -> Self {
        self.cfg.scale_count = v;
        self
    }

    /// Width-to-duration multiplier for reported time scales (default 4).
    #[must_use]
    pub const fn scale_multiplier(mut self, v: f64) -> Self {
        self.cfg.scale_multiplier = v;
        self
    }

    /// Volume guardrail: aggregation never reduces the series below this
    /// many rows, and shorter series skip aggregation (default 1000).
    #[must_use]
    pub const fn min_rows_after_aggregation(mut self, v: usize) -> Self {
        self.cfg.min_rows_after_aggregation = v;
        self
    }

    /// Cap on analyzed samples; only the most recent ones count
    /// (default 20_000).
    #[must_use]
    pub const fn max_analysis_rows(mut self, v: usize) -> Self {
        self.cfg.max_analysis_rows = v;
        self
    }

    /// Reference period for daily periodicity detection (default 24h).
    #[must_use]
    pub const fn daily_period(mut self, v: Duration) -> Self {
        self.cfg.daily_period = v;
        self
    }

    /// Reference period for weekly periodicity detection (default 7 days).
    #[must_use]
    pub const fn weekly_period(mut self, v: Duration) -> Self {
        self.cfg.weekly_period = v;
        self
    }

    /// Validate the configuration and build the finder.
    ///
    /// # Errors
    /// Returns `Err(RitmoError::InvalidConfig)` when a value is outside its
    /// documented range: a threshold outside `(0, 1]`, fewer than 2 scales,
    /// a non-positive multiplier, a zero row guardrail or analysis cap, or
    /// a zero reference period.
    pub fn build(self) -> Result<Ritmo, RitmoError> {
        let c = &self.cfg;
        if !c.peak_threshold.is_finite() || c.peak_threshold <= 0.0 || c.peak_threshold > 1.0 {
            return Err(RitmoError::invalid_config(format!(
                "peak_threshold must lie in (0, 1], got {}",
                c.peak_threshold
            )));
        }
        if c.scale_count < 2 {
            return Err(RitmoError::invalid_config(format!(
                "scale_count must be at least 2, got {}",
                c.scale_count
            )));
        }
        if !c.scale_multiplier.is_finite() || c.scale_multiplier <= 0.0 {
            return Err(RitmoError::invalid_config(format!(
                "scale_multiplier must be positive and finite, got {}",
                c.scale_multiplier
            )));
        }
        if c.min_rows_after_aggregation == 0 {
            return Err(RitmoError::invalid_config(
                "min_rows_after_aggregation must be positive",
            ));
        }
        if c.max_analysis_rows < 2 {
            return Err(RitmoError::invalid_config(format!(
                "max_analysis_rows must be at least 2, got {}",
                c.max_analysis_rows
            )));
        }
        if c.daily_period.is_zero() || c.weekly_period.is_zero() {
            return Err(RitmoError::invalid_config(
                "reference periods must be positive",
            ));
        }
        Ok(Ritmo { cfg: self.cfg })
    }
}

impl Ritmo {
    /// Start building a finder with custom configuration.
    #[must_use]
    pub fn builder() -> RitmoBuilder {
        RitmoBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &FinderConfig {
        &self.cfg
    }

    /// Infer a complete parameter bundle from a raw series.
    ///
    /// The input may arrive unordered; it is sorted internally. Duplicate
    /// timestamps and non-finite values are rejected, and only the most
    /// recent [`FinderConfig::max_analysis_rows`] samples are analyzed.
    ///
    /// Pipeline order: native-interval estimate, uniform resample,
    /// periodicity profile, reducer selection, window selection, encoder
    /// selection, bundle assembly. The first stage failure propagates
    /// unchanged; there is no partial recovery.
    ///
    /// # Errors
    /// - `RitmoError::InsufficientData` — fewer than 2 samples, or too few
    ///   points for periodicity analysis.
    /// - `RitmoError::MalformedSeries` — duplicate timestamps or non-finite
    ///   values.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip_all, fields(samples = samples.len()))
    )]
    pub fn find_parameters(&self, samples: &[Sample]) -> Result<ParameterBundle, RitmoError> {
        let series = normalize_series(samples, self.cfg.max_analysis_rows)?;
        let num_data_pts = series.len();

        let interval = median_sampling_interval(&series)?;
        let resampled = resample_to_uniform(&series, interval)?;
        let values: Vec<f64> = resampled.iter().map(|s| s.value).collect();

        let profile = periodicity_profile(
            &values,
            interval,
            self.cfg.scale_count,
            self.cfg.scale_multiplier,
        )?;

        let func = select_aggregation_func(&values);
        let window = select_aggregation_window(
            &profile,
            self.cfg.peak_threshold,
            interval,
            num_data_pts,
            self.cfg.min_rows_after_aggregation,
        );
        let flags = select_encoder_flags(
            &profile,
            duration_ms(self.cfg.daily_period),
            duration_ms(self.cfg.weekly_period),
        );

        #[cfg(feature = "tracing")]
        tracing::debug!(
            interval_ms = interval.num_milliseconds(),
            window_ms = window.num_milliseconds(),
            func = ?func,
            time_of_day = flags.use_time_of_day,
            "parameter inference complete"
        );

        Ok(ParameterBundle {
            agg_info: AggregationSpec {
                window: delta_to_duration(window),
                func,
            },
            model_info: ModelSpec {
                encoders: encoder_set(&values, flags),
            },
        })
    }
}

/// Infer parameters for a raw series with the default configuration.
///
/// # Errors
/// See [`Ritmo::find_parameters`].
pub fn find_parameters(samples: &[Sample]) -> Result<ParameterBundle, RitmoError> {
    // The defaults always validate.
    Ritmo::builder().build()?.find_parameters(samples)
}

/// Sort the input, reject duplicates and non-finite values, and cap the
/// series to the most recent `max_rows` samples.
fn normalize_series(samples: &[Sample], max_rows: usize) -> Result<Vec<Sample>, RitmoError> {
    let mut series = samples.to_vec();
    series.sort_by_key(|s| s.ts);
    for pair in series.windows(2) {
        if pair[1].ts == pair[0].ts {
            return Err(RitmoError::malformed_series(format!(
                "duplicate timestamp {}",
                pair[1].ts
            )));
        }
    }
    for s in &series {
        if !s.value.is_finite() {
            return Err(RitmoError::malformed_series(format!(
                "non-finite value at {}",
                s.ts
            )));
        }
    }
    if series.len() > max_rows {
        // Recent data reflects the stream's current cadence best.
        series.drain(..series.len() - max_rows);
    }
    Ok(series)
}

fn encoder_set(values: &[f64], flags: EncoderFlags) -> EncoderSet {
    EncoderSet {
        value: ValueEncoder {
            resolution: value_resolution(values),
        },
        time_of_day: flags.use_time_of_day.then_some(TIME_OF_DAY_ENCODER),
        day_of_week: flags.use_day_of_week.then_some(DAY_OF_WEEK_ENCODER),
    }
}

/// Resolution covering the observed range in `VALUE_ENCODER_BUCKETS`
/// buckets, floored at `MIN_VALUE_RESOLUTION`.
fn value_resolution(values: &[f64]) -> f64 {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 0.0 };
    (range / VALUE_ENCODER_BUCKETS).max(MIN_VALUE_RESOLUTION)
}

fn duration_ms(d: Duration) -> f64 {
    d.as_millis() as f64
}

fn delta_to_duration(d: TimeDelta) -> Duration {
    Duration::from_millis(u64::try_from(d.num_milliseconds()).unwrap_or(0))
}
