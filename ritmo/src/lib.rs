//! Ritmo infers data-handling parameters for a time-series stream.
//!
//! Overview
//! - Estimates the native sampling interval of a raw `(timestamp, value)`
//!   series from the median of its adjacent deltas.
//! - Resamples the series onto a uniform grid and profiles its periodicity
//!   with a ricker continuous wavelet transform.
//! - Converts the profile into an aggregation window, an aggregation
//!   reducer, and calendar encoder flags, bounded by data-volume
//!   guardrails, and emits them as one [`ParameterBundle`].
//!
//! Key behaviors and trade-offs
//! - The pipeline is pure and synchronous: identical input and
//!   configuration always produce an identical bundle, so independent
//!   series can be processed concurrently without coordination.
//! - Aggregation never reduces a series below the configured minimum row
//!   count, and short series skip aggregation entirely rather than
//!   destroying what little data they have.
//! - The day-of-week encoder is product-disabled: weekly periodicity is
//!   detected and logged but never emitted. See
//!   [`WEEKLY_ENCODER_ENABLED`].
//!
//! Examples
//! Inferring parameters with the defaults:
//! ```rust,ignore
//! use ritmo::{find_parameters, Sample};
//!
//! let bundle = find_parameters(&samples)?;
//! println!("aggregate every {:?} via {:?}", bundle.agg_info.window, bundle.agg_info.func);
//! ```
//!
//! Tuning the finder per deployment:
//! ```rust,ignore
//! use ritmo::Ritmo;
//!
//! let finder = Ritmo::builder()
//!     .peak_threshold(0.25)
//!     .min_rows_after_aggregation(2000)
//!     .build()?;
//! let bundle = finder.find_parameters(&samples)?;
//! ```
//!
//! See `ritmo/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod finder;

pub use finder::{Ritmo, RitmoBuilder, find_parameters};

// Re-export core components and types for convenience
pub use ritmo_core::{
    PeriodicityProfile,
    RitmoError,
    Sample,
    WEEKLY_ENCODER_ENABLED,
    median_sampling_interval,
    periodicity_profile,
    resample_to_uniform,
    select_aggregation_func,
    select_aggregation_window,
    select_encoder_flags,
};
pub use ritmo_types::{
    AggregationFunc, AggregationSpec, CalendarEncoder, EncoderFlags, EncoderSet, FinderConfig,
    ModelSpec, ParameterBundle, ValueEncoder,
};
