//! ritmo-core
//!
//! Core types and analysis components shared across the ritmo ecosystem.
//!
//! - `types`: the sample/series model and its validity helpers.
//! - `analysis`: sampling-interval estimation, uniform-grid resampling,
//!   wavelet periodicity analysis, and aggregation/encoder selection.
//!
//! Every component is a pure, synchronous function of its inputs: no shared
//! mutable state and no I/O, so independent series can be analyzed in
//! parallel without coordination. The wavelet stage fans its per-scale work
//! out across threads internally, but its output is identical regardless of
//! execution order.
//!
#![warn(missing_docs)]

/// Analysis components of the parameter-inference pipeline.
pub mod analysis;
mod error;
pub mod types;

pub use analysis::aggregation::{select_aggregation_func, select_aggregation_window};
pub use analysis::encoders::{WEEKLY_ENCODER_ENABLED, select_encoder_flags};
pub use analysis::interval::median_sampling_interval;
pub use analysis::resample::resample_to_uniform;
pub use analysis::wavelet::{PeriodicityProfile, periodicity_profile};
pub use error::RitmoError;
pub use types::Sample;
