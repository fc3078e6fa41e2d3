//! Configuration for the parameter-inference pipeline.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunable knobs for the parameter finder.
///
/// Every field has a documented default; deployments override the ones they
/// care about through the finder builder, which validates ranges at build
/// time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Relative threshold for the aggregation-window search: the window is
    /// the smallest probed time scale whose power reaches this fraction of
    /// the profile maximum. Must lie in `(0, 1]`.
    pub peak_threshold: f64,
    /// Number of wavelet widths probed by the periodicity analyzer.
    pub scale_count: usize,
    /// Factor converting a ricker width into the reported time scale. The
    /// default matches the empirical width-to-period ratio of the ricker
    /// wavelet.
    pub scale_multiplier: f64,
    /// Aggregation may never reduce the series below this many rows; series
    /// shorter than this skip aggregation entirely.
    pub min_rows_after_aggregation: usize,
    /// The finder examines at most this many of the most recent samples, so
    /// unbounded histories keep the transform affordable.
    pub max_analysis_rows: usize,
    /// Reference period for daily periodicity detection.
    pub daily_period: Duration,
    /// Reference period for weekly periodicity detection.
    pub weekly_period: Duration,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            peak_threshold: 0.2,
            scale_count: 50,
            scale_multiplier: 4.0,
            min_rows_after_aggregation: 1000,
            max_analysis_rows: 20_000,
            daily_period: Duration::from_secs(86_400),
            weekly_period: Duration::from_secs(604_800),
        }
    }
}
