//! Aggregation parameters emitted by the parameter finder.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Reducer applied to the raw samples falling inside one aggregation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum AggregationFunc {
    /// Average the samples in the window; fits continuous magnitudes.
    #[default]
    Mean,
    /// Sum the samples in the window; fits indicator or count data, where
    /// averaging would wash out the quantity being measured.
    Sum,
}

/// How raw samples are combined into one reduced sample before reaching the
/// downstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationSpec {
    /// Span of one aggregation window. Never smaller than the native
    /// sampling interval of the series it was derived from, and never so
    /// large that fewer than the configured minimum of rows survive
    /// aggregation.
    #[serde(rename = "windowSize")]
    pub window: Duration,
    /// Reducer applied within each window.
    pub func: AggregationFunc,
}
