use thiserror::Error;

/// Unified error type for the ritmo workspace.
///
/// Every pipeline stage validates its own preconditions and fails with the
/// most specific kind; the orchestrating entry point propagates the first
/// failure without downgrading it. There is no retry logic anywhere: a
/// failure is a caller data-quality problem, not a transient condition.
#[derive(Debug, Error)]
pub enum RitmoError {
    /// Too few samples for the requested computation.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// A non-positive or non-finite interval was requested.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// Duplicate or out-of-order timestamps, or non-finite values.
    #[error("malformed series: {0}")]
    MalformedSeries(String),

    /// The signal carries no usable structure (all values identical), so the
    /// requested quantity is undefined.
    #[error("degenerate signal: {0}")]
    DegenerateSignal(String),

    /// A configuration value is outside its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RitmoError {
    /// Helper: build an `InsufficientData` error.
    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Self::InsufficientData(msg.into())
    }

    /// Helper: build an `InvalidInterval` error.
    pub fn invalid_interval(msg: impl Into<String>) -> Self {
        Self::InvalidInterval(msg.into())
    }

    /// Helper: build a `MalformedSeries` error.
    pub fn malformed_series(msg: impl Into<String>) -> Self {
        Self::MalformedSeries(msg.into())
    }

    /// Helper: build a `DegenerateSignal` error.
    pub fn degenerate_signal(msg: impl Into<String>) -> Self {
        Self::DegenerateSignal(msg.into())
    }

    /// Helper: build an `InvalidConfig` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
