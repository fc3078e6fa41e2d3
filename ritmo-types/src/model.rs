//! Model-facing encoder configuration emitted by the parameter finder.

use serde::{Deserialize, Serialize};

use crate::AggregationSpec;

/// Calendar-periodicity signals strong enough to justify dedicated encoder
/// features in the downstream model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncoderFlags {
    /// Enable a time-of-day encoder (daily periodicity detected).
    pub use_time_of_day: bool,
    /// Enable a day-of-week encoder. Permanently disabled in this
    /// deployment; see the selector's product switch.
    pub use_day_of_week: bool,
}

/// Scalar encoder for the measured value itself. Always present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueEncoder {
    /// Smallest difference between two values the encoder distinguishes.
    pub resolution: f64,
}

/// Periodic calendar encoder (time-of-day or day-of-week).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarEncoder {
    /// Number of active bits per encoded bucket.
    pub width: u32,
    /// Bucket radius in the encoder's natural unit: hours for time-of-day,
    /// days for day-of-week.
    pub radius: f64,
}

/// The encoder map consumed downstream.
///
/// Field names are stable so consumers can do presence checks without string
/// parsing; absent calendar encoders serialize as explicit `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncoderSet {
    /// Encoder for the measured value. Always present.
    pub value: ValueEncoder,
    /// Time-of-day encoder, present when daily periodicity was detected.
    #[serde(rename = "timeOfDay")]
    pub time_of_day: Option<CalendarEncoder>,
    /// Day-of-week encoder. `None` in this deployment.
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: Option<CalendarEncoder>,
}

/// Model-side parameters derived from the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Encoder configuration keyed by stable field names.
    pub encoders: EncoderSet,
}

/// Complete parameter bundle produced by one finder run.
///
/// Constructed once per input series and never mutated after return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBundle {
    /// Aggregation parameters for the ingest stage.
    #[serde(rename = "aggInfo")]
    pub agg_info: AggregationSpec,
    /// Model and encoder parameters for the downstream model.
    #[serde(rename = "modelInfo")]
    pub model_info: ModelSpec,
}
