//! Raw sensor observations
//!
//! The predictor never stores these. The ingestion layer owns the event
//! store and hands over the complete arrival-ordered history on every call,
//! so an observation here is just the immutable (value, timestamp) pair the
//! cleaning stage consumes. Validation of values and timestamps is the
//! ingestion layer's responsibility; the core assumes well-typed input.

use crate::time::Timestamp;

/// Single timestamped gas-concentration reading (ppm)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    /// Sensor reading in parts-per-million
    pub value: f32,

    /// Capture time in milliseconds (see [`Timestamp`])
    pub timestamp: Timestamp,
}

impl Observation {
    /// Create an observation
    pub const fn new(value: f32, timestamp: Timestamp) -> Self {
        Self { value, timestamp }
    }
}
