//! Constants for LeakGuard Core
//!
//! Centralized, documented constants used throughout the prediction engine.
//! Several of these encode empirical facts about the deployment's data
//! rather than general rules; those are called out explicitly so nobody
//! "fixes" them into something more generic.

// ===== SAFETY THRESHOLD =====

/// Gas concentration (ppm) at which a leak condition is declared.
///
/// Default crossing target for the ETA projection. Exposed through
/// `PredictorConfig` so deployments with different gas sensors can adjust it.
pub const LEAK_THRESHOLD_PPM: f32 = 1000.0;

// ===== CLEANING POLICY =====

/// Raw readings at or above this value (ppm) are dropped before fitting.
///
/// Catches an impulsive spike artifact where the sensor ADC saturates and
/// reports values around 2047 ppm. The bound is exclusive: `value >= ceiling`
/// is discarded regardless of position in the history.
pub const SPIKE_CEILING_PPM: f32 = 1800.0;

/// First arrival position of the known corrupted capture interval.
///
/// Positions 30..=60 of the original dataset hold a contiguous burst of
/// corrupted readings from a one-time wiring fault. The exclusion is by
/// arrival position, not by time, because the fault is specific to that
/// capture interval and not a general outlier pattern.
pub const EXCLUSION_START: usize = 30;

/// Number of consecutive positions dropped by the exclusion window (30..=60).
pub const EXCLUSION_LEN: usize = 31;

/// Width of the trailing moving-average applied to cleaned values.
///
/// The window shrinks at the start of the series (mean over the samples seen
/// so far) so every cleaned entry produces a training point.
pub const SMOOTHING_WINDOW_LEN: usize = 10;

// ===== FITTING =====

/// Minimum cleaned points required for a line fit.
pub const MIN_TRAINING_POINTS: usize = 2;

/// Slopes below this magnitude (ppm/hour) are treated as flat.
///
/// Guards the ETA division: a flat trend reports "unavailable" instead of a
/// near-infinite or NaN crossing time.
pub const SLOPE_EPSILON: f32 = 1e-6;

/// New observations required since the last fit attempt before refitting.
pub const DEFAULT_RETRAIN_EVERY: usize = 20;

// ===== TIME =====

/// Milliseconds per hour, for timestamp-to-hours conversion.
pub const MS_PER_HOUR: u64 = 3_600_000;
