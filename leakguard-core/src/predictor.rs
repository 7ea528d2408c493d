//! Online Leak Predictor
//!
//! ## Overview
//!
//! The predictor owns the model state and ties the pipeline together:
//! it decides when enough new observations justify a refit, runs cleaning
//! and the line fit, and answers the two projection queries collaborators
//! care about (hours until the leak threshold, expected value at a given
//! instant).
//!
//! ## Lifecycle
//!
//! One predictor per sensor stream, created once per process. The ingestion
//! layer calls [`Predictor::retrain`] after persisting each event, handing
//! over the complete arrival-ordered history; the presentation layer later
//! calls the projection queries. Only `retrain` mutates, the queries take
//! `&self` and are idempotent. There is no model persistence across
//! restarts: the first twenty rows after boot re-establish the fit.
//!
//! ## "Unavailable" is not an error
//!
//! Both queries return `Option<f32>`. `None` is the normal state before the
//! first successful fit and for a flat trend, not a failure path. Callers
//! must render it as "no prediction yet", never escalate it.
//!
//! ## Concurrency
//!
//! No locks, no I/O, no allocation. Hosts embedding the predictor in a
//! multi-threaded server wrap it in their own mutex, since `retrain`
//! mutates state the queries read.

use crate::{
    cleaning::{clean, CleaningPolicy},
    constants::{DEFAULT_RETRAIN_EVERY, LEAK_THRESHOLD_PPM, MS_PER_HOUR, SLOPE_EPSILON},
    errors::ModelResult,
    observation::Observation,
    regression::{fit_line, LineFit},
    time::{hours_between, Timestamp},
};

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {{ let _ = core::format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let _ = core::format_args!($($arg)*); }};
}

/// Construction-time configuration for a [`Predictor`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictorConfig {
    /// New observations required since the last fit attempt to refit.
    /// Clamped to at least 1 at construction.
    pub retrain_every: usize,

    /// Concentration (ppm) at which a leak is declared
    pub threshold: f32,

    /// Filtering rules applied before each fit
    pub cleaning: CleaningPolicy,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            retrain_every: DEFAULT_RETRAIN_EVERY,
            threshold: LEAK_THRESHOLD_PPM,
            cleaning: CleaningPolicy::default(),
        }
    }
}

/// Successful fit: the line plus the epoch its hour axis is anchored to
#[derive(Debug, Clone, Copy, PartialEq)]
struct FittedModel {
    line: LineFit,
    epoch: Timestamp,
}

/// ETA broken into whole days and leftover whole hours
///
/// Mirrors how dashboards render the estimate ("2 day(s), 7 hour(s)") so
/// presentation layers don't each reimplement the floor arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EtaSplit {
    /// Whole days until the projected crossing
    pub days: u32,

    /// Whole hours beyond the last whole day
    pub hours: u32,
}

impl EtaSplit {
    /// Split fractional hours into whole days and leftover whole hours
    pub fn from_hours(eta_hours: f32) -> Self {
        let total = if eta_hours > 0.0 { eta_hours } else { 0.0 };
        Self {
            days: libm::floorf(total / 24.0) as u32,
            hours: libm::floorf(total) as u32 % 24,
        }
    }
}

/// Online trend model over a single sensor stream
///
/// See the [module docs](self) for the lifecycle. State is limited to the
/// configuration, the last successful fit (if any) and the bookkeeping
/// counter that gates retraining.
#[derive(Debug, Clone)]
pub struct Predictor {
    config: PredictorConfig,
    fit: Option<FittedModel>,

    /// History length at the most recent fit *attempt*, successful or not.
    /// Updating it on failed attempts too prevents a corrupt history from
    /// re-running the fit on every single call.
    rows_at_last_fit: usize,
}

impl Predictor {
    /// Create a predictor with the given configuration
    pub fn new(config: PredictorConfig) -> Self {
        let mut config = config;
        if config.retrain_every == 0 {
            config.retrain_every = 1;
        }

        Self {
            config,
            fit: None,
            rows_at_last_fit: 0,
        }
    }

    /// Whether at least one fit has succeeded
    pub fn is_trained(&self) -> bool {
        self.fit.is_some()
    }

    /// Parameters of the current fit, if trained
    pub fn line(&self) -> Option<LineFit> {
        self.fit.map(|model| model.line)
    }

    /// Active configuration
    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// History length at the most recent fit attempt
    pub fn rows_at_last_fit(&self) -> usize {
        self.rows_at_last_fit
    }

    /// Refit if enough new observations have arrived
    ///
    /// `history` is the complete arrival-ordered event log; the predictor
    /// keeps no copy of it. A no-op until `retrain_every` new rows have
    /// accumulated since the last attempt. Never fails loudly: a fit that
    /// cannot proceed (too little cleaned data, singular system) leaves the
    /// previous model untouched and is retried once enough new rows arrive.
    pub fn retrain(&mut self, history: &[Observation]) {
        let new_rows = history.len().saturating_sub(self.rows_at_last_fit);
        if new_rows < self.config.retrain_every {
            return;
        }

        // The attempt counts even if the fit below fails
        self.rows_at_last_fit = history.len();

        match self.try_fit(history) {
            Ok(model) => {
                log_info!(
                    "[predictor] retrained on {} rows: value = {:.3}h + {:.3}",
                    history.len(),
                    model.line.slope,
                    model.line.intercept,
                );
                self.fit = Some(model);
            }
            Err(err) => {
                log_debug!("[predictor] fit skipped on {} rows: {}", history.len(), err);
            }
        }
    }

    /// Clean and fit; model state is only touched by the caller on success
    fn try_fit(&self, history: &[Observation]) -> ModelResult<FittedModel> {
        let set = clean(history, &self.config.cleaning)?;
        let line = fit_line(set.points())?;

        Ok(FittedModel {
            line,
            epoch: set.epoch(),
        })
    }

    /// Hours from `reference` until the trend line reaches the threshold
    ///
    /// `None` until trained, and for a flat trend (the division by slope is
    /// guarded, see `SLOPE_EPSILON`). A crossing already behind `reference`
    /// clamps to `0.0`. A falling trend is deliberately *not* rejected: it
    /// projects a crossing in the past and therefore clamps to zero. Whether
    /// that should instead report "no leak predicted" is an open policy
    /// question with the system owner; the permissive behavior is kept for
    /// compatibility.
    pub fn eta_hours(&self, reference: Timestamp) -> Option<f32> {
        let model = self.fit?;
        let LineFit { slope, intercept } = model.line;

        if libm::fabsf(slope) < SLOPE_EPSILON {
            return None;
        }

        let elapsed = hours_between(model.epoch, reference);
        let at_threshold = (self.config.threshold - intercept) / slope;
        Some((at_threshold - elapsed).max(0.0))
    }

    /// ETA split into whole days and hours, for display
    pub fn eta_split(&self, reference: Timestamp) -> Option<EtaSplit> {
        self.eta_hours(reference).map(EtaSplit::from_hours)
    }

    /// Expected concentration (ppm) at an arbitrary instant
    ///
    /// Extrapolation beyond the observed range is the point of the model,
    /// so the queried instant is unrestricted (past instants included).
    /// `None` until trained.
    pub fn expected_value(&self, at: Timestamp) -> Option<f32> {
        let model = self.fit?;
        Some(model.line.value_at(hours_between(model.epoch, at)))
    }

    /// Expected concentration at the projected threshold crossing
    ///
    /// Composes [`eta_hours`](Self::eta_hours) and
    /// [`expected_value`](Self::expected_value) at `reference + eta`.
    /// `None` when the ETA is unavailable or already elapsed (clamped to
    /// zero), matching how the dashboard skips the second query.
    pub fn predicted_at_crossing(&self, reference: Timestamp) -> Option<f32> {
        let eta = self.eta_hours(reference)?;
        if eta <= 0.0 {
            return None;
        }

        let crossing = reference.saturating_add((eta as f64 * MS_PER_HOUR as f64) as u64);
        self.expected_value(crossing)
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(PredictorConfig::default())
    }
}
