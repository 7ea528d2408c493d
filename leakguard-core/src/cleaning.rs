//! Cleaning & Resampling of Raw Observation Histories
//!
//! ## Overview
//!
//! Transforms a raw, arrival-ordered observation history into the training
//! set the line fit consumes. Three things happen, in order:
//!
//! 1. A fixed contiguous run of positions is excluded (a known corrupted
//!    capture interval in the deployment's data, see [`ExclusionWindow`]).
//! 2. Impulsive spikes are dropped by value, irrespective of position.
//! 3. Surviving values are smoothed with a trailing moving average and
//!    paired with their elapsed hours since the fit epoch.
//!
//! ## Determinism
//!
//! Cleaning is a pure function of (history, policy). There is no sorting,
//! no deduplication and no randomness: identical inputs always produce
//! identical training sets, which makes fits reproducible.
//!
//! ## Position vs. time
//!
//! Both the exclusion window and the smoothing order work on *arrival
//! position*, not on timestamps. Histories are not required to be
//! time-sorted, and the cleaning stage deliberately does not re-sort them;
//! an out-of-order timestamp simply yields a negative elapsed-hours input
//! to the fit.

use crate::{
    constants::{
        EXCLUSION_LEN, EXCLUSION_START, MIN_TRAINING_POINTS, SMOOTHING_WINDOW_LEN,
        SPIKE_CEILING_PPM,
    },
    errors::{ModelError, ModelResult},
    observation::Observation,
    time::{hours_between, Timestamp},
    window::SmoothingWindow,
};

/// Contiguous run of arrival positions excluded from training
///
/// This encodes a one-time incident, not a general outlier rule: a burst of
/// corrupted readings landed at known positions of the original dataset.
/// Keeping the rule named and configurable means it can be retired without
/// touching the smoothing or fitting logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExclusionWindow {
    /// First excluded arrival position
    pub start: usize,

    /// Number of consecutive positions excluded
    pub len: usize,
}

impl ExclusionWindow {
    /// Exclusion window over positions `start .. start + len`
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Window that excludes nothing
    pub const fn disabled() -> Self {
        Self { start: 0, len: 0 }
    }

    /// Check whether an arrival position falls inside the window
    pub const fn contains(&self, position: usize) -> bool {
        position >= self.start && position - self.start < self.len
    }
}

impl Default for ExclusionWindow {
    fn default() -> Self {
        Self::new(EXCLUSION_START, EXCLUSION_LEN)
    }
}

/// Filtering rules applied to raw history before fitting
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleaningPolicy {
    /// Position-based exclusion of the corrupted capture interval
    pub exclusion: ExclusionWindow,

    /// Raw values at or above this bound (ppm) are dropped
    pub spike_ceiling: f32,
}

impl Default for CleaningPolicy {
    fn default() -> Self {
        Self {
            exclusion: ExclusionWindow::default(),
            spike_ceiling: SPIKE_CEILING_PPM,
        }
    }
}

impl CleaningPolicy {
    /// Check whether an observation at the given position survives cleaning
    pub fn keeps(&self, position: usize, value: f32) -> bool {
        !self.exclusion.contains(position) && value < self.spike_ceiling
    }
}

/// Single (elapsed hours, smoothed value) training input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingPoint {
    /// Hours since the fit epoch (may be negative for out-of-order timestamps)
    pub hours: f32,

    /// Trailing-mean smoothed value (ppm)
    pub value: f32,
}

/// Cleaned view over an observation history
///
/// Borrows the history instead of materializing the training points: the
/// fit consumes them through [`TrainingSet::points`], which yields each
/// `(hours, value)` pair on the fly with a fixed-size smoothing window.
/// Two iterations over the same set see identical values.
#[derive(Debug)]
pub struct TrainingSet<'a> {
    history: &'a [Observation],
    policy: CleaningPolicy,
    epoch: Timestamp,
    len: usize,
}

impl<'a> TrainingSet<'a> {
    /// Hour-zero reference for the fit: timestamp of the first surviving
    /// observation, by arrival order (not the earliest timestamp)
    pub fn epoch(&self) -> Timestamp {
        self.epoch
    }

    /// Number of training points
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the set holds no points (never true for a set returned by
    /// [`clean`], which requires at least two)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate the training points in arrival order, smoothing as it goes
    pub fn points(&self) -> TrainingPoints<'a> {
        TrainingPoints {
            history: self.history.iter().enumerate(),
            policy: self.policy,
            epoch: self.epoch,
            window: SmoothingWindow::new(),
        }
    }
}

/// Iterator over the training points of a [`TrainingSet`]
#[derive(Clone)]
pub struct TrainingPoints<'a> {
    history: core::iter::Enumerate<core::slice::Iter<'a, Observation>>,
    policy: CleaningPolicy,
    epoch: Timestamp,
    window: SmoothingWindow<SMOOTHING_WINDOW_LEN>,
}

impl Iterator for TrainingPoints<'_> {
    type Item = TrainingPoint;

    fn next(&mut self) -> Option<Self::Item> {
        for (position, obs) in self.history.by_ref() {
            if !self.policy.keeps(position, obs.value) {
                continue;
            }

            return Some(TrainingPoint {
                hours: hours_between(self.epoch, obs.timestamp),
                value: self.window.push(obs.value),
            });
        }

        None
    }
}

/// Apply the cleaning policy to a raw history
///
/// Returns `InsufficientData` when fewer than two observations survive the
/// filters; the fit stage must not be invoked in that case. The returned
/// set records the fit epoch and the survivor count; the per-point work
/// happens lazily in [`TrainingSet::points`].
pub fn clean<'a>(
    history: &'a [Observation],
    policy: &CleaningPolicy,
) -> ModelResult<TrainingSet<'a>> {
    let mut survivors = 0usize;
    let mut epoch = None;

    for (position, obs) in history.iter().enumerate() {
        if !policy.keeps(position, obs.value) {
            continue;
        }

        if epoch.is_none() {
            epoch = Some(obs.timestamp);
        }
        survivors += 1;
    }

    let epoch = match epoch {
        Some(timestamp) => timestamp,
        None => {
            return Err(ModelError::InsufficientData {
                required: MIN_TRAINING_POINTS,
                available: 0,
            })
        }
    };

    if survivors < MIN_TRAINING_POINTS {
        return Err(ModelError::InsufficientData {
            required: MIN_TRAINING_POINTS,
            available: survivors,
        });
    }

    Ok(TrainingSet {
        history,
        policy: *policy,
        epoch,
        len: survivors,
    })
}
