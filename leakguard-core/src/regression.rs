//! Ordinary Least-Squares Line Fit
//!
//! ## Overview
//!
//! Fits `value ≈ slope · hours + intercept` over the cleaned training
//! points. The model is deliberately this small: a single linear trend is
//! all the projection queries need, and anything fancier would demand more
//! history than a freshly deployed sensor has.
//!
//! ## Numerics
//!
//! The fit uses the centered two-pass form: compute the means first, then
//! accumulate `Σ dx·dy / Σ dx²` over mean-centered deltas. Centering avoids
//! the catastrophic cancellation the raw-sums formula suffers when elapsed
//! hours grow large, and the accumulators are `f64` even though inputs and
//! parameters are `f32`.
//!
//! A singular system (all elapsed hours identical, so `Σ dx² = 0`) is
//! reported as [`ModelError::DegenerateFit`] rather than letting a NaN or
//! infinite slope escape into the model state.

use crate::{
    cleaning::TrainingPoint,
    constants::MIN_TRAINING_POINTS,
    errors::{ModelError, ModelResult},
};

/// Parameters of a fitted trend line: `value ≈ slope · hours + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineFit {
    /// Trend in ppm per hour
    pub slope: f32,

    /// Value (ppm) at hour zero of the fit epoch
    pub intercept: f32,
}

impl LineFit {
    /// Evaluate the line at the given elapsed hours
    pub fn value_at(&self, hours: f32) -> f32 {
        self.slope * hours + self.intercept
    }
}

/// Fit a least-squares line through the training points
///
/// The iterator is consumed twice (means, then centered sums), so it must
/// be `Clone`; [`TrainingPoints`](crate::cleaning::TrainingPoints) is.
pub fn fit_line<I>(points: I) -> ModelResult<LineFit>
where
    I: Iterator<Item = TrainingPoint> + Clone,
{
    // Pass 1: count and means
    let mut n = 0usize;
    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    for point in points.clone() {
        n += 1;
        sum_x += point.hours as f64;
        sum_y += point.value as f64;
    }

    if n < MIN_TRAINING_POINTS {
        return Err(ModelError::InsufficientData {
            required: MIN_TRAINING_POINTS,
            available: n,
        });
    }

    let x_mean = sum_x / n as f64;
    let y_mean = sum_y / n as f64;

    // Pass 2: centered sums
    let mut sxx = 0.0f64;
    let mut sxy = 0.0f64;
    for point in points {
        let dx = point.hours as f64 - x_mean;
        let dy = point.value as f64 - y_mean;
        sxx += dx * dx;
        sxy += dx * dy;
    }

    if sxx == 0.0 {
        return Err(ModelError::DegenerateFit);
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    Ok(LineFit {
        slope: slope as f32,
        intercept: intercept as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(pairs: &[(f32, f32)]) -> impl Iterator<Item = TrainingPoint> + Clone + '_ {
        pairs.iter().map(|&(hours, value)| TrainingPoint { hours, value })
    }

    #[test]
    fn exact_line_recovered() {
        // y = 3x + 7
        let data = [(0.0, 7.0), (1.0, 10.0), (2.0, 13.0), (3.0, 16.0)];
        let fit = fit_line(points(&data)).unwrap();
        assert!((fit.slope - 3.0).abs() < 1e-6);
        assert!((fit.intercept - 7.0).abs() < 1e-6);
    }

    #[test]
    fn two_points_define_the_line() {
        let data = [(0.0, 500.0), (10.0, 1500.0)];
        let fit = fit_line(points(&data)).unwrap();
        assert!((fit.slope - 100.0).abs() < 1e-3);
        assert!((fit.intercept - 500.0).abs() < 1e-3);
    }

    #[test]
    fn flat_data_fits_zero_slope() {
        // Constant values over distinct hours: valid fit, slope 0
        let data = [(0.0, 42.0), (1.0, 42.0), (2.0, 42.0)];
        let fit = fit_line(points(&data)).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 42.0);
    }

    #[test]
    fn identical_hours_are_degenerate() {
        let data = [(5.0, 10.0), (5.0, 20.0), (5.0, 30.0)];
        assert_eq!(fit_line(points(&data)), Err(ModelError::DegenerateFit));
    }

    #[test]
    fn too_few_points() {
        let data = [(0.0, 1.0)];
        assert_eq!(
            fit_line(points(&data)),
            Err(ModelError::InsufficientData {
                required: 2,
                available: 1
            })
        );
    }

    #[test]
    fn negative_hours_accepted() {
        // Out-of-order timestamps produce negative elapsed hours; the fit
        // does not care about input ordering
        let data = [(0.0, 10.0), (-2.0, 6.0), (3.0, 16.0)];
        let fit = fit_line(points(&data)).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-6);
        assert!((fit.intercept - 10.0).abs() < 1e-6);
    }

    #[test]
    fn value_at_extrapolates() {
        let fit = LineFit { slope: 2.0, intercept: 1.0 };
        assert_eq!(fit.value_at(0.0), 1.0);
        assert_eq!(fit.value_at(100.0), 201.0);
        assert_eq!(fit.value_at(-1.0), -1.0);
    }
}
