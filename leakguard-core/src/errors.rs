//! Error types for the fit pipeline
//!
//! Both variants describe expected, frequently-hit states rather than
//! faults. "Not enough data yet" is the normal condition of a freshly
//! deployed sensor, and a degenerate regression system simply means the
//! history cannot support a trend line yet. Neither escapes `retrain`:
//! the predictor logs them and keeps its previous fit.
//!
//! Errors are kept small and `Copy`, with `&'static str`-free inline data,
//! so they can be returned from the fit path without allocation.

use thiserror_no_std::Error;

/// Result type for cleaning and fitting operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Reasons a fit attempt can be skipped
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// Fewer cleaned points than the fit needs
    #[error("insufficient data: need {required} cleaned points, have {available}")]
    InsufficientData {
        /// Minimum number of cleaned points the fit requires
        required: usize,
        /// Cleaned points actually available
        available: usize,
    },

    /// Regression system is singular (all elapsed hours identical)
    #[error("degenerate fit: regression system is singular")]
    DegenerateFit,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ModelError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InsufficientData { required, available } =>
                defmt::write!(fmt, "Need {} cleaned points, have {}", required, available),
            Self::DegenerateFit =>
                defmt::write!(fmt, "Degenerate fit"),
        }
    }
}
