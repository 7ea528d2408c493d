//! Core prediction engine for LeakGuard
//!
//! Maintains an online linear trend model over timestamped gas-concentration
//! readings (ppm) and answers two questions: how many hours remain until the
//! reading is expected to cross a safety threshold, and what reading to
//! expect at an arbitrary future instant.
//!
//! Key constraints:
//! - No heap allocation in the fit path (ring-buffer smoothing, running sums)
//! - No I/O, no locks - callers serialize access in multi-threaded hosts
//! - Deterministic: identical histories always produce identical fits
//!
//! ```no_run
//! use leakguard_core::{Observation, Predictor, PredictorConfig};
//!
//! let mut predictor = Predictor::new(PredictorConfig::default());
//!
//! // Ingestion layer hands over the full arrival-ordered history each time
//! let history = [
//!     Observation::new(412.0, 0),
//!     Observation::new(418.0, 600_000),
//!     // ...
//! ];
//! predictor.retrain(&history);
//!
//! // "Unavailable" is a normal state until enough data has accumulated
//! match predictor.eta_hours(600_000) {
//!     Some(eta) => { let _ = eta; }       // hours until the leak threshold
//!     None => {}                           // not trained yet, or flat trend
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cleaning;
pub mod constants;
pub mod errors;
pub mod observation;
pub mod predictor;
pub mod regression;
pub mod time;
pub mod window;

// Public API
pub use cleaning::{clean, CleaningPolicy, ExclusionWindow, TrainingPoint, TrainingSet};
pub use errors::{ModelError, ModelResult};
pub use observation::Observation;
pub use predictor::{EtaSplit, Predictor, PredictorConfig};
pub use regression::LineFit;
pub use time::Timestamp;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
