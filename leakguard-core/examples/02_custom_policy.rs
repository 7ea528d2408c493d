//! Custom cleaning policy and threshold
//!
//! The default policy carries two deployment-specific rules: the exclusion
//! window over positions 30..=60 (a one-time corrupted capture interval)
//! and the 1800 ppm spike ceiling. A fresh deployment with clean data
//! disables the window, keeps the spike filter, and picks its own alarm
//! threshold.
//!
//! Run with: cargo run --example 02_custom_policy

use leakguard_core::{
    constants::MS_PER_HOUR, CleaningPolicy, ExclusionWindow, Observation, Predictor,
    PredictorConfig,
};

fn main() {
    let config = PredictorConfig {
        retrain_every: 10,
        threshold: 800.0, // stricter alarm level than the 1000 ppm default
        cleaning: CleaningPolicy {
            exclusion: ExclusionWindow::disabled(),
            ..CleaningPolicy::default()
        },
    };
    let mut predictor = Predictor::new(config);

    // Hourly readings rising 10 ppm/h, with one saturated spike the
    // value filter has to drop
    let mut history: Vec<Observation> = Vec::new();
    for k in 0..48u64 {
        let value = if k == 17 {
            2047.0 // ADC saturation artifact
        } else {
            250.0 + 10.0 * k as f32
        };
        history.push(Observation::new(value, k * MS_PER_HOUR));
        predictor.retrain(&history);
    }

    let now = 47 * MS_PER_HOUR;
    println!("Custom policy demo (threshold 800 ppm, exclusion window off)\n");

    match predictor.line() {
        Some(line) => println!(
            "Fitted trend: value = {:.1}h + {:.1}",
            line.slope, line.intercept
        ),
        None => println!("No fit yet"),
    }

    match predictor.eta_hours(now) {
        Some(eta) if eta > 0.0 => println!("Threshold crossing in {eta:.1} hours"),
        Some(_) => println!("Already at or past the threshold"),
        None => println!("Prediction unavailable"),
    }
}
