//! Basic leak forecasting
//!
//! Simulates the ingestion loop: a sensor reports one reading every five
//! minutes, the host appends it to its event log and hands the complete
//! history to the predictor, then asks for the two projections.
//!
//! Run with: cargo run --example 01_leak_forecast

use leakguard_core::{constants::MS_PER_HOUR, Observation, Predictor, PredictorConfig};

fn main() {
    let mut predictor = Predictor::new(PredictorConfig::default());
    let mut history: Vec<Observation> = Vec::new();

    println!("Leak forecast demo\n");
    println!("Simulating a slow leak: +6 ppm per hour from a 400 ppm baseline");

    // Five-minute sampling for three days
    let sample_interval_ms = MS_PER_HOUR / 12;
    for k in 0..(3 * 24 * 12) {
        let timestamp = k * sample_interval_ms;
        let hours = timestamp as f32 / MS_PER_HOUR as f32;

        // Rising trend plus a little deterministic measurement wobble
        let wobble = ((k % 5) as f32 - 2.0) * 3.0;
        let value = 400.0 + 6.0 * hours + wobble;

        history.push(Observation::new(value, timestamp));
        predictor.retrain(&history);
    }

    let now = history.last().map(|obs| obs.timestamp).unwrap_or(0);
    println!("Ingested {} readings over 3 days\n", history.len());

    match predictor.eta_hours(now) {
        Some(eta) => {
            let split = predictor.eta_split(now).expect("trained");
            println!("Estimated time to leak threshold: {eta:.1} hours");
            println!("  ({} day(s), {} hour(s))", split.days, split.hours);

            if let Some(level) = predictor.predicted_at_crossing(now) {
                println!("Predicted level at crossing: {level:.0} ppm");
            }
        }
        None => println!("Prediction unavailable (not enough data or flat trend)"),
    }

    if let Some(tomorrow) = predictor.expected_value(now + 24 * MS_PER_HOUR) {
        println!("Expected level this time tomorrow: {tomorrow:.0} ppm");
    }
}
