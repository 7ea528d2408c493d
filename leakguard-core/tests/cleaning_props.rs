//! Property tests for the cleaning stage and the predictor's contracts
//!
//! Random arrival-ordered histories (timestamps deliberately unsorted)
//! check the invariants the unit tests can only spot-check: cleaning is a
//! pure function of its inputs, the filters match their definitions, and
//! the projection queries never leak a NaN or negative ETA.

use proptest::prelude::*;

use leakguard_core::{
    clean, constants::SPIKE_CEILING_PPM, CleaningPolicy, Observation, Predictor, PredictorConfig,
    TrainingPoint,
};

fn arb_history(max_len: usize) -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec(
        (0u64..100_000_000_000, 0.0f32..3000.0)
            .prop_map(|(timestamp, value)| Observation::new(value, timestamp)),
        0..max_len,
    )
}

proptest! {
    #[test]
    fn cleaning_is_deterministic(history in arb_history(200)) {
        let policy = CleaningPolicy::default();

        let first = clean(&history, &policy).map(|set| set.points().collect::<Vec<_>>());
        let second = clean(&history, &policy).map(|set| set.points().collect::<Vec<_>>());

        // Bitwise-identical outcomes, success or failure
        prop_assert_eq!(first, second);
    }

    #[test]
    fn survivor_count_matches_filter_definition(history in arb_history(200)) {
        let policy = CleaningPolicy::default();

        let expected = history
            .iter()
            .enumerate()
            .filter(|(position, obs)| {
                !(30..=60).contains(position) && obs.value < SPIKE_CEILING_PPM
            })
            .count();

        match clean(&history, &policy) {
            Ok(set) => {
                prop_assert_eq!(set.len(), expected);
                prop_assert_eq!(set.points().count(), expected);
            }
            Err(_) => prop_assert!(expected < 2),
        }
    }

    #[test]
    fn smoothed_values_stay_below_ceiling(history in arb_history(200)) {
        // Every training value is a mean of raw values below the ceiling,
        // so it is below the ceiling itself
        if let Ok(set) = clean(&history, &CleaningPolicy::default()) {
            for TrainingPoint { value, hours } in set.points() {
                prop_assert!(value < SPIKE_CEILING_PPM);
                prop_assert!(hours.is_finite());
            }
        }
    }

    #[test]
    fn eta_is_finite_and_non_negative(history in arb_history(150), reference in 0u64..100_000_000_000) {
        let mut predictor = Predictor::new(PredictorConfig {
            retrain_every: 1,
            ..PredictorConfig::default()
        });
        predictor.retrain(&history);

        if let Some(eta) = predictor.eta_hours(reference) {
            prop_assert!(eta.is_finite());
            prop_assert!(eta >= 0.0);
        }

        if let Some(value) = predictor.expected_value(reference) {
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn retrain_never_panics_and_records_attempts(history in arb_history(150)) {
        let mut predictor = Predictor::new(PredictorConfig::default());
        predictor.retrain(&history);

        if history.len() >= predictor.config().retrain_every {
            prop_assert_eq!(predictor.rows_at_last_fit(), history.len());
        } else {
            prop_assert_eq!(predictor.rows_at_last_fit(), 0);
            prop_assert!(!predictor.is_trained());
        }
    }
}
