//! Retrain throughput over growing histories
//!
//! The fit is a bounded synchronous computation on the ingestion path, so
//! its cost per call matters: every stored event triggers one `retrain`
//! call, and every twentieth one runs the full clean + fit pass.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use leakguard_core::{constants::MS_PER_HOUR, Observation, Predictor, PredictorConfig};

fn synthetic_history(len: usize) -> Vec<Observation> {
    (0..len)
        .map(|k| {
            // Rising trend with a deterministic wobble and periodic spikes
            // for the cleaning stage to chew on
            let wobble = ((k % 7) as f32 - 3.0) * 4.0;
            let value = if k % 97 == 0 {
                2047.0
            } else {
                300.0 + 0.05 * k as f32 + wobble
            };
            Observation::new(value, k as u64 * MS_PER_HOUR / 12)
        })
        .collect()
}

fn bench_retrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("retrain");

    for len in [100usize, 1_000, 10_000] {
        let history = synthetic_history(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &history, |b, history| {
            b.iter(|| {
                let mut predictor = Predictor::new(PredictorConfig {
                    retrain_every: 1,
                    ..PredictorConfig::default()
                });
                predictor.retrain(black_box(history));
                black_box(predictor.is_trained())
            });
        });
    }

    group.finish();
}

fn bench_gated_noop(c: &mut Criterion) {
    // The common case: not enough new rows, retrain returns immediately
    let history = synthetic_history(1_000);
    let mut predictor = Predictor::new(PredictorConfig::default());
    predictor.retrain(&history);

    c.bench_function("retrain_gated_noop", |b| {
        b.iter(|| predictor.retrain(black_box(&history)));
    });
}

criterion_group!(benches, bench_retrain, bench_gated_noop);
criterion_main!(benches);
