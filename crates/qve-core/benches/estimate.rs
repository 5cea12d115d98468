use criterion::{criterion_group, criterion_main, Criterion};
use qve_core::{AlgorithmSpec, Estimator};

fn bench_estimate(c: &mut Criterion) {
    let estimator = Estimator::new(qve_models::default_models());
    let specs = [
        AlgorithmSpec::symmetric(256),
        AlgorithmSpec::hash(256),
        AlgorithmSpec::ecdsa(256),
        AlgorithmSpec::rsa_bits(2048),
    ];
    c.bench_function("estimate_builtin_models", |b| {
        b.iter(|| {
            for spec in &specs {
                estimator.estimate(spec).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_estimate);
criterion_main!(benches);
