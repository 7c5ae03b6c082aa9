//! Criterion benchmarks for the analytics kernel.
//!
//! Synthetic demand is drawn from a seeded linear model with normal noise so
//! runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use retail_analytics::{
    correlation, estimate_elasticity, smart_round, Align, OptimiserConfig, RetailOptimiser,
};

/// Prices uniform in [1, 20) with units `200 − 8·price + N(0, 5)`.
fn generate_demand(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 5.0).expect("valid normal parameters");

    let prices: Vec<f64> = (0..n).map(|_| rng.gen_range(1.0..20.0)).collect();
    let units: Vec<f64> = prices
        .iter()
        .map(|&p| (200.0 - 8.0 * p + noise.sample(&mut rng)).max(0.0))
        .collect();
    (prices, units)
}

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    for size in [100, 1000, 10000] {
        let (prices, units) = generate_demand(size, 7);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(&prices, &units),
            |b, (prices, units)| {
                b.iter(|| correlation(black_box(prices), black_box(units)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_elasticity(c: &mut Criterion) {
    let mut group = c.benchmark_group("elasticity");

    for size in [100, 1000, 10000] {
        let (prices, units) = generate_demand(size, 11);
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(&prices, &units),
            |b, (prices, units)| {
                b.iter(|| estimate_elasticity(black_box(prices), black_box(units), None).unwrap());
            },
        );
    }

    group.finish();
}

/// Grid search cost grows with both item count and price level.
fn bench_optimiser(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimiser");
    let optimiser = RetailOptimiser::new(OptimiserConfig::default());

    for items in [10, 100, 1000] {
        let (prices, units) = generate_demand(items, 13);
        let elasticity = vec![-1.2; items];
        group.bench_with_input(
            BenchmarkId::from_parameter(items),
            &(&prices, &units, &elasticity),
            |b, (prices, units, elasticity)| {
                b.iter(|| {
                    optimiser
                        .optimise(black_box(prices), black_box(units), black_box(elasticity))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("smart_round");
    let (prices, _) = generate_demand(10000, 17);

    for template in ["*.**", "*.95", "*.*9"] {
        group.bench_with_input(BenchmarkId::from_parameter(template), &prices, |b, prices| {
            b.iter(|| smart_round(black_box(prices), template, Align::Fair).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_correlation,
    bench_elasticity,
    bench_optimiser,
    bench_rounding
);
criterion_main!(benches);
