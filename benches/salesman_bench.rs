//! Criterion benchmarks for the tour GA.
//!
//! Cities are generated from a fixed seed so every run measures the same
//! instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_salesman::city::CityRegistry;
use u_salesman::ga::operators::{order_crossover, swap_mutation};
use u_salesman::ga::{evolve, GaConfig, GaRunner, Population, Tour};
use u_salesman::random::create_rng;

// ===========================================================================
// Operators
// ===========================================================================

fn bench_order_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_crossover");

    for &n in &[10usize, 50, 200] {
        let registry = CityRegistry::random(n, &mut create_rng(1));
        let mut rng = create_rng(42);
        let p1 = Tour::random(&registry, &mut rng);
        let p2 = Tour::random(&registry, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p1, p2), |b, (p1, p2)| {
            b.iter(|| black_box(order_crossover(black_box(p1), black_box(p2), &mut rng)))
        });
    }
    group.finish();
}

fn bench_swap_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_mutation");

    for &n in &[10usize, 50, 200] {
        let registry = CityRegistry::random(n, &mut create_rng(1));
        let mut rng = create_rng(42);
        let mut tour = Tour::random(&registry, &mut rng);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                swap_mutation(&mut tour, 0.015, &mut rng);
                black_box(tour.length())
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Generation step and full run
// ===========================================================================

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");
    group.sample_size(20);

    for (cities, pop) in [(10usize, 50usize), (50, 50), (50, 200)] {
        let registry = CityRegistry::random(cities, &mut create_rng(1));
        let config = GaConfig::default().with_population_size(pop);
        let mut rng = create_rng(42);
        let population = Population::random(&registry, pop, &mut rng);
        group.bench_function(format!("c{}_p{}", cities, pop), |b| {
            b.iter(|| black_box(evolve(black_box(&population), &config, &mut rng)))
        });
    }
    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(10);

    for (cities, gen) in [(10usize, 100usize), (30, 100), (30, 500)] {
        let registry = CityRegistry::random(cities, &mut create_rng(1));
        let config = GaConfig {
            max_generations: gen,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("c{}_g{}", cities, gen), cities),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(&registry), black_box(config));
                    black_box(result.map(|r| r.best_length))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_order_crossover,
    bench_swap_mutation,
    bench_evolve,
    bench_run
);
criterion_main!(benches);
