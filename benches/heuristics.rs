//! Benchmarks for the trainer heuristics.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use holdem_trainer::advisor::RangeTable;
use holdem_trainer::cards::{Card, Stage};
use holdem_trainer::estimator::Estimator;
use holdem_trainer::position::Position;

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = Estimator::default();
    let hole = [Card::from_str("Ah").unwrap(), Card::from_str("Kh").unwrap()];
    let board = [
        Card::from_str("Qh").unwrap(),
        Card::from_str("Jh").unwrap(),
        Card::from_str("9s").unwrap(),
        Card::from_str("4d").unwrap(),
        Card::from_str("2h").unwrap(),
    ];

    c.bench_function("estimate_preflop", |b| {
        b.iter(|| {
            estimator.estimate(
                black_box(&hole),
                Some(Position::BTN),
                black_box(&[]),
                Stage::Preflop,
            )
        })
    });

    c.bench_function("estimate_river", |b| {
        b.iter(|| {
            estimator.estimate(
                black_box(&hole),
                Some(Position::BTN),
                black_box(&board),
                Stage::River,
            )
        })
    });
}

fn range_lookup_benchmark(c: &mut Criterion) {
    let table = RangeTable::standard();
    let hole = [Card::from_str("Ah").unwrap(), Card::from_str("Kh").unwrap()];

    c.bench_function("is_in_range", |b| {
        b.iter(|| table.is_in_range(black_box(Position::CO), black_box(&hole)))
    });
}

criterion_group!(benches, estimate_benchmark, range_lookup_benchmark);
criterion_main!(benches);
