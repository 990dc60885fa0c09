//! Benchmarks for arithmetic operations

extern crate criterion;
extern crate fixdecimal;
extern crate oorandom;

use std::str::FromStr;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixdecimal::Decimal;

criterion_main!(arithmetic, transcendental);

criterion_group!(
    name = arithmetic;
    config = Criterion::default().sample_size(300);
    targets = bench_primary_ops,
);

criterion_group!(
    name = transcendental;
    config = Criterion::default()
                       .measurement_time(Duration::from_secs(7))
                       .sample_size(50);
    targets = bench_transcendentals,
);

/// Pseudo-random decimal operands with mixed magnitudes
fn make_operands(count: usize, seed: u64) -> Vec<Decimal> {
    let mut rng = oorandom::Rand64::new(seed.into());
    (0..count)
        .map(|_| {
            let whole = rng.rand_u64() % 1_000_000_000;
            let frac = rng.rand_u64() % 1_000_000;
            let repr = format!("{}.{:06}", whole, frac);
            Decimal::from_str(&repr).unwrap()
        })
        .collect()
}

fn bench_primary_ops(c: &mut Criterion) {
    let operands = make_operands(100, 0x5eed);
    let pairs: Vec<(&Decimal, &Decimal)> = operands
        .iter()
        .zip(operands.iter().rev())
        .collect();

    c.bench_function("addition", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(*x + *y);
            }
        })
    });

    c.bench_function("subtraction", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(*x - *y);
            }
        })
    });

    c.bench_function("multiplication", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(*x * *y);
            }
        })
    });

    c.bench_function("division", |b| {
        b.iter(|| {
            for (x, y) in &pairs {
                black_box(*x / *y);
            }
        })
    });
}

fn bench_transcendentals(c: &mut Criterion) {
    let two = Decimal::from(2);
    let x = Decimal::from_str("1.5").unwrap();

    c.bench_function("sqrt_2", |b| {
        b.iter(|| black_box(two.sqrt().unwrap()))
    });

    c.bench_function("exp_1_5", |b| {
        b.iter(|| black_box(x.exp()))
    });

    c.bench_function("sin_1_5", |b| {
        b.iter(|| black_box(x.sin()))
    });
}
