//! Benchmarks for indicator kernels.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tradecast_core::traits::Indicator;
use tradecast_indicators::{Macd, Rsi, Sma};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn benchmark_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("SMA");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("period_50", size), &data, |b, data| {
            let sma = Sma::new(50);
            b.iter(|| sma.compute(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("period_14", size), &data, |b, data| {
            let rsi = Rsi::new(14);
            b.iter(|| rsi.compute(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_macd(c: &mut Criterion) {
    let mut group = c.benchmark_group("MACD");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("12_26_9", size), &data, |b, data| {
            let macd = Macd::new();
            b.iter(|| macd.compute_lines(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_sma, benchmark_rsi, benchmark_macd);
criterion_main!(benches);
