//! Benchmarks for indicator implementations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use signal_core::traits::Indicator;
use signal_indicators::{Channel, Rsi, Sma};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn benchmark_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("SMA");

    for period in [5, 20, 200].iter() {
        let data = generate_test_data(1000);

        group.bench_with_input(BenchmarkId::new("trailing", period), &data, |b, data| {
            let sma = Sma::new(*period);
            b.iter(|| sma.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [100, 1000, 10000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("single_window", size), &data, |b, data| {
            let rsi = Rsi::default();
            b.iter(|| rsi.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_channel(c: &mut Criterion) {
    let data = generate_test_data(1000);

    c.bench_function("channel_55", |b| {
        b.iter(|| Channel::over(black_box(&data), black_box(55)))
    });
}

criterion_group!(benches, benchmark_sma, benchmark_rsi, benchmark_channel);
criterion_main!(benches);
