//! Fee estimate benchmarks.
//!
//! Measures:
//! - Single derived-figure throughput
//! - Integer summary conversion
//! - Batch construction and totals

use {
    criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput},
    fee_estimate::{summarize_batch, Estimate, FeeConstants},
    fee_estimate_bench::helpers::make_simulation_batch,
    std::hint::black_box,
};

// ---------------------------------------------------------------------------
// Single estimate
// ---------------------------------------------------------------------------

fn bench_single_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("fee_estimate/single");
    group.throughput(Throughput::Elements(1));

    let transfer = Estimate::new(10_400.0, 0.0, 150, 1.0, None);
    let origination = Estimate::new(1_420_000.0, 4_096.0, 8_192, 250.0, Some(1_000.0));

    group.bench_function("transfer_minimal_fee", |b| {
        b.iter(|| black_box(&transfer).minimal_fee_mutez())
    });

    group.bench_function("origination_total_cost", |b| {
        b.iter(|| black_box(&origination).total_cost())
    });

    group.bench_function("origination_summary", |b| {
        b.iter(|| black_box(&origination).summary())
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("fee_estimate/batch");

    for &n in &[10usize, 100, 1_000] {
        let records = make_simulation_batch(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("summarize", n), &records, |b, records| {
            b.iter(|| {
                let estimates = Estimate::from_properties_batch(records, FeeConstants::default());
                summarize_batch(&estimates)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_estimate, bench_batch);
criterion_main!(benches);
