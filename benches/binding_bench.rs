//! Benchmarks for series extraction and chart configuration
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hospital_dashboard::*;

fn revenue_payload(count: usize) -> String {
    let points: Vec<RevenuePoint> = (0..count)
        .map(|i| RevenuePoint::new(format!("{:04}-{:02}", 2000 + i / 12, i % 12 + 1), i as f64 * 10.5))
        .collect();
    serde_json::to_string(&points).unwrap()
}

fn performance_payload(count: usize) -> String {
    let points: Vec<PerformancePoint> = (0..count)
        .map(|i| PerformancePoint::new(format!("Dr. {}", i), (i % 40) as u32))
        .collect();
    serde_json::to_string(&points).unwrap()
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for size in [12, 1000, 10000] {
        let payload = revenue_payload(size);
        let fields = FieldSelector::revenue();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("by_fields_{}", size), |b| {
            b.iter(|| extract_series(black_box(&payload), &fields).unwrap())
        });

        group.bench_function(format!("typed_{}", size), |b| {
            b.iter(|| {
                let records: Vec<RevenuePoint> = extract_records(black_box(&payload)).unwrap();
                Series::from_records(&records)
            })
        });
    }

    group.finish();
}

fn bench_configuration(c: &mut Criterion) {
    let mut group = c.benchmark_group("configuration");
    let styles = ChartStyles::default();

    for size in [10, 1000] {
        let payload = performance_payload(size);
        let series = extract_series(&payload, &FieldSelector::performance()).unwrap();

        group.bench_function(format!("comparison_chart_js_{}", size), |b| {
            b.iter(|| {
                let config =
                    ChartConfiguration::build(ChartIntent::Comparison, black_box(series.clone()), &styles);
                serde_json::to_string(&config.to_chart_js()).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_configuration);
criterion_main!(benches);
