// ABOUTME: Criterion benchmarks for the analytics engine hot paths
// ABOUTME: Measures ACWR calculation, personality scoring, codex generation, and full analysis
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_possible_wrap)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strideprint::intelligence::{dna_codex, personality, AcwrCalculator, IntelligenceEngine};
use strideprint::RunEntry;

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap()
}

/// Deterministic synthetic run history spread over the trailing two years
fn generate_runs(count: usize, now: DateTime<Utc>) -> Vec<RunEntry> {
    (0..count)
        .map(|index| {
            let distance_km = 3.0 + ((index * 251) % 200) as f64 / 10.0;
            let pace = 290.0 + ((index * 137) % 120) as f64;
            let duration_seconds = (distance_km * pace) as u64;
            let days_ago = ((index * 3) % 730) as i64;
            RunEntry {
                id: format!("bench_run_{index}"),
                start_date: now - Duration::days(days_ago) - Duration::hours((index % 14) as i64),
                date_label: String::new(),
                distance_km,
                duration_seconds,
                pace_seconds_per_km: pace,
                name: format!("Benchmark Run {index}"),
                location: None,
                average_heart_rate: Some(130 + (index % 40) as u32),
                elevation_gain: Some(((index * 17) % 400) as f64),
            }
        })
        .collect()
}

fn bench_training_load(c: &mut Criterion) {
    let now = reference_now();
    let calculator = AcwrCalculator::new();
    let mut group = c.benchmark_group("training_load");
    for size in [50, 250, 1000] {
        let runs = generate_runs(size, now);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("calculate", size), &runs, |b, runs| {
            b.iter(|| calculator.calculate(black_box(runs), now));
        });
        group.bench_with_input(
            BenchmarkId::new("distance_to_ratio", size),
            &runs,
            |b, runs| {
                b.iter(|| calculator.distance_to_ratio(black_box(runs), now, 1.3));
            },
        );
    }
    group.finish();
}

fn bench_personality(c: &mut Criterion) {
    let now = reference_now();
    let runs = generate_runs(250, now);
    c.bench_function("personality_classify_250", |b| {
        b.iter(|| personality::classify(black_box(&runs), now));
    });
}

fn bench_codex_generation(c: &mut Criterion) {
    c.bench_function("dna_codex_generate", |b| {
        b.iter(dna_codex::generate_codex);
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let now = reference_now();
    let engine = IntelligenceEngine::new();
    let mut group = c.benchmark_group("full_analysis");
    for size in [50, 500] {
        let runs = generate_runs(size, now);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &runs, |b, runs| {
            b.iter(|| engine.analyze(black_box(runs), 2500.0, now));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_training_load,
    bench_personality,
    bench_codex_generation,
    bench_full_analysis
);
criterion_main!(benches);
