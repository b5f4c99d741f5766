// ABOUTME: Unit tests for Riegel race-time prediction and base-run qualification
// ABOUTME: Covers exponent math, the extrapolation cap, and omission on weak bases
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use strideprint::intelligence::race_prediction::{race_predictions, riegel_time};
use strideprint::RunEntry;

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap()
}

fn run(id: &str, days_ago: i64, distance_km: f64, duration_seconds: u64, now: DateTime<Utc>) -> RunEntry {
    RunEntry {
        id: id.to_owned(),
        start_date: now - Duration::days(days_ago),
        date_label: String::new(),
        distance_km,
        duration_seconds,
        pace_seconds_per_km: if distance_km > 0.0 {
            duration_seconds as f64 / distance_km
        } else {
            0.0
        },
        name: format!("Run {id}"),
        location: None,
        average_heart_rate: None,
        elevation_gain: None,
    }
}

#[test]
fn riegel_at_equal_distance_returns_base_time() {
    let predicted = riegel_time(5.0, 1650.0, 5.0).unwrap();
    assert!((predicted - 1650.0).abs() < 1e-9);
}

#[test]
fn riegel_scales_with_the_fatigue_exponent() {
    // t2 = t1 * (d2/d1)^1.06
    let predicted = riegel_time(5.0, 1650.0, 10.0).unwrap();
    let expected = 1650.0 * 2.0_f64.powf(1.06);
    assert!((predicted - expected).abs() < 1e-6);
    assert!(predicted > 2.0 * 1650.0, "doubling distance must cost more than double time");
}

#[test]
fn riegel_rejects_non_positive_inputs() {
    assert!(riegel_time(0.0, 1650.0, 10.0).is_err());
    assert!(riegel_time(5.0, 0.0, 10.0).is_err());
    assert!(riegel_time(5.0, 1650.0, -1.0).is_err());
}

#[test]
fn five_km_base_predicts_three_targets() {
    let now = reference_now();
    // 5 km in 27:30
    let runs = vec![run("base", 3, 5.0, 1650, now)];
    let predictions = race_predictions(&runs, now);

    // Marathon is 8.4x the base distance, past the extrapolation cap
    assert_eq!(predictions.len(), 3);
    let five_k = &predictions[0];
    assert_eq!(five_k.distance_name, "5K");
    assert_eq!(five_k.predicted_time, "27:30");
    assert_eq!(five_k.base_run_id, "base");
    assert!(predictions.iter().all(|p| p.distance_km < 42.0));
}

#[test]
fn three_km_base_gets_only_short_targets() {
    let now = reference_now();
    let runs = vec![run("short", 5, 3.0, 900, now)];
    let predictions = race_predictions(&runs, now);
    let names: Vec<&str> = predictions.iter().map(|p| p.distance_name.as_str()).collect();
    assert_eq!(names, vec!["5K", "10K"]);
}

#[test]
fn fastest_qualifying_pace_wins_as_base() {
    let now = reference_now();
    let runs = vec![
        run("slow", 2, 10.0, 3600, now),
        run("fast", 20, 5.0, 1500, now),
        run("too-short", 1, 2.0, 500, now),
    ];
    let predictions = race_predictions(&runs, now);
    assert!(!predictions.is_empty());
    assert!(predictions.iter().all(|p| p.base_run_id == "fast"));
}

#[test]
fn stale_or_degenerate_history_yields_no_predictions() {
    let now = reference_now();
    // Outside the 90-day recency window
    let stale = vec![run("old", 120, 10.0, 3000, now)];
    assert!(race_predictions(&stale, now).is_empty());

    // Too short to qualify as a base
    let tiny = vec![run("tiny", 2, 2.5, 700, now)];
    assert!(race_predictions(&tiny, now).is_empty());

    // Zero duration
    let broken = vec![run("broken", 2, 8.0, 0, now)];
    assert!(race_predictions(&broken, now).is_empty());

    assert!(race_predictions(&[], now).is_empty());
}
