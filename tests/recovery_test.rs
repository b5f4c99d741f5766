// ABOUTME: Unit tests for rest gaps, streaks, and hard-run recovery measurement
// ABOUTME: Covers degenerate histories, the weekly-rhythm average, and streak counting
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use strideprint::intelligence::recovery::analyze_recovery;
use strideprint::RunEntry;

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 7, 0, 0).unwrap()
}

fn run_on(id: &str, start: DateTime<Utc>, distance_km: f64, duration_seconds: u64) -> RunEntry {
    RunEntry {
        id: id.to_owned(),
        start_date: start,
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
fn tiny_histories_degrade_to_insufficient_data() {
    let empty = analyze_recovery(&[]);
    assert!(empty.insufficient_data);
    assert!((empty.avg_rest_days).abs() < f64::EPSILON);

    let single = analyze_recovery(&[run_on("1", day(2026, 8, 1), 5.0, 1650)]);
    assert!(single.insufficient_data);
    assert_eq!(single.longest_streak_days, 0);
}

#[test]
fn monday_thursday_rhythm_averages_three_and_a_half_days() {
    // Mondays and Thursdays across four weeks: gaps alternate 3, 4
    let mut runs = Vec::new();
    let mut monday = day(2026, 8, 3);
    for week in 0..4 {
        runs.push(run_on(&format!("mon{week}"), monday, 5.0, 1650));
        runs.push(run_on(&format!("thu{week}"), monday + Duration::days(3), 5.0, 1650));
        monday += Duration::days(7);
    }
    let analysis = analyze_recovery(&runs);
    assert!(!analysis.insufficient_data);
    assert!((analysis.avg_rest_days - 3.5).abs() < 1e-9);
    assert_eq!(analysis.longest_gap_days, 4);
    assert_eq!(analysis.longest_streak_days, 1);
}

#[test]
fn consecutive_days_build_a_streak() {
    let start = day(2026, 8, 10);
    let mut runs: Vec<RunEntry> = (0..5)
        .map(|i| run_on(&format!("s{i}"), start + Duration::days(i), 5.0, 1650))
        .collect();
    // A break, then two more consecutive days
    runs.push(run_on("later1", start + Duration::days(9), 5.0, 1650));
    runs.push(run_on("later2", start + Duration::days(10), 5.0, 1650));

    let analysis = analyze_recovery(&runs);
    assert_eq!(analysis.longest_streak_days, 5);
    assert_eq!(analysis.longest_gap_days, 4);
}

#[test]
fn same_day_doubles_are_not_gaps_or_streaks() {
    let start = day(2026, 8, 10);
    let runs = vec![
        run_on("am", start, 5.0, 1650),
        run_on("pm", start + Duration::hours(8), 4.0, 1400),
        run_on("next", start + Duration::days(2), 5.0, 1650),
    ];
    let analysis = analyze_recovery(&runs);
    assert!((analysis.avg_rest_days - 2.0).abs() < 1e-9);
    assert_eq!(analysis.longest_streak_days, 1);
}

#[test]
fn top_quintile_distances_count_as_hard() {
    // Ten runs of 1..10 km, identical pace, every third day. The 80th
    // percentile distance is 8 km, so exactly the 8, 9, and 10 km runs are
    // hard; nobody beats the median pace strictly.
    let start = day(2026, 7, 1);
    let runs: Vec<RunEntry> = (0..10)
        .map(|i| {
            let km = f64::from(i + 1);
            run_on(
                &format!("d{i}"),
                start + Duration::days(i64::from(i) * 3),
                km,
                (km * 330.0) as u64,
            )
        })
        .collect();

    let analysis = analyze_recovery(&runs);
    assert_eq!(analysis.hard_run_count, 3);
    // The 8 and 9 km runs are each followed by a run three days later; the
    // 10 km run is last and contributes no gap
    assert!((analysis.avg_rest_after_hard - 3.0).abs() < 1e-9);
}

#[test]
fn beating_the_median_pace_counts_as_hard() {
    let start = day(2026, 7, 1);
    let mut runs: Vec<RunEntry> = (0..5)
        .map(|i| {
            let km = f64::from(i + 1);
            run_on(
                &format!("p{i}"),
                start + Duration::days(i64::from(i) * 2),
                km,
                (km * 330.0) as u64,
            )
        })
        .collect();
    // Make the 2 km run a fast interval session
    runs[1].duration_seconds = 500;
    runs[1].pace_seconds_per_km = 250.0;

    let analysis = analyze_recovery(&runs);
    // The interval run by pace, plus the 4 and 5 km runs by distance
    assert_eq!(analysis.hard_run_count, 3);
}

#[test]
fn input_order_does_not_matter() {
    let start = day(2026, 8, 1);
    let mut runs: Vec<RunEntry> = (0..6)
        .map(|i| run_on(&format!("r{i}"), start + Duration::days(i * 2), 5.0 + i as f64, 1650))
        .collect();
    let forward = analyze_recovery(&runs);
    runs.reverse();
    let reversed = analyze_recovery(&runs);
    assert!((forward.avg_rest_days - reversed.avg_rest_days).abs() < f64::EPSILON);
    assert_eq!(forward.longest_streak_days, reversed.longest_streak_days);
    assert_eq!(forward.hard_run_count, reversed.hard_run_count);
}
