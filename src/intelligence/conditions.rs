// ABOUTME: Best-conditions analysis - best weekday, hour-of-day, and distance band
// ABOUTME: Partitions runs and ranks partitions by average pace, ties broken by count
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Conditions analysis.
//!
//! Partitions runs by day-of-week, hour-of-day, and distance band (the run's
//! start timestamp is provider-local, normalized upstream). The best
//! partition has the lowest average pace; ties go to the partition with more
//! runs, then to the lexicographically first label so repeated calls agree.

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strideprint_core::formatters::format_pace;
use strideprint_core::models::RunEntry;

use super::distribution::band_label;

/// Best partition of one conditions dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionSlot {
    /// Partition label: weekday name, `"07:00"`, or a distance band
    pub label: String,
    /// Average pace across the partition (seconds per km)
    pub avg_pace_seconds_per_km: f64,
    /// Formatted average pace, e.g. `"5:12"`
    pub avg_pace_formatted: String,
    /// Number of runs in the partition
    pub run_count: usize,
}

/// Best day, hour, and distance band; `None` per dimension without data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionsAnalysis {
    /// Weekday with the lowest average pace
    pub best_day: Option<ConditionSlot>,
    /// Start hour with the lowest average pace
    pub best_hour: Option<ConditionSlot>,
    /// Distance band with the lowest average pace ("sweet spot")
    pub sweet_spot_distance: Option<ConditionSlot>,
}

fn best_partition<F: Fn(&RunEntry) -> String>(
    runs: &[RunEntry],
    key: F,
) -> Option<ConditionSlot> {
    let mut partitions: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for run in runs {
        let pace = run.pace();
        if pace <= 0.0 {
            continue;
        }
        let entry = partitions.entry(key(run)).or_insert((0.0, 0));
        entry.0 += pace;
        entry.1 += 1;
    }

    partitions
        .into_iter()
        .map(|(label, (pace_sum, count))| ConditionSlot {
            label,
            avg_pace_seconds_per_km: pace_sum / count as f64,
            avg_pace_formatted: format_pace(pace_sum / count as f64),
            run_count: count,
        })
        .min_by(|a, b| {
            a.avg_pace_seconds_per_km
                .total_cmp(&b.avg_pace_seconds_per_km)
                .then_with(|| b.run_count.cmp(&a.run_count))
                .then_with(|| a.label.cmp(&b.label))
        })
}

/// Compute the best day, hour, and distance band by average pace.
#[must_use]
pub fn conditions(runs: &[RunEntry]) -> ConditionsAnalysis {
    ConditionsAnalysis {
        best_day: best_partition(runs, |run| run.start_date.weekday().to_string()),
        best_hour: best_partition(runs, |run| format!("{:02}:00", run.start_date.hour())),
        sweet_spot_distance: best_partition(runs, |run| band_label(run.distance_km).to_owned()),
    }
}
