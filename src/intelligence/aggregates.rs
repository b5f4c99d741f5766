// ABOUTME: Time-binned volume aggregation - weekly/monthly bins, pace trend, year comparison
// ABOUTME: ISO-8601 Monday-start weeks, locale-independent labels, oldest-first ordering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Statistical volume aggregators.
//!
//! Weekly and monthly bins feed the dashboard sparklines; the per-week pace
//! trend carries a direction classification; the year comparison plots the
//! same month-of-year across years as cumulative distance curves.
//!
//! All week binning is ISO-8601 (Monday-start) via `iso_week`, never the
//! ambient locale.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strideprint_core::models::RunEntry;

/// One time bin of running volume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeBin {
    /// Bin label: `"2026-W35"` for weeks, `"2026-08"` for months
    pub label: String,
    /// Total distance in the bin (km)
    pub total_km: f64,
    /// Number of runs in the bin
    pub run_count: usize,
}

/// Direction of a metric over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Metric is getting better (for pace: getting faster)
    Improving,
    /// Metric is holding steady within the stability band
    Stable,
    /// Metric is getting worse (for pace: getting slower)
    Declining,
}

/// One point of the weekly pace trend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceTrendPoint {
    /// ISO week label, e.g. `"2026-W35"`
    pub label: String,
    /// Distance-weighted average pace for the week (seconds per km)
    pub avg_pace_seconds_per_km: f64,
    /// Number of runs in the week
    pub run_count: usize,
}

/// Weekly pace trend with an overall direction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceTrend {
    /// Oldest-first weekly pace points
    pub points: Vec<PaceTrendPoint>,
    /// First-half vs second-half direction, `Stable` within a 2% band
    pub direction: TrendDirection,
}

/// Cumulative distance curve for one calendar year
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearComparison {
    /// Calendar year
    pub year: i32,
    /// Distance per month, January first (km)
    pub monthly_km: Vec<f64>,
    /// Running cumulative distance per month (km)
    pub cumulative_km: Vec<f64>,
    /// Total distance for the year (km)
    pub total_km: f64,
}

/// Relative pace change below which a trend counts as stable
const PACE_STABILITY_BAND: f64 = 0.02;

/// ISO week label for a run: `"2026-W35"`
fn week_label(run: &RunEntry) -> String {
    let week = run.start_date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Calendar month label for a run: `"2026-08"`
fn month_label(run: &RunEntry) -> String {
    format!("{}-{:02}", run.start_date.year(), run.start_date.month())
}

fn bin_by<F: Fn(&RunEntry) -> String>(runs: &[RunEntry], key: F) -> Vec<VolumeBin> {
    // BTreeMap keeps bins ordered oldest-first: both label formats sort
    // lexicographically in chronological order
    let mut bins: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for run in runs {
        let entry = bins.entry(key(run)).or_insert((0.0, 0));
        entry.0 += run.distance_km;
        entry.1 += 1;
    }

    bins.into_iter()
        .map(|(label, (total_km, run_count))| VolumeBin {
            label,
            total_km,
            run_count,
        })
        .collect()
}

/// Bin runs by ISO week (Monday-start), ordered oldest-first.
#[must_use]
pub fn weekly_volume(runs: &[RunEntry]) -> Vec<VolumeBin> {
    bin_by(runs, week_label)
}

/// Bin runs by calendar month, ordered oldest-first.
#[must_use]
pub fn monthly_volume(runs: &[RunEntry]) -> Vec<VolumeBin> {
    bin_by(runs, month_label)
}

/// Weekly distance-weighted pace series with an overall direction.
///
/// Pace per week is total seconds over total km, so short runs do not skew
/// the average. Direction compares the first half of the series against the
/// second half; lower pace is improving.
#[must_use]
pub fn pace_trend(runs: &[RunEntry]) -> PaceTrend {
    let mut weeks: BTreeMap<String, (f64, f64, usize)> = BTreeMap::new();
    for run in runs {
        if run.distance_km <= 0.0 {
            continue;
        }
        let entry = weeks.entry(week_label(run)).or_insert((0.0, 0.0, 0));
        entry.0 += run.duration_seconds as f64;
        entry.1 += run.distance_km;
        entry.2 += 1;
    }

    let points: Vec<PaceTrendPoint> = weeks
        .into_iter()
        .filter(|(_, (_, km, _))| *km > 0.0)
        .map(|(label, (seconds, km, run_count))| PaceTrendPoint {
            label,
            avg_pace_seconds_per_km: seconds / km,
            run_count,
        })
        .collect();

    let direction = pace_direction(&points);
    PaceTrend { points, direction }
}

fn pace_direction(points: &[PaceTrendPoint]) -> TrendDirection {
    if points.len() < 2 {
        return TrendDirection::Stable;
    }

    let half = points.len() / 2;
    let first: f64 = points[..half]
        .iter()
        .map(|p| p.avg_pace_seconds_per_km)
        .sum::<f64>()
        / half as f64;
    let second: f64 = points[half..]
        .iter()
        .map(|p| p.avg_pace_seconds_per_km)
        .sum::<f64>()
        / (points.len() - half) as f64;

    if first <= 0.0 || (second - first).abs() < first * PACE_STABILITY_BAND {
        TrendDirection::Stable
    } else if second < first {
        // Lower pace is faster
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    }
}

/// Per-year monthly and cumulative distance curves, ordered by year.
#[must_use]
pub fn year_comparison(runs: &[RunEntry]) -> Vec<YearComparison> {
    let mut years: BTreeMap<i32, [f64; 12]> = BTreeMap::new();
    for run in runs {
        let months = years.entry(run.start_date.year()).or_insert([0.0; 12]);
        months[run.start_date.month0() as usize] += run.distance_km;
    }

    years
        .into_iter()
        .map(|(year, monthly)| {
            let mut cumulative = Vec::with_capacity(12);
            let mut running = 0.0;
            for km in monthly {
                running += km;
                cumulative.push(running);
            }
            YearComparison {
                year,
                monthly_km: monthly.to_vec(),
                cumulative_km: cumulative,
                total_km: running,
            }
        })
        .collect()
}
