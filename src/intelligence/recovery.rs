// ABOUTME: Recovery analysis - rest gaps, streaks, and hard-run classification
// ABOUTME: Oldest-first gap iteration with graceful degradation for tiny histories
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Recovery analyzer.
//!
//! Iterates runs oldest-to-newest over distinct calendar days and measures
//! the gaps between them. A run is "hard" when its pace is strictly faster
//! than the personal median or its distance reaches the personal 80th
//! percentile. Histories of length 0 or 1 degrade to an all-zero result with
//! `insufficient_data` set; no division by zero, no empty-slice min/max.

use serde::{Deserialize, Serialize};
use strideprint_core::constants::recovery::HARD_DISTANCE_PERCENTILE;
use strideprint_core::models::RunEntry;

/// Rest and streak statistics for a run history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryAnalysis {
    /// Average rest gap between consecutive run days (days)
    pub avg_rest_days: f64,
    /// Average rest gap specifically following a hard run (days); 0.0 when
    /// no hard run has a following run
    pub avg_rest_after_hard: f64,
    /// Longest streak of consecutive days with at least one run
    pub longest_streak_days: u32,
    /// Longest observed rest gap (days)
    pub longest_gap_days: i64,
    /// Number of runs classified as hard
    pub hard_run_count: usize,
    /// True for histories too short to measure (fewer than two runs)
    pub insufficient_data: bool,
}

impl RecoveryAnalysis {
    /// Documented degradation for empty or single-run histories
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            avg_rest_days: 0.0,
            avg_rest_after_hard: 0.0,
            longest_streak_days: 0,
            longest_gap_days: 0,
            hard_run_count: 0,
            insufficient_data: true,
        }
    }
}

fn percentile_value(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() - 1) as f64 * fraction).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn median(sorted: &[f64]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Whether a run counts as hard relative to the runner's own distribution
fn is_hard(run: &RunEntry, median_pace: f64, hard_distance: f64) -> bool {
    (run.pace() > 0.0 && median_pace > 0.0 && run.pace() < median_pace)
        || (hard_distance > 0.0 && run.distance_km >= hard_distance)
}

/// Analyze rest gaps, streaks, and hard-run recovery from the run history.
///
/// Input order is not trusted; runs are re-sorted oldest-first internally.
#[must_use]
pub fn analyze_recovery(runs: &[RunEntry]) -> RecoveryAnalysis {
    if runs.len() < 2 {
        return RecoveryAnalysis::empty();
    }

    let mut ordered: Vec<&RunEntry> = runs.iter().collect();
    ordered.sort_by_key(|r| r.start_date);

    let mut paces: Vec<f64> = ordered.iter().map(|r| r.pace()).filter(|p| *p > 0.0).collect();
    paces.sort_by(f64::total_cmp);
    let median_pace = median(&paces);

    let mut distances: Vec<f64> = ordered.iter().map(|r| r.distance_km).collect();
    distances.sort_by(f64::total_cmp);
    let hard_distance = percentile_value(&distances, HARD_DISTANCE_PERCENTILE);

    let hard_run_count = ordered
        .iter()
        .filter(|r| is_hard(r, median_pace, hard_distance))
        .count();

    let mut gap_sum = 0i64;
    let mut gap_count = 0usize;
    let mut hard_gap_sum = 0i64;
    let mut hard_gap_count = 0usize;
    let mut longest_gap = 0i64;
    let mut longest_streak = 1u32;
    let mut current_streak = 1u32;

    for pair in ordered.windows(2) {
        let gap = (pair[1].day() - pair[0].day()).num_days();

        // Same-day runs contribute neither a gap nor a streak extension
        if gap == 0 {
            continue;
        }

        gap_sum += gap;
        gap_count += 1;
        longest_gap = longest_gap.max(gap);

        if is_hard(pair[0], median_pace, hard_distance) {
            hard_gap_sum += gap;
            hard_gap_count += 1;
        }

        if gap == 1 {
            current_streak += 1;
            longest_streak = longest_streak.max(current_streak);
        } else {
            current_streak = 1;
        }
    }

    RecoveryAnalysis {
        avg_rest_days: if gap_count == 0 {
            0.0
        } else {
            gap_sum as f64 / gap_count as f64
        },
        avg_rest_after_hard: if hard_gap_count == 0 {
            0.0
        } else {
            hard_gap_sum as f64 / hard_gap_count as f64
        },
        longest_streak_days: longest_streak,
        longest_gap_days: longest_gap,
        hard_run_count,
        insufficient_data: false,
    }
}
