// ABOUTME: Lifetime distance milestone progress and completion-date projection
// ABOUTME: Unachieved round-number goals only, ETA from the trailing accumulation rate
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Milestone tracker.
//!
//! For each round-number lifetime goal still ahead of the runner, reports
//! percent progress and a completion date extrapolated from the trailing
//! eight-week accumulation rate. Goals already exceeded are omitted; when
//! every goal is passed, the list is empty and consumers must handle that
//! explicitly.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strideprint_core::constants::milestones::{GOALS_KM, RATE_WINDOW_WEEKS};
use strideprint_core::models::RunEntry;

/// Progress toward one lifetime distance goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Goal distance in km
    pub goal_km: f64,
    /// Progress toward the goal, 0-100
    pub percent_complete: f64,
    /// Distance still to cover (km)
    pub remaining_km: f64,
    /// Projected completion date; `None` when the trailing rate is zero
    pub estimated_completion: Option<NaiveDate>,
    /// Projected weeks to completion at the current rate; `None` when the
    /// trailing rate is zero
    pub estimated_weeks: Option<f64>,
}

/// Weekly accumulation rate over the trailing window (km/week)
fn weekly_rate(runs: &[RunEntry], now: DateTime<Utc>) -> f64 {
    let window_start = now - Duration::weeks(RATE_WINDOW_WEEKS);
    let recent_km: f64 = runs
        .iter()
        .filter(|r| r.start_date > window_start && r.start_date <= now)
        .map(|r| r.distance_km)
        .sum();
    recent_km / RATE_WINDOW_WEEKS as f64
}

/// Milestone progress for every goal still ahead of `lifetime_km`.
#[must_use]
pub fn milestones(runs: &[RunEntry], lifetime_km: f64, now: DateTime<Utc>) -> Vec<Milestone> {
    let rate = weekly_rate(runs, now);

    GOALS_KM
        .into_iter()
        .filter(|goal| lifetime_km < *goal)
        .map(|goal_km| {
            let remaining_km = goal_km - lifetime_km;
            let estimated_weeks = if rate > 0.0 {
                Some(remaining_km / rate)
            } else {
                None
            };
            let estimated_completion = estimated_weeks.and_then(|weeks| {
                let days = (weeks * 7.0).ceil() as i64;
                now.date_naive().checked_add_signed(Duration::days(days))
            });
            Milestone {
                goal_km,
                percent_complete: (lifetime_km / goal_km * 100.0).clamp(0.0, 100.0),
                remaining_km,
                estimated_completion,
                estimated_weeks,
            }
        })
        .collect()
}
