// ABOUTME: Same-day training recommendation from load zone, recovery, and calendar gap
// ABOUTME: Ordered verdict rules, closed-form safe/danger distances, what-if ACWR scenarios
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Today's-plan recommender.
//!
//! A single discrete decision for "today", driven by days since the last
//! run, the current training-load zone, and the recovery pattern. Verdict
//! selection is an ordered rule table with an explicit catch-all. The
//! what-if scenarios feed candidate distances through
//! [`AcwrCalculator::project_with_run`] so every projected ratio comes from
//! the exact windowed formula of the training-load model, never a duplicated
//! approximation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strideprint_core::constants::todays_plan::{
    COLD_START_SAFE_KM, EASY_PACE_FACTOR, SAFE_TARGET_MARGIN, SCENARIO_DISTANCE_FACTORS,
    SCENARIO_FALLBACK_KM, TEMPO_PACE_FACTOR,
};
use strideprint_core::constants::training_load::{OPTIMAL_CEILING, OVERREACHING_CEILING};
use strideprint_core::formatters::format_pace;
use strideprint_core::models::RunEntry;

use super::recovery::RecoveryAnalysis;
use super::training_load::{AcwrCalculator, LoadZone};

/// Headline verdict for today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanVerdict {
    /// Best day to push - fresh legs and load headroom
    PushDay,
    /// Good day for a moderate run
    ModerateDay,
    /// Caution - ease off
    CautionDay,
    /// Avoid running, rest day
    RestDay,
}

impl PlanVerdict {
    /// Stable headline string for this verdict
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::PushDay => "Best day to push",
            Self::ModerateDay => "Good day for a moderate run",
            Self::CautionDay => "Caution - ease off",
            Self::RestDay => "Avoid running, take a rest day",
        }
    }

    /// Supporting message for this verdict
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::PushDay => {
                "Your legs are fresh and your load has headroom. A harder or longer session fits today."
            }
            Self::ModerateDay => "A steady run at a comfortable effort keeps your load on track.",
            Self::CautionDay => {
                "Your recent load is elevated. Keep today short and easy if you run at all."
            }
            Self::RestDay => {
                "Your load ratio is in the high-risk zone. Resting today protects the next weeks."
            }
        }
    }
}

/// Inputs the verdict rules read
#[derive(Debug, Clone, Copy)]
struct PlanContext {
    /// Days since the most recent run; `None` for an empty history
    days_since_last: Option<i64>,
    /// Current training-load zone
    zone: LoadZone,
    /// Whether the gap since the last run covers the runner's usual rest
    rested_typically: bool,
}

/// Ordered verdict rules; first match wins, final entry is the catch-all.
const VERDICT_RULES: &[(fn(&PlanContext) -> bool, PlanVerdict)] = &[
    // No history: recommend a moderate start rather than a push
    (|c| c.days_since_last.is_none(), PlanVerdict::ModerateDay),
    (|c| c.zone == LoadZone::Danger, PlanVerdict::RestDay),
    (|c| c.zone == LoadZone::Overreaching, PlanVerdict::CautionDay),
    // Already ran today while load is climbing
    (
        |c| c.days_since_last == Some(0) && c.zone == LoadZone::Optimal,
        PlanVerdict::CautionDay,
    ),
    // Fresh legs with load headroom and the usual rest behind them
    (
        |c| {
            c.days_since_last.is_some_and(|d| d >= 2)
                && c.rested_typically
                && matches!(
                    c.zone,
                    LoadZone::Detraining | LoadZone::Recovery | LoadZone::Optimal
                )
        },
        PlanVerdict::PushDay,
    ),
    (|_| true, PlanVerdict::ModerateDay),
];

/// One what-if scenario distance with its projected load
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanScenario {
    /// Candidate distance for today (km)
    pub distance_km: f64,
    /// Projected acute:chronic ratio after running this distance today
    pub projected_ratio: f64,
    /// Zone the projected ratio lands in
    pub projected_zone: LoadZone,
    /// Stable label for the projected zone
    pub zone_label: String,
    /// Display color for the projected zone
    pub zone_color: String,
}

/// The full same-day recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodaysPlan {
    /// Verdict classification
    pub verdict: PlanVerdict,
    /// Stable headline string
    pub headline: String,
    /// Supporting message
    pub message: String,
    /// Days since the most recent run; `None` for an empty history
    pub days_since_last_run: Option<i64>,
    /// Distance today that keeps the ratio out of the caution zone (km)
    pub safe_max_km: f64,
    /// Distance today that would reach the danger zone (km)
    pub danger_km: f64,
    /// Suggested easy pace (seconds per km); 0.0 with `"N/A"` display when
    /// no pace history exists
    pub easy_pace_seconds_per_km: f64,
    /// Formatted easy pace
    pub easy_pace: String,
    /// Suggested tempo pace (seconds per km)
    pub tempo_pace_seconds_per_km: f64,
    /// Formatted tempo pace
    pub tempo_pace: String,
    /// What-if scenario distances with projected load ratios
    pub scenarios: Vec<PlanScenario>,
}

fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Candidate scenario distances from the runner's typical run.
///
/// Multiples of the median distance rounded to the nearest 0.5 km,
/// deduplicated; a fixed ladder when there is no history to scale from. A
/// very short median can collapse the multiples onto one or two half-km
/// steps, so the ladder also pads the list back up to three candidates.
fn scenario_distances(median_distance: f64) -> Vec<f64> {
    if median_distance <= 0.0 {
        return SCENARIO_FALLBACK_KM.to_vec();
    }

    let mut distances: Vec<f64> = SCENARIO_DISTANCE_FACTORS
        .iter()
        .map(|factor| ((median_distance * factor) * 2.0).round() / 2.0)
        .filter(|d| *d >= 1.0)
        .collect();
    distances.dedup_by(|a, b| (*a - *b).abs() < f64::EPSILON);

    let mut ladder = SCENARIO_FALLBACK_KM.iter();
    while distances.len() < 3 {
        let Some(next) = ladder.next() else { break };
        if distances.iter().all(|d| (*d - *next).abs() >= f64::EPSILON) {
            distances.push(*next);
        }
    }
    distances.sort_by(f64::total_cmp);
    distances.dedup_by(|a, b| (*a - *b).abs() < f64::EPSILON);
    distances
}

/// Build today's recommendation from the run history at an explicit "today".
#[must_use]
pub fn todays_plan(
    runs: &[RunEntry],
    recovery: &RecoveryAnalysis,
    now: DateTime<Utc>,
) -> TodaysPlan {
    let calculator = AcwrCalculator::new();
    let load = calculator.calculate(runs, now);

    let days_since_last = runs
        .iter()
        .filter(|r| r.start_date <= now)
        .map(|r| (now.date_naive() - r.day()).num_days())
        .min();

    let rested_typically = recovery.insufficient_data
        || days_since_last.is_none_or(|d| d as f64 >= recovery.avg_rest_days.floor());

    let context = PlanContext {
        days_since_last,
        zone: load.zone,
        rested_typically,
    };

    let verdict = VERDICT_RULES
        .iter()
        .find(|(predicate, _)| predicate(&context))
        .map_or(PlanVerdict::ModerateDay, |(_, verdict)| *verdict);

    // Closed-form distances to the caution and danger boundaries; a cold
    // start falls back to fixed conservative values. The safe-max target
    // sits a margin under the ceiling because the ceiling itself already
    // classifies as Overreaching.
    let safe_max_km = calculator
        .distance_to_ratio(runs, now, OPTIMAL_CEILING - SAFE_TARGET_MARGIN)
        .unwrap_or(COLD_START_SAFE_KM);
    let danger_km = calculator
        .distance_to_ratio(runs, now, OVERREACHING_CEILING)
        .unwrap_or(COLD_START_SAFE_KM * 2.0);

    let median_pace = median(runs.iter().map(RunEntry::pace).filter(|p| *p > 0.0).collect());
    let (easy_raw, tempo_raw) = if median_pace > 0.0 {
        (median_pace * EASY_PACE_FACTOR, median_pace * TEMPO_PACE_FACTOR)
    } else {
        (0.0, 0.0)
    };

    let median_distance = median(
        runs.iter()
            .map(|r| r.distance_km)
            .filter(|d| *d > 0.0)
            .collect(),
    );

    let scenarios = scenario_distances(median_distance)
        .into_iter()
        .map(|distance_km| {
            let projected = calculator.project_with_run(runs, now, distance_km);
            PlanScenario {
                distance_km,
                projected_ratio: projected.ratio,
                projected_zone: projected.zone,
                zone_label: projected.zone.label().to_owned(),
                zone_color: projected.zone.color().to_owned(),
            }
        })
        .collect();

    TodaysPlan {
        verdict,
        headline: verdict.headline().to_owned(),
        message: verdict.message().to_owned(),
        days_since_last_run: days_since_last,
        safe_max_km,
        danger_km,
        easy_pace_seconds_per_km: easy_raw,
        easy_pace: format_pace(easy_raw),
        tempo_pace_seconds_per_km: tempo_raw,
        tempo_pace: format_pace(tempo_raw),
        scenarios,
    }
}
