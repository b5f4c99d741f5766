// ABOUTME: Top-level analysis engine assembling every report into one payload
// ABOUTME: Pure function of the run history and an explicit reference instant
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Intelligence engine.
//!
//! [`IntelligenceEngine::analyze`] runs every analysis over the same run
//! slice and the same reference instant, so the assembled payload is
//! internally consistent and fully deterministic: identical inputs always
//! serialize to identical JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strideprint_core::models::RunEntry;
use tracing::debug;

use super::aggregates::{
    monthly_volume, pace_trend, weekly_volume, year_comparison, PaceTrend, VolumeBin,
    YearComparison,
};
use super::coach_advice::{coach_advice, AdviceInputs, CoachAdvice};
use super::conditions::{conditions, ConditionsAnalysis};
use super::distribution::{distance_distribution, DistributionBucket};
use super::milestones::{milestones, Milestone};
use super::personality::{classify, RunningPersonality};
use super::race_prediction::{race_predictions, RacePrediction};
use super::recovery::{analyze_recovery, RecoveryAnalysis};
use super::routes::{route_familiarity, RouteStats};
use super::todays_plan::{todays_plan, TodaysPlan};
use super::training_load::{AcwrCalculator, TrainingLoad};

/// Complete analysis payload for one runner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceData {
    /// Five-axis personality classification
    pub personality: RunningPersonality,
    /// Acute:chronic training load
    pub training_load: TrainingLoad,
    /// Same-day recommendation
    pub todays_plan: TodaysPlan,
    /// Riegel race-time predictions; empty when no run qualifies
    pub race_predictions: Vec<RacePrediction>,
    /// Rest-day and streak patterns
    pub recovery: RecoveryAnalysis,
    /// Best day, hour, and distance band by average pace
    pub conditions: ConditionsAnalysis,
    /// Weekly volume, oldest week first
    pub weekly_volume: Vec<VolumeBin>,
    /// Monthly volume, oldest month first
    pub monthly_volume: Vec<VolumeBin>,
    /// Weekly distance-weighted pace with a trend direction
    pub pace_trend: PaceTrend,
    /// Per-year monthly and cumulative distance
    pub year_comparison: Vec<YearComparison>,
    /// Run counts per fixed distance band
    pub distribution: Vec<DistributionBucket>,
    /// Repeat-route statistics
    pub routes: Vec<RouteStats>,
    /// Unachieved lifetime distance goals
    pub milestones: Vec<Milestone>,
    /// Coaching sentences in rule order
    pub coach_advice: Vec<CoachAdvice>,
    /// Number of runs analyzed
    pub total_runs: usize,
    /// Total distance across the analyzed runs (km)
    pub total_km: f64,
}

/// Stateless engine over a run history
#[derive(Debug, Clone, Copy, Default)]
pub struct IntelligenceEngine {
    calculator: AcwrCalculator,
}

impl IntelligenceEngine {
    /// Create an engine with the standard load windows
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calculator: AcwrCalculator::new(),
        }
    }

    /// Analyze a run history at an explicit reference instant.
    ///
    /// `lifetime_km` is the runner's all-time distance, which may exceed the
    /// sum of `runs` when older history is not loaded. Runs dated after
    /// `now` are ignored by the time-windowed analyses.
    #[must_use]
    pub fn analyze(&self, runs: &[RunEntry], lifetime_km: f64, now: DateTime<Utc>) -> IntelligenceData {
        debug!(run_count = runs.len(), lifetime_km, "running full analysis");

        let personality = classify(runs, now);
        let training_load = self.calculator.calculate(runs, now);
        let recovery = analyze_recovery(runs);
        let plan = todays_plan(runs, &recovery, now);
        let milestone_list = milestones(runs, lifetime_km, now);

        let advice = coach_advice(&AdviceInputs {
            load: &training_load,
            recovery: &recovery,
            personality: &personality,
            milestones: &milestone_list,
            days_since_last_run: plan.days_since_last_run,
        });

        let total_km = runs.iter().map(|r| r.distance_km).sum();

        IntelligenceData {
            race_predictions: race_predictions(runs, now),
            conditions: conditions(runs),
            weekly_volume: weekly_volume(runs),
            monthly_volume: monthly_volume(runs),
            pace_trend: pace_trend(runs),
            year_comparison: year_comparison(runs),
            distribution: distance_distribution(runs),
            routes: route_familiarity(runs),
            personality,
            training_load,
            todays_plan: plan,
            recovery,
            milestones: milestone_list,
            coach_advice: advice,
            total_runs: runs.len(),
            total_km,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn run(id: &str, days_ago: i64, km: f64, seconds: u64, now: DateTime<Utc>) -> RunEntry {
        RunEntry {
            id: id.to_owned(),
            start_date: now - Duration::days(days_ago),
            date_label: String::new(),
            distance_km: km,
            duration_seconds: seconds,
            pace_seconds_per_km: if km > 0.0 { seconds as f64 / km } else { 0.0 },
            name: format!("Run {id}"),
            location: None,
            average_heart_rate: None,
            elevation_gain: None,
        }
    }

    #[test]
    fn empty_history_still_produces_a_full_payload() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 9, 0, 0).unwrap();
        let data = IntelligenceEngine::new().analyze(&[], 0.0, now);
        assert_eq!(data.total_runs, 0);
        assert!(data.training_load.insufficient_data);
        assert!(data.race_predictions.is_empty());
        assert_eq!(data.distribution.len(), 6);
        assert!(data.distribution.iter().all(|b| b.count == 0));
        assert_eq!(data.milestones.len(), 7);
    }

    #[test]
    fn analysis_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 9, 0, 0).unwrap();
        let runs: Vec<RunEntry> = (0..12)
            .map(|i| run(&format!("r{i}"), i * 3 + 1, 5.0 + (i % 3) as f64, 1650, now))
            .collect();
        let engine = IntelligenceEngine::new();
        let first = serde_json::to_string(&engine.analyze(&runs, 400.0, now)).unwrap();
        let second = serde_json::to_string(&engine.analyze(&runs, 400.0, now)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn payload_serializes_with_camel_case_keys() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 9, 0, 0).unwrap();
        let runs = vec![run("1", 2, 5.0, 1650, now)];
        let json = serde_json::to_value(IntelligenceEngine::new().analyze(&runs, 5.0, now)).unwrap();
        assert!(json.get("trainingLoad").is_some());
        assert!(json.get("todaysPlan").is_some());
        assert!(json.get("racePredictions").is_some());
        assert!(json.get("totalKm").is_some());
        assert!(json.get("training_load").is_none());
    }
}
