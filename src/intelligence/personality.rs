// ABOUTME: Five-axis running personality scoring and archetype classification
// ABOUTME: Fixed monotonic threshold tables, ordered archetype rules, stable percentile
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Personality classifier.
//!
//! Five independent trait axes (consistency, speed, endurance, variety,
//! volume), each bucketed into an integer score 1-5 through fixed monotonic
//! thresholds, then mapped to one archetype through a priority-ordered rule
//! table: a flat list of `(predicate, archetype)` pairs evaluated
//! top-to-bottom, first match wins, with an explicit catch-all last entry.
//! The percentile compares the score sum against a fixed reference
//! distribution, never a live user population, so it is reproducible without
//! any stored state.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strideprint_core::constants::personality::{
    CONSISTENCY_BREAKPOINTS, CONSISTENCY_WINDOW_WEEKS, ENDURANCE_BREAKPOINTS,
    LONG_RUN_DISTANCE_FACTOR, LONG_RUN_DURATION_SECONDS, PERCENTILE_BY_SUM, SPEED_BREAKPOINTS,
    TEMPO_PACE_FACTOR, VARIETY_BREAKPOINTS, VARIETY_LOCATION_CAP, VOLUME_BREAKPOINTS_KM,
    VOLUME_WINDOW_DAYS,
};
use strideprint_core::errors::{AppError, AppResult};
use strideprint_core::models::RunEntry;

use super::distribution::{band_index, BAND_COUNT};

/// Number of time-of-day slots used by the variety axis
const TIME_SLOT_COUNT: usize = 4;

/// The five integer trait scores, each in 1-5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitScores {
    /// Regularity of running frequency over the trailing window
    pub consistency: u8,
    /// Prevalence of fast/tempo-type efforts relative to the runner's own paces
    pub speed: u8,
    /// Prevalence of long runs relative to the runner's typical run
    pub endurance: u8,
    /// Diversity of distances, locations, and times of day
    pub variety: u8,
    /// Total distance on a fixed absolute scale
    pub volume: u8,
}

impl TraitScores {
    /// Construct validated scores; every component must be in 1-5.
    ///
    /// # Errors
    /// Returns `AppError::ValueOutOfRange` when any score is outside 1-5.
    pub fn new(consistency: u8, speed: u8, endurance: u8, variety: u8, volume: u8) -> AppResult<Self> {
        let scores = Self {
            consistency,
            speed,
            endurance,
            variety,
            volume,
        };
        if scores.as_array().iter().all(|s| (1..=5).contains(s)) {
            Ok(scores)
        } else {
            Err(AppError::value_out_of_range(
                "trait scores must each be in 1-5",
            ))
        }
    }

    /// Scores in fixed trait order: consistency, speed, endurance, variety, volume
    #[must_use]
    pub const fn as_array(&self) -> [u8; 5] {
        [
            self.consistency,
            self.speed,
            self.endurance,
            self.variety,
            self.volume,
        ]
    }

    /// Sum of the five scores (5-25)
    #[must_use]
    pub fn sum(&self) -> u8 {
        self.as_array().iter().sum()
    }
}

/// Fixed set of running personality archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// High scores across every axis
    CompleteRunner,
    /// Volume dominates, backed by endurance
    MileageMachine,
    /// Top speed with a steady schedule
    SpeedDemon,
    /// Lives for the long run
    UltraSpirit,
    /// Never misses a week
    Metronome,
    /// Seeks new distances, places, and times
    Explorer,
    /// Reliable schedule above all else
    SteadyPacer,
    /// Chases fast efforts
    TempoChaser,
    /// Occasional, low-volume runner
    WeekendWarrior,
    /// Catch-all for even profiles
    BalancedRunner,
}

impl Archetype {
    /// Display name for this archetype
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CompleteRunner => "Complete Runner",
            Self::MileageMachine => "Mileage Machine",
            Self::SpeedDemon => "Speed Demon",
            Self::UltraSpirit => "Ultra Spirit",
            Self::Metronome => "Metronome",
            Self::Explorer => "Explorer",
            Self::SteadyPacer => "Steady Pacer",
            Self::TempoChaser => "Tempo Chaser",
            Self::WeekendWarrior => "Weekend Warrior",
            Self::BalancedRunner => "Balanced Runner",
        }
    }

    /// Human description for this archetype
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::CompleteRunner => {
                "Strong on every axis. You train often, far, fast, and everywhere."
            }
            Self::MileageMachine => {
                "Volume is your superpower. Big weeks and long runs stack up relentlessly."
            }
            Self::SpeedDemon => "You show up to go fast. Tempo efforts define your training.",
            Self::UltraSpirit => {
                "The long run is the whole point. Distance holds no fear for you."
            }
            Self::Metronome => "Week in, week out, you are there. Consistency carries you.",
            Self::Explorer => {
                "New routes, new distances, new times of day. Variety keeps you moving."
            }
            Self::SteadyPacer => "A dependable schedule and a steady rhythm anchor your running.",
            Self::TempoChaser => "You gravitate to fast sessions whenever the legs allow.",
            Self::WeekendWarrior => {
                "Running fits around life. When you get out, you make it count."
            }
            Self::BalancedRunner => "An even profile across the board, with room to specialize.",
        }
    }

    /// All archetypes in rule-priority order (used by the codex)
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::CompleteRunner,
            Self::MileageMachine,
            Self::SpeedDemon,
            Self::UltraSpirit,
            Self::Metronome,
            Self::Explorer,
            Self::SteadyPacer,
            Self::TempoChaser,
            Self::WeekendWarrior,
            Self::BalancedRunner,
        ]
    }
}

/// Priority-ordered archetype selection rules; first match wins.
///
/// The final entry is an unconditional catch-all, so the table is exhaustive
/// over every possible score vector.
const ARCHETYPE_RULES: &[(fn(&TraitScores) -> bool, Archetype)] = &[
    (
        |s| s.as_array().iter().all(|&v| v >= 4),
        Archetype::CompleteRunner,
    ),
    (
        |s| s.volume == 5 && s.endurance >= 4,
        Archetype::MileageMachine,
    ),
    (
        |s| s.speed == 5 && s.consistency >= 3,
        Archetype::SpeedDemon,
    ),
    (|s| s.endurance == 5, Archetype::UltraSpirit),
    (
        |s| s.consistency == 5 && s.volume >= 3,
        Archetype::Metronome,
    ),
    (|s| s.variety >= 4 && s.speed >= 3, Archetype::Explorer),
    (|s| s.consistency >= 4, Archetype::SteadyPacer),
    (|s| s.speed >= 4, Archetype::TempoChaser),
    (
        |s| s.volume <= 2 && s.consistency <= 2,
        Archetype::WeekendWarrior,
    ),
    (|_| true, Archetype::BalancedRunner),
];

/// Select the archetype for a score vector via the ordered rule table.
#[must_use]
pub fn archetype_for(scores: &TraitScores) -> Archetype {
    for (predicate, archetype) in ARCHETYPE_RULES {
        if predicate(scores) {
            return *archetype;
        }
    }
    // The catch-all rule always matches; this is unreachable but keeps the
    // function total without a panic path
    Archetype::BalancedRunner
}

/// Percentile for a score vector from the fixed reference distribution.
#[must_use]
pub fn percentile_for(scores: &TraitScores) -> f64 {
    PERCENTILE_BY_SUM[usize::from(scores.sum().saturating_sub(5)).min(PERCENTILE_BY_SUM.len() - 1)]
}

/// Full personality classification result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningPersonality {
    /// The five trait scores
    pub scores: TraitScores,
    /// Selected archetype
    pub archetype: Archetype,
    /// Archetype display name
    pub archetype_name: String,
    /// Archetype description
    pub description: String,
    /// Percentile in 0-100 from the fixed reference distribution
    pub percentile: f64,
    /// Reversible DNA code for the score vector
    pub dna_code: String,
}

/// Bucket a metric through four ascending breakpoints into a 1-5 score
fn bucket(metric: f64, breakpoints: [f64; 4]) -> u8 {
    let mut score = 1u8;
    for bp in breakpoints {
        if metric >= bp {
            score += 1;
        }
    }
    score
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

fn consistency_metric(runs: &[RunEntry], now: DateTime<Utc>) -> f64 {
    let window_start = now - Duration::weeks(CONSISTENCY_WINDOW_WEEKS);
    let mut weeks_with_run: HashSet<(i32, u32)> = HashSet::new();
    for run in runs {
        if run.start_date > window_start && run.start_date <= now {
            let week = run.start_date.iso_week();
            weeks_with_run.insert((week.year(), week.week()));
        }
    }
    weeks_with_run.len() as f64 / CONSISTENCY_WINDOW_WEEKS as f64
}

fn speed_metric(runs: &[RunEntry]) -> f64 {
    let mut paces: Vec<f64> = runs.iter().map(RunEntry::pace).filter(|p| *p > 0.0).collect();
    if paces.is_empty() {
        return 0.0;
    }
    paces.sort_by(f64::total_cmp);
    let median_pace = median(&paces);
    let tempo_cutoff = median_pace * TEMPO_PACE_FACTOR;
    let tempo_count = paces.iter().filter(|&&p| p <= tempo_cutoff).count();
    tempo_count as f64 / paces.len() as f64
}

fn endurance_metric(runs: &[RunEntry]) -> f64 {
    let mut distances: Vec<f64> = runs
        .iter()
        .map(|r| r.distance_km)
        .filter(|d| *d > 0.0)
        .collect();
    if distances.is_empty() {
        return 0.0;
    }
    distances.sort_by(f64::total_cmp);
    let median_distance = median(&distances);
    let long_count = runs
        .iter()
        .filter(|r| {
            r.distance_km >= median_distance * LONG_RUN_DISTANCE_FACTOR
                || r.duration_seconds >= LONG_RUN_DURATION_SECONDS
        })
        .count();
    long_count as f64 / runs.len() as f64
}

/// Time-of-day slot for the variety axis: night, morning, midday, evening
fn time_slot(hour: u32) -> usize {
    match hour {
        0..=4 => 0,
        5..=10 => 1,
        11..=16 => 2,
        _ => 3,
    }
}

fn variety_metric(runs: &[RunEntry]) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }

    let bands: HashSet<usize> = runs.iter().map(|r| band_index(r.distance_km)).collect();
    let locations: HashSet<&str> = runs
        .iter()
        .filter_map(|r| r.location.as_ref().map(|l| l.name.as_str()))
        .collect();
    let slots: HashSet<usize> = runs
        .iter()
        .map(|r| time_slot(r.start_date.hour()))
        .collect();

    let band_ratio = bands.len() as f64 / BAND_COUNT as f64;
    let location_ratio = locations.len().min(VARIETY_LOCATION_CAP) as f64 / VARIETY_LOCATION_CAP as f64;
    let slot_ratio = slots.len() as f64 / TIME_SLOT_COUNT as f64;

    (band_ratio + location_ratio + slot_ratio) / 3.0
}

fn volume_metric(runs: &[RunEntry], now: DateTime<Utc>) -> f64 {
    let window_start = now - Duration::days(VOLUME_WINDOW_DAYS);
    runs.iter()
        .filter(|r| r.start_date > window_start && r.start_date <= now)
        .map(|r| r.distance_km)
        .sum()
}

/// Compute the five trait scores from the run history at an explicit "today".
#[must_use]
pub fn trait_scores(runs: &[RunEntry], now: DateTime<Utc>) -> TraitScores {
    TraitScores {
        consistency: bucket(consistency_metric(runs, now), CONSISTENCY_BREAKPOINTS),
        speed: bucket(speed_metric(runs), SPEED_BREAKPOINTS),
        endurance: bucket(endurance_metric(runs), ENDURANCE_BREAKPOINTS),
        variety: bucket(variety_metric(runs), VARIETY_BREAKPOINTS),
        volume: bucket(volume_metric(runs, now), VOLUME_BREAKPOINTS_KM),
    }
}

/// Classify the full running personality from the run history.
#[must_use]
pub fn classify(runs: &[RunEntry], now: DateTime<Utc>) -> RunningPersonality {
    let scores = trait_scores(runs, now);
    let archetype = archetype_for(&scores);
    RunningPersonality {
        scores,
        archetype,
        archetype_name: archetype.name().to_owned(),
        description: archetype.description().to_owned(),
        percentile: percentile_for(&scores),
        dna_code: super::dna_codex::encode(&scores).unwrap_or_default(),
    }
}
