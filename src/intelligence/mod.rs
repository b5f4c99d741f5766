// ABOUTME: Analysis modules turning a run history into reports and recommendations
// ABOUTME: Personality, training load, predictions, recovery, milestones, and coaching
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Running-analytics intelligence.
//!
//! Every module here is a pure function of the run history plus an explicit
//! reference instant; nothing reads the wall clock. [`IntelligenceEngine`]
//! assembles all of them into one payload.

pub mod aggregates;
pub mod coach_advice;
pub mod conditions;
pub mod distribution;
pub mod dna_codex;
pub mod engine;
pub mod milestones;
pub mod personality;
pub mod race_prediction;
pub mod records;
pub mod recovery;
pub mod routes;
pub mod todays_plan;
pub mod training_load;

pub use aggregates::{PaceTrend, PaceTrendPoint, TrendDirection, VolumeBin, YearComparison};
pub use coach_advice::{AdviceInputs, AdviceSeverity, CoachAdvice};
pub use conditions::{ConditionSlot, ConditionsAnalysis};
pub use distribution::DistributionBucket;
pub use dna_codex::{Codex, CodexGroup};
pub use engine::{IntelligenceData, IntelligenceEngine};
pub use milestones::Milestone;
pub use personality::{Archetype, RunningPersonality, TraitScores};
pub use race_prediction::RacePrediction;
pub use records::{PersonalRecords, RecordEntry};
pub use recovery::RecoveryAnalysis;
pub use routes::RouteStats;
pub use todays_plan::{PlanScenario, PlanVerdict, TodaysPlan};
pub use training_load::{AcwrCalculator, LoadZone, TrainingLoad};
