// ABOUTME: Rule-driven coaching sentences built from the other analysis outputs
// ABOUTME: Independent ordered rules over load, recovery, personality, and milestones
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Coach advice generator.
//!
//! Each rule inspects the already-computed analysis outputs and either
//! contributes one plain-language sentence or stays silent. Rules are
//! independent; the output preserves their declaration order so the most
//! urgent load warnings always come first.

use serde::{Deserialize, Serialize};

use super::milestones::Milestone;
use super::personality::RunningPersonality;
use super::recovery::RecoveryAnalysis;
use super::training_load::{LoadZone, TrainingLoad};

/// How urgent a piece of advice is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSeverity {
    /// Keep doing this
    Praise,
    /// Worth knowing, no action needed
    Info,
    /// Adjust soon
    Caution,
    /// Act now
    Warning,
}

/// One coaching sentence with its urgency
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachAdvice {
    /// Urgency classification
    pub severity: AdviceSeverity,
    /// Plain-language sentence, no markup
    pub message: String,
}

/// Everything the advice rules are allowed to look at
#[derive(Debug, Clone, Copy)]
pub struct AdviceInputs<'a> {
    /// Current training load
    pub load: &'a TrainingLoad,
    /// Recovery pattern
    pub recovery: &'a RecoveryAnalysis,
    /// Personality classification
    pub personality: &'a RunningPersonality,
    /// Unachieved lifetime milestones
    pub milestones: &'a [Milestone],
    /// Days since the most recent run; `None` for an empty history
    pub days_since_last_run: Option<i64>,
}

/// Gap that counts as a layoff (days)
const LAYOFF_DAYS: i64 = 7;
/// Streak length that earns a rest reminder (days)
const LONG_STREAK_DAYS: u32 = 7;
/// Rest after hard runs below this average draws a warning (days)
const MIN_REST_AFTER_HARD: f64 = 1.5;
/// Milestone completion that earns a final-push nudge (percent)
const MILESTONE_PUSH_PERCENT: f64 = 90.0;

fn load_rules(inputs: &AdviceInputs<'_>, advice: &mut Vec<CoachAdvice>) {
    if inputs.load.insufficient_data {
        return;
    }
    match inputs.load.zone {
        LoadZone::Danger => advice.push(CoachAdvice {
            severity: AdviceSeverity::Warning,
            message: format!(
                "Your acute load is {:.1}x your chronic base, which is injury territory. Cut back this week.",
                inputs.load.ratio
            ),
        }),
        LoadZone::Overreaching => advice.push(CoachAdvice {
            severity: AdviceSeverity::Caution,
            message: format!(
                "Your load ratio of {:.2} is above the optimal band. Hold volume steady for a few days.",
                inputs.load.ratio
            ),
        }),
        LoadZone::Detraining => advice.push(CoachAdvice {
            severity: AdviceSeverity::Info,
            message: "Your recent volume is well below your base. A couple of easy runs will rebuild momentum.".to_owned(),
        }),
        LoadZone::Recovery | LoadZone::Optimal => {}
    }
}

fn personality_rules(inputs: &AdviceInputs<'_>, advice: &mut Vec<CoachAdvice>) {
    let scores = &inputs.personality.scores;
    if scores.consistency >= 4 {
        advice.push(CoachAdvice {
            severity: AdviceSeverity::Praise,
            message: "Your week-in, week-out consistency is excellent. That regularity is the strongest predictor of long-term progress.".to_owned(),
        });
    }
    if scores.variety <= 2 {
        advice.push(CoachAdvice {
            severity: AdviceSeverity::Info,
            message: "Your runs look very similar to each other. Mixing in a different distance, route, or time of day keeps adaptation going.".to_owned(),
        });
    }
}

fn recovery_rules(inputs: &AdviceInputs<'_>, advice: &mut Vec<CoachAdvice>) {
    let recovery = inputs.recovery;
    if !recovery.insufficient_data
        && recovery.hard_run_count >= 3
        && recovery.avg_rest_after_hard < MIN_REST_AFTER_HARD
    {
        advice.push(CoachAdvice {
            severity: AdviceSeverity::Caution,
            message: format!(
                "You average {:.1} days of rest after hard efforts. Giving hard runs at least a full recovery day lowers injury risk.",
                recovery.avg_rest_after_hard
            ),
        });
    }
    if recovery.longest_streak_days >= LONG_STREAK_DAYS {
        advice.push(CoachAdvice {
            severity: AdviceSeverity::Info,
            message: format!(
                "Your longest run streak is {} days. Streaks build habit, but a planned rest day keeps them sustainable.",
                recovery.longest_streak_days
            ),
        });
    }
}

fn milestone_rules(inputs: &AdviceInputs<'_>, advice: &mut Vec<CoachAdvice>) {
    if let Some(near) = inputs
        .milestones
        .iter()
        .find(|m| m.percent_complete >= MILESTONE_PUSH_PERCENT)
    {
        advice.push(CoachAdvice {
            severity: AdviceSeverity::Praise,
            message: format!(
                "You are {:.0}% of the way to {} lifetime kilometers, only {:.1} km to go.",
                near.percent_complete, near.goal_km, near.remaining_km
            ),
        });
    }
}

fn layoff_rules(inputs: &AdviceInputs<'_>, advice: &mut Vec<CoachAdvice>) {
    if let Some(days) = inputs.days_since_last_run {
        if days >= LAYOFF_DAYS {
            advice.push(CoachAdvice {
                severity: AdviceSeverity::Info,
                message: format!(
                    "It has been {days} days since your last run. Ease back in with a short, comfortable effort."
                ),
            });
        }
    }
}

/// Run every advice rule in order and collect the sentences that fired.
#[must_use]
pub fn coach_advice(inputs: &AdviceInputs<'_>) -> Vec<CoachAdvice> {
    let mut advice = Vec::new();
    load_rules(inputs, &mut advice);
    recovery_rules(inputs, &mut advice);
    personality_rules(inputs, &mut advice);
    milestone_rules(inputs, &mut advice);
    layoff_rules(inputs, &mut advice);
    advice
}
