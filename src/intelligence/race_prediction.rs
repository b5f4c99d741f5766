// ABOUTME: Riegel-formula race time prediction from best recent qualifying efforts
// ABOUTME: Per-target base selection with hard extrapolation limits, omission over fabrication
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Race predictor.
//!
//! Riegel's endurance formula extrapolates a known effort to another
//! distance: `t2 = t1 * (d2 / d1) ^ 1.06`. The base effort per target is the
//! fastest-pace recent run that qualifies: at least 3.0 km, within the
//! trailing 90 days, and with a target/base distance ratio of at most 5.0.
//! Targets with no qualifying base are omitted from the output rather than
//! producing an unbounded extrapolation — a 3 km run yields 5K and 10K
//! predictions but never a Marathon.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use strideprint_core::constants::race_prediction::{
    MAX_EXTRAPOLATION_RATIO, MIN_BASE_DISTANCE_KM, RECENT_WINDOW_DAYS, RIEGEL_EXPONENT, TARGETS_KM,
};
use strideprint_core::errors::{AppError, AppResult};
use strideprint_core::formatters::{format_duration, format_pace};
use strideprint_core::models::RunEntry;
use tracing::debug;

/// Predicted time for one standard race distance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacePrediction {
    /// Target name, e.g. `"Half Marathon"`
    pub distance_name: String,
    /// Target distance in km
    pub distance_km: f64,
    /// Predicted finish time in seconds
    pub predicted_seconds: f64,
    /// Formatted finish time, e.g. `"1:52:04"`
    pub predicted_time: String,
    /// Formatted pace per km, e.g. `"5:19"`
    pub predicted_pace: String,
    /// Id of the base run the prediction extrapolates from
    pub base_run_id: String,
    /// Distance of the base run in km
    pub base_distance_km: f64,
}

/// Riegel extrapolation: time at `target_distance` from a known effort.
///
/// # Errors
/// Returns `AppError::InvalidInput` when any distance or time is
/// non-positive.
pub fn riegel_time(base_distance: f64, base_time: f64, target_distance: f64) -> AppResult<f64> {
    if base_distance <= 0.0 || base_time <= 0.0 || target_distance <= 0.0 {
        return Err(AppError::invalid_input(
            "distances and times must be positive",
        ));
    }
    Ok(base_time * (target_distance / base_distance).powf(RIEGEL_EXPONENT))
}

/// Fastest-pace run qualifying as a base for `target_km`, if any
fn qualifying_base<'a>(
    runs: &'a [RunEntry],
    now: DateTime<Utc>,
    target_km: f64,
) -> Option<&'a RunEntry> {
    let window_start = now - Duration::days(RECENT_WINDOW_DAYS);
    runs.iter()
        .filter(|run| {
            run.start_date > window_start
                && run.start_date <= now
                && run.distance_km >= MIN_BASE_DISTANCE_KM
                && run.duration_seconds > 0
                && target_km / run.distance_km <= MAX_EXTRAPOLATION_RATIO
        })
        .min_by(|a, b| a.pace().total_cmp(&b.pace()))
}

/// Predict times for the standard race distances from the run history.
///
/// Targets without a qualifying base run are omitted; an empty history
/// yields an empty list.
#[must_use]
pub fn race_predictions(runs: &[RunEntry], now: DateTime<Utc>) -> Vec<RacePrediction> {
    let mut predictions = Vec::with_capacity(TARGETS_KM.len());

    for (name, target_km) in TARGETS_KM {
        let Some(base) = qualifying_base(runs, now, target_km) else {
            debug!(target = name, "no qualifying base run, omitting prediction");
            continue;
        };

        let Ok(predicted_seconds) =
            riegel_time(base.distance_km, base.duration_seconds as f64, target_km)
        else {
            continue;
        };

        predictions.push(RacePrediction {
            distance_name: name.to_owned(),
            distance_km: target_km,
            predicted_seconds,
            predicted_time: format_duration(predicted_seconds),
            predicted_pace: format_pace(predicted_seconds / target_km),
            base_run_id: base.id.clone(),
            base_distance_km: base.distance_km,
        });
    }

    predictions
}
