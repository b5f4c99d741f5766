// ABOUTME: Acute:chronic workload ratio (ACWR) model with zone classification
// ABOUTME: Windowed distance sums, injury-risk zones, and what-if projection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Training load model.
//!
//! Computes the acute:chronic workload ratio over distance as the load proxy:
//! acute = total km over the most recent 7 days ending "today", chronic =
//! total km over the most recent 42 days normalized to a weekly-equivalent
//! rate. The ratio maps onto discrete injury-risk zones through fixed
//! breakpoints (inclusive-lower / exclusive-upper, top zone open-ended).
//!
//! This is the single most safety-relevant computation in the engine: the
//! zone feeds injury-risk warnings, coach advice, and the today's-plan
//! scenario simulation, which reuses [`AcwrCalculator::project_with_run`]
//! rather than re-deriving the formula.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strideprint_core::constants::training_load::{
    ACUTE_WINDOW_DAYS, CHRONIC_WEEKLY_DIVISOR, CHRONIC_WINDOW_DAYS, DETRAINING_CEILING,
    OPTIMAL_CEILING, OVERREACHING_CEILING, RECOVERY_CEILING,
};
use strideprint_core::models::RunEntry;
use tracing::debug;

/// Training load zone derived from the acute:chronic ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadZone {
    /// Ratio below 0.8 - load too low to maintain fitness
    Detraining,
    /// Ratio 0.8 to 1.0 - recovery zone, absorbing previous training
    Recovery,
    /// Ratio 1.0 to 1.3 - optimal progressive load
    Optimal,
    /// Ratio 1.3 to 1.5 - overreaching, elevated injury risk
    Overreaching,
    /// Ratio 1.5 and above - high injury risk
    Danger,
}

impl LoadZone {
    /// Classify a ratio into its zone.
    ///
    /// Boundaries are inclusive-lower / exclusive-upper: exactly 0.8 is
    /// Recovery, exactly 1.0 is Optimal, exactly 1.3 is Overreaching, and
    /// exactly 1.5 is Danger.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < DETRAINING_CEILING {
            Self::Detraining
        } else if ratio < RECOVERY_CEILING {
            Self::Recovery
        } else if ratio < OPTIMAL_CEILING {
            Self::Optimal
        } else if ratio < OVERREACHING_CEILING {
            Self::Overreaching
        } else {
            Self::Danger
        }
    }

    /// Stable display label for this zone
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Detraining => "Detraining",
            Self::Recovery => "Recovery",
            Self::Optimal => "Optimal",
            Self::Overreaching => "Overreaching",
            Self::Danger => "High Risk",
        }
    }

    /// Display color (hex) for this zone
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Detraining => "#64748b",
            Self::Recovery => "#38bdf8",
            Self::Optimal => "#22c55e",
            Self::Overreaching => "#f59e0b",
            Self::Danger => "#ef4444",
        }
    }
}

/// Training load metrics for a runner at an explicit "today"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingLoad {
    /// Acute load: total km over the trailing 7 days
    pub acute: f64,
    /// Chronic load: trailing 42-day total normalized to a weekly rate
    pub chronic: f64,
    /// Acute:chronic ratio, 0.0 when chronic is zero
    pub ratio: f64,
    /// Discrete zone classification
    pub zone: LoadZone,
    /// Stable display label for the zone
    pub zone_label: String,
    /// Display color (hex) for the zone
    pub zone_color: String,
    /// True when chronic load is zero and the ratio is a placeholder
    pub insufficient_data: bool,
}

/// Calculator for acute:chronic workload ratios
#[derive(Debug, Clone, Copy)]
pub struct AcwrCalculator {
    acute_window_days: i64,
    chronic_window_days: i64,
}

impl Default for AcwrCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl AcwrCalculator {
    /// Create a calculator with the standard 7/42-day windows
    #[must_use]
    pub const fn new() -> Self {
        Self {
            acute_window_days: ACUTE_WINDOW_DAYS,
            chronic_window_days: CHRONIC_WINDOW_DAYS,
        }
    }

    /// Create a calculator with custom window sizes
    #[must_use]
    pub const fn with_windows(acute_days: i64, chronic_days: i64) -> Self {
        Self {
            acute_window_days: acute_days,
            chronic_window_days: chronic_days,
        }
    }

    /// Sum distances inside the acute and chronic windows ending at `now`.
    ///
    /// Runs dated after `now` are ignored so hypothetical anchors stay
    /// reproducible in tests.
    fn windowed_sums(&self, runs: &[RunEntry], now: DateTime<Utc>) -> (f64, f64) {
        let mut acute = 0.0;
        let mut chronic = 0.0;

        for run in runs {
            let age_days = (now - run.start_date).num_days();
            if age_days < 0 || age_days >= self.chronic_window_days {
                continue;
            }
            chronic += run.distance_km;
            if age_days < self.acute_window_days {
                acute += run.distance_km;
            }
        }

        (acute, chronic)
    }

    /// Calculate the training load for the history ending at `now`.
    #[must_use]
    pub fn calculate(&self, runs: &[RunEntry], now: DateTime<Utc>) -> TrainingLoad {
        let (acute, chronic_sum) = self.windowed_sums(runs, now);
        Self::assemble(acute, chronic_sum)
    }

    /// Calculate the load as if one additional run of `additional_km` were
    /// completed at `now`.
    ///
    /// The today's-plan scenarios feed candidate distances through this entry
    /// point so the what-if ratios come from the exact same windowed formula
    /// as the headline ratio.
    #[must_use]
    pub fn project_with_run(
        &self,
        runs: &[RunEntry],
        now: DateTime<Utc>,
        additional_km: f64,
    ) -> TrainingLoad {
        let (acute, chronic_sum) = self.windowed_sums(runs, now);
        let extra = additional_km.max(0.0);
        Self::assemble(acute + extra, chronic_sum + extra)
    }

    /// Solve for the distance today that would push the ratio to `target`.
    ///
    /// From ratio(x) = divisor * (acute + x) / (`chronic_sum` + x), the
    /// closed form is x = (target * `chronic_sum` - divisor * acute) /
    /// (divisor - target), clamped to zero when already past the target.
    /// Returns `None` when the target is at or beyond the divisor (the ratio
    /// asymptote) or when there is no chronic history to anchor the curve.
    #[must_use]
    pub fn distance_to_ratio(
        &self,
        runs: &[RunEntry],
        now: DateTime<Utc>,
        target: f64,
    ) -> Option<f64> {
        let (acute, chronic_sum) = self.windowed_sums(runs, now);
        if chronic_sum <= 0.0 || target >= CHRONIC_WEEKLY_DIVISOR {
            return None;
        }
        let x = CHRONIC_WEEKLY_DIVISOR.mul_add(-acute, target * chronic_sum)
            / (CHRONIC_WEEKLY_DIVISOR - target);
        Some(x.max(0.0))
    }

    fn assemble(acute: f64, chronic_sum: f64) -> TrainingLoad {
        let chronic = chronic_sum / CHRONIC_WEEKLY_DIVISOR;
        let insufficient_data = chronic <= 0.0;

        // Guarded ratio: never NaN or Infinity in output
        let ratio = if insufficient_data { 0.0 } else { acute / chronic };

        if insufficient_data {
            debug!(acute, "chronic load is zero, reporting placeholder ratio");
        }

        let zone = LoadZone::from_ratio(ratio);
        TrainingLoad {
            acute,
            chronic,
            ratio,
            zone,
            zone_label: zone.label().to_owned(),
            zone_color: zone.color().to_owned(),
            insufficient_data,
        }
    }
}
