// ABOUTME: Distance distribution histogram over fixed distance bands
// ABOUTME: Bucket counts sum to total runs, percentages sum to 100 within rounding
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Distance distribution histogram.
//!
//! Fixed bands (inclusive-lower / exclusive-upper, last band open-ended):
//! `<5K`, `5-10K`, `10-15K`, `Half zone` (15-25), `Marathon zone` (25-45),
//! `Ultra` (45+).

use serde::{Deserialize, Serialize};
use strideprint_core::constants::distance_bands::BANDS;
use strideprint_core::models::RunEntry;

/// One histogram bucket of the distance distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionBucket {
    /// Band label, e.g. `"5-10K"`
    pub label: String,
    /// Number of runs in the band
    pub count: usize,
    /// Share of total runs, 0-100
    pub percentage: f64,
}

/// Number of fixed distance bands
pub const BAND_COUNT: usize = BANDS.len();

/// Index of the band a distance falls into.
///
/// Also reused by the conditions analysis and the personality variety axis so
/// every consumer agrees on band boundaries.
#[must_use]
pub fn band_index(distance_km: f64) -> usize {
    // Walk bands from the top; the first lower bound at or below the
    // distance wins
    for (idx, (_, lower)) in BANDS.iter().enumerate().rev() {
        if distance_km >= *lower {
            return idx;
        }
    }
    0
}

/// Label of the band a distance falls into
#[must_use]
pub fn band_label(distance_km: f64) -> &'static str {
    BANDS[band_index(distance_km)].0
}

/// Histogram of runs over the fixed distance bands.
///
/// All bands are reported, including empty ones, in ascending distance
/// order. For a non-empty run list the counts sum to the total run count and
/// the percentages sum to 100 within floating-point rounding; an empty run
/// list yields all-zero buckets.
#[must_use]
pub fn distance_distribution(runs: &[RunEntry]) -> Vec<DistributionBucket> {
    let mut counts = [0usize; BANDS.len()];
    for run in runs {
        counts[band_index(run.distance_km)] += 1;
    }

    let total = runs.len();
    BANDS
        .iter()
        .zip(counts)
        .map(|((label, _), count)| DistributionBucket {
            label: (*label).to_owned(),
            count,
            percentage: if total == 0 {
                0.0
            } else {
                (count as f64 / total as f64) * 100.0
            },
        })
        .collect()
}
