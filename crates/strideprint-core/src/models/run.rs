// ABOUTME: RunEntry input model - one normalized record per completed run
// ABOUTME: Immutable plain data owned by the caller, passed by reference into analysis
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Normalized run record model.
//!
//! `RunEntry` values come from the out-of-scope provider normalizer. Callers
//! provide runs sorted newest-first; analysis modules that need chronological
//! order re-derive it internally rather than trusting input order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Matched location for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLocation {
    /// Display name of the matched location (city or named route area)
    pub name: String,
    /// Flag glyph for the location's country
    pub flag: String,
}

/// One completed run, normalized from a provider activity.
///
/// `start_date` is already normalized to the runner's local wall clock by the
/// upstream collaborator; day-of-week and hour-of-day partitions read it
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEntry {
    /// Provider activity identifier
    pub id: String,
    /// Full start timestamp
    pub start_date: DateTime<Utc>,
    /// Short display form of the date (e.g. "Aug 29")
    pub date_label: String,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Moving duration in seconds
    pub duration_seconds: u64,
    /// Pace in seconds per kilometer as reported by the normalizer
    pub pace_seconds_per_km: f64,
    /// Free-text activity name
    pub name: String,
    /// Matched location, `None` when coordinates were unmatched
    pub location: Option<RunLocation>,
    /// Average heart rate in bpm, when recorded
    pub average_heart_rate: Option<u32>,
    /// Elevation gain in meters, when recorded
    pub elevation_gain: Option<f64>,
}

impl RunEntry {
    /// Pace in seconds per kilometer, re-derived from duration and distance
    /// when the stored pace is non-positive. Returns 0.0 for a zero-distance
    /// run rather than dividing by zero.
    #[must_use]
    pub fn pace(&self) -> f64 {
        if self.pace_seconds_per_km > 0.0 {
            return self.pace_seconds_per_km;
        }
        if self.distance_km > 0.0 {
            self.duration_seconds as f64 / self.distance_km
        } else {
            0.0
        }
    }

    /// Calendar day of the run, used for gap and streak analysis
    #[must_use]
    pub fn day(&self) -> chrono::NaiveDate {
        self.start_date.date_naive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(distance_km: f64, duration_seconds: u64, pace: f64) -> RunEntry {
        RunEntry {
            id: "run_1".to_owned(),
            start_date: Utc.with_ymd_and_hms(2026, 8, 29, 7, 30, 0).unwrap(),
            date_label: "Aug 29".to_owned(),
            distance_km,
            duration_seconds,
            pace_seconds_per_km: pace,
            name: "Morning Run".to_owned(),
            location: None,
            average_heart_rate: None,
            elevation_gain: None,
        }
    }

    #[test]
    fn pace_prefers_stored_value() {
        assert!((entry(5.0, 1650, 330.0).pace() - 330.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pace_rederives_from_duration_when_missing() {
        assert!((entry(5.0, 1650, 0.0).pace() - 330.0).abs() < 1e-9);
    }

    #[test]
    fn pace_guards_zero_distance() {
        assert!(entry(0.0, 1650, 0.0).pace().abs() < f64::EPSILON);
    }
}
