// ABOUTME: Personal record extraction - fastest pace, longest run, biggest week
// ABOUTME: Standalone helper, not part of the main engine payload
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Personal records.
//!
//! Pulls the three headline records out of a run history: fastest pace over a
//! meaningful distance, longest single run, and biggest ISO week. Consumed by
//! year-in-review cards; the main analysis payload does not embed it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strideprint_core::models::RunEntry;

/// Runs shorter than this never set a pace record
const PACE_RECORD_MIN_KM: f64 = 1.0;

/// One dated record value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntry {
    /// Record value: seconds per km for pace, km otherwise
    pub value: f64,
    /// Day the record was set (start of the week for the weekly record)
    pub date: NaiveDate,
    /// Name of the run that set it; empty for the weekly record
    pub run_name: String,
}

/// Headline personal records for a run history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecords {
    /// Fastest pace over at least 1 km (seconds per km)
    pub fastest_pace: RecordEntry,
    /// Longest single run (km)
    pub longest_run: RecordEntry,
    /// Biggest ISO week (km), dated by the week's Monday
    pub biggest_week: RecordEntry,
}

/// Extract personal records, `None` for a history with no qualifying run.
///
/// A qualifying run has positive distance and duration; the pace record
/// additionally requires at least 1 km so GPS blips cannot set it.
#[must_use]
pub fn personal_records(runs: &[RunEntry]) -> Option<PersonalRecords> {
    let qualifying: Vec<&RunEntry> = runs
        .iter()
        .filter(|r| r.distance_km > 0.0 && r.duration_seconds > 0)
        .collect();

    let fastest = qualifying
        .iter()
        .filter(|r| r.distance_km >= PACE_RECORD_MIN_KM)
        .min_by(|a, b| a.pace().total_cmp(&b.pace()))?;
    let longest = qualifying
        .iter()
        .max_by(|a, b| a.distance_km.total_cmp(&b.distance_km))?;

    let mut weeks: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for run in &qualifying {
        let monday = run.day() - chrono::Duration::days(i64::from(run.day().weekday().num_days_from_monday()));
        *weeks.entry(monday).or_insert(0.0) += run.distance_km;
    }
    let (week_start, week_km) = weeks
        .into_iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))?;

    Some(PersonalRecords {
        fastest_pace: RecordEntry {
            value: fastest.pace(),
            date: fastest.day(),
            run_name: fastest.name.clone(),
        },
        longest_run: RecordEntry {
            value: longest.distance_km,
            date: longest.day(),
            run_name: longest.name.clone(),
        },
        biggest_week: RecordEntry {
            value: week_km,
            date: week_start,
            run_name: String::new(),
        },
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn run(day: u32, distance_km: f64, pace: f64, name: &str) -> RunEntry {
        RunEntry {
            id: format!("run_{day}"),
            start_date: Utc.with_ymd_and_hms(2026, 8, day, 7, 0, 0).unwrap(),
            date_label: format!("Aug {day}"),
            distance_km,
            duration_seconds: (distance_km * pace) as u64,
            pace_seconds_per_km: pace,
            name: name.to_owned(),
            location: None,
            average_heart_rate: None,
            elevation_gain: None,
        }
    }

    #[test]
    fn empty_history_has_no_records() {
        assert!(personal_records(&[]).is_none());
    }

    #[test]
    fn picks_fastest_longest_and_biggest_week() {
        // Week of Mon Aug 17: 10 + 8 = 18 km. Week of Mon Aug 24: 12 km.
        let runs = vec![
            run(18, 10.0, 340.0, "Long Tuesday"),
            run(20, 8.0, 290.0, "Tempo Thursday"),
            run(25, 12.0, 330.0, "Long Tuesday II"),
        ];
        let records = personal_records(&runs).unwrap();

        assert!((records.fastest_pace.value - 290.0).abs() < f64::EPSILON);
        assert_eq!(records.fastest_pace.run_name, "Tempo Thursday");
        assert!((records.longest_run.value - 12.0).abs() < f64::EPSILON);
        assert_eq!(records.longest_run.date, NaiveDate::from_ymd_opt(2026, 8, 25).unwrap());
        assert!((records.biggest_week.value - 18.0).abs() < f64::EPSILON);
        assert_eq!(records.biggest_week.date, NaiveDate::from_ymd_opt(2026, 8, 17).unwrap());
    }

    #[test]
    fn short_blip_cannot_set_pace_record() {
        let runs = vec![
            run(20, 0.4, 120.0, "GPS blip"),
            run(22, 5.0, 310.0, "Steady five"),
        ];
        let records = personal_records(&runs).unwrap();
        assert!((records.fastest_pace.value - 310.0).abs() < f64::EPSILON);
        // The blip still counts for distance bookkeeping, just not pace
        assert!((records.longest_run.value - 5.0).abs() < f64::EPSILON);
    }
}
