// ABOUTME: Route and location familiarity ranking from matched run locations
// ABOUTME: Reports run count, best pace, and pace improvement per repeated location
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Route/location familiarity analysis.
//!
//! Groups runs by matched location name. Locations with unmatched or unknown
//! coordinates carry no `RunLocation` and are excluded from the ranking, as
//! are locations visited only once.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strideprint_core::models::RunEntry;

/// Familiarity statistics for one repeated location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStats {
    /// Location display name
    pub name: String,
    /// Flag glyph for the location's country
    pub flag: String,
    /// Number of runs recorded there
    pub run_count: usize,
    /// Best pace observed there (seconds per km)
    pub best_pace_seconds_per_km: f64,
    /// First-visit pace minus best pace (seconds per km); positive means the
    /// runner has improved at this location
    pub improvement_seconds_per_km: f64,
}

/// Familiarity ranking over locations with at least two runs.
///
/// Sorted by run count descending, then by name for a stable order.
#[must_use]
pub fn route_familiarity(runs: &[RunEntry]) -> Vec<RouteStats> {
    let mut by_location: HashMap<&str, (&RunEntry, Vec<&RunEntry>)> = HashMap::new();
    for run in runs {
        let Some(location) = &run.location else {
            continue;
        };
        if run.pace() <= 0.0 {
            continue;
        }
        by_location
            .entry(location.name.as_str())
            .or_insert((run, Vec::new()))
            .1
            .push(run);
    }

    let mut stats: Vec<RouteStats> = by_location
        .into_values()
        .filter(|(_, visits)| visits.len() >= 2)
        .filter_map(|(_, visits)| {
            let earliest = visits.iter().min_by_key(|r| r.start_date)?;
            let best_pace = visits
                .iter()
                .map(|r| r.pace())
                .fold(f64::INFINITY, f64::min);
            let location = earliest.location.as_ref()?;
            Some(RouteStats {
                name: location.name.clone(),
                flag: location.flag.clone(),
                run_count: visits.len(),
                best_pace_seconds_per_km: best_pace,
                improvement_seconds_per_km: earliest.pace() - best_pace,
            })
        })
        .collect();

    stats.sort_by(|a, b| {
        b.run_count
            .cmp(&a.run_count)
            .then_with(|| a.name.cmp(&b.name))
    });
    stats
}
