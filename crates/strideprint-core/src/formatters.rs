// ABOUTME: Time and pace display formatting shared by every analysis module
// ABOUTME: Produces "N/A" sentinels for undefined values, never NaN or Infinity
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Display formatting for durations and paces.
//!
//! Formatted strings cross into UI rendering and external prompt building
//! verbatim, so the formats here are a stable contract: `H:MM:SS` / `M:SS`
//! for durations, `M:SS` per kilometer for paces, `"N/A"` for undefined
//! values.

/// Format a duration in seconds as `H:MM:SS`, or `M:SS` under an hour.
///
/// Non-finite or negative inputs render as `"N/A"`.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "N/A".to_owned();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_seconds = seconds.round() as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Format a pace in seconds per kilometer as `M:SS`.
///
/// Non-positive or non-finite paces render as `"N/A"`.
#[must_use]
pub fn format_pace(seconds_per_km: f64) -> String {
    if !seconds_per_km.is_finite() || seconds_per_km <= 0.0 {
        return "N/A".to_owned();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_seconds = seconds_per_km.round() as u64;
    let minutes = total_seconds / 60;
    let secs = total_seconds % 60;

    format!("{minutes}:{secs:02}")
}
