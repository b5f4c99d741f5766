// ABOUTME: DNA code encode/decode and full codex enumeration over all score vectors
// ABOUTME: Reversible SP-prefixed five-digit codes, archetype-grouped codex generation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! DNA codex.
//!
//! The DNA code is a deterministic bijection between the five trait scores
//! and a short string: the `"SP-"` prefix followed by five digits in fixed
//! trait order (consistency, speed, endurance, variety, volume), e.g.
//! `SP-45213`. `decode(encode(s)) == s` for every valid vector; malformed
//! input decodes to `None`, never a panic, since garbled rival codes are an
//! expected user-triggered path in the battle feature.
//!
//! [`generate_codex`] enumerates all 3125 codes and groups them by the
//! archetype they classify to. It depends only on the fixed rule table, so
//! callers may compute it once and cache it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::personality::{archetype_for, percentile_for, Archetype, TraitScores};

/// Prefix carried by every DNA code
pub const CODE_PREFIX: &str = "SP-";

/// Number of valid score vectors (5^5)
pub const CODE_SPACE: usize = 3125;

/// Encode a score vector as a DNA code.
///
/// Returns `None` when any score is outside 1-5 (sentinel, not an error:
/// out-of-range vectors are an expected caller input on the battle path).
#[must_use]
pub fn encode(scores: &TraitScores) -> Option<String> {
    let digits = scores.as_array();
    if !digits.iter().all(|d| (1..=5).contains(d)) {
        return None;
    }
    let mut code = String::with_capacity(CODE_PREFIX.len() + digits.len());
    code.push_str(CODE_PREFIX);
    for digit in digits {
        code.push(char::from(b'0' + digit));
    }
    Some(code)
}

/// Decode a DNA code back into its score vector.
///
/// Returns `None` for a wrong prefix, wrong length, or any digit outside
/// 1-5.
#[must_use]
pub fn decode(code: &str) -> Option<TraitScores> {
    let digits = code.strip_prefix(CODE_PREFIX)?;
    if digits.len() != 5 {
        return None;
    }

    let mut parsed = [0u8; 5];
    for (slot, ch) in parsed.iter_mut().zip(digits.chars()) {
        let value = ch.to_digit(10)?;
        if !(1..=5).contains(&value) {
            return None;
        }
        *slot = value as u8;
    }

    Some(TraitScores {
        consistency: parsed[0],
        speed: parsed[1],
        endurance: parsed[2],
        variety: parsed[3],
        volume: parsed[4],
    })
}

/// One archetype group in the codex
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodexGroup {
    /// The archetype this group decodes to
    pub archetype: Archetype,
    /// Archetype display name
    pub archetype_name: String,
    /// Number of codes classifying to this archetype
    pub count: usize,
    /// Lowest percentile among member vectors
    pub percentile_min: f64,
    /// Highest percentile among member vectors
    pub percentile_max: f64,
    /// Sorted member codes
    pub codes: Vec<String>,
}

/// Full enumeration of the code space grouped by archetype
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Codex {
    /// Groups in archetype rule-priority order; empty groups are retained so
    /// the browsing UI can show the full archetype set
    pub groups: Vec<CodexGroup>,
    /// Total codes across all groups; always 3125
    pub total_codes: usize,
}

/// Enumerate all 3125 score vectors, grouped by archetype.
///
/// Deterministic and independent of any user data; callers may cache the
/// result.
#[must_use]
pub fn generate_codex() -> Codex {
    let mut by_archetype: HashMap<Archetype, (Vec<String>, f64, f64)> = HashMap::new();
    let mut total = 0usize;

    for consistency in 1..=5u8 {
        for speed in 1..=5u8 {
            for endurance in 1..=5u8 {
                for variety in 1..=5u8 {
                    for volume in 1..=5u8 {
                        let scores = TraitScores {
                            consistency,
                            speed,
                            endurance,
                            variety,
                            volume,
                        };
                        let Some(code) = encode(&scores) else {
                            continue;
                        };
                        let percentile = percentile_for(&scores);
                        let entry = by_archetype
                            .entry(archetype_for(&scores))
                            .or_insert_with(|| (Vec::new(), f64::INFINITY, f64::NEG_INFINITY));
                        entry.0.push(code);
                        entry.1 = entry.1.min(percentile);
                        entry.2 = entry.2.max(percentile);
                        total += 1;
                    }
                }
            }
        }
    }

    let groups = Archetype::all()
        .into_iter()
        .map(|archetype| {
            let (mut codes, min, max) = by_archetype
                .remove(&archetype)
                .unwrap_or((Vec::new(), 0.0, 0.0));
            codes.sort_unstable();
            CodexGroup {
                archetype,
                archetype_name: archetype.name().to_owned(),
                count: codes.len(),
                percentile_min: if min.is_finite() { min } else { 0.0 },
                percentile_max: if max.is_finite() { max } else { 0.0 },
                codes,
            }
        })
        .collect();

    Codex {
        groups,
        total_codes: total,
    }
}
