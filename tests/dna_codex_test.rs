// ABOUTME: Unit tests for DNA code encoding, decoding, and codex generation
// ABOUTME: Covers round-trips over the whole code space and malformed-input handling
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashSet;

use strideprint::intelligence::dna_codex::{decode, encode, generate_codex};
use strideprint::intelligence::{Archetype, TraitScores};

#[test]
fn encode_orders_digits_by_axis() {
    let scores = TraitScores::new(1, 2, 3, 4, 5).unwrap();
    assert_eq!(encode(&scores).unwrap(), "SP-12345");
}

#[test]
fn every_code_round_trips_and_is_unique() {
    let mut seen = HashSet::new();
    for c in 1..=5 {
        for s in 1..=5 {
            for e in 1..=5 {
                for v in 1..=5 {
                    for vol in 1..=5 {
                        let scores = TraitScores::new(c, s, e, v, vol).unwrap();
                        let code = encode(&scores).unwrap();
                        assert!(seen.insert(code.clone()), "duplicate code {code}");
                        assert_eq!(decode(&code).unwrap(), scores);
                    }
                }
            }
        }
    }
    assert_eq!(seen.len(), 3125);
}

#[test]
fn decode_rejects_malformed_codes() {
    assert!(decode("").is_none());
    assert!(decode("12345").is_none());
    assert!(decode("SP-1234").is_none());
    assert!(decode("SP-123456").is_none());
    assert!(decode("SP-12340").is_none());
    assert!(decode("SP-12346").is_none());
    assert!(decode("SP-1234x").is_none());
    assert!(decode("sp-12345").is_none());
}

#[test]
fn codex_covers_the_full_code_space_once() {
    let codex = generate_codex();
    assert_eq!(codex.total_codes, 3125);
    assert_eq!(codex.groups.len(), Archetype::all().len());

    let counted: usize = codex.groups.iter().map(|g| g.count).sum();
    assert_eq!(counted, 3125);

    let mut all_codes = HashSet::new();
    for group in &codex.groups {
        assert_eq!(group.count, group.codes.len());
        for code in &group.codes {
            assert!(all_codes.insert(code.clone()));
            // Every listed code classifies back into its own group
            let scores = decode(code).unwrap();
            assert_eq!(
                strideprint::intelligence::personality::archetype_for(&scores),
                group.archetype
            );
        }
    }
    assert_eq!(all_codes.len(), 3125);
}

#[test]
fn codex_groups_follow_archetype_declaration_order() {
    let codex = generate_codex();
    let order: Vec<Archetype> = codex.groups.iter().map(|g| g.archetype).collect();
    assert_eq!(order, Archetype::all().to_vec());
}

#[test]
fn group_percentile_bounds_bracket_their_members() {
    let codex = generate_codex();
    for group in &codex.groups {
        if group.count == 0 {
            continue;
        }
        assert!(group.percentile_min <= group.percentile_max);
        for code in &group.codes {
            let scores = decode(code).unwrap();
            let p = strideprint::intelligence::personality::percentile_for(&scores);
            assert!(p >= group.percentile_min && p <= group.percentile_max);
        }
    }
}
