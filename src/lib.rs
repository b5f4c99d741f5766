// ABOUTME: Main library entry point for the Strideprint analytics engine
// ABOUTME: Pure, deterministic run-history analysis producing the IntelligenceData aggregate
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

#![deny(unsafe_code)]

//! # Strideprint
//!
//! A pure, deterministic analytics engine for running history. Given a list
//! of normalized run records and a lifetime total distance, the engine
//! derives descriptive and predictive analytics: a personality-style
//! classification of training behavior, injury-risk load ratios, race-time
//! predictions, recovery patterns, and a same-day training recommendation.
//!
//! ## Design
//!
//! - **Pure functions only**: every component is a function of its explicit
//!   inputs, including an explicit "now" timestamp wherever recency matters.
//!   No I/O, no clock reads, no shared state.
//! - **Insufficient data never panics**: each module degrades to a documented
//!   empty/zero result so consumers can render "not enough data yet".
//! - **JSON-stable output**: the [`intelligence::IntelligenceData`] aggregate
//!   serializes to camelCase field names consumed verbatim by dashboard and
//!   prompt-building collaborators.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use strideprint::intelligence::IntelligenceEngine;
//!
//! let engine = IntelligenceEngine::new();
//! let data = engine.analyze(&[], 0.0, Utc::now());
//! assert_eq!(data.total_runs, 0);
//! assert!(data.race_predictions.is_empty());
//! ```

/// Analytics computation engine: aggregators, training load, personality,
/// race prediction, recovery, milestones, today's plan, coach advice, and
/// the DNA codex
pub mod intelligence;

pub use strideprint_core::{
    constants, errors, formatters, models, AppError, AppResult, ErrorCode, RunEntry, RunLocation,
};
