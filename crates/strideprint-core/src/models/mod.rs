// ABOUTME: Core data models for the analytics engine
// ABOUTME: Re-exports the run record types consumed by every analysis module
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

//! Core data models shared across the engine.

/// Normalized run record produced by the upstream activity normalizer
pub mod run;

pub use run::{RunEntry, RunLocation};
