// ABOUTME: Core types and constants for the Strideprint running analytics engine
// ABOUTME: Foundation crate with error handling, run models, formatters, and constants
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Strideprint

#![deny(unsafe_code)]

//! # Strideprint Core
//!
//! Foundation crate providing shared types and constants for the Strideprint
//! running analytics engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Sports-science constants and fixed thresholds organized by domain
//! - **models**: Run record input model (`RunEntry`)
//! - **formatters**: Time and pace display formatting with "N/A" sentinels

/// Unified error handling system with standard error codes
pub mod errors;

/// Sports-science constants and fixed thresholds organized by domain
pub mod constants;

/// Run record input model
pub mod models;

/// Time and pace display formatting
pub mod formatters;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{RunEntry, RunLocation};
