// ABOUTME: Error handling re-exports from fitlog-core
// ABOUTME: Keeps `crate::errors::*` import paths stable for the binary and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError` carries an `ErrorCode` (with HTTP status and description), a
//! message, and an optional source. Configuration errors from the
//! intelligence crate convert into `AppError` with the config error codes.

pub use fitlog_core::errors::*;
pub use fitlog_intelligence::config::ConfigError;
