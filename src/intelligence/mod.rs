// ABOUTME: Intelligence module re-exports from fitlog-intelligence crate
// ABOUTME: Preserves `crate::intelligence::*` import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Nutrition goal algorithms. Everything here is synchronous and free of I/O.

// Re-export all public items from fitlog-intelligence
pub use fitlog_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::macro_solver::recompute)
pub use fitlog_intelligence::{config, food_portions, goal_session, macro_solver, presets};
