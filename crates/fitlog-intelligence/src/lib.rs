// ABOUTME: Nutrition goal algorithms for the Fitlog platform
// ABOUTME: Macro solver, presets, goal editing sessions, and food portion math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitlog Intelligence
//!
//! Pure, synchronous nutrition goal logic. Nothing in this crate performs I/O;
//! persistence and transport live in the `fitlog` crate.
//!
//! ## Modules
//!
//! - **`macro_solver`**: Recompute a goal after one field is edited
//! - **presets**: Built-in and custom macro calorie splits
//! - **`goal_session`**: Viewing/Editing state machine around the solver
//! - **`food_portions`**: Portion scaling, meal totals, and daily summaries
//! - **config**: Environment-driven nutrition goal defaults

/// Nutrition goal configuration
pub mod config;

/// Food portion scaling and daily intake summaries
pub mod food_portions;

/// Goal editing session state machine
pub mod goal_session;

/// Macro goal recomputation
pub mod macro_solver;

/// Macro calorie presets
pub mod presets;

pub use config::{ConfigError, NutritionGoalsConfig};
pub use food_portions::{
    daily_summary, log_food, meal_totals, rescale_food, scale_food, search_foods, DailySummary,
    GoalProgress,
};
pub use goal_session::{GoalSession, SessionState};
pub use macro_solver::{apply_preset, coerce_input, coerce_value, recompute};
pub use presets::{MacroPreset, MacroPresetKind};
