// ABOUTME: Main library entry point for the Fitlog nutrition goal engine
// ABOUTME: Wires the solver crates to goal persistence, the fitness API client, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitlog
//!
//! Nutrition goal engine for a fitness tracking app. A user's daily goal is a
//! calorie target plus protein, carbohydrate, and fat grams. Editing any one of
//! them recomputes the others so that the caloric identity
//! (`4 kcal/g protein, 4 kcal/g carbs, 9 kcal/g fat`) keeps holding.
//!
//! ## Architecture
//!
//! - **intelligence**: Pure solver, presets, editing session, and portion math
//!   (re-exported from `fitlog-intelligence`)
//! - **goals**: Goal repository trait and the service tying a session to storage
//! - **external**: REST client for the fitness backend's nutrition goal endpoint
//! - **config**: Environment-driven client configuration
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitlog::goals::{GoalService, InMemoryGoalRepository};
//! use fitlog::models::MacroField;
//! use fitlog::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let mut service = GoalService::new(InMemoryGoalRepository::new());
//!     service.open("user-1").await?;
//!     service.session_mut()?.begin_edit()?;
//!     service.session_mut()?.update_field(MacroField::Calories, "2000")?;
//!     let goal = service.save().await?;
//!     println!("Saved {} kcal", goal.calories);
//!     Ok(())
//! }
//! ```

/// Client configuration loaded from the environment
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Clients for external services
pub mod external;

/// Goal persistence and the goal editing service
pub mod goals;

/// Nutrition goal algorithms
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Nutrition data models
pub mod models;
