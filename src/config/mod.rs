// ABOUTME: Configuration module for the Fitlog client and nutrition goal defaults
// ABOUTME: Environment-driven settings for the backend client plus intelligence config re-exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Fitlog
//!
//! - **Environment**: Backend client configuration from environment variables
//! - **Intelligence**: Nutrition goal defaults (default preset and calorie bounds)

/// Environment and backend client configuration
pub mod environment;

/// Nutrition goal configuration from the intelligence crate
pub mod intelligence {
    pub use fitlog_intelligence::config::intelligence::*;
}

pub use environment::{ClientConfig, Environment};
pub use intelligence::{ConfigError, NutritionGoalsConfig};
