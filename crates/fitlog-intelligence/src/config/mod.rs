// ABOUTME: Configuration module for fitlog-intelligence crate
// ABOUTME: Re-exports nutrition goal configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrition goal configuration (default preset, calorie bounds)
pub mod intelligence;

pub use intelligence::{ConfigError, NutritionGoalsConfig};
