// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for energy densities, endpoints, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Energy density and rounding constants for macronutrients
pub mod energy;

pub use energy::*;

/// REST endpoints of the external fitness backend
pub mod endpoints {
    /// Default backend base URL when none is configured
    pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
    /// Nutrition goal resource
    pub const NUTRITION_GOALS: &str = "/api/nutrition/goals";
    /// Food catalog resource
    pub const FOODS: &str = "/api/foods";
    /// Logged meals resource (filtered by `date` or `id`)
    pub const MEALS: &str = "/api/meals";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Library / CLI service name
    pub const FITLOG: &str = "fitlog";
    /// Name used when reporting backend errors
    pub const FITNESS_API: &str = "Fitness API";
}

/// Nutrition goal defaults
pub mod goal_defaults {
    /// Daily calorie goal used when the user has none stored
    pub const DEFAULT_DAILY_CALORIES: f64 = 1680.0;
    /// Upper bound accepted for a configured calorie goal
    pub const MAX_DAILY_CALORIES: f64 = 10_000.0;
}
