// ABOUTME: Nutrition goal defaults loaded from the environment with validation
// ABOUTME: Provides the default preset and calorie target used when a user has no saved goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Goals Configuration
//!
//! Defaults are compiled in and can be overridden through environment variables:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `NUTRITION_DEFAULT_PRESET` | `default_preset` |
//! | `NUTRITION_DEFAULT_CALORIES` | `default_calories` |
//! | `NUTRITION_MAX_CALORIES` | `max_calories` |

pub mod error;

pub use error::ConfigError;

use crate::macro_solver::apply_preset;
use crate::presets::MacroPresetKind;
use fitlog_core::constants::goal_defaults::{DEFAULT_DAILY_CALORIES, MAX_DAILY_CALORIES};
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::MacroState;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static NUTRITION_GOALS_CONFIG: OnceLock<NutritionGoalsConfig> = OnceLock::new();

/// Defaults for nutrition goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoalsConfig {
    /// Preset applied to a user with no saved goal
    pub default_preset: MacroPresetKind,
    /// Daily calorie target applied to a user with no saved goal
    pub default_calories: f64,
    /// Upper bound accepted for a daily calorie target
    pub max_calories: f64,
}

impl Default for NutritionGoalsConfig {
    fn default() -> Self {
        Self {
            default_preset: MacroPresetKind::default(),
            default_calories: DEFAULT_DAILY_CALORIES,
            max_calories: MAX_DAILY_CALORIES,
        }
    }
}

impl NutritionGoalsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_GOALS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition goals config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for calorie bounds outside
    /// `0 < default_calories <= max_calories <= MAX_DAILY_CALORIES`, or the
    /// preset validation error of any built-in preset
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_calories.is_finite()
            || self.max_calories <= 0.0
            || self.max_calories > MAX_DAILY_CALORIES
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "max_calories must be in (0, {MAX_DAILY_CALORIES}], got {}",
                self.max_calories
            )));
        }

        if !self.default_calories.is_finite()
            || self.default_calories <= 0.0
            || self.default_calories > self.max_calories
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "default_calories must be in (0, {}], got {}",
                self.max_calories, self.default_calories
            )));
        }

        for kind in MacroPresetKind::ALL {
            kind.preset().validate()?;
        }
        Ok(())
    }

    /// Reject a calorie target above `max_calories`
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` with the offending and maximum values as details
    pub fn check_calories(&self, calories: f64) -> AppResult<()> {
        if calories > self.max_calories {
            return Err(AppError::out_of_range(format!(
                "Daily calorie goal {calories} exceeds the maximum of {}",
                self.max_calories
            ))
            .with_details(json!({
                "calories": calories,
                "max_calories": self.max_calories,
            })));
        }
        Ok(())
    }

    /// Goal assigned to a user who has never saved one
    #[must_use]
    pub fn default_goal(&self) -> MacroState {
        apply_preset(&self.default_preset.preset(), self.default_calories)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("NUTRITION_DEFAULT_PRESET", &mut self.default_preset)?;
        Self::apply_env_var("NUTRITION_DEFAULT_CALORIES", &mut self.default_calories)?;
        Self::apply_env_var("NUTRITION_MAX_CALORIES", &mut self.max_calories)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = NutritionGoalsConfig::default();
        config.validate().unwrap();
        assert_eq!(config.default_preset, MacroPresetKind::Maintenance);
    }

    #[test]
    fn test_default_goal_uses_preset() {
        let goal = NutritionGoalsConfig::default().default_goal();
        // 1680 kcal maintenance: 126 g protein, 168 g carbs, 56 g fat
        assert_eq!(goal, MacroState::new(1680.0, 126.0, 168.0, 56.0));
    }

    #[test]
    fn test_check_calories_enforces_maximum() {
        let config = NutritionGoalsConfig {
            max_calories: 4000.0,
            ..NutritionGoalsConfig::default()
        };
        assert!(config.check_calories(4000.0).is_ok());
        let err = config.check_calories(4001.0).unwrap_err();
        assert_eq!(err.code, fitlog_core::errors::ErrorCode::ValueOutOfRange);
        assert_eq!(err.details["max_calories"], 4000.0);
    }

    #[test]
    fn test_default_calories_above_max_rejected() {
        let config = NutritionGoalsConfig {
            default_calories: 5000.0,
            max_calories: 4000.0,
            ..NutritionGoalsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
