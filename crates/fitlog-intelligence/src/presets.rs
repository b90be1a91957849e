// ABOUTME: Macro presets: named calorie ratios for protein, carbohydrate, and fat
// ABOUTME: Five built-in presets plus validated custom presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro presets
//!
//! A preset allocates a share of total calories to each macro. The solver
//! derives grams from a preset whenever calories are edited or a preset is
//! switched, and uses the relative shares to spread a caloric delta when
//! calories are locked.

use crate::config::intelligence::ConfigError;
use fitlog_core::constants::energy::RATIO_SUM_EPSILON;
use fitlog_core::models::MacroField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named calorie split across protein, carbohydrate, and fat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroPreset {
    /// Display name
    pub name: String,
    /// Share of calories from protein (0.0-1.0)
    pub protein_ratio: f64,
    /// Share of calories from carbohydrates (0.0-1.0)
    pub carbs_ratio: f64,
    /// Share of calories from fat (0.0-1.0)
    pub fat_ratio: f64,
}

impl MacroPreset {
    /// Create a validated preset
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a ratio is outside 0.0-1.0 and
    /// `ConfigError::InvalidWeights` if the ratios do not sum to 1.0
    pub fn new(
        name: impl Into<String>,
        protein_ratio: f64,
        carbs_ratio: f64,
        fat_ratio: f64,
    ) -> Result<Self, ConfigError> {
        let preset = Self {
            name: name.into(),
            protein_ratio,
            carbs_ratio,
            fat_ratio,
        };
        preset.validate()?;
        Ok(preset)
    }

    /// Validate ratio bounds and sum
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a ratio is outside 0.0-1.0 and
    /// `ConfigError::InvalidWeights` if the ratios do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratios = [
            ("protein", self.protein_ratio),
            ("carbs", self.carbs_ratio),
            ("fat", self.fat_ratio),
        ];
        for (label, ratio) in ratios {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{} {label} ratio must be between 0.0 and 1.0, got {ratio}",
                    self.name
                )));
            }
        }

        let sum = self.ratio_sum();
        if (sum - 1.0).abs() > RATIO_SUM_EPSILON {
            return Err(ConfigError::InvalidWeights(format!(
                "{} macro ratios must sum to 1.0, got {sum}",
                self.name
            )));
        }
        Ok(())
    }

    /// Sum of the three ratios
    #[must_use]
    pub fn ratio_sum(&self) -> f64 {
        self.protein_ratio + self.carbs_ratio + self.fat_ratio
    }

    /// Ratio allocated to `field` (always 0.0 for calories)
    #[must_use]
    pub const fn ratio_for(&self, field: MacroField) -> f64 {
        match field {
            MacroField::Calories => 0.0,
            MacroField::Protein => self.protein_ratio,
            MacroField::Carbs => self.carbs_ratio,
            MacroField::Fat => self.fat_ratio,
        }
    }
}

/// The built-in presets offered by the goal editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroPresetKind {
    /// Balanced everyday eating
    #[default]
    Maintenance,
    /// Very low carbohydrate, high fat
    Keto,
    /// Muscle gain / preservation
    HighProtein,
    /// Reduced carbohydrate
    LowCarb,
    /// Carbohydrate-heavy for endurance training
    Endurance,
}

impl MacroPresetKind {
    /// Every built-in preset, in selector order
    pub const ALL: [Self; 5] = [
        Self::Maintenance,
        Self::Keto,
        Self::HighProtein,
        Self::LowCarb,
        Self::Endurance,
    ];

    /// Identifier used on the command line and in configuration
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Keto => "keto",
            Self::HighProtein => "high_protein",
            Self::LowCarb => "low_carb",
            Self::Endurance => "endurance",
        }
    }

    /// (protein, carbs, fat) calorie ratios
    #[must_use]
    pub const fn ratios(self) -> (f64, f64, f64) {
        match self {
            Self::Maintenance => (0.30, 0.40, 0.30),
            Self::Keto => (0.20, 0.05, 0.75),
            Self::HighProtein => (0.40, 0.30, 0.30),
            Self::LowCarb => (0.35, 0.20, 0.45),
            Self::Endurance => (0.20, 0.55, 0.25),
        }
    }

    /// Materialize the preset
    #[must_use]
    pub fn preset(self) -> MacroPreset {
        let (protein_ratio, carbs_ratio, fat_ratio) = self.ratios();
        MacroPreset {
            name: self.name().to_owned(),
            protein_ratio,
            carbs_ratio,
            fat_ratio,
        }
    }
}

impl fmt::Display for MacroPresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MacroPresetKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ConfigError::Parse(format!("Unknown macro preset '{s}'")))
    }
}

impl From<MacroPresetKind> for MacroPreset {
    fn from(kind: MacroPresetKind) -> Self {
        kind.preset()
    }
}
