// ABOUTME: Nutrition goal and intake models for macro tracking
// ABOUTME: MacroField, MacroState, NutrientTotals, FoodItem, CatalogFood, and MealEntry definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// One of the four editable fields of a nutrition goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MacroField {
    /// Total daily energy (kcal)
    Calories,
    /// Protein (grams)
    Protein,
    /// Carbohydrates (grams)
    Carbs,
    /// Fat (grams)
    Fat,
}

impl MacroField {
    /// All fields in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// The three gram-valued macros
    pub const MACROS: [Self; 3] = [Self::Protein, Self::Carbs, Self::Fat];

    /// Energy density of the field, `None` for calories
    #[must_use]
    pub const fn kcal_per_gram(self) -> Option<f64> {
        match self {
            Self::Calories => None,
            Self::Protein => Some(KCAL_PER_GRAM_PROTEIN),
            Self::Carbs => Some(KCAL_PER_GRAM_CARBS),
            Self::Fat => Some(KCAL_PER_GRAM_FAT),
        }
    }

    /// Wire name of the field
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
        }
    }
}

impl fmt::Display for MacroField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MacroField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calories" | "kcal" => Ok(Self::Calories),
            "protein" => Ok(Self::Protein),
            "carbs" | "carbohydrates" => Ok(Self::Carbs),
            "fat" => Ok(Self::Fat),
            other => Err(AppError::invalid_input(format!(
                "Unknown nutrition field '{other}' (expected calories, protein, carbs or fat)"
            ))),
        }
    }
}

/// A daily nutrition goal: calories plus the three macros in grams
///
/// Outside of an in-progress edit the values satisfy the caloric identity
/// `calories ≈ 4·protein + 4·carbs + 9·fat` within rounding tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroState {
    /// Daily calories (kcal)
    pub calories: f64,
    /// Daily protein (grams)
    pub protein_g: f64,
    /// Daily carbohydrates (grams)
    pub carbs_g: f64,
    /// Daily fat (grams)
    pub fat_g: f64,
}

impl MacroState {
    /// Build a state from its four values
    #[must_use]
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// Read one field
    #[must_use]
    pub const fn get(&self, field: MacroField) -> f64 {
        match field {
            MacroField::Calories => self.calories,
            MacroField::Protein => self.protein_g,
            MacroField::Carbs => self.carbs_g,
            MacroField::Fat => self.fat_g,
        }
    }

    /// Copy of this state with one field replaced
    #[must_use]
    pub fn with_field(mut self, field: MacroField, value: f64) -> Self {
        match field {
            MacroField::Calories => self.calories = value,
            MacroField::Protein => self.protein_g = value,
            MacroField::Carbs => self.carbs_g = value,
            MacroField::Fat => self.fat_g = value,
        }
        self
    }

    /// Calories implied by the macros
    #[must_use]
    pub fn calories_from_macros(&self) -> f64 {
        self.fat_g.mul_add(
            KCAL_PER_GRAM_FAT,
            self.protein_g
                .mul_add(KCAL_PER_GRAM_PROTEIN, self.carbs_g * KCAL_PER_GRAM_CARBS),
        )
    }

    /// Whether stored calories match the macros within `tolerance_kcal`
    #[must_use]
    pub fn is_consistent(&self, tolerance_kcal: f64) -> bool {
        (self.calories - self.calories_from_macros()).abs() <= tolerance_kcal
    }
}

/// Summed nutrients of logged food (not rounded to whole grams)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

impl Add for NutrientTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// How a food's serving is measured
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    /// Nutrients are given per `serving_size` grams/ml
    #[default]
    Weight,
    /// Nutrients are given per single unit (one egg, one bar)
    Unit,
}

/// Food as stored in the backend catalog (nutrients per serving)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFood {
    /// Catalog id
    pub id: String,
    /// Food name
    pub name: String,
    /// Brand name (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Serving size the nutrients refer to
    pub serving_size: f64,
    /// Serving unit (g, ml, piece, ...)
    pub serving_unit: String,
    /// Calories per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein per serving (grams)
    #[serde(rename = "protein", default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates per serving (grams)
    #[serde(rename = "carbs", default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat per serving (grams)
    #[serde(rename = "fat", default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// Display category (Protein, Carbs, Dairy, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Weight or unit based serving
    #[serde(default)]
    pub measurement_type: MeasurementType,
}

/// A food logged into a meal, with both per-serving and consumed nutrients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Log entry id
    pub id: String,
    /// Catalog id of the food
    pub food_id: String,
    /// Food name
    pub name: String,
    /// Consumed amount (grams for weight foods, count for unit foods)
    pub amount: f64,
    /// Unit label for `amount`
    pub unit: String,
    /// Serving size the base values refer to
    pub serving_size: f64,
    /// Weight or unit based serving
    pub measurement_type: MeasurementType,
    /// Calories per serving
    pub base_calories: f64,
    /// Protein per serving (grams)
    pub base_protein_g: f64,
    /// Carbohydrates per serving (grams)
    pub base_carbs_g: f64,
    /// Fat per serving (grams)
    pub base_fat_g: f64,
    /// Nutrients for the consumed amount
    pub consumed: NutrientTotals,
    /// Display category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" | "snacks" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// A meal with its logged foods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealEntry {
    /// Meal id
    pub id: String,
    /// Meal type
    pub meal_type: MealType,
    /// Display name
    pub name: String,
    /// When the meal was logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logged_at: Option<DateTime<Utc>>,
    /// Logged foods
    #[serde(default)]
    pub foods: Vec<FoodItem>,
}

impl MealEntry {
    /// Empty meal of the given type
    pub fn new(id: impl Into<String>, meal_type: MealType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meal_type,
            name: name.into(),
            logged_at: None,
            foods: Vec::new(),
        }
    }

    /// Whether any food has been logged
    #[must_use]
    pub fn has_food(&self) -> bool {
        !self.foods.is_empty()
    }
}
