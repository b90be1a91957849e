// ABOUTME: Core data models shared across the Fitlog workspace
// ABOUTME: Re-exports nutrition goal, food, and meal types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrition goal, food, and meal models
pub mod nutrition;

pub use nutrition::{
    CatalogFood, FoodItem, MacroField, MacroState, MealEntry, MealType, MeasurementType,
    NutrientTotals,
};
