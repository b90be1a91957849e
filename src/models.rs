// ABOUTME: Nutrition data models re-exported from fitlog-core
// ABOUTME: Goal state, macro fields, catalog foods, logged portions, and meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `MacroState`: a daily goal (calories plus protein, carbs, and fat grams)
//! - `MacroField`: one of the four goal fields
//! - `CatalogFood` / `FoodItem`: catalog entry and a logged portion of it
//! - `MealEntry`: a meal and its logged foods

pub use fitlog_core::models::*;
