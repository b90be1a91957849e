// ABOUTME: Food portion scaling, meal totals, and daily intake summaries
// ABOUTME: Converts catalog foods to logged portions and compares intake against the goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food portions and daily intake
//!
//! Catalog foods carry nutrients per serving. Logging a food scales those
//! base values to the consumed amount: weight-measured foods scale by
//! `amount / serving_size`, unit-measured foods by the number of units.
//! Meal and daily totals are plain sums of the logged portions.

use crate::macro_solver::coerce_value;
use chrono::NaiveDate;
use fitlog_core::models::{
    CatalogFood, FoodItem, MacroState, MealEntry, MeasurementType, NutrientTotals,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serving size assumed when a weight-measured food has none (nutrients per 100 g)
pub const DEFAULT_SERVING_SIZE_G: f64 = 100.0;

/// Default amount logged when a food is first added to a meal
pub const DEFAULT_LOGGED_AMOUNT_G: f64 = 100.0;

/// Multiplier applied to per-serving nutrients for `amount`
#[must_use]
pub fn scale_factor(measurement_type: MeasurementType, serving_size: f64, amount: f64) -> f64 {
    let amount = coerce_value(amount);
    match measurement_type {
        MeasurementType::Unit => amount,
        MeasurementType::Weight => {
            let serving = if serving_size.is_finite() && serving_size > 0.0 {
                serving_size
            } else {
                DEFAULT_SERVING_SIZE_G
            };
            amount / serving
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn scaled_totals(
    base: NutrientTotals,
    measurement_type: MeasurementType,
    serving_size: f64,
    amount: f64,
) -> NutrientTotals {
    let factor = scale_factor(measurement_type, serving_size, amount);
    NutrientTotals {
        calories: (base.calories * factor).round(),
        protein_g: round_to_tenth(base.protein_g * factor),
        carbs_g: round_to_tenth(base.carbs_g * factor),
        fat_g: round_to_tenth(base.fat_g * factor),
    }
}

/// Log `amount` of a catalog food (grams for weight foods, count for unit foods)
#[must_use]
pub fn log_food(food: &CatalogFood, amount: f64) -> FoodItem {
    let base = NutrientTotals {
        calories: food.calories.map_or(0.0, coerce_value),
        protein_g: food.protein_g.map_or(0.0, coerce_value),
        carbs_g: food.carbs_g.map_or(0.0, coerce_value),
        fat_g: food.fat_g.map_or(0.0, coerce_value),
    };
    let amount = coerce_value(amount);
    let unit = match food.measurement_type {
        MeasurementType::Weight => food.serving_unit.clone(),
        MeasurementType::Unit => "unit".to_owned(),
    };

    FoodItem {
        id: Uuid::new_v4().to_string(),
        food_id: food.id.clone(),
        name: food.name.clone(),
        amount,
        unit,
        serving_size: food.serving_size,
        measurement_type: food.measurement_type,
        base_calories: base.calories,
        base_protein_g: base.protein_g,
        base_carbs_g: base.carbs_g,
        base_fat_g: base.fat_g,
        consumed: scaled_totals(base, food.measurement_type, food.serving_size, amount),
        category: food.category.clone(),
    }
}

/// Nutrients of `amount` of a logged food, from its per-serving base values
#[must_use]
pub fn scale_food(item: &FoodItem, amount: f64) -> NutrientTotals {
    let base = NutrientTotals {
        calories: item.base_calories,
        protein_g: item.base_protein_g,
        carbs_g: item.base_carbs_g,
        fat_g: item.base_fat_g,
    };
    scaled_totals(base, item.measurement_type, item.serving_size, amount)
}

/// Change the consumed amount of a logged food, recomputing its nutrients
pub fn rescale_food(item: &mut FoodItem, amount: f64) {
    item.amount = coerce_value(amount);
    item.consumed = scale_food(item, item.amount);
}

/// Sum of every food logged in a meal
#[must_use]
pub fn meal_totals(meal: &MealEntry) -> NutrientTotals {
    meal.foods.iter().map(|food| food.consumed).sum()
}

/// Progress toward each part of the goal, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Calories consumed / goal
    pub calories_percent: f64,
    /// Protein consumed / goal
    pub protein_percent: f64,
    /// Carbohydrates consumed / goal
    pub carbs_percent: f64,
    /// Fat consumed / goal
    pub fat_percent: f64,
}

/// Intake for one day compared with the nutrition goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Day summarized
    pub date: NaiveDate,
    /// Goal the intake is compared with
    pub goal: MacroState,
    /// Total consumed across the day's meals
    pub consumed: NutrientTotals,
    /// Goal calories minus consumed calories (negative when over)
    pub calories_remaining: f64,
    /// Percent of each goal reached
    pub progress: GoalProgress,
    /// Meals with at least one food logged
    pub meals_logged: usize,
}

fn percent_of(consumed: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        round_to_tenth(consumed / goal * 100.0)
    } else {
        0.0
    }
}

/// Summarize the meals of `date` against `goal`
///
/// Meals with a timestamp on another day are ignored; meals without a
/// timestamp are assumed to belong to `date`.
#[must_use]
pub fn daily_summary(date: NaiveDate, meals: &[MealEntry], goal: &MacroState) -> DailySummary {
    let todays_meals: Vec<&MealEntry> = meals
        .iter()
        .filter(|meal| meal.logged_at.is_none_or(|at| at.date_naive() == date))
        .collect();

    let consumed: NutrientTotals = todays_meals.iter().map(|meal| meal_totals(meal)).sum();
    let meals_logged = todays_meals.iter().filter(|meal| meal.has_food()).count();

    DailySummary {
        date,
        goal: *goal,
        consumed,
        calories_remaining: goal.calories - consumed.calories,
        progress: GoalProgress {
            calories_percent: percent_of(consumed.calories, goal.calories),
            protein_percent: percent_of(consumed.protein_g, goal.protein_g),
            carbs_percent: percent_of(consumed.carbs_g, goal.carbs_g),
            fat_percent: percent_of(consumed.fat_g, goal.fat_g),
        },
        meals_logged,
    }
}

/// Case-insensitive substring search over food names; empty query matches all
#[must_use]
pub fn search_foods<'a>(catalog: &'a [CatalogFood], query: &str) -> Vec<&'a CatalogFood> {
    let needle = query.trim().to_lowercase();
    catalog
        .iter()
        .filter(|food| needle.is_empty() || food.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oatmeal() -> CatalogFood {
        CatalogFood {
            id: "oatmeal".to_owned(),
            name: "Oatmeal".to_owned(),
            brand: None,
            serving_size: 100.0,
            serving_unit: "g".to_owned(),
            calories: Some(389.0),
            protein_g: Some(16.9),
            carbs_g: Some(66.3),
            fat_g: Some(6.9),
            category: Some("Grains".to_owned()),
            measurement_type: MeasurementType::Weight,
        }
    }

    #[test]
    fn test_scale_factor_weight_and_unit() {
        assert!((scale_factor(MeasurementType::Weight, 50.0, 150.0) - 3.0).abs() < f64::EPSILON);
        assert!((scale_factor(MeasurementType::Unit, 50.0, 2.0) - 2.0).abs() < f64::EPSILON);
        assert!((scale_factor(MeasurementType::Weight, 0.0, 50.0) - 0.5).abs() < f64::EPSILON);
        assert!(scale_factor(MeasurementType::Weight, 100.0, -5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_log_food_scales_nutrients() {
        let item = log_food(&oatmeal(), 200.0);
        assert!((item.consumed.calories - 778.0).abs() < f64::EPSILON);
        assert!((item.consumed.protein_g - 33.8).abs() < 1e-9);
        assert!((item.consumed.carbs_g - 132.6).abs() < 1e-9);
        assert!((item.base_calories - 389.0).abs() < f64::EPSILON);
        assert_eq!(item.unit, "g");
    }

    #[test]
    fn test_rescale_food_updates_consumed() {
        let mut item = log_food(&oatmeal(), 200.0);
        rescale_food(&mut item, 100.0);
        assert!((item.amount - 100.0).abs() < f64::EPSILON);
        assert!((item.consumed.calories - 389.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_food_unit_measurement() {
        let egg = CatalogFood {
            id: "egg".to_owned(),
            name: "Egg".to_owned(),
            serving_size: 1.0,
            serving_unit: "unit".to_owned(),
            calories: Some(72.0),
            protein_g: Some(6.3),
            measurement_type: MeasurementType::Unit,
            ..oatmeal()
        };
        let item = log_food(&egg, 1.0);
        let three = scale_food(&item, 3.0);
        assert!((three.calories - 216.0).abs() < f64::EPSILON);
        assert!((three.protein_g - 18.9).abs() < 1e-9);
        assert_eq!(item.unit, "unit");
    }

    #[test]
    fn test_percent_of_zero_goal() {
        assert!(percent_of(100.0, 0.0).abs() < f64::EPSILON);
        assert!((percent_of(50.0, 200.0) - 25.0).abs() < f64::EPSILON);
    }
}
