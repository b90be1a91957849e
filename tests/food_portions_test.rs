// ABOUTME: Integration tests for food portion scaling and daily intake summaries
// ABOUTME: Covers weight and unit foods, meal totals, date filtering, and catalog search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::{assert_close, catalog, chicken_breast, egg, oatmeal};
use fitlog::intelligence::food_portions::{
    daily_summary, log_food, meal_totals, rescale_food, scale_food, search_foods,
};
use fitlog::intelligence::NutritionGoalsConfig;
use fitlog::models::{MacroState, MealEntry, MealType};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn logged_day() -> Vec<MealEntry> {
    let mut breakfast = MealEntry::new("m1", MealType::Breakfast, "Breakfast");
    breakfast.foods.push(log_food(&oatmeal(), 100.0));
    breakfast.foods.push(log_food(&egg(), 2.0));

    let mut lunch = MealEntry::new("m2", MealType::Lunch, "Lunch");
    lunch.logged_at = Some(Utc.with_ymd_and_hms(2025, 3, 10, 12, 30, 0).unwrap());
    lunch.foods.push(log_food(&chicken_breast(), 200.0));

    let mut yesterday = MealEntry::new("m0", MealType::Dinner, "Dinner");
    yesterday.logged_at = Some(Utc.with_ymd_and_hms(2025, 3, 9, 19, 0, 0).unwrap());
    yesterday.foods.push(log_food(&chicken_breast(), 100.0));

    let snack = MealEntry::new("m3", MealType::Snack, "Snack");

    vec![breakfast, lunch, yesterday, snack]
}

#[test]
fn test_meal_totals_sum_scaled_foods() {
    let meals = logged_day();
    let breakfast = meal_totals(&meals[0]);
    assert_close(breakfast.calories, 389.0 + 144.0);
    assert_close(breakfast.protein_g, 16.9 + 12.6);
    assert_close(breakfast.fat_g, 6.9 + 9.6);

    let lunch = meal_totals(&meals[1]);
    assert_close(lunch.calories, 330.0);
    assert_close(lunch.protein_g, 62.0);
    assert_close(lunch.carbs_g, 0.0);
}

#[test]
fn test_daily_summary_against_default_goal() {
    let goal = NutritionGoalsConfig::default().default_goal();
    assert_eq!(goal, MacroState::new(1680.0, 126.0, 168.0, 56.0));

    let summary = daily_summary(day(), &logged_day(), &goal);
    assert_close(summary.consumed.calories, 863.0);
    assert_close(summary.consumed.protein_g, 91.5);
    assert_close(summary.calories_remaining, 817.0);
    assert_close(summary.progress.calories_percent, 51.4);
    assert_close(summary.progress.protein_percent, 72.6);
    assert_eq!(summary.meals_logged, 2);
}

#[test]
fn test_calories_remaining_goes_negative_when_over() {
    let goal = MacroState::new(500.0, 0.0, 0.0, 0.0);
    let summary = daily_summary(day(), &logged_day(), &goal);
    assert_close(summary.calories_remaining, -363.0);
    assert_eq!(summary.progress.protein_percent, 0.0);
}

#[test]
fn test_rescale_keeps_base_values() {
    let mut item = log_food(&chicken_breast(), 100.0);
    rescale_food(&mut item, 150.0);
    assert_close(item.consumed.calories, 248.0);
    assert_close(item.consumed.protein_g, 46.5);
    assert_eq!(item.base_calories, 165.0);

    rescale_food(&mut item, -20.0);
    assert_eq!(item.amount, 0.0);
    assert_close(item.consumed.calories, 0.0);
}

#[test]
fn test_scale_food_unit_foods_multiply_by_count() {
    let item = log_food(&egg(), 1.0);
    let half_dozen = scale_food(&item, 6.0);
    assert_close(half_dozen.calories, 432.0);
    assert_close(half_dozen.fat_g, 28.8);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let catalog = catalog();
    let hits = search_foods(&catalog, "  CHICK ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "chicken");

    assert_eq!(search_foods(&catalog, "").len(), catalog.len());
    assert!(search_foods(&catalog, "tofu").is_empty());
}
