// ABOUTME: Meal logging commands for fitlog-cli
// ABOUTME: Logs catalog foods into meals, adjusts portions, and summarizes a day against the goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use fitlog::errors::{AppError, AppResult};
use fitlog::external::{FitnessApiClient, MealSelection};
use fitlog::goals::GoalService;
use fitlog::intelligence::{daily_summary, log_food, rescale_food};
use fitlog::models::{MealEntry, MealType};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::print_json;

fn day_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

fn logged_at(date: Option<NaiveDate>) -> DateTime<Utc> {
    date.map_or_else(Utc::now, |day| day.and_time(NaiveTime::MIN).and_utc())
}

/// Print the day's intake compared with the stored goal
pub async fn summary(user: &str, date: Option<NaiveDate>) -> AppResult<()> {
    let date = day_or_today(date);
    let client = FitnessApiClient::from_env()?;
    let meals = client.list_meals(date).await?;

    let mut service = GoalService::new(client);
    let goal = *service.open(user).await?.committed();
    print_json(&daily_summary(date, &meals, &goal))
}

/// Log `amount` of a catalog food as a new meal
pub async fn add(
    meal_type: &str,
    food_id: &str,
    amount: f64,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let client = FitnessApiClient::from_env()?;
    let catalog = client.list_foods().await?;
    let food = catalog
        .iter()
        .find(|food| food.id == food_id)
        .ok_or_else(|| AppError::not_found("Food").with_resource_id(food_id))?;

    let mut meal = MealEntry::new(
        Uuid::new_v4().to_string(),
        MealType::from_str_lossy(meal_type),
        meal_type.trim(),
    );
    meal.logged_at = Some(logged_at(date));
    meal.foods.push(log_food(food, amount));

    let stored = client.create_meal(&meal).await?;
    info!(meal.id = %stored.id, food.id = %food_id, "Meal logged");
    print_json(&stored)
}

/// Change the amount of one logged food
///
/// The backend has no update endpoint, so the edited meal is stored under a
/// new id before the old one is deleted.
pub async fn adjust(
    meal_id: &str,
    item_id: &str,
    amount: f64,
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let client = FitnessApiClient::from_env()?;
    let mut meal = client
        .list_meals(day_or_today(date))
        .await?
        .into_iter()
        .find(|meal| meal.id == meal_id)
        .ok_or_else(|| AppError::not_found("Meal").with_resource_id(meal_id))?;

    let item = meal
        .foods
        .iter_mut()
        .find(|item| item.id == item_id)
        .ok_or_else(|| AppError::not_found("Logged food").with_resource_id(item_id))?;
    rescale_food(item, amount);

    meal.id = Uuid::new_v4().to_string();
    let stored = client.create_meal(&meal).await?;
    client
        .delete_meals(&MealSelection::Meal(meal_id.to_owned()))
        .await?;
    info!(meal.id = %stored.id, replaced = %meal_id, "Meal portion adjusted");
    print_json(&stored)
}

/// Delete one meal, or every meal of a day
pub async fn clear(id: Option<String>, date: Option<NaiveDate>) -> AppResult<()> {
    let selection = match id {
        Some(id) => MealSelection::Meal(id),
        None => MealSelection::Day(day_or_today(date)),
    };
    FitnessApiClient::from_env()?
        .delete_meals(&selection)
        .await?;

    match selection {
        MealSelection::Meal(id) => print_json(&json!({ "deleted_meal": id })),
        MealSelection::Day(day) => print_json(&json!({ "deleted_day": day })),
    }
}
