// ABOUTME: Shared test utilities for the Fitlog integration tests
// ABOUTME: Quiet logging setup plus catalog, meal, and repository fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]

use async_trait::async_trait;
use fitlog::errors::{AppError, AppResult, ErrorCode};
use fitlog::goals::GoalRepository;
use fitlog::models::{CatalogFood, MacroState, MeasurementType};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Keto goal at 2000 kcal
pub const KETO_2000: MacroState = MacroState::new(2000.0, 100.0, 25.0, 167.0);

fn weight_food(id: &str, name: &str, per_100g: (f64, f64, f64, f64)) -> CatalogFood {
    let (calories, protein, carbs, fat) = per_100g;
    CatalogFood {
        id: id.to_owned(),
        name: name.to_owned(),
        brand: None,
        serving_size: 100.0,
        serving_unit: "g".to_owned(),
        calories: Some(calories),
        protein_g: Some(protein),
        carbs_g: Some(carbs),
        fat_g: Some(fat),
        category: None,
        measurement_type: MeasurementType::Weight,
    }
}

pub fn oatmeal() -> CatalogFood {
    weight_food("oatmeal", "Oatmeal", (389.0, 16.9, 66.3, 6.9))
}

pub fn chicken_breast() -> CatalogFood {
    weight_food("chicken", "Chicken Breast", (165.0, 31.0, 0.0, 3.6))
}

pub fn egg() -> CatalogFood {
    CatalogFood {
        id: "egg".to_owned(),
        name: "Large Egg".to_owned(),
        brand: None,
        serving_size: 1.0,
        serving_unit: "unit".to_owned(),
        calories: Some(72.0),
        protein_g: Some(6.3),
        carbs_g: Some(0.4),
        fat_g: Some(4.8),
        category: Some("Protein".to_owned()),
        measurement_type: MeasurementType::Unit,
    }
}

pub fn catalog() -> Vec<CatalogFood> {
    vec![oatmeal(), chicken_breast(), egg()]
}

/// Repository whose saves always fail and whose loads return a fixed goal
#[derive(Debug, Default)]
pub struct FailingGoalRepository {
    pub stored: Option<MacroState>,
    pub save_attempts: AtomicUsize,
}

#[async_trait]
impl GoalRepository for FailingGoalRepository {
    async fn load_goal(&self, _user_id: &str) -> AppResult<Option<MacroState>> {
        Ok(self.stored)
    }

    async fn save_goal(&self, _user_id: &str, _goal: &MacroState) -> AppResult<()> {
        self.save_attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::new(
            ErrorCode::ExternalServiceUnavailable,
            "Fitness API: connection refused",
        ))
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
