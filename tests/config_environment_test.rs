// ABOUTME: Unit tests for environment-driven configuration
// ABOUTME: Covers client settings, nutrition goal defaults, and logging configuration overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitlog::config::{ClientConfig, ConfigError, Environment, NutritionGoalsConfig};
use fitlog::errors::ErrorCode;
use fitlog::intelligence::MacroPresetKind;
use fitlog::logging::{LogFormat, LoggingConfig};
use fitlog::models::MacroState;
use serial_test::serial;
use std::env;
use std::time::Duration;

const CLIENT_VARS: [&str; 3] = [
    "FITLOG_API_URL",
    "FITLOG_ACCESS_TOKEN",
    "FITLOG_HTTP_TIMEOUT_SECS",
];

const NUTRITION_VARS: [&str; 3] = [
    "NUTRITION_DEFAULT_PRESET",
    "NUTRITION_DEFAULT_CALORIES",
    "NUTRITION_MAX_CALORIES",
];

fn clear(vars: &[&str]) {
    for var in vars {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("TESTING"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
#[serial]
fn test_client_config_defaults() {
    clear(&CLIENT_VARS);
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
    assert!(config.access_token.is_none());
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(
        config.endpoint("/api/nutrition/goals"),
        "http://localhost:3000/api/nutrition/goals"
    );
}

#[test]
#[serial]
fn test_client_config_from_env_overrides() {
    clear(&CLIENT_VARS);
    env::set_var("FITLOG_API_URL", "https://api.example.com/v2/");
    env::set_var("FITLOG_ACCESS_TOKEN", "secret-token");
    env::set_var("FITLOG_HTTP_TIMEOUT_SECS", "5");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.access_token.as_deref(), Some("secret-token"));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.endpoint("api/foods"),
        "https://api.example.com/v2/api/foods"
    );
    assert!(!format!("{config:?}").contains("secret-token"));

    clear(&CLIENT_VARS);
}

#[test]
#[serial]
fn test_client_config_blank_token_is_none() {
    clear(&CLIENT_VARS);
    env::set_var("FITLOG_ACCESS_TOKEN", "   ");
    assert!(ClientConfig::from_env().unwrap().access_token.is_none());
    clear(&CLIENT_VARS);
}

#[test]
#[serial]
fn test_client_config_rejects_bad_values() {
    clear(&CLIENT_VARS);
    env::set_var("FITLOG_HTTP_TIMEOUT_SECS", "0");
    let err = ClientConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    env::set_var("FITLOG_HTTP_TIMEOUT_SECS", "soon");
    assert!(ClientConfig::from_env().is_err());

    env::remove_var("FITLOG_HTTP_TIMEOUT_SECS");
    env::set_var("FITLOG_API_URL", "ftp://files.example.com");
    let err = ClientConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear(&CLIENT_VARS);
}

#[test]
#[serial]
fn test_nutrition_config_env_overrides() {
    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_DEFAULT_PRESET", "keto");
    env::set_var("NUTRITION_DEFAULT_CALORIES", "2000");

    let config = NutritionGoalsConfig::load().unwrap();
    assert_eq!(config.default_preset, MacroPresetKind::Keto);
    assert_eq!(
        config.default_goal(),
        MacroState::new(2000.0, 100.0, 25.0, 167.0)
    );

    clear(&NUTRITION_VARS);
}

#[test]
#[serial]
fn test_nutrition_config_invalid_preset() {
    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_DEFAULT_PRESET", "carnivore");
    let err = NutritionGoalsConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    clear(&NUTRITION_VARS);
}

#[test]
#[serial]
fn test_nutrition_config_default_above_max() {
    clear(&NUTRITION_VARS);
    env::set_var("NUTRITION_DEFAULT_CALORIES", "3500");
    env::set_var("NUTRITION_MAX_CALORIES", "3000");
    let err = NutritionGoalsConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    clear(&NUTRITION_VARS);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("RUST_LOG", "debug");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.level, "debug");
    assert!(config.include_location);
    assert!(config.include_spans);

    env::remove_var("LOG_FORMAT");
    env::remove_var("RUST_LOG");
    env::remove_var("ENVIRONMENT");
}
