// ABOUTME: Tests for the unified error type and its serialized shape
// ABOUTME: Checks status mapping, display text, and configuration error conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitlog::errors::{AppError, ConfigError, ErrorCode, ErrorResponse};
use serde_json::json;

#[test]
fn test_error_code_http_status() {
    assert_eq!(ErrorCode::AuthRequired.http_status(), 401);
    assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
    assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
    assert_eq!(ErrorCode::InvalidState.http_status(), 409);
    assert_eq!(ErrorCode::ExternalServiceUnavailable.http_status(), 502);
    assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
}

#[test]
fn test_app_error_display() {
    let error = AppError::external_service("Fitness API", "HTTP 500: boom");
    assert_eq!(
        error.to_string(),
        "An external service encountered an error: Fitness API: HTTP 500: boom"
    );
    assert_eq!(error.http_status(), 502);
}

#[test]
fn test_error_response_serialization() {
    let error = AppError::not_found("Nutrition goal")
        .with_resource_id("user-42")
        .with_details(json!({ "field": "protein_g" }));
    let response = ErrorResponse::from(error);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(value["error"]["message"], "Nutrition goal not found");
    assert_eq!(value["error"]["resource_id"], "user-42");
    assert_eq!(value["error"]["details"]["field"], "protein_g");
}

#[test]
fn test_error_response_omits_empty_fields() {
    let response = ErrorResponse::from(AppError::invalid_state("Not editing"));
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(
        json,
        r#"{"error":{"code":"INVALID_STATE","message":"Not editing"}}"#
    );
}

#[test]
fn test_config_error_conversion() {
    let parse: AppError = ConfigError::Parse("Invalid NUTRITION_MAX_CALORIES".to_owned()).into();
    assert_eq!(parse.code, ErrorCode::ConfigError);

    let range: AppError = ConfigError::ValueOutOfRange("max_calories".to_owned()).into();
    assert_eq!(range.code, ErrorCode::ConfigInvalid);
    assert!(std::error::Error::source(&range).is_some());

    let weights: AppError = ConfigError::InvalidWeights("ratios sum to 0.9".to_owned()).into();
    assert_eq!(weights.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_out_of_range_is_client_error() {
    let err = AppError::out_of_range("Calories 3500 exceed the maximum of 3000")
        .with_details(json!({ "calories": 3500.0 }));
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.http_status(), 400);
    assert!(err.to_string().ends_with("Calories 3500 exceed the maximum of 3000"));
}

#[test]
fn test_serde_error_conversion() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::SerializationError);
}
