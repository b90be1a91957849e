// ABOUTME: Decoder for fitness backend responses that may or may not be wrapped in an envelope
// ABOUTME: Accepts `{data, error, message}` envelopes as well as bare JSON payloads
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Backend response envelope
//!
//! The backend answers either with the payload itself or with
//! `{"data": ..., "error": "...", "message": "..."}`. An envelope carrying
//! `error` is a failure regardless of the HTTP status.

use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{data, error, message}` response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error text set by the backend on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable status message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn is_envelope(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key("data") || object.contains_key("error"))
}

/// Decode a response body into its payload
///
/// Returns `Ok(None)` for an envelope whose `data` is missing or null.
///
/// # Errors
///
/// Returns `ExternalServiceError` if the envelope carries an `error`, and
/// `SerializationError` if the body or payload is not valid JSON of type `T`
pub fn decode_response<T: DeserializeOwned>(body: &str) -> AppResult<Option<T>> {
    let value: Value = serde_json::from_str(body)?;

    if !is_envelope(&value) {
        return Ok(Some(serde_json::from_value(value)?));
    }

    let envelope: ApiEnvelope<Value> = serde_json::from_value(value)?;
    if let Some(error) = envelope.error {
        let text = match envelope.message {
            Some(message) if message != error => format!("{error}: {message}"),
            _ => error,
        };
        return Err(AppError::external_service(service_names::FITNESS_API, text));
    }

    match envelope.data {
        None | Some(Value::Null) => Ok(None),
        Some(data) => Ok(Some(serde_json::from_value(data)?)),
    }
}

/// Error text carried by a failure body, if it is an envelope with `error` or `message`
#[must_use]
pub fn error_text(body: &str) -> Option<String> {
    let envelope: ApiEnvelope<Value> = serde_json::from_str(body).ok()?;
    envelope.error.or(envelope.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_bare_and_wrapped_payloads() {
        let bare: Option<Item> = decode_response(r#"{"id": 7}"#).unwrap();
        let wrapped: Option<Item> = decode_response(r#"{"data": {"id": 7}}"#).unwrap();
        assert_eq!(bare, Some(Item { id: 7 }));
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_envelope_error_maps_to_external_service() {
        let err = decode_response::<Item>(r#"{"error": "Goal not set", "message": "try later"}"#)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert!(err.message.contains("Goal not set: try later"));
    }

    #[test]
    fn test_null_data_is_none() {
        let decoded: Option<Item> = decode_response(r#"{"data": null, "message": "ok"}"#).unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn test_error_text() {
        assert_eq!(
            error_text(r#"{"message": "Unauthorized"}"#).as_deref(),
            Some("Unauthorized")
        );
        assert!(error_text("<html>").is_none());
    }
}
