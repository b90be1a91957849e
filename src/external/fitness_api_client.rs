// ABOUTME: REST client for the fitness backend's nutrition goal, food catalog, and meal endpoints
// ABOUTME: Bearer-token auth, request timeout, envelope decoding, and a GoalRepository impl

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Fitness backend API client
//!
//! Talks to the backend the mobile and web clients use:
//!
//! - `GET  {base}/api/nutrition/goals` - committed goal of the authenticated user
//! - `PUT  {base}/api/nutrition/goals` - replace it
//! - `GET  {base}/api/foods` - food catalog
//! - `GET  {base}/api/meals?date=YYYY-MM-DD` - meals logged on a day
//! - `POST {base}/api/meals` - log a meal
//! - `DELETE {base}/api/meals?date=...` or `?id=...` - remove a day's meals or one meal
//!
//! Every request carries `Authorization: Bearer <token>`; without a token the
//! client fails with `AuthRequired` before touching the network.
//!
//! # Example
//! ```rust,no_run
//! use fitlog::config::ClientConfig;
//! use fitlog::external::FitnessApiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("http://localhost:3000", Some("token".to_owned()))?;
//! let client = FitnessApiClient::new(config)?;
//! let goal = client.fetch_goal().await?;
//! # Ok(())
//! # }
//! ```

use super::api_envelope::{decode_response, error_text};
use crate::config::ClientConfig;
use crate::constants::{endpoints, service_names};
use crate::errors::{AppError, AppResult};
use crate::goals::GoalRepository;
use crate::logging::AppLogger;
use crate::models::{CatalogFood, MacroState, MealEntry};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Method, RequestBuilder, StatusCode};
use std::time::Instant;
use tracing::debug;

/// Fitness backend REST client
#[derive(Debug, Clone)]
pub struct FitnessApiClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

/// Which meals a delete removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealSelection {
    /// Every meal logged on a day
    Day(NaiveDate),
    /// A single meal by id
    Meal(String),
}

impl MealSelection {
    fn query(&self) -> [(&'static str, String); 1] {
        match self {
            Self::Day(date) => [("date", date.to_string())],
            Self::Meal(id) => [("id", id.clone())],
        }
    }
}

/// Raw response: status plus body text
struct RawResponse {
    status: StatusCode,
    body: String,
}

impl FitnessApiClient {
    /// Create a client with the configured timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a client from `FITLOG_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error for invalid variables
    pub fn from_env() -> AppResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    fn access_token(&self) -> AppResult<&str> {
        self.config
            .access_token
            .as_deref()
            .ok_or_else(AppError::auth_required)
    }

    fn request(&self, method: Method, path: &str) -> AppResult<RequestBuilder> {
        let token = self.access_token()?;
        Ok(self
            .http_client
            .request(method, self.config.endpoint(path))
            .bearer_auth(token))
    }

    async fn send(
        method: &Method,
        path: &str,
        request: RequestBuilder,
    ) -> AppResult<RawResponse> {
        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                AppError::external_unavailable(service_names::FITNESS_API, e.to_string())
                    .with_source(e)
            } else {
                AppError::external_service(service_names::FITNESS_API, e.to_string())
                    .with_source(e)
            }
        })?;
        let status = response.status();
        let body = response.text().await?;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_api_request(method.as_str(), path, status.as_u16(), elapsed_ms);
        Ok(RawResponse { status, body })
    }

    fn failure(response: &RawResponse) -> AppError {
        let detail = error_text(&response.body).unwrap_or_else(|| response.body.clone());
        match response.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AppError::auth_invalid(format!("Fitness API rejected the access token: {detail}"))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::invalid_input(format!("Fitness API rejected the request: {detail}"))
            }
            status => AppError::external_service(
                service_names::FITNESS_API,
                format!("HTTP {status}: {detail}"),
            ),
        }
    }

    /// Committed goal of the authenticated user, `None` if none is stored
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, `AuthInvalid` on 401/403, and
    /// `ExternalServiceError` for other failures or an envelope error
    pub async fn fetch_goal(&self) -> AppResult<Option<MacroState>> {
        let path = endpoints::NUTRITION_GOALS;
        let request = self.request(Method::GET, path)?;
        let response = Self::send(&Method::GET, path, request).await?;

        if response.status == StatusCode::NOT_FOUND {
            debug!("No nutrition goal stored on the backend");
            return Ok(None);
        }
        if !response.status.is_success() {
            return Err(Self::failure(&response));
        }
        decode_response(&response.body)
    }

    /// Replace the authenticated user's goal, returning the stored goal
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, `AuthInvalid` on 401/403, and
    /// `ExternalServiceError` for other failures or an envelope error
    pub async fn update_goal(&self, goal: &MacroState) -> AppResult<MacroState> {
        let path = endpoints::NUTRITION_GOALS;
        let request = self.request(Method::PUT, path)?.json(goal);
        let response = Self::send(&Method::PUT, path, request).await?;

        if !response.status.is_success() {
            return Err(Self::failure(&response));
        }
        if response.body.trim().is_empty() {
            return Ok(*goal);
        }
        Ok(decode_response(&response.body)?.unwrap_or(*goal))
    }

    /// Food catalog
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, `AuthInvalid` on 401/403, and
    /// `ExternalServiceError` for other failures or an envelope error
    pub async fn list_foods(&self) -> AppResult<Vec<CatalogFood>> {
        let path = endpoints::FOODS;
        let request = self.request(Method::GET, path)?;
        let response = Self::send(&Method::GET, path, request).await?;

        if !response.status.is_success() {
            return Err(Self::failure(&response));
        }
        Ok(decode_response(&response.body)?.unwrap_or_default())
    }

    /// Meals logged on `date`
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, `AuthInvalid` on 401/403, and
    /// `ExternalServiceError` for other failures or an envelope error
    pub async fn list_meals(&self, date: NaiveDate) -> AppResult<Vec<MealEntry>> {
        let path = endpoints::MEALS;
        let request = self
            .request(Method::GET, path)?
            .query(&MealSelection::Day(date).query());
        let response = Self::send(&Method::GET, path, request).await?;

        if !response.status.is_success() {
            return Err(Self::failure(&response));
        }
        Ok(decode_response(&response.body)?.unwrap_or_default())
    }

    /// Log a meal, returning the meal as stored by the backend
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, `AuthInvalid` on 401/403,
    /// `InvalidInput` on 400/422, and `ExternalServiceError` for other failures
    pub async fn create_meal(&self, meal: &MealEntry) -> AppResult<MealEntry> {
        let path = endpoints::MEALS;
        let request = self.request(Method::POST, path)?.json(meal);
        let response = Self::send(&Method::POST, path, request).await?;

        if !response.status.is_success() {
            return Err(Self::failure(&response));
        }
        if response.body.trim().is_empty() {
            return Ok(meal.clone());
        }
        Ok(decode_response(&response.body)?.unwrap_or_else(|| meal.clone()))
    }

    /// Delete the selected meals
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, `AuthInvalid` on 401/403, and
    /// `ExternalServiceError` for other failures or an envelope error
    pub async fn delete_meals(&self, selection: &MealSelection) -> AppResult<()> {
        let path = endpoints::MEALS;
        let request = self
            .request(Method::DELETE, path)?
            .query(&selection.query());
        let response = Self::send(&Method::DELETE, path, request).await?;

        if !response.status.is_success() {
            return Err(Self::failure(&response));
        }
        if !response.body.trim().is_empty() {
            decode_response::<serde_json::Value>(&response.body)?;
        }
        debug!(?selection, "Meals deleted");
        Ok(())
    }
}

/// The backend identifies the user from the bearer token, so `user_id` only
/// labels log events.
#[async_trait]
impl GoalRepository for FitnessApiClient {
    async fn load_goal(&self, user_id: &str) -> AppResult<Option<MacroState>> {
        debug!(user.id = %user_id, "Loading goal from Fitness API");
        self.fetch_goal().await
    }

    async fn save_goal(&self, user_id: &str, goal: &MacroState) -> AppResult<()> {
        debug!(user.id = %user_id, "Saving goal to Fitness API");
        self.update_goal(goal).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn client_without_token() -> FitnessApiClient {
        let config = ClientConfig::new("http://127.0.0.1:9", None).unwrap();
        FitnessApiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_request() {
        let client = client_without_token();
        let err = client.fetch_goal().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthRequired);
        assert_eq!(err.message, "No authentication token available");

        let err = client
            .update_goal(&MacroState::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AuthRequired);
    }

    #[test]
    fn test_failure_maps_unauthorized() {
        let response = RawResponse {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"error": "Invalid token"}"#.to_owned(),
        };
        assert_eq!(FitnessApiClient::failure(&response).code, ErrorCode::AuthInvalid);

        let response = RawResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_owned(),
        };
        let err = FitnessApiClient::failure(&response);
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
        assert!(err.message.contains("boom"));
    }

    #[test]
    fn test_failure_maps_bad_request_to_invalid_input() {
        let response = RawResponse {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            body: r#"{"error": "amount must be positive"}"#.to_owned(),
        };
        let err = FitnessApiClient::failure(&response);
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("amount must be positive"));
    }

    #[test]
    fn test_meal_selection_query() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(
            MealSelection::Day(day).query(),
            [("date", "2025-03-10".to_owned())]
        );
        assert_eq!(
            MealSelection::Meal("m-1".to_owned()).query(),
            [("id", "m-1".to_owned())]
        );
    }
}
