// ABOUTME: Environment configuration for the fitness backend client
// ABOUTME: Parses base URL, access token, and timeout from env vars, plus the deployment environment
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based client configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `FITLOG_API_URL` | `http://localhost:3000` |
//! | `FITLOG_ACCESS_TOKEN` | unset |
//! | `FITLOG_HTTP_TIMEOUT_SECS` | `30` (1-300) |
//!
//! [`Environment`] is read from `ENVIRONMENT` by the logging setup.

use crate::constants::endpoints::DEFAULT_API_BASE_URL;
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default HTTP request timeout
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Largest accepted HTTP request timeout
pub const MAX_HTTP_TIMEOUT_SECS: u64 = 300;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Configuration of the fitness backend client
#[derive(Clone)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub base_url: Url,
    /// Bearer token sent with every request
    pub access_token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Build a configuration for `base_url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if `base_url` is not an absolute http(s) URL
    pub fn new(base_url: &str, access_token: Option<String>) -> AppResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            access_token,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a malformed base URL or an out-of-range timeout
    pub fn from_env() -> AppResult<Self> {
        let base_url =
            env::var("FITLOG_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned());
        let access_token = env::var("FITLOG_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        let timeout_secs = match env::var("FITLOG_HTTP_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let config = Self {
            base_url: parse_base_url(&base_url)?,
            access_token,
            timeout: Duration::from_secs(timeout_secs),
        };
        debug!(?config, "Client configuration loaded");
        Ok(config)
    }

    /// Full URL for an API path such as `/api/nutrition/goals`
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_base_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        AppError::new(ErrorCode::ConfigInvalid, format!("Invalid FITLOG_API_URL '{raw}'"))
            .with_source(e)
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("FITLOG_API_URL must use http or https, got '{}'", url.scheme()),
        ));
    }
    Ok(url)
}

fn parse_timeout_secs(raw: &str) -> AppResult<u64> {
    let secs: u64 = raw.trim().parse().map_err(|e| {
        AppError::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid FITLOG_HTTP_TIMEOUT_SECS '{raw}'"),
        )
        .with_source(e)
    })?;
    if !(1..=MAX_HTTP_TIMEOUT_SECS).contains(&secs) {
        return Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("FITLOG_HTTP_TIMEOUT_SECS must be between 1 and {MAX_HTTP_TIMEOUT_SECS}"),
        ));
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
        assert_eq!(Environment::Production.to_string(), "production");
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let config = ClientConfig::new("https://api.example.com/", None).unwrap();
        assert_eq!(
            config.endpoint("/api/nutrition/goals"),
            "https://api.example.com/api/nutrition/goals"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ClientConfig::new("ftp://example.com", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_timeout_bounds() {
        assert_eq!(parse_timeout_secs("45").unwrap(), 45);
        assert!(parse_timeout_secs("0").is_err());
        assert!(parse_timeout_secs("301").is_err());
        assert!(parse_timeout_secs("soon").is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("http://localhost:3000", Some("secret".to_owned())).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("REDACTED"));
    }
}
