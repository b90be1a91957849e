// ABOUTME: External API client modules (fitness backend)
// ABOUTME: Nutrition goal persistence, food catalog, and meal logging over REST

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External API Clients

/// Backend response envelope decoding
pub mod api_envelope;

/// Fitness backend REST client
pub mod fitness_api_client;

pub use api_envelope::{decode_response, ApiEnvelope};
pub use fitness_api_client::{FitnessApiClient, MealSelection};
