// ABOUTME: Core types and constants for the Fitlog nutrition goal engine
// ABOUTME: Foundation crate with error handling, nutrition models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitlog Core
//!
//! Foundation crate providing shared types and constants for the Fitlog
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, endpoints, and goal defaults
//! - **models**: Nutrition goal, food, and meal data models

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MacroState`, `MacroField`, `FoodItem`, ...)
pub mod models;
