// ABOUTME: Goal persistence and goal editing service
// ABOUTME: Binds a user's editing session to a goal repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition goal persistence
//!
//! The solver and session are synchronous; only storage is async. A
//! `GoalService` owns one user's session and commits to its repository on save.

/// Goal repository trait and in-memory implementation
pub mod repository;

/// Session-plus-repository service
pub mod service;

pub use repository::{GoalRepository, InMemoryGoalRepository};
pub use service::GoalService;
