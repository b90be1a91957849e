// ABOUTME: Goal repository abstraction and the in-memory implementation
// ABOUTME: Persistence boundary for committed nutrition goals, keyed by user id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::models::MacroState;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Storage for committed nutrition goals
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Committed goal of `user_id`, or `None` if the user never saved one
    async fn load_goal(&self, user_id: &str) -> AppResult<Option<MacroState>>;

    /// Replace the committed goal of `user_id`
    async fn save_goal(&self, user_id: &str, goal: &MacroState) -> AppResult<()>;
}

#[async_trait]
impl<R: GoalRepository + ?Sized> GoalRepository for Arc<R> {
    async fn load_goal(&self, user_id: &str) -> AppResult<Option<MacroState>> {
        (**self).load_goal(user_id).await
    }

    async fn save_goal(&self, user_id: &str, goal: &MacroState) -> AppResult<()> {
        (**self).save_goal(user_id, goal).await
    }
}

/// Process-local goal storage for tests and offline use
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGoalRepository {
    goals: Arc<DashMap<String, MacroState>>,
}

impl InMemoryGoalRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored goal
    #[must_use]
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// Whether no goal is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoalRepository {
    async fn load_goal(&self, user_id: &str) -> AppResult<Option<MacroState>> {
        Ok(self.goals.get(user_id).map(|entry| *entry.value()))
    }

    async fn save_goal(&self, user_id: &str, goal: &MacroState) -> AppResult<()> {
        self.goals.insert(user_id.to_owned(), *goal);
        debug!(user.id = %user_id, "Goal stored in memory");
        Ok(())
    }
}
