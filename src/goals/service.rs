// ABOUTME: Goal service binding one user's editing session to a goal repository
// ABOUTME: Loads the committed goal on open and persists the draft before committing on save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::repository::GoalRepository;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{GoalSession, NutritionGoalsConfig};
use crate::logging::AppLogger;
use crate::models::MacroState;
use tracing::{info, warn};

/// Open session for one user
#[derive(Debug)]
struct OpenGoal {
    user_id: String,
    session: GoalSession,
}

/// Goal editing service over a repository
pub struct GoalService<R: GoalRepository> {
    repository: R,
    config: NutritionGoalsConfig,
    open: Option<OpenGoal>,
}

impl<R: GoalRepository> GoalService<R> {
    /// Create a service using the global nutrition goal configuration
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, NutritionGoalsConfig::global().clone())
    }

    /// Create a service with explicit defaults
    #[must_use]
    pub const fn with_config(repository: R, config: NutritionGoalsConfig) -> Self {
        Self {
            repository,
            config,
            open: None,
        }
    }

    /// Load `user_id`'s committed goal into a fresh Viewing session
    ///
    /// Users without a stored goal get the configured default calories split
    /// by the default preset. Opening discards any session already open.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty user id, or the repository's load error
    pub async fn open(&mut self, user_id: &str) -> AppResult<&GoalSession> {
        if user_id.trim().is_empty() {
            return Err(AppError::invalid_input("User id cannot be empty"));
        }

        let stored = self.repository.load_goal(user_id).await?;
        let committed = stored.unwrap_or_else(|| {
            info!(
                user.id = %user_id,
                preset = %self.config.default_preset,
                calories = self.config.default_calories,
                "No stored goal, using defaults"
            );
            self.config.default_goal()
        });

        let session = GoalSession::new(committed, self.config.default_preset.preset());
        let open = self.open.insert(OpenGoal {
            user_id: user_id.to_owned(),
            session,
        });
        Ok(&open.session)
    }

    /// User whose goal is open
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.open.as_ref().map(|open| open.user_id.as_str())
    }

    /// The open session
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no goal has been opened
    pub fn session(&self) -> AppResult<&GoalSession> {
        self.open
            .as_ref()
            .map(|open| &open.session)
            .ok_or_else(no_open_goal)
    }

    /// The open session, for editing
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no goal has been opened
    pub fn session_mut(&mut self) -> AppResult<&mut GoalSession> {
        self.open
            .as_mut()
            .map(|open| &mut open.session)
            .ok_or_else(no_open_goal)
    }

    /// Persist the draft, then commit the session
    ///
    /// A draft above the configured calorie maximum is rejected before storage
    /// is touched. If persistence fails the session stays in Editing with the
    /// draft intact.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no goal is open or it is not being edited,
    /// `ValueOutOfRange` for a draft above the calorie maximum, or the
    /// repository's save error
    pub async fn save(&mut self) -> AppResult<MacroState> {
        let open = self.open.as_mut().ok_or_else(no_open_goal)?;
        if !open.session.is_editing() {
            return Err(AppError::invalid_state(
                "Cannot save while the goal is not being edited",
            ));
        }

        let draft = *open.session.current();
        self.config.check_calories(draft.calories)?;
        if let Err(e) = self.repository.save_goal(&open.user_id, &draft).await {
            warn!(user.id = %open.user_id, error = %e, "Goal persistence failed, draft kept");
            AppLogger::log_goal_event(&open.user_id, "save", false, Some(&e.message));
            return Err(e);
        }

        let committed = open.session.save()?;
        AppLogger::log_goal_event(&open.user_id, "save", true, None);
        Ok(committed)
    }

    /// Discard the draft and restore the committed goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if no goal is open or it is not being edited
    pub fn cancel(&mut self) -> AppResult<MacroState> {
        self.session_mut()?.cancel()
    }
}

fn no_open_goal() -> AppError {
    AppError::invalid_state("No nutrition goal is open")
}
