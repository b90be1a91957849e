// ABOUTME: Nutrition goal editing session with Viewing and Editing states
// ABOUTME: Routes every field edit, lock toggle, and preset switch through the macro solver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal editing session
//!
//! A session starts in **Viewing**, showing the last committed goal.
//! `begin_edit` moves it to **Editing**, where the draft can be changed, one
//! field can be locked, and a preset can be selected. `save` commits the draft;
//! `cancel` restores the pre-edit goal and preset. There are no other states.

use crate::macro_solver::{apply_preset, coerce_input, recompute};
use crate::presets::MacroPreset;
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{MacroField, MacroState};
use serde::Serialize;
use std::mem;
use tracing::{debug, info};

/// Session state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Read-only display of the committed goal
    Viewing,
    /// Draft being edited
    Editing {
        /// Working copy of the goal
        draft: MacroState,
        /// Field excluded from being edited
        locked: Option<MacroField>,
        /// Preset active before editing began, restored on cancel
        preset_before_edit: MacroPreset,
    },
}

/// Editing session for one user's nutrition goal
#[derive(Debug, Clone, Serialize)]
pub struct GoalSession {
    committed: MacroState,
    preset: MacroPreset,
    state: SessionState,
}

impl GoalSession {
    /// New session in Viewing state
    #[must_use]
    pub const fn new(committed: MacroState, preset: MacroPreset) -> Self {
        Self {
            committed,
            preset,
            state: SessionState::Viewing,
        }
    }

    /// Whether the session is in Editing state
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.state, SessionState::Editing { .. })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Last committed goal
    #[must_use]
    pub const fn committed(&self) -> &MacroState {
        &self.committed
    }

    /// Goal to display: the draft while editing, the committed goal otherwise
    #[must_use]
    pub const fn current(&self) -> &MacroState {
        match &self.state {
            SessionState::Viewing => &self.committed,
            SessionState::Editing { draft, .. } => draft,
        }
    }

    /// Locked field, if any (always `None` while viewing)
    #[must_use]
    pub const fn locked_field(&self) -> Option<MacroField> {
        match &self.state {
            SessionState::Viewing => None,
            SessionState::Editing { locked, .. } => *locked,
        }
    }

    /// Preset used for recomputation
    #[must_use]
    pub const fn active_preset(&self) -> &MacroPreset {
        &self.preset
    }

    /// Viewing -> Editing
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session is already being edited
    pub fn begin_edit(&mut self) -> AppResult<()> {
        if self.is_editing() {
            return Err(AppError::invalid_state("Goal is already being edited"));
        }
        self.state = SessionState::Editing {
            draft: self.committed,
            locked: None,
            preset_before_edit: self.preset.clone(),
        };
        debug!(preset = %self.preset.name, "Goal editing started");
        Ok(())
    }

    /// Apply raw text input to a field
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session is not being edited
    pub fn update_field(&mut self, field: MacroField, raw_input: &str) -> AppResult<MacroState> {
        self.set_field(field, coerce_input(raw_input))
    }

    /// Apply a numeric value to a field
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session is not being edited
    pub fn set_field(&mut self, field: MacroField, value: f64) -> AppResult<MacroState> {
        let preset = &self.preset;
        match &mut self.state {
            SessionState::Viewing => Err(not_editing("edit a field")),
            SessionState::Editing { draft, locked, .. } => {
                *draft = recompute(field, value, draft, *locked, preset);
                Ok(*draft)
            }
        }
    }

    /// Lock `field`, replacing any other lock; toggling the locked field unlocks it
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session is not being edited
    pub fn toggle_lock(&mut self, field: MacroField) -> AppResult<Option<MacroField>> {
        match &mut self.state {
            SessionState::Viewing => Err(not_editing("toggle a lock")),
            SessionState::Editing { locked, .. } => {
                *locked = if *locked == Some(field) {
                    None
                } else {
                    Some(field)
                };
                debug!(locked = ?*locked, "Goal lock toggled");
                Ok(*locked)
            }
        }
    }

    /// Switch to `preset` and re-derive the macros from the draft's calories
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session is not being edited
    pub fn select_preset(&mut self, preset: impl Into<MacroPreset>) -> AppResult<MacroState> {
        let preset = preset.into();
        match &mut self.state {
            SessionState::Viewing => Err(not_editing("select a preset")),
            SessionState::Editing { draft, .. } => {
                *draft = apply_preset(&preset, draft.calories);
                debug!(preset = %preset.name, "Goal preset selected");
                self.preset = preset;
                Ok(*draft)
            }
        }
    }

    /// Editing -> Viewing, committing the draft
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session is not being edited
    pub fn save(&mut self) -> AppResult<MacroState> {
        match &self.state {
            SessionState::Viewing => Err(not_editing("save")),
            SessionState::Editing { draft, .. } => {
                self.committed = *draft;
                self.state = SessionState::Viewing;
                info!(
                    calories = self.committed.calories,
                    protein_g = self.committed.protein_g,
                    carbs_g = self.committed.carbs_g,
                    fat_g = self.committed.fat_g,
                    preset = %self.preset.name,
                    "Nutrition goal committed"
                );
                Ok(self.committed)
            }
        }
    }

    /// Editing -> Viewing, discarding the draft and restoring the pre-edit preset
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session is not being edited
    pub fn cancel(&mut self) -> AppResult<MacroState> {
        match mem::replace(&mut self.state, SessionState::Viewing) {
            SessionState::Viewing => Err(not_editing("cancel")),
            SessionState::Editing {
                preset_before_edit, ..
            } => {
                self.preset = preset_before_edit;
                debug!("Goal edit cancelled");
                Ok(self.committed)
            }
        }
    }
}

fn not_editing(action: &str) -> AppError {
    AppError::invalid_state(format!("Cannot {action} while the goal is not being edited"))
}
