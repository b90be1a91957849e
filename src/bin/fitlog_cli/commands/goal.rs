// ABOUTME: Goal commands for fitlog-cli
// ABOUTME: Loads and saves the nutrition goal stored on the fitness backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitlog::errors::AppResult;
use fitlog::external::FitnessApiClient;
use fitlog::goals::GoalService;
use fitlog::intelligence::MacroPresetKind;
use fitlog::models::MacroField;
use serde_json::json;
use tracing::info;

use crate::helpers::display::print_json;

/// Print the stored goal
pub async fn show(user: &str) -> AppResult<()> {
    let mut service = GoalService::new(FitnessApiClient::from_env()?);
    let session = service.open(user).await?;
    print_json(&json!({
        "goal": session.current(),
        "preset": session.active_preset().name,
    }))
}

/// Edit one field of the stored goal and save it
pub async fn set(
    user: &str,
    field: MacroField,
    value: &str,
    locked: Option<MacroField>,
    preset: Option<MacroPresetKind>,
) -> AppResult<()> {
    let mut service = GoalService::new(FitnessApiClient::from_env()?);
    service.open(user).await?;

    let session = service.session_mut()?;
    session.begin_edit()?;
    if let Some(kind) = preset {
        session.select_preset(kind)?;
    }
    if let Some(locked_field) = locked {
        session.toggle_lock(locked_field)?;
    }
    session.update_field(field, value)?;

    let saved = service.save().await?;
    info!(user.id = %user, "Goal saved");
    print_json(&saved)
}
