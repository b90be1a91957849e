// ABOUTME: Solver commands for fitlog-cli
// ABOUTME: Applies presets and recomputes goals locally without touching the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitlog::errors::AppResult;
use fitlog::intelligence::macro_solver::{apply_preset, coerce_input, recompute as solve};
use fitlog::intelligence::{MacroPreset, MacroPresetKind};
use fitlog::models::{MacroField, MacroState};

use crate::helpers::display::print_json;

/// Print the goal `preset` derives from `calories`
pub fn preset(preset: MacroPresetKind, calories: f64) -> AppResult<()> {
    print_json(&apply_preset(&preset.preset(), calories))
}

/// Print the goal after setting `field` to the raw `value`
pub fn recompute(
    field: MacroField,
    value: &str,
    current: MacroState,
    locked: Option<MacroField>,
    preset: MacroPresetKind,
) -> AppResult<()> {
    let next = solve(field, coerce_input(value), &current, locked, &preset.preset());
    print_json(&next)
}

/// Print the preset table
pub fn presets() -> AppResult<()> {
    let table: Vec<MacroPreset> = MacroPresetKind::ALL
        .into_iter()
        .map(MacroPresetKind::preset)
        .collect();
    print_json(&table)
}
