// ABOUTME: Macro goal solver keeping calories and macros consistent during edits
// ABOUTME: Recomputes the other fields from the caloric identity, presets, and an optional lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Goal Solver
//!
//! Given one edited field of a nutrition goal, recompute the remaining fields
//! so that the goal stays consistent with
//!
//! ```text
//! calories = 4 x protein_g + 4 x carbs_g + 9 x fat_g
//! ```
//!
//! Rules, in order:
//!
//! 1. Editing the locked field is rejected and the state is returned as-is.
//! 2. Editing calories derives every macro from the active preset
//!    (`grams = calories x ratio / kcal_per_gram`). A macro lock does not
//!    block this; the lock only protects the field from being the edit target.
//! 3. Editing a macro while calories are locked keeps calories fixed and lets
//!    the two other macros absorb the caloric delta in proportion to their
//!    preset ratios. An absorbing macro never drops below 0 g; whatever the
//!    clamp swallows is not redistributed.
//! 4. Otherwise the edited macro is accepted and calories follow the identity.
//!
//! Every output is rounded to a whole number, including fields carried over
//! unchanged from a fractional input state. Negative, NaN, infinite or
//! unparsable input is treated as 0; the solver never fails.

use crate::presets::MacroPreset;
use fitlog_core::models::{MacroField, MacroState};
use tracing::{debug, warn};

/// Clamp numeric input to a usable value: negative or non-finite becomes 0
#[must_use]
pub fn coerce_value(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse raw text field input; anything that is not a number becomes 0
#[must_use]
pub fn coerce_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, coerce_value)
}

/// Recompute a goal after `changed` was set to `new_value`
#[must_use]
pub fn recompute(
    changed: MacroField,
    new_value: f64,
    current: &MacroState,
    locked: Option<MacroField>,
    preset: &MacroPreset,
) -> MacroState {
    if locked == Some(changed) {
        debug!(field = %changed, "Edit rejected: field is locked");
        return *current;
    }

    let current = &round_all(current);
    let value = coerce_value(new_value);
    let next = match (changed, locked) {
        (MacroField::Calories, _) => macros_for_calories(value, preset),
        (_, Some(MacroField::Calories)) => {
            absorb_with_calories_locked(changed, value, current, preset)
        }
        _ => {
            let edited = current.with_field(changed, value.round());
            edited.with_field(MacroField::Calories, edited.calories_from_macros().round())
        }
    };

    debug!(
        field = %changed,
        value,
        locked = ?locked,
        preset = %preset.name,
        calories = next.calories,
        protein_g = next.protein_g,
        carbs_g = next.carbs_g,
        fat_g = next.fat_g,
        "Macro goal recomputed"
    );
    next
}

/// Stored goals may be fractional; the solver works on whole values only
fn round_all(state: &MacroState) -> MacroState {
    MacroState::new(
        state.calories.round(),
        state.protein_g.round(),
        state.carbs_g.round(),
        state.fat_g.round(),
    )
}

/// Switch presets: keep calories, re-derive every macro from the new ratios
#[must_use]
pub fn apply_preset(preset: &MacroPreset, current_calories: f64) -> MacroState {
    macros_for_calories(coerce_value(current_calories), preset)
}

/// Whole-gram amount of `field` supplying `ratio` of `calories`
#[must_use]
pub fn grams_for_ratio(calories: f64, ratio: f64, field: MacroField) -> f64 {
    field
        .kcal_per_gram()
        .map_or(0.0, |kcal_per_gram| (calories * ratio / kcal_per_gram).round())
}

fn macros_for_calories(calories: f64, preset: &MacroPreset) -> MacroState {
    let calories = calories.round();
    MacroState::new(
        calories,
        grams_for_ratio(calories, preset.protein_ratio, MacroField::Protein),
        grams_for_ratio(calories, preset.carbs_ratio, MacroField::Carbs),
        grams_for_ratio(calories, preset.fat_ratio, MacroField::Fat),
    )
}

/// The two macros that absorb a delta when `edited` changes under a calorie lock
const fn absorbing_macros(edited: MacroField) -> [MacroField; 2] {
    match edited {
        MacroField::Protein => [MacroField::Carbs, MacroField::Fat],
        MacroField::Carbs => [MacroField::Protein, MacroField::Fat],
        MacroField::Fat | MacroField::Calories => [MacroField::Protein, MacroField::Carbs],
    }
}

fn absorb_with_calories_locked(
    edited: MacroField,
    value: f64,
    current: &MacroState,
    preset: &MacroPreset,
) -> MacroState {
    let Some(edited_density) = edited.kcal_per_gram() else {
        return *current;
    };

    let edited_grams = value.round();
    let delta_kcal = (edited_grams - current.get(edited)) * edited_density;

    let [first, second] = absorbing_macros(edited);
    let first_ratio = preset.ratio_for(first);
    let ratio_total = first_ratio + preset.ratio_for(second);
    // Degenerate presets (both absorbing ratios zero) split the delta evenly
    let first_share = if ratio_total > 0.0 {
        first_ratio / ratio_total
    } else {
        0.5
    };

    let mut next = current.with_field(edited, edited_grams);
    for (field, share) in [(first, first_share), (second, 1.0 - first_share)] {
        let Some(density) = field.kcal_per_gram() else {
            continue;
        };
        let grams = current.get(field) - delta_kcal * share / density;
        if grams < 0.0 {
            warn!(
                field = %field,
                unclamped_g = grams,
                "Calorie-locked redistribution clamped macro at 0 g"
            );
        }
        next = next.with_field(field, grams.max(0.0).round());
    }
    next
}
