// ABOUTME: Energy density constants for protein, carbohydrate, and fat
// ABOUTME: Atwater factors used by the caloric identity and macro derivations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Kilocalories per gram of protein
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Kilocalories per gram of carbohydrate
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Kilocalories per gram of fat
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Tolerance for preset ratios summing to 1.0
pub const RATIO_SUM_EPSILON: f64 = 1e-6;

/// Worst-case drift between stored calories and the caloric identity after
/// each gram value is rounded to a whole number (half a gram per macro).
pub const MACRO_ROUNDING_TOLERANCE_KCAL: f64 =
    0.5 * (KCAL_PER_GRAM_PROTEIN + KCAL_PER_GRAM_CARBS + KCAL_PER_GRAM_FAT);
