// ABOUTME: Weighted absolute-deviation scores between achieved and target macros
// ABOUTME: Per-meal score weights grams by kcal density, per-day score is unweighted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use macroplan_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use macroplan_core::models::MacroTotals;

/// Distance of one meal from its slot target; 0 is a perfect match
///
/// Gram deviations are weighted by the energy density of each macro so all
/// four terms are in kcal.
#[must_use]
pub fn recipe_fitness(achieved: &MacroTotals, target: &MacroTotals) -> f64 {
    (achieved.calories - target.calories).abs()
        + (achieved.protein_g - target.protein_g).abs() * KCAL_PER_G_PROTEIN
        + (achieved.carbs_g - target.carbs_g).abs() * KCAL_PER_G_CARBS
        + (achieved.fat_g - target.fat_g).abs() * KCAL_PER_G_FAT
}

/// Distance of a whole day from the daily targets; 0 is a perfect match
///
/// Unlike [`recipe_fitness`] every term has weight 1.
#[must_use]
pub fn daily_fitness(achieved: &MacroTotals, targets: &MacroTotals) -> f64 {
    (achieved.calories - targets.calories).abs()
        + (achieved.protein_g - targets.protein_g).abs()
        + (achieved.carbs_g - targets.carbs_g).abs()
        + (achieved.fat_g - targets.fat_g).abs()
}
