// ABOUTME: Daily meal plan assembly: targets, slot allocations, configuration, and results
// ABOUTME: Searches recipes per slot over a fixed attempt budget and keeps the best day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

mod assembler;
mod selection;

pub use assembler::MealPlanner;
pub use selection::SelectionPolicy;

use std::collections::BTreeMap;

use macroplan_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use macroplan_core::constants::planning::{
    DEFAULT_ATTEMPTS, DEFAULT_CANDIDATE_WINDOW, DEFAULT_OVERSIZE_FACTOR, DEFAULT_SLOT_ALLOCATION,
};
use macroplan_core::models::{MacroTotals, MealSlot, Recipe, UserProfile};
use serde::{Deserialize, Serialize};

/// Daily targets in grams derived from a profile's calorie target and percentages
#[must_use]
pub fn daily_targets(profile: &UserProfile) -> MacroTotals {
    let calories = f64::from(profile.target_calories);
    MacroTotals::new(
        calories,
        calories * profile.target_protein_percent / 100.0 / KCAL_PER_G_PROTEIN,
        calories * profile.target_carbs_percent / 100.0 / KCAL_PER_G_CARBS,
        calories * profile.target_fat_percent / 100.0 / KCAL_PER_G_FAT,
    )
}

/// Share of the daily targets each slot should cover
#[must_use]
pub const fn slot_allocation(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => 0.25,
        MealSlot::Lunch => 0.35,
        MealSlot::Dinner => 0.30,
        MealSlot::Snack => DEFAULT_SLOT_ALLOCATION,
    }
}

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Independent attempts per request
    pub attempts: u32,
    /// Lowest-scoring candidates eligible for selection per slot
    pub candidate_window: usize,
    /// Calorie multiple of the daily target above which a recipe is too big
    /// for any slot but the last
    pub oversize_factor: f64,
    /// How a recipe is chosen from the window
    pub selection: SelectionPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            candidate_window: DEFAULT_CANDIDATE_WINDOW,
            oversize_factor: DEFAULT_OVERSIZE_FACTOR,
            selection: SelectionPolicy::default(),
        }
    }
}

/// Best day found by the planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Chosen recipe per filled slot; breakfast, lunch, and dinner are always present
    pub meals: BTreeMap<MealSlot, Recipe>,
    /// Sum of the chosen recipes' macros
    pub totals: MacroTotals,
    /// Daily targets the plan was scored against
    pub targets: MacroTotals,
    /// Daily fitness score (lower is better)
    pub score: f64,
    /// Attempt that produced this plan (0-based)
    pub attempt: u32,
}

impl DailyPlan {
    /// Recipe chosen for a slot, if any
    #[must_use]
    pub fn meal(&self, slot: MealSlot) -> Option<&Recipe> {
        self.meals.get(&slot)
    }
}
