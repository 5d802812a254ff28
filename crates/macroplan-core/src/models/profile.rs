// ABOUTME: User nutrition profile with daily calorie target and macro percentage dials
// ABOUTME: One profile per user, consumed by the meal plan assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use crate::constants::profile_defaults;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily targets for one user
///
/// The three percentages are independent dials over total calories and
/// are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owning user
    pub user_id: Uuid,
    /// Daily kcal target
    pub target_calories: u32,
    /// Protein as percentage of total calories
    pub target_protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub target_carbs_percent: f64,
    /// Fat as percentage of total calories
    pub target_fat_percent: f64,
}

impl UserProfile {
    /// Profile with default targets (2000 kcal, 30/40/30)
    #[must_use]
    pub const fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            target_calories: profile_defaults::TARGET_CALORIES,
            target_protein_percent: profile_defaults::PROTEIN_PERCENT,
            target_carbs_percent: profile_defaults::CARBS_PERCENT,
            target_fat_percent: profile_defaults::FAT_PERCENT,
        }
    }

    /// Replace all targets
    #[must_use]
    pub const fn with_targets(mut self, calories: u32, protein: f64, carbs: f64, fat: f64) -> Self {
        self.target_calories = calories;
        self.target_protein_percent = protein;
        self.target_carbs_percent = carbs;
        self.target_fat_percent = fat;
        self
    }
}
