// ABOUTME: Recipe, meal slot, and recipe ingredient line models
// ABOUTME: Recipes cache four derived macro totals that the aggregator recomputes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use super::nutrition::MacroTotals;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Meal slot classification
///
/// Declaration order is the fixed assembly order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack
    Snack,
}

impl MealSlot {
    /// All slots in assembly order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Slots a plan must fill to be complete
    pub const REQUIRED: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Parse a slot name, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" => Some(Self::Snack),
            _ => None,
        }
    }

    /// Lower-case slot name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe with its cached nutrition totals
///
/// The four `total_*` fields are derived state: `None` means not yet
/// computed. They are only written through the record store's nutrition
/// update after the aggregator runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Internal identifier
    pub id: Uuid,
    /// Unique recipe name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Preparation instructions
    #[serde(default)]
    pub instructions: String,
    /// Free-text health notes
    #[serde(default)]
    pub health_insights: Option<String>,
    /// Meal slot this recipe is served in
    pub meal_type: MealSlot,
    /// Cached total kcal
    #[serde(default)]
    pub total_calories: Option<f64>,
    /// Cached total protein grams
    #[serde(default)]
    pub total_protein_g: Option<f64>,
    /// Cached total carbohydrate grams
    #[serde(default)]
    pub total_carbs_g: Option<f64>,
    /// Cached total fat grams
    #[serde(default)]
    pub total_fat_g: Option<f64>,
}

impl Recipe {
    /// Create a recipe without cached totals
    #[must_use]
    pub fn new(name: impl Into<String>, meal_type: MealSlot) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            instructions: String::new(),
            health_insights: None,
            meal_type,
            total_calories: None,
            total_protein_g: None,
            total_carbs_g: None,
            total_fat_g: None,
        }
    }

    /// Set the cached totals (fixture and snapshot loading helper)
    #[must_use]
    pub const fn with_totals(mut self, totals: MacroTotals) -> Self {
        self.total_calories = Some(totals.calories);
        self.total_protein_g = Some(totals.protein_g);
        self.total_carbs_g = Some(totals.carbs_g);
        self.total_fat_g = Some(totals.fat_g);
        self
    }

    /// Whether nutrition has been computed (keyed on calories)
    #[must_use]
    pub const fn has_totals(&self) -> bool {
        self.total_calories.is_some()
    }

    /// Cached totals as a vector, known once calories are set
    ///
    /// Missing gram fields read as zero.
    #[must_use]
    pub fn achieved_macros(&self) -> Option<MacroTotals> {
        let calories = self.total_calories?;
        Some(MacroTotals::new(
            calories,
            self.total_protein_g.unwrap_or(0.0),
            self.total_carbs_g.unwrap_or(0.0),
            self.total_fat_g.unwrap_or(0.0),
        ))
    }

    /// Overwrite the four cached fields
    pub const fn apply_totals(&mut self, totals: &MacroTotals) {
        self.total_calories = Some(totals.calories);
        self.total_protein_g = Some(totals.protein_g);
        self.total_carbs_g = Some(totals.carbs_g);
        self.total_fat_g = Some(totals.fat_g);
    }
}

/// Quantity of one ingredient in one recipe
///
/// At most one line exists per (recipe, ingredient) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientLine {
    /// Owning recipe
    pub recipe_id: Uuid,
    /// Referenced ingredient
    pub ingredient_id: Uuid,
    /// Amount in `unit`
    pub quantity: f64,
    /// Unit string (g, ml, cup, tbsp, tsp, piece, or an alias)
    pub unit: String,
}

impl RecipeIngredientLine {
    /// Create a line
    #[must_use]
    pub fn new(recipe_id: Uuid, ingredient_id: Uuid, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            recipe_id,
            ingredient_id,
            quantity,
            unit: unit.into(),
        }
    }
}
