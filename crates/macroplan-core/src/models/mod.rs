// ABOUTME: Domain model re-exports for ingredients, recipes, profiles, and macro vectors
// ABOUTME: Shared by the algorithms crate and the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

/// Ingredients and their externally sourced portion definitions
pub mod ingredient;
/// Macro vectors and the `Macro` selector
pub mod nutrition;
/// User nutrition targets
pub mod profile;
/// Recipes, meal slots, and recipe ingredient lines
pub mod recipe;

pub use ingredient::{Ingredient, PortionDefinition};
pub use nutrition::{Macro, MacroTotals};
pub use profile::UserProfile;
pub use recipe::{MealSlot, Recipe, RecipeIngredientLine};
