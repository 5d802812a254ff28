// ABOUTME: Record store abstraction for ingredients, recipes, lines, and user profiles
// ABOUTME: Async trait seam with an in-memory implementation backed by JSON snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

//! # Record Store
//!
//! Persistence is a collaborator, not part of the algorithms. Services hold
//! an `Arc<dyn RecordStore>` and every method is a single atomic read or
//! write.

/// In-memory store and catalogue snapshot files
pub mod memory;

use async_trait::async_trait;
use macroplan_core::models::{
    Ingredient, MacroTotals, MealSlot, Recipe, RecipeIngredientLine, UserProfile,
};
use uuid::Uuid;

use crate::errors::AppResult;

pub use memory::{CatalogSnapshot, InMemoryStore};

/// Storage operations needed by ingestion, recalculation, and planning
#[async_trait]
pub trait RecordStore: Send + Sync {
    // ================================
    // Ingredients
    // ================================

    /// Insert a new ingredient
    async fn create_ingredient(&self, ingredient: Ingredient) -> AppResult<Ingredient>;

    /// Get an ingredient by internal id
    async fn get_ingredient(&self, id: Uuid) -> AppResult<Option<Ingredient>>;

    /// Create or update by FDC id, keeping the stored internal id on update.
    /// Returns the stored record and whether it was created.
    async fn upsert_ingredient_by_fdc_id(
        &self,
        ingredient: Ingredient,
    ) -> AppResult<(Ingredient, bool)>;

    /// All ingredients, ordered by name
    async fn list_ingredients(&self) -> AppResult<Vec<Ingredient>>;

    // ================================
    // Recipes
    // ================================

    /// Insert a new recipe; names are unique
    async fn create_recipe(&self, recipe: Recipe) -> AppResult<Recipe>;

    /// Get a recipe by id
    async fn get_recipe(&self, id: Uuid) -> AppResult<Option<Recipe>>;

    /// All recipes, ordered by name
    async fn list_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// Recipes whose cached total calories are not null
    async fn list_recipes_with_totals(&self) -> AppResult<Vec<Recipe>>;

    /// Recipes classified under `slot`
    async fn list_recipes_by_slot(&self, slot: MealSlot) -> AppResult<Vec<Recipe>>;

    /// Overwrite the four cached totals of one recipe
    async fn update_recipe_totals(&self, recipe_id: Uuid, totals: MacroTotals) -> AppResult<()>;

    // ================================
    // Recipe ingredient lines
    // ================================

    /// Link an ingredient to a recipe; at most one line per pair
    async fn add_recipe_line(&self, line: RecipeIngredientLine) -> AppResult<()>;

    /// Lines belonging to one recipe
    async fn lines_for_recipe(&self, recipe_id: Uuid) -> AppResult<Vec<RecipeIngredientLine>>;

    /// Ids of recipes with a line referencing `ingredient_id`
    async fn recipes_using_ingredient(&self, ingredient_id: Uuid) -> AppResult<Vec<Uuid>>;

    // ================================
    // Profiles
    // ================================

    /// Get the profile for a user
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>>;

    /// Create or replace the profile for a user
    async fn upsert_profile(&self, profile: UserProfile) -> AppResult<()>;
}
