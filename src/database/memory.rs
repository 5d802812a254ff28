// ABOUTME: In-memory RecordStore over tokio RwLock state with JSON catalogue snapshots
// ABOUTME: Enforces unique recipe names, one line per recipe/ingredient pair, and FDC upserts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use macroplan_core::models::{
    Ingredient, MacroTotals, MealSlot, Recipe, RecipeIngredientLine, UserProfile,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::RecordStore;
use crate::errors::{AppError, AppResult};

/// Serializable copy of the whole catalogue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// When the snapshot was written
    pub saved_at: Option<DateTime<Utc>>,
    /// Ingredient records
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Recipe records
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Recipe ingredient lines
    #[serde(default)]
    pub lines: Vec<RecipeIngredientLine>,
    /// User profiles
    #[serde(default)]
    pub profiles: Vec<UserProfile>,
}

impl CatalogSnapshot {
    /// Read a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read and
    /// `SERIALIZATION_ERROR` if it is not a valid snapshot.
    pub async fn load(path: &Path) -> AppResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let snapshot: Self = serde_json::from_slice(&bytes)?;
        debug!(
            path = %path.display(),
            ingredients = snapshot.ingredients.len(),
            recipes = snapshot.recipes.len(),
            "Loaded catalogue snapshot"
        );
        Ok(snapshot)
    }

    /// Write this snapshot as pretty JSON, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn save(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(self)?;
        tokio::fs::write(path, json).await?;
        debug!(path = %path.display(), "Saved catalogue snapshot");
        Ok(())
    }
}

#[derive(Debug, Default)]
struct StoreState {
    ingredients: HashMap<Uuid, Ingredient>,
    recipes: HashMap<Uuid, Recipe>,
    lines: HashMap<(Uuid, Uuid), RecipeIngredientLine>,
    profiles: HashMap<Uuid, UserProfile>,
}

/// `RecordStore` held entirely in memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let state = StoreState {
            ingredients: snapshot
                .ingredients
                .into_iter()
                .map(|i| (i.id, i))
                .collect(),
            recipes: snapshot.recipes.into_iter().map(|r| (r.id, r)).collect(),
            lines: snapshot
                .lines
                .into_iter()
                .map(|l| ((l.recipe_id, l.ingredient_id), l))
                .collect(),
            profiles: snapshot
                .profiles
                .into_iter()
                .map(|p| (p.user_id, p))
                .collect(),
        };
        Self {
            state: RwLock::new(state),
        }
    }

    /// Load from `path`, or start empty when the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub async fn open(path: &Path) -> AppResult<Self> {
        if tokio::fs::try_exists(path).await? {
            Ok(Self::from_snapshot(CatalogSnapshot::load(path).await?))
        } else {
            info!(path = %path.display(), "No catalogue snapshot found, starting empty");
            Ok(Self::new())
        }
    }

    /// Copy the current contents into a timestamped snapshot
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.read().await;
        let mut ingredients: Vec<Ingredient> = state.ingredients.values().cloned().collect();
        ingredients.sort_by(|a, b| a.name.cmp(&b.name));
        let mut recipes: Vec<Recipe> = state.recipes.values().cloned().collect();
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        let mut lines: Vec<RecipeIngredientLine> = state.lines.values().cloned().collect();
        lines.sort_by_key(|l| (l.recipe_id, l.ingredient_id));
        let mut profiles: Vec<UserProfile> = state.profiles.values().cloned().collect();
        profiles.sort_by_key(|p| p.user_id);

        CatalogSnapshot {
            saved_at: Some(Utc::now()),
            ingredients,
            recipes,
            lines,
            profiles,
        }
    }

    /// Write the current contents to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub async fn save(&self, path: &Path) -> AppResult<()> {
        self.snapshot().await.save(path).await
    }
}

fn sorted_by_name(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.sort_by(|a, b| a.name.cmp(&b.name));
    recipes
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn create_ingredient(&self, ingredient: Ingredient) -> AppResult<Ingredient> {
        let mut state = self.state.write().await;
        if state.ingredients.contains_key(&ingredient.id) {
            return Err(AppError::already_exists(format!(
                "Ingredient {}",
                ingredient.id
            )));
        }
        if let Some(fdc_id) = ingredient.fdc_id {
            if state.ingredients.values().any(|i| i.fdc_id == Some(fdc_id)) {
                return Err(AppError::already_exists(format!(
                    "Ingredient with FDC id {fdc_id}"
                )));
            }
        }
        state.ingredients.insert(ingredient.id, ingredient.clone());
        Ok(ingredient)
    }

    async fn get_ingredient(&self, id: Uuid) -> AppResult<Option<Ingredient>> {
        Ok(self.state.read().await.ingredients.get(&id).cloned())
    }

    async fn upsert_ingredient_by_fdc_id(
        &self,
        mut ingredient: Ingredient,
    ) -> AppResult<(Ingredient, bool)> {
        let fdc_id = ingredient
            .fdc_id
            .ok_or_else(|| AppError::invalid_input("Ingredient upsert requires an FDC id"))?;

        let mut state = self.state.write().await;
        let existing_id = state
            .ingredients
            .values()
            .find(|i| i.fdc_id == Some(fdc_id))
            .map(|i| i.id);

        let created = existing_id.is_none();
        if let Some(id) = existing_id {
            ingredient.id = id;
        }
        state.ingredients.insert(ingredient.id, ingredient.clone());
        Ok((ingredient, created))
    }

    async fn list_ingredients(&self) -> AppResult<Vec<Ingredient>> {
        let mut ingredients: Vec<Ingredient> =
            self.state.read().await.ingredients.values().cloned().collect();
        ingredients.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(ingredients)
    }

    async fn create_recipe(&self, recipe: Recipe) -> AppResult<Recipe> {
        let mut state = self.state.write().await;
        if state.recipes.values().any(|r| r.name == recipe.name) {
            return Err(AppError::already_exists(format!("Recipe '{}'", recipe.name)));
        }
        state.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn get_recipe(&self, id: Uuid) -> AppResult<Option<Recipe>> {
        Ok(self.state.read().await.recipes.get(&id).cloned())
    }

    async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        let recipes = self.state.read().await.recipes.values().cloned().collect();
        Ok(sorted_by_name(recipes))
    }

    async fn list_recipes_with_totals(&self) -> AppResult<Vec<Recipe>> {
        let recipes = self
            .state
            .read()
            .await
            .recipes
            .values()
            .filter(|r| r.has_totals())
            .cloned()
            .collect();
        Ok(sorted_by_name(recipes))
    }

    async fn list_recipes_by_slot(&self, slot: MealSlot) -> AppResult<Vec<Recipe>> {
        let recipes = self
            .state
            .read()
            .await
            .recipes
            .values()
            .filter(|r| r.meal_type == slot)
            .cloned()
            .collect();
        Ok(sorted_by_name(recipes))
    }

    async fn update_recipe_totals(&self, recipe_id: Uuid, totals: MacroTotals) -> AppResult<()> {
        let mut state = self.state.write().await;
        let recipe = state
            .recipes
            .get_mut(&recipe_id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;
        recipe.apply_totals(&totals);
        Ok(())
    }

    async fn add_recipe_line(&self, line: RecipeIngredientLine) -> AppResult<()> {
        let mut state = self.state.write().await;
        if !state.recipes.contains_key(&line.recipe_id) {
            return Err(AppError::not_found(format!("Recipe {}", line.recipe_id)));
        }
        if !state.ingredients.contains_key(&line.ingredient_id) {
            return Err(AppError::not_found(format!(
                "Ingredient {}",
                line.ingredient_id
            )));
        }
        let key = (line.recipe_id, line.ingredient_id);
        if state.lines.contains_key(&key) {
            return Err(AppError::already_exists(format!(
                "Line for ingredient {} in recipe {}",
                line.ingredient_id, line.recipe_id
            )));
        }
        state.lines.insert(key, line);
        Ok(())
    }

    async fn lines_for_recipe(&self, recipe_id: Uuid) -> AppResult<Vec<RecipeIngredientLine>> {
        let mut lines: Vec<RecipeIngredientLine> = self
            .state
            .read()
            .await
            .lines
            .values()
            .filter(|l| l.recipe_id == recipe_id)
            .cloned()
            .collect();
        lines.sort_by_key(|l| l.ingredient_id);
        Ok(lines)
    }

    async fn recipes_using_ingredient(&self, ingredient_id: Uuid) -> AppResult<Vec<Uuid>> {
        let mut ids: Vec<Uuid> = self
            .state
            .read()
            .await
            .lines
            .keys()
            .filter(|(_, ingredient)| *ingredient == ingredient_id)
            .map(|(recipe, _)| *recipe)
            .collect();
        ids.sort();
        Ok(ids)
    }

    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<UserProfile>> {
        Ok(self.state.read().await.profiles.get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: UserProfile) -> AppResult<()> {
        self.state
            .write()
            .await
            .profiles
            .insert(profile.user_id, profile);
        Ok(())
    }
}
