// ABOUTME: Recomputes cached recipe macro totals from ingredient lines
// ABOUTME: Loads lines and ingredients, runs the aggregator, and writes totals back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::collections::HashSet;
use std::sync::Arc;

use macroplan_core::models::Ingredient;
use macroplan_intelligence::{EventSink, LineItem, NutritionAggregator, NutritionSnapshot};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::database::RecordStore;
use crate::errors::{AppError, AppResult};

/// Outcome of a bulk recalculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecalculationSummary {
    /// Recipes whose every line converted
    pub complete: u32,
    /// Recipes with at least one unconvertible line
    pub incomplete: u32,
}

impl RecalculationSummary {
    const fn record(&mut self, snapshot: &NutritionSnapshot) {
        if snapshot.complete {
            self.complete += 1;
        } else {
            self.incomplete += 1;
        }
    }
}

/// Keeps recipe totals in step with ingredient data
pub struct NutritionService {
    store: Arc<dyn RecordStore>,
    events: Arc<dyn EventSink>,
}

impl NutritionService {
    /// Create a service
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>, events: Arc<dyn EventSink>) -> Self {
        Self { store, events }
    }

    /// Recompute and persist one recipe's totals
    ///
    /// Totals are written even when some lines failed conversion.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the recipe or a referenced
    /// ingredient does not exist, or a storage error.
    pub async fn recalculate_recipe(&self, recipe_id: Uuid) -> AppResult<NutritionSnapshot> {
        let recipe = self
            .store
            .get_recipe(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;
        let lines = self.store.lines_for_recipe(recipe_id).await?;

        let mut ingredients: Vec<Ingredient> = Vec::with_capacity(lines.len());
        for line in &lines {
            let ingredient = self
                .store
                .get_ingredient(line.ingredient_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Ingredient {}", line.ingredient_id)))?;
            ingredients.push(ingredient);
        }

        let items: Vec<LineItem<'_>> = lines
            .iter()
            .zip(&ingredients)
            .map(|(line, ingredient)| LineItem {
                ingredient,
                quantity: line.quantity,
                unit: &line.unit,
            })
            .collect();

        let snapshot =
            NutritionAggregator::new(self.events.as_ref()).compute_totals(&recipe.name, &items);
        self.store
            .update_recipe_totals(recipe_id, snapshot.totals)
            .await?;
        Ok(snapshot)
    }

    /// Recompute every recipe
    ///
    /// # Errors
    ///
    /// Stops at the first recipe that cannot be loaded or saved.
    pub async fn recalculate_all(&self) -> AppResult<RecalculationSummary> {
        let mut summary = RecalculationSummary::default();
        for recipe in self.store.list_recipes().await? {
            summary.record(&self.recalculate_recipe(recipe.id).await?);
        }
        info!(
            complete = summary.complete,
            incomplete = summary.incomplete,
            "Recalculated all recipes"
        );
        Ok(summary)
    }

    /// Recompute every recipe that uses `ingredient_id`
    ///
    /// # Errors
    ///
    /// Stops at the first recipe that cannot be loaded or saved.
    pub async fn recalculate_for_ingredient(
        &self,
        ingredient_id: Uuid,
    ) -> AppResult<RecalculationSummary> {
        self.recalculate_for_ingredients(&[ingredient_id]).await
    }

    /// Recompute every recipe that uses any of `ingredient_ids`
    ///
    /// A recipe using several of the ingredients is recomputed once.
    ///
    /// # Errors
    ///
    /// Stops at the first recipe that cannot be loaded or saved.
    pub async fn recalculate_for_ingredients(
        &self,
        ingredient_ids: &[Uuid],
    ) -> AppResult<RecalculationSummary> {
        let mut seen = HashSet::new();
        let mut summary = RecalculationSummary::default();
        for &ingredient_id in ingredient_ids {
            for recipe_id in self.store.recipes_using_ingredient(ingredient_id).await? {
                if seen.insert(recipe_id) {
                    summary.record(&self.recalculate_recipe(recipe_id).await?);
                }
            }
        }
        info!(
            ingredients = ingredient_ids.len(),
            complete = summary.complete,
            incomplete = summary.incomplete,
            "Recalculated recipes using changed ingredients"
        );
        Ok(summary)
    }
}
