// ABOUTME: Daily meal-plan generation for a stored user profile
// ABOUTME: Runs the plan assembler over recipes with totals and shapes the JSON response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::sync::Arc;

use macroplan_core::models::{MacroTotals, MealSlot, Recipe};
use macroplan_intelligence::{DailyPlan, EventSink, MealPlanner, PlannerConfig};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::database::RecordStore;
use crate::errors::{AppError, AppResult};

/// Daily targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargetsView {
    /// Calorie target
    pub calories: f64,
    /// Protein grams
    pub protein_g: f64,
    /// Carbohydrate grams
    pub carbs_g: f64,
    /// Fat grams
    pub fat_g: f64,
}

impl From<MacroTotals> for DailyTargetsView {
    fn from(t: MacroTotals) -> Self {
        Self {
            calories: t.calories,
            protein_g: t.protein_g,
            carbs_g: t.carbs_g,
            fat_g: t.fat_g,
        }
    }
}

/// Summed totals of the chosen recipes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayTotalsView {
    /// Calories
    pub calories: f64,
    /// Protein grams
    pub protein: f64,
    /// Carbohydrate grams
    pub carbs: f64,
    /// Fat grams
    pub fat: f64,
}

impl From<MacroTotals> for DayTotalsView {
    fn from(t: MacroTotals) -> Self {
        Self {
            calories: t.calories,
            protein: t.protein_g,
            carbs: t.carbs_g,
            fat: t.fat_g,
        }
    }
}

/// One ingredient line inside a recipe view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLineView {
    /// Ingredient id
    pub ingredient_id: Uuid,
    /// Ingredient name
    pub name: String,
    /// FDC id when the ingredient came from ingestion
    pub fdc_id: Option<u64>,
    /// Quantity in `unit`
    pub quantity: f64,
    /// Unit as written on the recipe
    pub unit: String,
}

/// A recipe with its nested ingredient lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeView {
    /// Recipe id
    pub id: Uuid,
    /// Recipe name
    pub name: String,
    /// Description
    pub description: Option<String>,
    /// Preparation instructions
    pub instructions: String,
    /// Meal slot
    pub meal_type: MealSlot,
    /// Health notes
    pub health_insights: Option<String>,
    /// Cached calories
    pub total_calories: Option<f64>,
    /// Cached protein grams
    pub total_protein_g: Option<f64>,
    /// Cached carbohydrate grams
    pub total_carbs_g: Option<f64>,
    /// Cached fat grams
    pub total_fat_g: Option<f64>,
    /// Ingredient lines
    pub ingredient_details: Vec<IngredientLineView>,
}

/// The four slots, each filled or null
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealsView {
    /// Breakfast
    pub breakfast: Option<RecipeView>,
    /// Lunch
    pub lunch: Option<RecipeView>,
    /// Dinner
    pub dinner: Option<RecipeView>,
    /// Snack, left null when no snack recipe exists
    pub snack: Option<RecipeView>,
}

impl MealsView {
    /// Meal for one slot
    #[must_use]
    pub const fn get(&self, slot: MealSlot) -> Option<&RecipeView> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
            MealSlot::Snack => self.snack.as_ref(),
        }
    }

    fn set(&mut self, slot: MealSlot, view: RecipeView) {
        let target = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        };
        *target = Some(view);
    }
}

/// Generated plan as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResponse {
    /// Targets derived from the profile
    pub daily_targets: DailyTargetsView,
    /// Chosen recipes
    pub meals: MealsView,
    /// Sum over chosen recipes
    pub totals_for_the_day: DayTotalsView,
}

/// Generates plans for stored profiles
pub struct MealPlanService {
    store: Arc<dyn RecordStore>,
    events: Arc<dyn EventSink>,
    config: PlannerConfig,
}

impl MealPlanService {
    /// Create a service
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>, events: Arc<dyn EventSink>, config: PlannerConfig) -> Self {
        Self {
            store,
            events,
            config,
        }
    }

    /// Generate a plan for `user_id`
    ///
    /// Returns `Ok(None)` when no complete plan could be assembled.
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the user has no profile, or a
    /// storage error.
    pub async fn generate_for_user(&self, user_id: Uuid) -> AppResult<Option<MealPlanResponse>> {
        let profile = self
            .store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User profile {user_id}")))?;
        let recipes = self.store.list_recipes_with_totals().await?;

        let planner = MealPlanner::new(self.config, self.events.as_ref());
        let Some(plan) = planner.generate_plan(&profile, &recipes) else {
            info!(%user_id, recipes = recipes.len(), "No meal plan available");
            return Ok(None);
        };

        info!(%user_id, score = plan.score, attempt = plan.attempt, "Generated meal plan");
        Ok(Some(self.build_response(plan).await?))
    }

    async fn build_response(&self, plan: DailyPlan) -> AppResult<MealPlanResponse> {
        let mut meals = MealsView::default();
        for (slot, recipe) in plan.meals {
            meals.set(slot, self.recipe_view(recipe).await?);
        }
        Ok(MealPlanResponse {
            daily_targets: plan.targets.into(),
            meals,
            totals_for_the_day: plan.totals.into(),
        })
    }

    async fn recipe_view(&self, recipe: Recipe) -> AppResult<RecipeView> {
        let mut ingredient_details = Vec::new();
        for line in self.store.lines_for_recipe(recipe.id).await? {
            let ingredient = self
                .store
                .get_ingredient(line.ingredient_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Ingredient {}", line.ingredient_id)))?;
            ingredient_details.push(IngredientLineView {
                ingredient_id: ingredient.id,
                name: ingredient.name,
                fdc_id: ingredient.fdc_id,
                quantity: line.quantity,
                unit: line.unit,
            });
        }

        Ok(RecipeView {
            id: recipe.id,
            name: recipe.name,
            description: recipe.description,
            instructions: recipe.instructions,
            meal_type: recipe.meal_type,
            health_insights: recipe.health_insights,
            total_calories: recipe.total_calories,
            total_protein_g: recipe.total_protein_g,
            total_carbs_g: recipe.total_carbs_g,
            total_fat_g: recipe.total_fat_g,
            ingredient_details,
        })
    }
}
