// ABOUTME: Service layer joining the record store with the nutrition and planning algorithms
// ABOUTME: Recipe totals recalculation and daily meal-plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

//! Services
//!
//! Services own the I/O around the pure algorithms: they load records,
//! hand borrowed views to the intelligence crate, and write results back.

/// Daily meal-plan generation and response views
pub mod meal_plans;
/// Recipe nutrition recalculation
pub mod nutrition;

pub use meal_plans::{
    DailyTargetsView, DayTotalsView, IngredientLineView, MealPlanResponse, MealPlanService, MealsView,
    RecipeView,
};
pub use nutrition::{NutritionService, RecalculationSummary};
