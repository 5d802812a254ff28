// ABOUTME: Plan command for macroplan-cli
// ABOUTME: Generates and prints a daily meal plan for a user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::sync::Arc;

use macroplan::config::AppConfig;
use macroplan::database::InMemoryStore;
use macroplan::errors::AppResult;
use macroplan::services::MealPlanService;
use macroplan::TracingEventSink;
use uuid::Uuid;

use crate::helpers::display::display_plan;

/// Generate a plan and print it
pub async fn run(config: &AppConfig, store: Arc<InMemoryStore>, user: Uuid) -> AppResult<()> {
    let service = MealPlanService::new(store, Arc::new(TracingEventSink), config.planner);
    let plan = service.generate_for_user(user).await?;
    display_plan(plan.as_ref())
}
