// ABOUTME: Recalculate command for macroplan-cli
// ABOUTME: Recomputes cached recipe totals for one or all recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::path::Path;
use std::sync::Arc;

use macroplan::database::{InMemoryStore, RecordStore};
use macroplan::errors::{AppError, AppResult};
use macroplan::services::NutritionService;
use macroplan::TracingEventSink;
use uuid::Uuid;

use crate::helpers::display::{display_recalculation_summary, display_snapshot};

/// Recompute totals and save the snapshot
pub async fn run(store: Arc<InMemoryStore>, catalog_path: &Path, recipe: Option<Uuid>) -> AppResult<()> {
    let service = NutritionService::new(store.clone(), Arc::new(TracingEventSink));

    if let Some(recipe_id) = recipe {
        let snapshot = service.recalculate_recipe(recipe_id).await?;
        let name = store
            .get_recipe(recipe_id)
            .await?
            .map(|r| r.name)
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))?;
        display_snapshot(&name, &snapshot);
    } else {
        let summary = service.recalculate_all().await?;
        display_recalculation_summary(&summary);
    }

    store.save(catalog_path).await
}
