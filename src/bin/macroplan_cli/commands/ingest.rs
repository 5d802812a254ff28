// ABOUTME: Ingest command for macroplan-cli
// ABOUTME: Fetches pre-vetted foods from USDA and refreshes totals of affected recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::path::Path;
use std::sync::Arc;

use macroplan::config::AppConfig;
use macroplan::database::InMemoryStore;
use macroplan::errors::AppResult;
use macroplan::external::UsdaClient;
use macroplan::ingestion::{default_entries, load_entries, IngredientIngestion};
use macroplan::services::NutritionService;
use macroplan::TracingEventSink;
use tracing::info;

use crate::helpers::display::{display_ingestion_summary, display_recalculation_summary};

/// Run the ingestion job, refresh recipes using overwritten ingredients,
/// and save the snapshot
pub async fn run(
    config: &AppConfig,
    store: Arc<InMemoryStore>,
    catalog_path: &Path,
    entries_file: Option<&Path>,
) -> AppResult<()> {
    let client = UsdaClient::new(config.usda_client_config()?)?;
    let entries = match entries_file {
        Some(path) => {
            info!(path = %path.display(), "Loading ingestion entries");
            load_entries(path).await?
        }
        None => default_entries(),
    };

    let job = IngredientIngestion::new(Arc::new(client), store.clone(), config.ingestion.clone());
    let summary = job.run(&entries).await;
    display_ingestion_summary(&summary);

    if !summary.updated_ingredients.is_empty() {
        let nutrition = NutritionService::new(store.clone(), Arc::new(TracingEventSink));
        let refreshed = nutrition
            .recalculate_for_ingredients(&summary.updated_ingredients)
            .await?;
        display_recalculation_summary(&refreshed);
    }

    store.save(catalog_path).await?;
    Ok(())
}
