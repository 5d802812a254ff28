// ABOUTME: Ingredient ingestion job pulling macro data and portions from FoodData Central
// ABOUTME: Continue-on-error processing of a pre-vetted list with a fixed per-request delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

//! # Ingredient Ingestion
//!
//! Walks a list of `(common name, FDC id)` entries, fetches each food,
//! extracts per-100 g macros along preferred nutrient-id chains, and upserts
//! the ingredient by FDC id. One bad entry never stops the run.

/// Built-in pre-vetted entries
pub mod catalog;

use std::sync::Arc;

use macroplan_core::constants::usda_nutrients;
use macroplan_core::models::{Ingredient, Macro};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::IngestionConfig;
use crate::database::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::external::{FoodDataSource, FoodRecord};

pub use catalog::{default_entries, load_entries, CatalogEntry};

/// Counts reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionSummary {
    /// Ingredients created
    pub added: u32,
    /// Ingredients overwritten
    pub updated: u32,
    /// Entries skipped for any reason
    pub failed: u32,
    /// Ids of overwritten ingredients, whose recipes need new totals
    pub updated_ingredients: Vec<Uuid>,
}

enum ItemOutcome {
    Added,
    Updated(Uuid),
}

/// Ingredient ingestion job
pub struct IngredientIngestion {
    source: Arc<dyn FoodDataSource>,
    store: Arc<dyn RecordStore>,
    config: IngestionConfig,
}

impl IngredientIngestion {
    /// Create a job over a food source and a record store
    #[must_use]
    pub fn new(
        source: Arc<dyn FoodDataSource>,
        store: Arc<dyn RecordStore>,
        config: IngestionConfig,
    ) -> Self {
        Self {
            source,
            store,
            config,
        }
    }

    /// Process every entry and report counts
    ///
    /// Invalid ids are counted as failed without a fetch. Every fetched
    /// entry, successful or not, is followed by the configured delay.
    pub async fn run(&self, entries: &[CatalogEntry]) -> IngestionSummary {
        info!(entries = entries.len(), "Starting ingredient ingestion");
        let mut summary = IngestionSummary::default();

        for entry in entries {
            let Ok(fdc_id) = entry.fdc_id.trim().parse::<u64>() else {
                error!(
                    common_name = %entry.common_name,
                    fdc_id = %entry.fdc_id,
                    "Invalid FDC id, skipping"
                );
                summary.failed += 1;
                continue;
            };

            info!(common_name = %entry.common_name, fdc_id, "Processing ingredient");
            match self.ingest_one(entry, fdc_id).await {
                Ok(ItemOutcome::Added) => summary.added += 1,
                Ok(ItemOutcome::Updated(id)) => {
                    summary.updated += 1;
                    summary.updated_ingredients.push(id);
                }
                Err(e) => {
                    error!(
                        common_name = %entry.common_name,
                        fdc_id,
                        error = %e,
                        "Ingredient ingestion failed"
                    );
                    summary.failed += 1;
                }
            }

            if !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }
        }

        info!(
            added = summary.added,
            updated = summary.updated,
            failed = summary.failed,
            "Ingredient ingestion finished"
        );
        summary
    }

    async fn ingest_one(&self, entry: &CatalogEntry, fdc_id: u64) -> AppResult<ItemOutcome> {
        let record = self.source.fetch_food(fdc_id).await?;
        let ingredient = ingredient_from_record(&entry.common_name, fdc_id, record)?;
        let (stored, created) = self.store.upsert_ingredient_by_fdc_id(ingredient).await?;

        if created {
            info!(name = %stored.name, fdc_id, "Created ingredient");
            Ok(ItemOutcome::Added)
        } else {
            info!(name = %stored.name, fdc_id, "Updated ingredient");
            Ok(ItemOutcome::Updated(stored.id))
        }
    }
}

/// Build an ingredient from a fetched record
///
/// # Errors
///
/// Returns `INVALID_INPUT` when protein, fat, or carbohydrate is absent.
/// Missing energy is stored as zero.
pub fn ingredient_from_record(
    common_name: &str,
    fdc_id: u64,
    record: FoodRecord,
) -> AppResult<Ingredient> {
    let required = |nutrient: Macro, ids: &[u32]| {
        record.nutrient_amount(ids).ok_or_else(|| {
            warn!(common_name, fdc_id, %nutrient, "Core nutrient missing");
            AppError::invalid_input(format!(
                "Core nutrient '{nutrient}' not found for {common_name} (FDC id {fdc_id})"
            ))
        })
    };

    let protein = required(Macro::Protein, usda_nutrients::PROTEIN_IDS)?;
    let fat = required(Macro::Fat, usda_nutrients::FAT_IDS)?;
    let carbs = required(Macro::Carbs, usda_nutrients::CARB_IDS)?;
    let calories = record
        .nutrient_amount(usda_nutrients::CALORIE_IDS)
        .unwrap_or(0.0);

    let name = record
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(common_name)
        .to_owned();

    Ok(Ingredient::new(name)
        .with_fdc_id(fdc_id)
        .with_macros(calories, protein, carbs, fat)
        .with_portions(record.portions))
}
