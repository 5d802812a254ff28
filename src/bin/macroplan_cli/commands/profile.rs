// ABOUTME: Profile command for macroplan-cli
// ABOUTME: Creates or replaces a user's daily calorie and macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::path::Path;
use std::sync::Arc;

use macroplan::database::{InMemoryStore, RecordStore};
use macroplan::errors::{AppError, AppResult};
use macroplan::models::UserProfile;
use tracing::info;
use uuid::Uuid;

/// Store targets for `user` and save the snapshot
pub async fn set(
    store: Arc<InMemoryStore>,
    catalog_path: &Path,
    user: Uuid,
    calories: u32,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> AppResult<()> {
    for (name, value) in [("protein", protein), ("carbs", carbs), ("fat", fat)] {
        if !(0.0..=100.0).contains(&value) {
            return Err(AppError::invalid_input(format!(
                "{name} percentage must be between 0 and 100, got {value}"
            )));
        }
    }

    let profile = UserProfile::new(user).with_targets(calories, protein, carbs, fat);
    store.upsert_profile(profile).await?;
    store.save(catalog_path).await?;

    info!(%user, calories, protein, carbs, fat, "Profile saved");
    println!("Profile saved for user {user}");
    Ok(())
}
