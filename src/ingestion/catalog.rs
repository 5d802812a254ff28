// ABOUTME: Default pre-vetted list of FoodData Central ids used by the ingestion job
// ABOUTME: Entries pair a common name with the FDC id string as published by USDA
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

/// One pre-vetted ingredient to fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Name used when the API has no description
    pub common_name: String,
    /// FDC id as text; non-numeric values are counted as failures
    pub fdc_id: String,
}

impl CatalogEntry {
    /// Create an entry
    pub fn new(common_name: impl Into<String>, fdc_id: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            fdc_id: fdc_id.into(),
        }
    }
}

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("all-purpose flour", "169761"),
    ("granulated sugar", "169655"),
    ("olive oil", "171413"),
    ("chicken breast", "171477"),
    ("apple", "171688"),
    ("banana", "173944"),
    ("egg", "171287"),
];

/// The built-in ingestion list
#[must_use]
pub fn default_entries() -> Vec<CatalogEntry> {
    DEFAULT_ENTRIES
        .iter()
        .map(|(name, id)| CatalogEntry::new(*name, *id))
        .collect()
}

/// Read a JSON array of entries from `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_entries(path: &Path) -> AppResult<Vec<CatalogEntry>> {
    let bytes = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
