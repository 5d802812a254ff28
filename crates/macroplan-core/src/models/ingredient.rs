// ABOUTME: Ingredient catalogue entries with per-100g macros and USDA portion definitions
// ABOUTME: Portion definitions are read-only snapshots consulted by the unit normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use super::nutrition::Macro;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named household measure and its weight, as published by the food database
///
/// Example: `{ unit_name: "cup", modifier: "chopped", amount: 1, gram_weight: 160 }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortionDefinition {
    /// Measure unit name (e.g. "cup", "tablespoon", "undetermined")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Measure unit abbreviation (e.g. "c", "tbsp")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_abbreviation: Option<String>,
    /// Free-text description (e.g. "1 cup, chopped", "large (8\" to 8-7/8\" long)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    /// How many units the gram weight covers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Grams for `amount` units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gram_weight: Option<f64>,
}

impl PortionDefinition {
    /// Reference quantity, defaulting to 1 when absent
    #[must_use]
    pub fn reference_amount(&self) -> f64 {
        self.amount.unwrap_or(1.0)
    }
}

/// A food with nutrition facts per 100 grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Internal identifier
    pub id: Uuid,
    /// External catalogue id (USDA FDC id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdc_id: Option<u64>,
    /// Display name, typically the catalogue description ("Oil, olive, salad or cooking")
    pub name: String,
    /// kcal per 100 g
    #[serde(default)]
    pub calories_per_100g: Option<f64>,
    /// Protein grams per 100 g
    #[serde(default)]
    pub protein_per_100g: Option<f64>,
    /// Carbohydrate grams per 100 g
    #[serde(default)]
    pub carbs_per_100g: Option<f64>,
    /// Fat grams per 100 g
    #[serde(default)]
    pub fat_per_100g: Option<f64>,
    /// Default mass unit
    #[serde(default = "default_base_unit")]
    pub base_unit: String,
    /// Household portion definitions in source order
    #[serde(default)]
    pub portions: Vec<PortionDefinition>,
}

fn default_base_unit() -> String {
    "g".to_owned()
}

impl Ingredient {
    /// Create an ingredient with no nutrition data
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            fdc_id: None,
            name: name.into(),
            calories_per_100g: None,
            protein_per_100g: None,
            carbs_per_100g: None,
            fat_per_100g: None,
            base_unit: default_base_unit(),
            portions: Vec::new(),
        }
    }

    /// Set the external catalogue id
    #[must_use]
    pub const fn with_fdc_id(mut self, fdc_id: u64) -> Self {
        self.fdc_id = Some(fdc_id);
        self
    }

    /// Set all four per-100g macro values
    #[must_use]
    pub const fn with_macros(mut self, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        self.calories_per_100g = Some(calories);
        self.protein_per_100g = Some(protein);
        self.carbs_per_100g = Some(carbs);
        self.fat_per_100g = Some(fat);
        self
    }

    /// Replace the portion definitions
    #[must_use]
    pub fn with_portions(mut self, portions: Vec<PortionDefinition>) -> Self {
        self.portions = portions;
        self
    }

    /// Per-100g value for one macro, if known
    #[must_use]
    pub const fn per_100g(&self, nutrient: Macro) -> Option<f64> {
        match nutrient {
            Macro::Calories => self.calories_per_100g,
            Macro::Protein => self.protein_per_100g,
            Macro::Carbs => self.carbs_per_100g,
            Macro::Fat => self.fat_per_100g,
        }
    }

    /// Lower-cased first comma segment of the name ("Bananas, raw" -> "bananas")
    #[must_use]
    pub fn primary_name(&self) -> String {
        self.name
            .to_lowercase()
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_owned()
    }
}
