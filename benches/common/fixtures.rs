// ABOUTME: Benchmark fixtures for generating recipe catalogues and ingredient lines
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

//! Benchmark fixtures.

use macroplan::models::{Ingredient, MacroTotals, MealSlot, PortionDefinition, Recipe};

/// Predefined catalogue sizes
#[derive(Debug, Clone, Copy)]
pub enum CatalogueSize {
    /// 20 recipes, a small personal collection
    Small,
    /// 400 recipes, a community site
    Large,
}

impl CatalogueSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Large => 400,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

/// Recipes spread evenly across the four slots with computed totals
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|index| {
            let slot = MealSlot::ALL[index % MealSlot::ALL.len()];
            let calories = 150.0 + ((index * 137) % 900) as f64;
            let protein = 5.0 + ((index * 31) % 60) as f64;
            let carbs = 10.0 + ((index * 53) % 110) as f64;
            let fat = 2.0 + ((index * 17) % 45) as f64;
            Recipe::new(format!("Bench recipe {index}"), slot)
                .with_totals(MacroTotals::new(calories, protein, carbs, fat))
        })
        .collect()
}

/// Ingredients exercising every conversion strategy, paired with a unit
#[must_use]
pub fn generate_lines() -> Vec<(Ingredient, f64, &'static str)> {
    let cup = PortionDefinition {
        unit_name: Some("cup".into()),
        amount: Some(1.0),
        gram_weight: Some(158.0),
        ..PortionDefinition::default()
    };
    let medium = PortionDefinition {
        unit_name: Some("undetermined".into()),
        modifier: Some("medium (3\" dia)".into()),
        amount: Some(1.0),
        gram_weight: Some(182.0),
        ..PortionDefinition::default()
    };

    vec![
        (
            Ingredient::new("Chicken breast").with_macros(165.0, 31.0, 0.0, 3.6),
            150.0,
            "g",
        ),
        (
            Ingredient::new("Rice, white, cooked")
                .with_macros(130.0, 2.7, 28.2, 0.3)
                .with_portions(vec![cup]),
            1.5,
            "cups",
        ),
        (
            Ingredient::new("Apples, raw")
                .with_macros(52.0, 0.3, 13.8, 0.2)
                .with_portions(vec![medium]),
            1.0,
            "piece",
        ),
        (
            Ingredient::new("Olive oil").with_macros(884.0, 0.0, 0.0, 100.0),
            15.0,
            "ml",
        ),
        (
            Ingredient::new("Salt").with_macros(0.0, 0.0, 0.0, 0.0),
            1.0,
            "pinch",
        ),
    ]
}
