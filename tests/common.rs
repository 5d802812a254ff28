// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, ingredient fixtures, and a seeded record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `macroplan`

use std::sync::{Arc, Once};

use macroplan::database::{InMemoryStore, RecordStore};
use macroplan::models::{Ingredient, MealSlot, PortionDefinition, Recipe, RecipeIngredientLine, UserProfile};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Portion definition with a unit name and gram weight for one unit
pub fn portion(unit_name: &str, gram_weight: f64) -> PortionDefinition {
    PortionDefinition {
        unit_name: Some(unit_name.to_owned()),
        amount: Some(1.0),
        gram_weight: Some(gram_weight),
        ..PortionDefinition::default()
    }
}

/// Portion described only by its modifier text, as USDA survey foods are
pub fn modifier_portion(modifier: &str, gram_weight: f64) -> PortionDefinition {
    PortionDefinition {
        unit_name: Some("undetermined".to_owned()),
        modifier: Some(modifier.to_owned()),
        amount: Some(1.0),
        gram_weight: Some(gram_weight),
        ..PortionDefinition::default()
    }
}

pub fn olive_oil() -> Ingredient {
    Ingredient::new("Oil, olive, salad or cooking")
        .with_fdc_id(171_413)
        .with_macros(884.0, 0.0, 0.0, 100.0)
        .with_portions(vec![portion("tablespoon", 13.5)])
}

pub fn chicken_breast() -> Ingredient {
    Ingredient::new("Chicken breast, roasted")
        .with_fdc_id(171_477)
        .with_macros(165.0, 31.02, 0.0, 3.57)
}

pub fn white_rice() -> Ingredient {
    Ingredient::new("Rice, white, cooked")
        .with_fdc_id(168_878)
        .with_macros(130.0, 2.69, 28.17, 0.28)
        .with_portions(vec![portion("cup", 158.0)])
}

pub fn rolled_oats() -> Ingredient {
    Ingredient::new("Oats, rolled")
        .with_fdc_id(173_904)
        .with_macros(379.0, 13.15, 67.7, 6.52)
        .with_portions(vec![portion("cup", 81.0)])
}

pub fn banana() -> Ingredient {
    Ingredient::new("Bananas, raw")
        .with_fdc_id(173_944)
        .with_macros(89.0, 1.09, 22.84, 0.33)
        .with_portions(vec![modifier_portion("medium (7\" to 7-7/8\" long)", 118.0)])
}

pub fn greek_yogurt() -> Ingredient {
    Ingredient::new("Yogurt, Greek, plain, nonfat")
        .with_fdc_id(170_903)
        .with_macros(59.0, 10.19, 3.6, 0.39)
}

/// Recipe ids created by [`seeded_store`]
pub struct SeededCatalog {
    pub store: Arc<InMemoryStore>,
    pub oats: Uuid,
    pub chicken: Uuid,
    pub rice: Uuid,
    pub oil: Uuid,
    pub banana: Uuid,
    pub breakfast: Uuid,
    pub lunch: Uuid,
    pub dinner: Uuid,
    pub snack: Uuid,
}

async fn recipe_with_lines(
    store: &InMemoryStore,
    name: &str,
    slot: MealSlot,
    lines: &[(Uuid, f64, &str)],
) -> Uuid {
    let recipe = store.create_recipe(Recipe::new(name, slot)).await.unwrap();
    for (ingredient, quantity, unit) in lines {
        store
            .add_recipe_line(RecipeIngredientLine::new(recipe.id, *ingredient, *quantity, *unit))
            .await
            .unwrap();
    }
    recipe.id
}

/// Store with six ingredients and one recipe per slot, totals not yet computed
pub async fn seeded_store() -> SeededCatalog {
    let store = Arc::new(InMemoryStore::new());
    let oats = store.create_ingredient(rolled_oats()).await.unwrap().id;
    let chicken = store.create_ingredient(chicken_breast()).await.unwrap().id;
    let rice = store.create_ingredient(white_rice()).await.unwrap().id;
    let oil = store.create_ingredient(olive_oil()).await.unwrap().id;
    let banana = store.create_ingredient(banana()).await.unwrap().id;
    let yogurt = store.create_ingredient(greek_yogurt()).await.unwrap().id;

    let breakfast = recipe_with_lines(
        &store,
        "Banana oatmeal",
        MealSlot::Breakfast,
        &[(oats, 1.0, "cup"), (banana, 1.0, "medium")],
    )
    .await;
    let lunch = recipe_with_lines(
        &store,
        "Chicken rice bowl",
        MealSlot::Lunch,
        &[(chicken, 150.0, "g"), (rice, 1.5, "cups"), (oil, 1.0, "tablespoon")],
    )
    .await;
    let dinner = recipe_with_lines(
        &store,
        "Roast chicken",
        MealSlot::Dinner,
        &[(chicken, 200.0, "g"), (oil, 15.0, "ml")],
    )
    .await;
    let snack = recipe_with_lines(
        &store,
        "Yogurt cup",
        MealSlot::Snack,
        &[(yogurt, 170.0, "grams")],
    )
    .await;

    SeededCatalog {
        store,
        oats,
        chicken,
        rice,
        oil,
        banana,
        breakfast,
        lunch,
        dinner,
        snack,
    }
}

/// Profile with the default 2000 kcal, 30/40/30 split
pub fn default_profile() -> UserProfile {
    UserProfile::new(Uuid::new_v4())
}
