// ABOUTME: Integration tests for meal-plan generation against a stored catalogue
// ABOUTME: Covers missing profiles, empty catalogues, and the JSON response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::float_cmp
)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use macroplan::database::{InMemoryStore, RecordStore};
use macroplan::errors::ErrorCode;
use macroplan::models::MealSlot;
use macroplan::services::{MealPlanService, NutritionService};
use macroplan::{PlannerConfig, TracingEventSink};
use uuid::Uuid;

#[tokio::test]
async fn test_missing_profile_is_not_found() {
    let service = MealPlanService::new(
        Arc::new(InMemoryStore::new()),
        Arc::new(TracingEventSink),
        PlannerConfig::default(),
    );
    let err = service.generate_for_user(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_uncomputed_catalogue_has_no_plan() {
    let catalog = common::seeded_store().await;
    let profile = common::default_profile();
    catalog.store.upsert_profile(profile.clone()).await.unwrap();

    let service = MealPlanService::new(
        catalog.store.clone(),
        Arc::new(TracingEventSink),
        PlannerConfig::default(),
    );
    assert!(service.generate_for_user(profile.user_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_plan_after_recalculation() {
    common::init_test_logging();
    let catalog = common::seeded_store().await;
    let profile = common::default_profile();
    catalog.store.upsert_profile(profile.clone()).await.unwrap();

    NutritionService::new(catalog.store.clone(), Arc::new(TracingEventSink))
        .recalculate_all()
        .await
        .unwrap();

    let service = MealPlanService::new(
        catalog.store.clone(),
        Arc::new(TracingEventSink),
        PlannerConfig::default(),
    );
    let plan = service
        .generate_for_user(profile.user_id)
        .await
        .unwrap()
        .expect("one recipe per slot is enough for a plan");

    assert_eq!(plan.daily_targets.calories, 2000.0);
    assert_eq!(plan.daily_targets.protein_g, 150.0);
    assert_eq!(plan.meals.get(MealSlot::Breakfast).unwrap().id, catalog.breakfast);
    assert_eq!(plan.meals.get(MealSlot::Lunch).unwrap().id, catalog.lunch);
    assert_eq!(plan.meals.get(MealSlot::Dinner).unwrap().id, catalog.dinner);
    assert_eq!(plan.meals.get(MealSlot::Snack).unwrap().id, catalog.snack);
    assert!((plan.totals_for_the_day.calories - 1639.24).abs() < 1e-6);

    let lunch = plan.meals.lunch.as_ref().unwrap();
    assert_eq!(lunch.ingredient_details.len(), 3);
    assert!(lunch
        .ingredient_details
        .iter()
        .any(|line| line.fdc_id == Some(171_413) && line.unit == "tablespoon"));
}

#[tokio::test]
async fn test_response_json_shape() {
    let catalog = common::seeded_store().await;
    let profile = common::default_profile();
    catalog.store.upsert_profile(profile.clone()).await.unwrap();
    NutritionService::new(catalog.store.clone(), Arc::new(TracingEventSink))
        .recalculate_all()
        .await
        .unwrap();

    let plan = MealPlanService::new(
        catalog.store.clone(),
        Arc::new(TracingEventSink),
        PlannerConfig::default(),
    )
    .generate_for_user(profile.user_id)
    .await
    .unwrap()
    .unwrap();

    let json = serde_json::to_value(&plan).unwrap();
    for key in ["calories", "protein_g", "carbs_g", "fat_g"] {
        assert!(json["daily_targets"][key].is_number(), "daily_targets.{key}");
    }
    for key in ["calories", "protein", "carbs", "fat"] {
        assert!(json["totals_for_the_day"][key].is_number(), "totals_for_the_day.{key}");
    }
    for slot in ["breakfast", "lunch", "dinner", "snack"] {
        assert!(json["meals"].get(slot).is_some(), "meals.{slot}");
    }
    assert_eq!(json["meals"]["dinner"]["meal_type"], "dinner");
    assert!(json["meals"]["dinner"]["ingredient_details"].is_array());
}

#[tokio::test]
async fn test_snack_is_null_without_snack_recipes() {
    let catalog = common::seeded_store().await;
    let profile = common::default_profile();
    catalog.store.upsert_profile(profile.clone()).await.unwrap();

    let nutrition = NutritionService::new(catalog.store.clone(), Arc::new(TracingEventSink));
    for id in [catalog.breakfast, catalog.lunch, catalog.dinner] {
        nutrition.recalculate_recipe(id).await.unwrap();
    }

    let plan = MealPlanService::new(
        catalog.store.clone(),
        Arc::new(TracingEventSink),
        PlannerConfig::default(),
    )
    .generate_for_user(profile.user_id)
    .await
    .unwrap()
    .unwrap();

    assert!(plan.meals.snack.is_none());
    let json = serde_json::to_value(&plan).unwrap();
    assert!(json["meals"]["snack"].is_null());
}
