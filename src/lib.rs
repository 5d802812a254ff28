// ABOUTME: Main library entry point for the macroplan recipe nutrition service
// ABOUTME: Wires configuration, record storage, USDA ingestion, and planning services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

#![deny(unsafe_code)]

//! # Macroplan
//!
//! Recipe nutrition and daily meal planning.
//!
//! ## Architecture
//!
//! - **`macroplan-core`**: error types, constants, and data models
//! - **`macroplan-intelligence`**: unit normalization, nutrition
//!   aggregation, fitness scoring, and plan assembly, all without I/O
//! - **this crate**: configuration, logging, the record store, the USDA
//!   client, ingestion, and the services the CLI calls
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use macroplan::config::AppConfig;
//! use macroplan::database::InMemoryStore;
//! use macroplan::errors::AppResult;
//! use macroplan::services::MealPlanService;
//! use macroplan::TracingEventSink;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let store = Arc::new(InMemoryStore::open(&config.catalog_path).await?);
//!     let plans = MealPlanService::new(store, Arc::new(TracingEventSink), config.planner);
//!     let plan = plans.generate_for_user(uuid::Uuid::new_v4()).await;
//!     println!("{}", plan.is_ok());
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Record store trait and in-memory implementation
pub mod database;

/// Error types
pub mod errors;

/// USDA `FoodData` Central client
pub mod external;

/// Ingredient ingestion job
pub mod ingestion;

/// Structured logging setup
pub mod logging;

/// Recalculation and meal-plan services
pub mod services;

pub use macroplan_core::models;
pub use macroplan_intelligence::{
    convert_to_grams, daily_fitness, recipe_fitness, DailyPlan, EventSink, GramConversion,
    LineItem, MealPlanner, NutritionAggregator, NutritionSnapshot, PlannerConfig, PlannerEvent,
    RecordingEventSink, SelectionPolicy, TracingEventSink, UnitNormalizer,
};
