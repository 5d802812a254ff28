// ABOUTME: Recipe nutrition and meal planning algorithms
// ABOUTME: Unit normalizer, nutrition aggregator, fitness scorer, and plan assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

#![deny(unsafe_code)]

//! # Macroplan Intelligence
//!
//! Data flows one way through this crate:
//!
//! ```text
//! ingredient lines -> units -> nutrition -> cached recipe totals -> planner -> fitness
//! ```
//!
//! Every component is synchronous and free of shared mutable state. Logging
//! goes through an injected [`events::EventSink`] rather than being embedded
//! in the algorithms.

/// Structured observability events and sinks
pub mod events;
/// Weighted deviation scores for meals and whole days
pub mod fitness;
/// Recipe nutrition aggregation
pub mod nutrition;
/// Daily meal plan assembly
pub mod planner;
/// Unit-to-gram normalization
pub mod units;

pub use events::{EventSink, PlannerEvent, RecordingEventSink, TracingEventSink};
pub use fitness::{daily_fitness, recipe_fitness};
pub use nutrition::{LineItem, NutritionAggregator, NutritionSnapshot};
pub use planner::{DailyPlan, MealPlanner, PlannerConfig, SelectionPolicy};
pub use units::{convert_to_grams, GramConversion, UnitNormalizer};
