// ABOUTME: Structured events emitted by the normalizer, aggregator, and planner
// ABOUTME: EventSink trait with tracing-backed and recording implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::sync::Mutex;

use macroplan_core::models::{Macro, MealSlot};
use tracing::{debug, error, info, warn};

use crate::units::ConversionMethod;

/// Something worth recording that happened inside an algorithm
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerEvent {
    /// A line was converted to grams
    UnitConverted {
        /// Ingredient name
        ingredient: String,
        /// Recipe quantity
        quantity: f64,
        /// Recipe unit as written
        unit: String,
        /// Resulting mass
        grams: f64,
        /// Strategy that produced the mass
        method: ConversionMethod,
    },
    /// No strategy could convert the unit
    UnitUnmatched {
        /// Ingredient name
        ingredient: String,
        /// Recipe unit as written
        unit: String,
    },
    /// A matching portion had a zero reference amount and 1 was used instead
    ZeroReferenceAmount {
        /// Ingredient name
        ingredient: String,
        /// Recipe unit as written
        unit: String,
    },
    /// A portion matched the unit but carried no gram weight
    PortionMissingGramWeight {
        /// Ingredient name
        ingredient: String,
        /// Recipe unit as written
        unit: String,
    },
    /// An ingredient lacks a per-100g value; counted as zero
    MissingMacro {
        /// Recipe name
        recipe: String,
        /// Ingredient name
        ingredient: String,
        /// Absent macro
        nutrient: Macro,
    },
    /// A recipe's totals were computed
    RecipeTotalsComputed {
        /// Recipe name
        recipe: String,
        /// Whether every line converted
        complete: bool,
        /// Lines that failed conversion
        failed_lines: usize,
    },
    /// A slot has no recipes with computed totals
    SlotWithoutRecipes {
        /// Empty slot
        slot: MealSlot,
    },
    /// An attempt found no eligible candidate for a slot
    AttemptAbandoned {
        /// Attempt index (0-based)
        attempt: u32,
        /// Slot that could not be filled
        slot: MealSlot,
    },
    /// A complete attempt beat the best score so far
    PlanImproved {
        /// Attempt index (0-based)
        attempt: u32,
        /// New best daily score
        score: f64,
    },
    /// No attempt produced a complete plan
    PlanNotFound {
        /// Attempts that were run
        attempts: u32,
    },
}

/// Receiver for algorithm events
pub trait EventSink: Send + Sync {
    /// Record one event
    fn emit(&self, event: &PlannerEvent);
}

/// Forwards events to `tracing`
///
/// Unconvertible units are errors; missing data, incomplete recipes, and
/// missing plans are warnings; per-line and per-attempt detail is debug.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: &PlannerEvent) {
        match event {
            PlannerEvent::UnitConverted {
                ingredient,
                quantity,
                unit,
                grams,
                method,
            } => debug!(
                ingredient = %ingredient,
                quantity = quantity,
                unit = %unit,
                grams = grams,
                method = ?method,
                "Converted ingredient quantity to grams"
            ),
            PlannerEvent::UnitUnmatched { ingredient, unit } => error!(
                ingredient = %ingredient,
                unit = %unit,
                "Unconvertible unit, skipping ingredient contribution"
            ),
            PlannerEvent::ZeroReferenceAmount { ingredient, unit } => warn!(
                ingredient = %ingredient,
                unit = %unit,
                "Portion has zero reference amount, using 1"
            ),
            PlannerEvent::PortionMissingGramWeight { ingredient, unit } => debug!(
                ingredient = %ingredient,
                unit = %unit,
                "Portion matched without gram weight, continuing scan"
            ),
            PlannerEvent::MissingMacro {
                recipe,
                ingredient,
                nutrient,
            } => warn!(
                recipe = %recipe,
                ingredient = %ingredient,
                nutrient = %nutrient,
                "Ingredient missing per-100g value, treating as 0"
            ),
            PlannerEvent::RecipeTotalsComputed {
                recipe,
                complete: true,
                ..
            } => info!(recipe = %recipe, "Computed recipe nutrition totals"),
            PlannerEvent::RecipeTotalsComputed {
                recipe,
                complete: false,
                failed_lines,
            } => warn!(
                recipe = %recipe,
                failed_lines = failed_lines,
                "Recipe nutrition incomplete, saved partial totals"
            ),
            PlannerEvent::SlotWithoutRecipes { slot } => {
                debug!(slot = %slot, "No recipes with totals for slot");
            }
            PlannerEvent::AttemptAbandoned { attempt, slot } => {
                debug!(attempt = attempt, slot = %slot, "Attempt abandoned, no candidates");
            }
            PlannerEvent::PlanImproved { attempt, score } => {
                debug!(attempt = attempt, score = score, "New best plan");
            }
            PlannerEvent::PlanNotFound { attempts } => {
                warn!(attempts = attempts, "No complete meal plan found");
            }
        }
    }
}

/// Keeps every event in memory, for tests and dry runs
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<PlannerEvent>>,
}

impl RecordingEventSink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events in emission order
    #[must_use]
    pub fn events(&self) -> Vec<PlannerEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Count events matching a predicate
    pub fn count(&self, predicate: impl Fn(&PlannerEvent) -> bool) -> usize {
        self.events
            .lock()
            .map(|events| events.iter().filter(|event| predicate(event)).count())
            .unwrap_or_default()
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &PlannerEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
