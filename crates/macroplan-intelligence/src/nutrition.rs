// ABOUTME: Sums per-ingredient macro contributions of a recipe into a nutrition snapshot
// ABOUTME: Tracks unit-conversion failures as incompleteness without aborting the recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use macroplan_core::models::{Ingredient, Macro, MacroTotals};
use serde::{Deserialize, Serialize};

use crate::events::{EventSink, PlannerEvent};
use crate::units::{GramConversion, UnitNormalizer};

/// One ingredient line resolved against the catalogue
#[derive(Debug, Clone, Copy)]
pub struct LineItem<'a> {
    /// Referenced ingredient
    pub ingredient: &'a Ingredient,
    /// Amount in `unit`
    pub quantity: f64,
    /// Unit string as written on the recipe
    pub unit: &'a str,
}

/// A line whose unit could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedLine {
    /// Ingredient name
    pub ingredient: String,
    /// Unit string as written on the recipe
    pub unit: String,
}

/// Result of aggregating one recipe
///
/// Totals are rounded to two decimals and are the best current estimate
/// even when `complete` is false. Callers persist them through the record
/// store's nutrition update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSnapshot {
    /// Summed macros
    pub totals: MacroTotals,
    /// False when any line failed unit conversion
    pub complete: bool,
    /// Lines that contributed a positive mass
    pub converted_lines: usize,
    /// Lines skipped for an unconvertible unit
    pub failed_lines: Vec<FailedLine>,
}

/// Computes recipe totals from ingredient lines
pub struct NutritionAggregator<'a> {
    normalizer: UnitNormalizer<'a>,
    events: &'a dyn EventSink,
}

impl<'a> NutritionAggregator<'a> {
    /// Create an aggregator reporting to `events`
    #[must_use]
    pub const fn new(events: &'a dyn EventSink) -> Self {
        Self {
            normalizer: UnitNormalizer::new(events),
            events,
        }
    }

    /// Sum macro contributions of every line
    ///
    /// An unconvertible unit skips that line and marks the snapshot
    /// incomplete. A missing per-100g value counts as zero for that macro
    /// only and is reported as a data-quality event.
    #[must_use]
    pub fn compute_totals(&self, recipe_name: &str, lines: &[LineItem<'_>]) -> NutritionSnapshot {
        let mut totals = MacroTotals::zero();
        let mut converted_lines = 0;
        let mut failed_lines = Vec::new();

        for line in lines {
            let grams = match self
                .normalizer
                .grams_for(line.quantity, line.unit, line.ingredient)
            {
                GramConversion::Converted { grams, .. } => grams,
                GramConversion::Unmatched => {
                    failed_lines.push(FailedLine {
                        ingredient: line.ingredient.name.clone(),
                        unit: line.unit.to_owned(),
                    });
                    continue;
                }
            };
            if grams <= 0.0 {
                continue;
            }

            totals += self.contribution(recipe_name, line.ingredient, grams);
            converted_lines += 1;
        }

        let snapshot = NutritionSnapshot {
            totals: totals.rounded(),
            complete: failed_lines.is_empty(),
            converted_lines,
            failed_lines,
        };
        self.events.emit(&PlannerEvent::RecipeTotalsComputed {
            recipe: recipe_name.to_owned(),
            complete: snapshot.complete,
            failed_lines: snapshot.failed_lines.len(),
        });
        snapshot
    }

    fn contribution(&self, recipe_name: &str, ingredient: &Ingredient, grams: f64) -> MacroTotals {
        let per_gram = |nutrient: Macro| {
            ingredient.per_100g(nutrient).map_or_else(
                || {
                    self.events.emit(&PlannerEvent::MissingMacro {
                        recipe: recipe_name.to_owned(),
                        ingredient: ingredient.name.clone(),
                        nutrient,
                    });
                    0.0
                },
                |value| value / 100.0,
            )
        };

        MacroTotals::new(
            per_gram(Macro::Calories) * grams,
            per_gram(Macro::Protein) * grams,
            per_gram(Macro::Carbs) * grams,
            per_gram(Macro::Fat) * grams,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingEventSink;

    #[test]
    fn test_zero_gram_line_is_skipped_silently() {
        let sink = RecordingEventSink::new();
        let aggregator = NutritionAggregator::new(&sink);
        let sugar = Ingredient::new("Sugar");
        let snapshot = aggregator.compute_totals(
            "Nothing",
            &[LineItem {
                ingredient: &sugar,
                quantity: 0.0,
                unit: "g",
            }],
        );
        assert!(snapshot.complete);
        assert_eq!(snapshot.converted_lines, 0);
        assert_eq!(snapshot.totals, MacroTotals::zero());
        assert_eq!(
            sink.count(|e| matches!(e, PlannerEvent::MissingMacro { .. })),
            0
        );
    }

    #[test]
    fn test_empty_recipe_is_complete_zero() {
        let sink = RecordingEventSink::new();
        let snapshot = NutritionAggregator::new(&sink).compute_totals("Air", &[]);
        assert!(snapshot.complete);
        assert_eq!(snapshot.totals, MacroTotals::zero());
    }
}
