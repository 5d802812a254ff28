// ABOUTME: Converts a (quantity, unit, ingredient) triple to grams through a prioritized chain
// ABOUTME: Mass table, then portion definitions, then milliliter density heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use macroplan_core::constants::density::{OIL_G_PER_ML, OIL_NAME_MARKER, WATER_G_PER_ML};
use macroplan_core::models::Ingredient;

use super::portions::PortionMatcher;
use super::RecipeUnit;
use crate::events::{EventSink, PlannerEvent};

/// Which strategy produced a gram value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionMethod {
    /// Quantity was zero or negative
    NonPositiveQuantity,
    /// Fixed mass factor
    Mass,
    /// Portion definition at `index` in the ingredient's stored order
    Portion {
        /// Position of the matching portion
        index: usize,
    },
    /// Milliliters times a density
    VolumeDensity {
        /// Density used (g/ml)
        grams_per_ml: f64,
    },
}

/// Outcome of a unit conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GramConversion {
    /// The quantity's mass
    Converted {
        /// Mass in grams
        grams: f64,
        /// Strategy that matched
        method: ConversionMethod,
    },
    /// No strategy could interpret the unit
    Unmatched,
}

impl GramConversion {
    /// Grams, if converted
    #[must_use]
    pub const fn grams(&self) -> Option<f64> {
        match self {
            Self::Converted { grams, .. } => Some(*grams),
            Self::Unmatched => None,
        }
    }
}

/// Unit normalizer with an injected event sink
///
/// Strategies are tried in order and the first success wins:
/// non-positive quantity, mass synonyms, portion definitions, milliliter
/// density. Exhaustion yields [`GramConversion::Unmatched`], which is
/// reported but never an error.
#[derive(Clone, Copy)]
pub struct UnitNormalizer<'a> {
    events: &'a dyn EventSink,
}

impl<'a> UnitNormalizer<'a> {
    /// Create a normalizer reporting to `events`
    #[must_use]
    pub const fn new(events: &'a dyn EventSink) -> Self {
        Self { events }
    }

    /// Convert `quantity` of `unit` of `ingredient` to grams
    #[must_use]
    pub fn grams_for(&self, quantity: f64, unit: &str, ingredient: &Ingredient) -> GramConversion {
        let result = self.resolve(quantity, unit, ingredient);
        match result {
            GramConversion::Converted { grams, method } => {
                self.events.emit(&PlannerEvent::UnitConverted {
                    ingredient: ingredient.name.clone(),
                    quantity,
                    unit: unit.to_owned(),
                    grams,
                    method,
                });
            }
            GramConversion::Unmatched => {
                self.events.emit(&PlannerEvent::UnitUnmatched {
                    ingredient: ingredient.name.clone(),
                    unit: unit.to_owned(),
                });
            }
        }
        result
    }

    fn resolve(&self, quantity: f64, unit: &str, ingredient: &Ingredient) -> GramConversion {
        if quantity.is_nan() || quantity <= 0.0 {
            return GramConversion::Converted {
                grams: 0.0,
                method: ConversionMethod::NonPositiveQuantity,
            };
        }

        let parsed = RecipeUnit::parse(unit);
        if let Some(factor) = parsed.grams_per_unit() {
            return GramConversion::Converted {
                grams: quantity * factor,
                method: ConversionMethod::Mass,
            };
        }

        if let Some(converted) = self.from_portions(quantity, &parsed, ingredient) {
            return converted;
        }

        if parsed.is_milliliters() {
            let grams_per_ml = density_for(ingredient);
            return GramConversion::Converted {
                grams: quantity * grams_per_ml,
                method: ConversionMethod::VolumeDensity { grams_per_ml },
            };
        }

        GramConversion::Unmatched
    }

    fn from_portions(
        &self,
        quantity: f64,
        unit: &RecipeUnit,
        ingredient: &Ingredient,
    ) -> Option<GramConversion> {
        if ingredient.portions.is_empty() {
            return None;
        }
        let primary = ingredient.primary_name();

        for (index, portion) in ingredient.portions.iter().enumerate() {
            if !PortionMatcher::new(portion).matches(unit, &primary) {
                continue;
            }
            let Some(gram_weight) = portion.gram_weight else {
                self.events.emit(&PlannerEvent::PortionMissingGramWeight {
                    ingredient: ingredient.name.clone(),
                    unit: unit.token().to_owned(),
                });
                continue;
            };

            let mut reference = portion.reference_amount();
            #[allow(clippy::float_cmp)]
            let zero_reference = reference == 0.0;
            if zero_reference {
                self.events.emit(&PlannerEvent::ZeroReferenceAmount {
                    ingredient: ingredient.name.clone(),
                    unit: unit.token().to_owned(),
                });
                reference = 1.0;
            }

            return Some(GramConversion::Converted {
                grams: quantity * (gram_weight / reference),
                method: ConversionMethod::Portion { index },
            });
        }
        None
    }
}

fn density_for(ingredient: &Ingredient) -> f64 {
    if ingredient.name.to_lowercase().contains(OIL_NAME_MARKER) {
        OIL_G_PER_ML
    } else {
        WATER_G_PER_ML
    }
}

struct SilentSink;

impl EventSink for SilentSink {
    fn emit(&self, _event: &PlannerEvent) {}
}

/// Convert to grams without reporting any events
#[must_use]
pub fn convert_to_grams(quantity: f64, unit: &str, ingredient: &Ingredient) -> GramConversion {
    UnitNormalizer::new(&SilentSink).grams_for(quantity, unit, ingredient)
}
