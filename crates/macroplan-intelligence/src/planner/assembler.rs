// ABOUTME: Meal plan search: repeated greedy passes over meal slots keeping the best complete day
// ABOUTME: Each attempt fills slots in fixed order from the lowest-scoring candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::collections::BTreeMap;

use macroplan_core::models::{MacroTotals, MealSlot, Recipe, UserProfile};

use super::selection::Picker;
use super::{daily_targets, slot_allocation, DailyPlan, PlannerConfig};
use crate::events::{EventSink, PlannerEvent};
use crate::fitness::{daily_fitness, recipe_fitness};

/// Recipes with computed totals, grouped by slot
type SlotIndex<'r> = BTreeMap<MealSlot, Vec<(&'r Recipe, MacroTotals)>>;

/// Local-search meal planner
///
/// Attempts are independent and carry nothing between them. With
/// [`super::SelectionPolicy::BestOfWindow`] every attempt replays the same
/// choices, so the budget only matters for the seeded policy.
pub struct MealPlanner<'a> {
    config: PlannerConfig,
    events: &'a dyn EventSink,
}

struct Attempt<'r> {
    meals: BTreeMap<MealSlot, &'r Recipe>,
    totals: MacroTotals,
}

impl<'a> MealPlanner<'a> {
    /// Create a planner
    #[must_use]
    pub const fn new(config: PlannerConfig, events: &'a dyn EventSink) -> Self {
        Self { config, events }
    }

    /// Find the lowest-scoring complete day, or `None` when breakfast,
    /// lunch, and dinner cannot all be filled
    #[must_use]
    pub fn generate_plan(&self, profile: &UserProfile, recipes: &[Recipe]) -> Option<DailyPlan> {
        let targets = daily_targets(profile);
        let index = index_by_slot(recipes);
        for slot in MealSlot::ALL {
            if !index.contains_key(&slot) {
                self.events.emit(&PlannerEvent::SlotWithoutRecipes { slot });
            }
        }

        let mut picker = Picker::for_policy(self.config.selection);
        let mut best: Option<(u32, f64, Attempt<'_>)> = None;

        for attempt_no in 0..self.config.attempts {
            let Some(attempt) = self.run_attempt(attempt_no, &index, &targets, &mut picker) else {
                continue;
            };
            if !MealSlot::REQUIRED
                .iter()
                .all(|slot| attempt.meals.contains_key(slot))
            {
                continue;
            }

            let score = daily_fitness(&attempt.totals, &targets);
            let improved = best
                .as_ref()
                .map_or(true, |(_, best_score, _)| score < *best_score);
            if improved {
                self.events.emit(&PlannerEvent::PlanImproved {
                    attempt: attempt_no,
                    score,
                });
                best = Some((attempt_no, score, attempt));
            }
        }

        let Some((attempt_no, score, attempt)) = best else {
            self.events.emit(&PlannerEvent::PlanNotFound {
                attempts: self.config.attempts,
            });
            return None;
        };

        Some(DailyPlan {
            meals: attempt
                .meals
                .into_iter()
                .map(|(slot, recipe)| (slot, recipe.clone()))
                .collect(),
            totals: attempt.totals,
            targets,
            score,
            attempt: attempt_no,
        })
    }

    /// One pass over the slots; `None` when a slot with recipes has no eligible candidate
    fn run_attempt<'r>(
        &self,
        attempt_no: u32,
        index: &SlotIndex<'r>,
        targets: &MacroTotals,
        picker: &mut Picker,
    ) -> Option<Attempt<'r>> {
        let mut attempt = Attempt {
            meals: BTreeMap::new(),
            totals: MacroTotals::zero(),
        };

        for slot in MealSlot::ALL {
            let Some(recipes) = index.get(&slot) else {
                continue;
            };
            let ideal = targets.scaled(slot_allocation(slot));

            let mut candidates = self.candidates(recipes, attempt.meals.len(), targets, &ideal);
            if candidates.is_empty() {
                self.events.emit(&PlannerEvent::AttemptAbandoned {
                    attempt: attempt_no,
                    slot,
                });
                return None;
            }

            candidates.sort_by(|a, b| a.0.total_cmp(&b.0));
            let window = candidates.len().min(self.config.candidate_window.max(1));
            let (_, recipe, macros) = candidates[picker.pick(window)];

            attempt.meals.insert(slot, recipe);
            attempt.totals += macros;
        }
        Some(attempt)
    }

    /// Scored candidates for one slot
    ///
    /// Recipes above the oversize limit are excluded unless this is the
    /// last slot left to fill. The limit is taken against the full daily
    /// calorie target, not a running remainder.
    fn candidates<'r>(
        &self,
        recipes: &[(&'r Recipe, MacroTotals)],
        filled: usize,
        targets: &MacroTotals,
        ideal: &MacroTotals,
    ) -> Vec<(f64, &'r Recipe, MacroTotals)> {
        let limit = targets.calories * self.config.oversize_factor;
        let enforce_limit = filled < MealSlot::ALL.len() - 1;

        recipes
            .iter()
            .filter(|(_, macros)| !(enforce_limit && macros.calories > limit))
            .map(|(recipe, macros)| (recipe_fitness(macros, ideal), *recipe, *macros))
            .collect()
    }
}

fn index_by_slot(recipes: &[Recipe]) -> SlotIndex<'_> {
    let mut index: SlotIndex<'_> = BTreeMap::new();
    for recipe in recipes {
        if let Some(macros) = recipe.achieved_macros() {
            index
                .entry(recipe.meal_type)
                .or_default()
                .push((recipe, macros));
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RecordingEventSink;
    use crate::planner::SelectionPolicy;
    use uuid::Uuid;

    fn recipe(name: &str, slot: MealSlot, calories: f64) -> Recipe {
        Recipe::new(name, slot).with_totals(MacroTotals::new(
            calories,
            calories * 0.3 / 4.0,
            calories * 0.4 / 4.0,
            calories * 0.3 / 9.0,
        ))
    }

    #[test]
    fn test_stable_sort_keeps_first_of_equal_scores() {
        let recipes = vec![
            recipe("Oats A", MealSlot::Breakfast, 500.0),
            recipe("Oats B", MealSlot::Breakfast, 500.0),
            recipe("Soup", MealSlot::Lunch, 700.0),
            recipe("Stew", MealSlot::Dinner, 600.0),
        ];
        let sink = RecordingEventSink::new();
        let plan = MealPlanner::new(PlannerConfig::default(), &sink)
            .generate_plan(&UserProfile::new(Uuid::new_v4()), &recipes)
            .unwrap();
        assert_eq!(plan.meal(MealSlot::Breakfast).unwrap().name, "Oats A");
        assert_eq!(plan.attempt, 0);
    }

    #[test]
    fn test_oversize_recipe_excluded_before_last_slot() {
        let recipes = vec![
            recipe("Feast", MealSlot::Breakfast, 3500.0),
            recipe("Soup", MealSlot::Lunch, 700.0),
            recipe("Stew", MealSlot::Dinner, 600.0),
        ];
        let sink = RecordingEventSink::new();
        let plan = MealPlanner::new(PlannerConfig::default(), &sink)
            .generate_plan(&UserProfile::new(Uuid::new_v4()), &recipes);
        assert!(plan.is_none());
        assert_eq!(
            sink.count(|e| matches!(e, PlannerEvent::AttemptAbandoned { slot: MealSlot::Breakfast, .. })),
            50
        );
    }

    #[test]
    fn test_seeded_policy_is_reproducible() {
        let mut recipes = Vec::new();
        for slot in MealSlot::ALL {
            for i in 0..6 {
                recipes.push(recipe(&format!("{slot} {i}"), slot, 300.0 + f64::from(i) * 40.0));
            }
        }
        let config = PlannerConfig {
            selection: SelectionPolicy::Seeded { seed: 42 },
            ..PlannerConfig::default()
        };
        let profile = UserProfile::new(Uuid::new_v4());
        let sink = RecordingEventSink::new();
        let first = MealPlanner::new(config, &sink).generate_plan(&profile, &recipes);
        let second = MealPlanner::new(config, &sink).generate_plan(&profile, &recipes);
        assert_eq!(first, second);
    }
}
