// ABOUTME: Matches a recipe unit against one food database portion definition
// ABOUTME: Builds the candidate unit set from unit name, abbreviation, and modifier text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use std::collections::HashSet;

use macroplan_core::models::PortionDefinition;

use super::RecipeUnit;

/// Placeholder the food database uses when a portion has no real unit
const UNDETERMINED: &str = "undetermined";

/// Alias groups applied to the unit extracted from a portion modifier
const MODIFIER_ALIASES: [&[&str]; 4] = [
    &["tbsp", "tbs", "tablespoon"],
    &["tsp", "teaspoon"],
    &["cup", "cups"],
    &["fl oz", "floz", "fluid ounce"],
];

/// A portion definition prepared for unit matching
#[derive(Debug, Clone)]
pub struct PortionMatcher<'a> {
    portion: &'a PortionDefinition,
    unit_name: String,
    modifier_unit: String,
    candidates: HashSet<String>,
}

impl<'a> PortionMatcher<'a> {
    /// Build the candidate unit set for a portion
    #[must_use]
    pub fn new(portion: &'a PortionDefinition) -> Self {
        let unit_name = normalized(portion.unit_name.as_deref());
        let abbreviation = normalized(portion.unit_abbreviation.as_deref());
        let modifier_unit = modifier_unit(portion.modifier.as_deref());

        let mut candidates = HashSet::new();
        for token in [&unit_name, &abbreviation] {
            if !token.is_empty() && token != UNDETERMINED {
                insert_with_plural(&mut candidates, token);
            }
        }
        if !modifier_unit.is_empty() {
            insert_with_plural(&mut candidates, &modifier_unit);
            if let Some(group) = MODIFIER_ALIASES
                .iter()
                .find(|group| group.contains(&modifier_unit.as_str()))
            {
                candidates.extend(group.iter().map(|alias| (*alias).to_owned()));
            }
        }

        Self {
            portion,
            unit_name,
            modifier_unit,
            candidates,
        }
    }

    /// Unit extracted from the modifier text
    #[must_use]
    pub fn modifier_unit(&self) -> &str {
        &self.modifier_unit
    }

    /// Whether the unit string is literally one of the candidates
    #[must_use]
    pub fn matches_literally(&self, unit: &RecipeUnit) -> bool {
        self.candidates.contains(unit.token())
    }

    /// Whether this portion resolves the recipe unit
    ///
    /// Piece-like units also match a portion describing a single item of the
    /// ingredient. `ingredient_primary` is the lower-cased first comma
    /// segment of the ingredient name.
    #[must_use]
    pub fn matches(&self, unit: &RecipeUnit, ingredient_primary: &str) -> bool {
        if self.matches_literally(unit) {
            return true;
        }
        if !unit.is_piece_like() {
            return false;
        }

        #[allow(clippy::float_cmp)]
        let single_item = self.portion.reference_amount() == 1.0;
        single_item && self.describes_piece(unit, ingredient_primary)
    }

    fn describes_piece(&self, unit: &RecipeUnit, ingredient_primary: &str) -> bool {
        let names_ingredient = !ingredient_primary.is_empty()
            && (self.unit_name.contains(ingredient_primary)
                || self.modifier_unit.contains(ingredient_primary));

        (!self.modifier_unit.is_empty() && unit.token() == self.modifier_unit)
            || self.unit_name.contains(unit.token())
            || names_ingredient
    }
}

/// Text before any parenthesis, then before any comma, trimmed and lower-cased
///
/// `"1 cup, chopped"` yields `"1 cup"`, `"large (8\" long)"` yields `"large"`.
#[must_use]
pub fn modifier_unit(modifier: Option<&str>) -> String {
    let text = normalized(modifier);
    let before_paren = text.split('(').next().unwrap_or_default().trim();
    before_paren
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned()
}

fn normalized(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

fn insert_with_plural(candidates: &mut HashSet<String>, token: &str) {
    candidates.insert(token.to_owned());
    if !token.ends_with('s') {
        candidates.insert(format!("{token}s"));
    }
}
