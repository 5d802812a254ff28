// ABOUTME: Recipe unit vocabulary: parsing unit strings into tagged categories
// ABOUTME: Mass synonym table, milliliter tokens, and piece-like count tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

/// Unit-to-gram conversion chain
pub mod conversion;
/// Matching recipe units against food database portion definitions
pub mod portions;

pub use conversion::{convert_to_grams, ConversionMethod, GramConversion, UnitNormalizer};

use std::collections::HashMap;
use std::sync::LazyLock;

use macroplan_core::constants::mass::{GRAMS_PER_KG, GRAMS_PER_LB, GRAMS_PER_OZ};

/// Broad class of a recipe unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    /// Converts to grams by a fixed factor
    Mass,
    /// Household or metric volume; only milliliters have a density fallback
    Volume,
    /// Piece-like counts, resolved only through portion definitions
    Count,
    /// Anything else; portion lookup only
    Other,
}

/// Mass synonyms and their gram factor
static MASS_UNITS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for token in ["g", "gram", "grams"] {
        m.insert(token, 1.0);
    }
    for token in ["kg", "kilogram", "kilograms"] {
        m.insert(token, GRAMS_PER_KG);
    }
    for token in ["oz", "ounce", "ounces"] {
        m.insert(token, GRAMS_PER_OZ);
    }
    for token in ["lb", "pound", "pounds"] {
        m.insert(token, GRAMS_PER_LB);
    }
    m
});

const MILLILITER_TOKENS: [&str; 3] = ["ml", "milliliter", "milliliters"];

const HOUSEHOLD_VOLUME_TOKENS: [&str; 13] = [
    "cup",
    "cups",
    "tablespoon",
    "tablespoons",
    "tbsp",
    "tbs",
    "teaspoon",
    "teaspoons",
    "tsp",
    "fl oz",
    "floz",
    "fluid ounce",
    "fluid ounces",
];

/// Count words that may be resolved against a portion describing one item
pub const PIECE_LIKE_TOKENS: [&str; 7] = [
    "piece",
    "slice",
    "each",
    "item",
    "serving",
    "unit",
    "container",
];

/// A recipe unit string, normalized and classified
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeUnit {
    token: String,
    category: UnitCategory,
}

impl RecipeUnit {
    /// Trim, lower-case, and classify a unit string
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim().to_lowercase();
        let category = if MASS_UNITS.contains_key(token.as_str()) {
            UnitCategory::Mass
        } else if MILLILITER_TOKENS.contains(&token.as_str())
            || HOUSEHOLD_VOLUME_TOKENS.contains(&token.as_str())
        {
            UnitCategory::Volume
        } else if PIECE_LIKE_TOKENS.contains(&token.as_str()) {
            UnitCategory::Count
        } else {
            UnitCategory::Other
        };
        Self { token, category }
    }

    /// Normalized unit string
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Unit class
    #[must_use]
    pub const fn category(&self) -> UnitCategory {
        self.category
    }

    /// Grams per one unit, for mass units
    #[must_use]
    pub fn grams_per_unit(&self) -> Option<f64> {
        MASS_UNITS.get(self.token.as_str()).copied()
    }

    /// Whether this is the milliliter family
    #[must_use]
    pub fn is_milliliters(&self) -> bool {
        MILLILITER_TOKENS.contains(&self.token.as_str())
    }

    /// Whether this is one of the piece-like count words
    #[must_use]
    pub fn is_piece_like(&self) -> bool {
        self.category == UnitCategory::Count
    }
}
