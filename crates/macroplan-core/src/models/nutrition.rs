// ABOUTME: Four-macro nutrient vector used for recipe totals, targets, and day totals
// ABOUTME: Defines MacroTotals arithmetic and the Macro selector enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// One of the four tracked macros
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Macro {
    /// Energy in kcal
    Calories,
    /// Protein in grams
    Protein,
    /// Carbohydrates in grams
    Carbs,
    /// Fat in grams
    Fat,
}

impl Macro {
    /// All macros in reporting order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calories => write!(f, "calories"),
            Self::Protein => write!(f, "protein"),
            Self::Carbs => write!(f, "carbs"),
            Self::Fat => write!(f, "fat"),
        }
    }
}

/// Calories plus protein/carbs/fat grams
///
/// Used both for achieved amounts (a recipe's totals, a day's totals) and
/// for targets (daily targets, per-slot ideals).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
}

impl MacroTotals {
    /// Build a vector from its four components
    #[must_use]
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }

    /// The all-zero vector
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Read one component
    #[must_use]
    pub const fn get(&self, nutrient: Macro) -> f64 {
        match nutrient {
            Macro::Calories => self.calories,
            Macro::Protein => self.protein_g,
            Macro::Carbs => self.carbs_g,
            Macro::Fat => self.fat_g,
        }
    }

    /// Multiply every component by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.calories * factor,
            self.protein_g * factor,
            self.carbs_g * factor,
            self.fat_g * factor,
        )
    }

    /// Round every component to two decimal places
    #[must_use]
    pub fn rounded(&self) -> Self {
        fn round2(value: f64) -> f64 {
            (value * 100.0).round() / 100.0
        }
        Self::new(
            round2(self.calories),
            round2(self.protein_g),
            round2(self.carbs_g),
            round2(self.fat_g),
        )
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.calories + rhs.calories,
            self.protein_g + rhs.protein_g,
            self.carbs_g + rhs.carbs_g,
            self.fat_g + rhs.fat_g,
        )
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
