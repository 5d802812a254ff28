// ABOUTME: Named constants for unit conversion, energy density, and USDA nutrient ids
// ABOUTME: Eliminates magic numbers in the normalizer, scorer, and ingestion job
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

/// Mass unit conversion factors (to grams)
pub mod mass {
    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
    /// Grams per avoirdupois ounce
    pub const GRAMS_PER_OZ: f64 = 28.349_523_125;
    /// Grams per avoirdupois pound
    pub const GRAMS_PER_LB: f64 = 453.592_37;
}

/// Density heuristics for the milliliter fallback
pub mod density {
    /// Water-equivalent density (g/ml)
    pub const WATER_G_PER_ML: f64 = 1.0;
    /// Cooking oil density (g/ml)
    pub const OIL_G_PER_ML: f64 = 0.92;
    /// Name fragment that selects the oil density
    pub const OIL_NAME_MARKER: &str = "oil";
}

/// Physiological energy density of each macro (kcal per gram)
pub mod energy {
    /// Protein kcal per gram
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate kcal per gram
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat kcal per gram
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// USDA `FoodData` Central nutrient identifiers
pub mod usda_nutrients {
    /// Energy in kcal
    pub const ENERGY_KCAL: u32 = 1008;
    /// Energy, Atwater specific factors
    pub const ENERGY_ATWATER_SPECIFIC: u32 = 2048;
    /// Energy, Atwater general factors
    pub const ENERGY_ATWATER_GENERAL: u32 = 2047;
    /// Protein
    pub const PROTEIN: u32 = 1003;
    /// Total lipid (fat)
    pub const TOTAL_FAT: u32 = 1004;
    /// Carbohydrate, by difference
    pub const CARBOHYDRATE: u32 = 1005;

    /// Preferred-id fallback chain for calories
    pub const CALORIE_IDS: &[u32] = &[ENERGY_KCAL, ENERGY_ATWATER_SPECIFIC, ENERGY_ATWATER_GENERAL];
    /// Preferred-id chain for protein
    pub const PROTEIN_IDS: &[u32] = &[PROTEIN];
    /// Preferred-id chain for fat
    pub const FAT_IDS: &[u32] = &[TOTAL_FAT];
    /// Preferred-id chain for carbohydrates
    pub const CARB_IDS: &[u32] = &[CARBOHYDRATE];
}

/// Meal plan assembly defaults
pub mod planning {
    /// Independent attempts per plan request
    pub const DEFAULT_ATTEMPTS: u32 = 50;
    /// Lowest-scoring candidates considered per slot
    pub const DEFAULT_CANDIDATE_WINDOW: usize = 5;
    /// A recipe above this multiple of the daily calories is too big for a non-final slot
    pub const DEFAULT_OVERSIZE_FACTOR: f64 = 1.5;
    /// Allocation used for any slot without an explicit share
    pub const DEFAULT_SLOT_ALLOCATION: f64 = 0.10;
}

/// Default user profile targets
pub mod profile_defaults {
    /// Daily calorie target
    pub const TARGET_CALORIES: u32 = 2000;
    /// Protein share of calories (%)
    pub const PROTEIN_PERCENT: f64 = 30.0;
    /// Carbohydrate share of calories (%)
    pub const CARBS_PERCENT: f64 = 40.0;
    /// Fat share of calories (%)
    pub const FAT_PERCENT: f64 = 30.0;
}
