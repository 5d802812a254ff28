// ABOUTME: Core types and constants for recipe nutrition and meal planning
// ABOUTME: Foundation crate with error handling, domain models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

#![deny(unsafe_code)]

//! # Macroplan Core
//!
//! Foundation crate providing shared types and constants for the macroplan
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit factors, energy densities, and USDA nutrient ids
//! - **models**: Ingredients, portion definitions, recipes, user profiles, macro vectors

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Ingredient, Recipe, `UserProfile`, `MacroTotals`)
pub mod models;
