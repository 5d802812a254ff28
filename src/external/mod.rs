// ABOUTME: External API client modules (USDA FoodData Central)
// ABOUTME: Provides food composition records for ingredient ingestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

//! External API Clients

pub mod usda_client;

pub use usda_client::{
    FoodDataSource, FoodNutrient, FoodRecord, MockFoodDataSource, UsdaClient, UsdaClientConfig,
};
