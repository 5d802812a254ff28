// ABOUTME: USDA FoodData Central API client for per-food nutrient and portion retrieval
// ABOUTME: Implements the FoodDataSource seam with rate limiting, plus a mock for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

//! USDA `FoodData` Central API Client
//!
//! Fetches one food at a time by FDC id with `format=full`, which includes
//! the nutrient list and the household `foodPortions` used by the unit
//! normalizer.
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use macroplan_core::models::PortionDefinition;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::{AppError, AppResult};

const SERVICE: &str = "USDA API";

/// USDA API client configuration
#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    /// USDA API key (free from <https://fdc.nal.usda.gov/api-key-signup.html>)
    pub api_key: String,
    /// Base URL for USDA API (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Rate limit per minute (default: 30)
    pub rate_limit_per_minute: u32,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.nal.usda.gov/fdc/v1".to_owned(),
            rate_limit_per_minute: 30,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// One nutrient amount, per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodNutrient {
    /// Nutrient ID
    pub nutrient_id: u32,
    /// Amount per 100 g
    pub amount: f64,
}

/// A food as returned by the database, reduced to what ingestion needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// `FoodData` Central ID
    pub fdc_id: u64,
    /// Food description, if published
    pub description: Option<String>,
    /// Nutrients in source order
    pub nutrients: Vec<FoodNutrient>,
    /// Household portions in source order
    pub portions: Vec<PortionDefinition>,
}

impl FoodRecord {
    /// First amount found along a preferred-id chain
    #[must_use]
    pub fn nutrient_amount(&self, preferred_ids: &[u32]) -> Option<f64> {
        preferred_ids.iter().find_map(|id| {
            self.nutrients
                .iter()
                .find(|n| n.nutrient_id == *id)
                .map(|n| n.amount)
        })
    }
}

/// Source of food composition records
#[async_trait]
pub trait FoodDataSource: Send + Sync {
    /// Fetch one food by FDC id
    async fn fetch_food(&self, fdc_id: u64) -> AppResult<FoodRecord>;
}

/// USDA API food details response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodDetailsResponse {
    fdc_id: u64,
    description: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<FoodNutrientResponse>,
    #[serde(default)]
    food_portions: Vec<FoodPortionResponse>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrientResponse {
    nutrient: Option<NutrientInfo>,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NutrientInfo {
    id: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodPortionResponse {
    measure_unit: Option<MeasureUnit>,
    modifier: Option<String>,
    amount: Option<f64>,
    gram_weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct MeasureUnit {
    name: Option<String>,
    abbreviation: Option<String>,
}

impl From<FoodDetailsResponse> for FoodRecord {
    fn from(response: FoodDetailsResponse) -> Self {
        let nutrients = response
            .food_nutrients
            .into_iter()
            .filter_map(|n| {
                Some(FoodNutrient {
                    nutrient_id: n.nutrient?.id,
                    amount: n.amount.unwrap_or(0.0),
                })
            })
            .collect();

        let portions = response
            .food_portions
            .into_iter()
            .map(|p| {
                let (unit_name, unit_abbreviation) = p
                    .measure_unit
                    .map_or((None, None), |unit| (unit.name, unit.abbreviation));
                PortionDefinition {
                    unit_name,
                    unit_abbreviation,
                    modifier: p.modifier,
                    amount: p.amount,
                    gram_weight: p.gram_weight,
                }
            })
            .collect();

        Self {
            fdc_id: response.fdc_id,
            description: response.description,
            nutrients,
            portions,
        }
    }
}

/// Sliding-window rate limiter for API requests
#[derive(Debug)]
struct RateLimiter {
    requests: Vec<Instant>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    const fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: Vec::new(),
            limit,
            window,
        }
    }

    /// Check if a request can be made, removing expired entries
    fn can_request(&mut self) -> bool {
        let now = Instant::now();
        self.requests
            .retain(|&t| now.duration_since(t) < self.window);
        self.requests.len() < self.limit as usize
    }

    fn record_request(&mut self) {
        self.requests.push(Instant::now());
    }

    async fn wait_if_needed(&mut self) {
        while !self.can_request() {
            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }
}

/// USDA `FoodData` Central API Client
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: reqwest::Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl UsdaClient {
    /// Create a new USDA API client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: UsdaClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute, Duration::from_secs(60));

        Ok(Self {
            config,
            http_client,
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
        })
    }
}

#[async_trait]
impl FoodDataSource for UsdaClient {
    async fn fetch_food(&self, fdc_id: u64) -> AppResult<FoodRecord> {
        {
            let mut limiter = self.rate_limiter.write().await;
            limiter.wait_if_needed().await;
            limiter.record_request();
        }

        let url = format!("{}/food/{fdc_id}", self.config.base_url);
        debug!(fdc_id = fdc_id, "Fetching food from USDA");
        let response = self
            .http_client
            .get(&url)
            .query(&[("format", "full"), ("api_key", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                SERVICE,
                format!(
                    "HTTP {status}: {}",
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let details: FoodDetailsResponse = response
            .json()
            .await
            .map_err(|e| AppError::external_service(SERVICE, format!("JSON parse error: {e}")))?;

        Ok(details.into())
    }
}

/// Mock food source for testing (no API calls)
///
/// Unknown ids return `EXTERNAL_SERVICE_ERROR`, as would an HTTP 404.
#[derive(Default)]
pub struct MockFoodDataSource {
    foods: HashMap<u64, FoodRecord>,
    failing: HashSet<u64>,
    calls: std::sync::Mutex<Vec<u64>>,
}

impl MockFoodDataSource {
    /// Create a mock with predefined records for chicken breast and apple
    #[must_use]
    pub fn new() -> Self {
        Self::default()
            .with_food(FoodRecord {
                fdc_id: 171_477,
                description: Some("Chicken, broilers or fryers, breast, meat only, cooked, roasted".to_owned()),
                nutrients: vec![
                    FoodNutrient { nutrient_id: 1003, amount: 31.02 },
                    FoodNutrient { nutrient_id: 1004, amount: 3.57 },
                    FoodNutrient { nutrient_id: 1005, amount: 0.0 },
                    FoodNutrient { nutrient_id: 1008, amount: 165.0 },
                ],
                portions: vec![PortionDefinition {
                    unit_name: Some("undetermined".to_owned()),
                    modifier: Some("cup, chopped or diced".to_owned()),
                    amount: Some(1.0),
                    gram_weight: Some(140.0),
                    ..PortionDefinition::default()
                }],
            })
            .with_food(FoodRecord {
                fdc_id: 171_688,
                description: Some("Apples, raw, with skin".to_owned()),
                nutrients: vec![
                    FoodNutrient { nutrient_id: 1003, amount: 0.26 },
                    FoodNutrient { nutrient_id: 1004, amount: 0.17 },
                    FoodNutrient { nutrient_id: 1005, amount: 13.81 },
                    FoodNutrient { nutrient_id: 2047, amount: 52.0 },
                ],
                portions: vec![PortionDefinition {
                    unit_name: Some("undetermined".to_owned()),
                    modifier: Some("medium (3\" dia)".to_owned()),
                    amount: Some(1.0),
                    gram_weight: Some(182.0),
                    ..PortionDefinition::default()
                }],
            })
    }

    /// Add or replace a record
    #[must_use]
    pub fn with_food(mut self, food: FoodRecord) -> Self {
        self.foods.insert(food.fdc_id, food);
        self
    }

    /// Make fetches for `fdc_id` fail
    #[must_use]
    pub fn with_failure(mut self, fdc_id: u64) -> Self {
        self.failing.insert(fdc_id);
        self
    }

    /// Ids fetched so far, in call order
    #[must_use]
    pub fn calls(&self) -> Vec<u64> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl FoodDataSource for MockFoodDataSource {
    async fn fetch_food(&self, fdc_id: u64) -> AppResult<FoodRecord> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(fdc_id);
        }
        if self.failing.contains(&fdc_id) {
            return Err(AppError::external_service(SERVICE, "HTTP 500 Internal Server Error"));
        }
        self.foods.get(&fdc_id).cloned().ok_or_else(|| {
            AppError::external_service(SERVICE, format!("HTTP 404 Not Found: food {fdc_id}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_response_maps_portions_and_nutrients() {
        let json = r#"{
            "fdcId": 171413,
            "description": "Oil, olive, salad or cooking",
            "foodNutrients": [
                {"nutrient": {"id": 1004, "name": "Total lipid (fat)", "unitName": "g"}, "amount": 100.0},
                {"nutrient": {"id": 2048, "name": "Energy (Atwater Specific Factors)", "unitName": "kcal"}, "amount": 884.0},
                {"amount": 3.0}
            ],
            "foodPortions": [
                {"measureUnit": {"name": "tablespoon", "abbreviation": "tbsp"}, "modifier": "", "amount": 1.0, "gramWeight": 13.5},
                {"measureUnit": {"name": "cup", "abbreviation": "cup"}, "amount": 1.0, "gramWeight": 216.0}
            ]
        }"#;
        let response: FoodDetailsResponse = serde_json::from_str(json).unwrap();
        let record = FoodRecord::from(response);

        assert_eq!(record.fdc_id, 171_413);
        assert_eq!(record.nutrients.len(), 2);
        assert_eq!(record.nutrient_amount(&[1008, 2048, 2047]), Some(884.0));
        assert_eq!(record.nutrient_amount(&[1003]), None);
        assert_eq!(record.portions.len(), 2);
        assert_eq!(record.portions[0].unit_abbreviation.as_deref(), Some("tbsp"));
        assert_eq!(record.portions[1].gram_weight, Some(216.0));
    }

    #[tokio::test]
    async fn test_mock_failure_and_unknown_id() {
        let source = MockFoodDataSource::new().with_failure(171_688);
        assert!(source.fetch_food(171_688).await.is_err());
        assert!(source.fetch_food(1).await.is_err());
        assert!(source.fetch_food(171_477).await.is_ok());
        assert_eq!(source.calls(), vec![171_688, 1, 171_477]);
    }
}
