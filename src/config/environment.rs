// ABOUTME: Environment configuration parsing with typed defaults and validation
// ABOUTME: Builds AppConfig from USDA, ingestion, planner, and catalogue variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

//! Environment-based configuration

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use macroplan_intelligence::{PlannerConfig, SelectionPolicy};
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::external::UsdaClientConfig;

/// Environment variable names
pub mod env_keys {
    /// FoodData Central API key
    pub const USDA_API_KEY: &str = "USDA_API_KEY";
    /// FoodData Central base URL
    pub const USDA_BASE_URL: &str = "USDA_BASE_URL";
    /// Client-side request cap per minute
    pub const USDA_RATE_LIMIT_PER_MINUTE: &str = "USDA_RATE_LIMIT_PER_MINUTE";
    /// Pause after each ingestion fetch
    pub const INGEST_REQUEST_DELAY_SECS: &str = "INGEST_REQUEST_DELAY_SECS";
    /// Plan search attempt budget
    pub const MEAL_PLAN_ATTEMPTS: &str = "MEAL_PLAN_ATTEMPTS";
    /// Candidate window per slot
    pub const MEAL_PLAN_CANDIDATE_WINDOW: &str = "MEAL_PLAN_CANDIDATE_WINDOW";
    /// `best` or `seeded`
    pub const MEAL_PLAN_SELECTION: &str = "MEAL_PLAN_SELECTION";
    /// Seed for `seeded` selection
    pub const MEAL_PLAN_SEED: &str = "MEAL_PLAN_SEED";
    /// Catalogue snapshot file used by the CLI
    pub const MACROPLAN_CATALOG_PATH: &str = "MACROPLAN_CATALOG_PATH";
}

/// Default catalogue snapshot file
pub const DEFAULT_CATALOG_PATH: &str = "macroplan-catalog.json";

/// Default pause between ingestion fetches
pub const DEFAULT_INGEST_DELAY_SECS: u64 = 2;

/// Ingestion job pacing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionConfig {
    /// Pause awaited after each external fetch
    pub request_delay: Duration,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_secs(DEFAULT_INGEST_DELAY_SECS),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// FoodData Central API key; only ingestion needs it
    pub usda_api_key: Option<String>,
    /// FoodData Central base URL
    pub usda_base_url: String,
    /// Client-side request cap per minute
    pub usda_rate_limit_per_minute: u32,
    /// Ingestion pacing
    pub ingestion: IngestionConfig,
    /// Plan search parameters
    pub planner: PlannerConfig,
    /// Catalogue snapshot file
    pub catalog_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let usda = UsdaClientConfig::default();
        Self {
            usda_api_key: None,
            usda_base_url: usda.base_url,
            usda_rate_limit_per_minute: usda.rate_limit_per_minute,
            ingestion: IngestionConfig::default(),
            planner: PlannerConfig::default(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when a variable is present but cannot be
    /// parsed or is out of range.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        let defaults = Self::default();

        let selection = match env::var(env_keys::MEAL_PLAN_SELECTION)
            .unwrap_or_else(|_| "best".into())
            .to_lowercase()
            .as_str()
        {
            "best" => SelectionPolicy::BestOfWindow,
            "seeded" => SelectionPolicy::Seeded {
                seed: parse_var(env_keys::MEAL_PLAN_SEED, 0_u64)?,
            },
            other => {
                return Err(AppError::config(format!(
                    "Invalid {} value '{other}', expected 'best' or 'seeded'",
                    env_keys::MEAL_PLAN_SELECTION
                )))
            }
        };

        let config = Self {
            usda_api_key: env::var(env_keys::USDA_API_KEY)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            usda_base_url: env::var(env_keys::USDA_BASE_URL).unwrap_or(defaults.usda_base_url),
            usda_rate_limit_per_minute: parse_var(
                env_keys::USDA_RATE_LIMIT_PER_MINUTE,
                defaults.usda_rate_limit_per_minute,
            )?,
            ingestion: IngestionConfig {
                request_delay: Duration::from_secs(parse_var(
                    env_keys::INGEST_REQUEST_DELAY_SECS,
                    DEFAULT_INGEST_DELAY_SECS,
                )?),
            },
            planner: PlannerConfig {
                attempts: parse_var(env_keys::MEAL_PLAN_ATTEMPTS, defaults.planner.attempts)?,
                candidate_window: parse_var(
                    env_keys::MEAL_PLAN_CANDIDATE_WINDOW,
                    defaults.planner.candidate_window,
                )?,
                selection,
                ..defaults.planner
            },
            catalog_path: env::var(env_keys::MACROPLAN_CATALOG_PATH)
                .map_or(defaults.catalog_path, PathBuf::from),
        };

        config.validate()?;
        debug!(config = ?config.summary(), "Configuration loaded");
        Ok(config)
    }

    /// Validate ranges
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` for a zero attempt budget, candidate window,
    /// or rate limit.
    pub fn validate(&self) -> AppResult<()> {
        if self.planner.attempts == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_keys::MEAL_PLAN_ATTEMPTS
            )));
        }
        if self.planner.candidate_window == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_keys::MEAL_PLAN_CANDIDATE_WINDOW
            )));
        }
        if self.usda_rate_limit_per_minute == 0 {
            return Err(AppError::config(format!(
                "{} must be at least 1",
                env_keys::USDA_RATE_LIMIT_PER_MINUTE
            )));
        }
        Ok(())
    }

    /// USDA client settings
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` when no API key is configured.
    pub fn usda_client_config(&self) -> AppResult<UsdaClientConfig> {
        let api_key = self
            .usda_api_key
            .clone()
            .ok_or_else(|| AppError::config_missing(env_keys::USDA_API_KEY))?;
        Ok(UsdaClientConfig {
            api_key,
            base_url: self.usda_base_url.clone(),
            rate_limit_per_minute: self.usda_rate_limit_per_minute,
            ..UsdaClientConfig::default()
        })
    }

    /// One-line summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "usda_base_url={} usda_api_key={} rate_limit={}/min ingest_delay={}s attempts={} window={} selection={:?} catalog={}",
            self.usda_base_url,
            if self.usda_api_key.is_some() { "set" } else { "unset" },
            self.usda_rate_limit_per_minute,
            self.ingestion.request_delay.as_secs(),
            self.planner.attempts,
            self.planner.candidate_window,
            self.planner.selection,
            self.catalog_path.display()
        )
    }
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_var<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
