// ABOUTME: Integration tests for environment-based configuration
// ABOUTME: Validates defaults, overrides, selection policy parsing, and rejected values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use macroplan::config::environment::env_keys;
use macroplan::config::AppConfig;
use macroplan::errors::ErrorCode;
use macroplan::SelectionPolicy;
use serial_test::serial;

const ALL_KEYS: [&str; 9] = [
    env_keys::USDA_API_KEY,
    env_keys::USDA_BASE_URL,
    env_keys::USDA_RATE_LIMIT_PER_MINUTE,
    env_keys::INGEST_REQUEST_DELAY_SECS,
    env_keys::MEAL_PLAN_ATTEMPTS,
    env_keys::MEAL_PLAN_CANDIDATE_WINDOW,
    env_keys::MEAL_PLAN_SELECTION,
    env_keys::MEAL_PLAN_SEED,
    env_keys::MACROPLAN_CATALOG_PATH,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert!(config.usda_api_key.is_none());
    assert_eq!(config.usda_base_url, "https://api.nal.usda.gov/fdc/v1");
    assert_eq!(config.usda_rate_limit_per_minute, 30);
    assert_eq!(config.ingestion.request_delay, Duration::from_secs(2));
    assert_eq!(config.planner.attempts, 50);
    assert_eq!(config.planner.candidate_window, 5);
    assert_eq!(config.planner.selection, SelectionPolicy::BestOfWindow);
    assert_eq!(config.catalog_path, PathBuf::from("macroplan-catalog.json"));
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_env();
    env::set_var(env_keys::USDA_API_KEY, "demo-key");
    env::set_var(env_keys::INGEST_REQUEST_DELAY_SECS, "0");
    env::set_var(env_keys::MEAL_PLAN_ATTEMPTS, "200");
    env::set_var(env_keys::MEAL_PLAN_SELECTION, "Seeded");
    env::set_var(env_keys::MEAL_PLAN_SEED, "1234");
    env::set_var(env_keys::MACROPLAN_CATALOG_PATH, "/tmp/catalog.json");

    let config = AppConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.usda_api_key.as_deref(), Some("demo-key"));
    assert_eq!(config.ingestion.request_delay, Duration::ZERO);
    assert_eq!(config.planner.attempts, 200);
    assert_eq!(config.planner.selection, SelectionPolicy::Seeded { seed: 1234 });
    assert_eq!(config.catalog_path, PathBuf::from("/tmp/catalog.json"));

    let usda = config.usda_client_config().unwrap();
    assert_eq!(usda.api_key, "demo-key");
    assert_eq!(usda.rate_limit_per_minute, 30);
}

#[test]
#[serial]
fn test_invalid_number_is_rejected() {
    clear_env();
    env::set_var(env_keys::MEAL_PLAN_ATTEMPTS, "many");
    let err = AppConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_zero_window_is_rejected() {
    clear_env();
    env::set_var(env_keys::MEAL_PLAN_CANDIDATE_WINDOW, "0");
    let err = AppConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_unknown_selection_is_rejected() {
    clear_env();
    env::set_var(env_keys::MEAL_PLAN_SELECTION, "random");
    let err = AppConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_blank_api_key_counts_as_missing() {
    clear_env();
    env::set_var(env_keys::USDA_API_KEY, "   ");
    let config = AppConfig::from_env().unwrap();
    clear_env();

    let err = config.usda_client_config().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigMissing);
}
