// ABOUTME: Configuration management for the nutrition service and CLI
// ABOUTME: Environment-only settings for USDA access, ingestion pacing, and plan search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

//! Configuration module
//!
//! All settings come from environment variables with typed defaults; there
//! are no configuration files.

/// Environment variable parsing and the top-level `AppConfig`
pub mod environment;

pub use environment::{AppConfig, IngestionConfig};
