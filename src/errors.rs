// ABOUTME: Error types for the service layer, ingestion, and CLI
// ABOUTME: Re-exports the workspace-wide AppError and ErrorCode from macroplan-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

//! Error handling
//!
//! The error types live in `macroplan-core` so the model crate and this crate
//! share one definition.

pub use macroplan_core::errors::{AppError, AppResult, ErrorCode};
