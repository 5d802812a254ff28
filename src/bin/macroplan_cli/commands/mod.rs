// ABOUTME: Re-exports command modules for macroplan-cli
// ABOUTME: Provides ingestion, recalculation, planning, and profile commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

pub mod ingest;
pub mod plan;
pub mod profile;
pub mod recalculate;
