// ABOUTME: Macroplan CLI - command-line tool for the recipe nutrition catalogue
// ABOUTME: Handles USDA ingestion, totals recalculation, profiles, and meal-plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors
//!
//! Usage:
//! ```bash
//! # Pull the built-in ingredient list from USDA (needs USDA_API_KEY)
//! macroplan-cli ingest
//!
//! # Pull a custom list of {"common_name", "fdc_id"} entries
//! macroplan-cli ingest --entries foods.json
//!
//! # Recompute cached totals for every recipe
//! macroplan-cli recalculate
//!
//! # Set daily targets for a user
//! macroplan-cli profile set --user <UUID> --calories 2200 --protein 30 --carbs 40 --fat 30
//!
//! # Generate a daily plan
//! macroplan-cli plan --user <UUID>
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use macroplan::config::AppConfig;
use macroplan::database::InMemoryStore;
use macroplan::logging::LoggingConfig;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "macroplan-cli",
    about = "Macroplan recipe nutrition CLI",
    long_about = "Ingest USDA food data, recompute recipe nutrition, and generate daily meal plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalogue snapshot file override
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Fetch ingredients from USDA FoodData Central
    Ingest {
        /// JSON file of entries (defaults to the built-in list)
        #[arg(long)]
        entries: Option<PathBuf>,
    },

    /// Recompute cached recipe totals
    Recalculate {
        /// Only this recipe
        #[arg(long)]
        recipe: Option<Uuid>,
    },

    /// Generate a daily meal plan
    Plan {
        /// User id
        #[arg(long)]
        user: Uuid,
    },

    /// User profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Create or replace a user's targets
    Set {
        /// User id
        #[arg(long)]
        user: Uuid,

        /// Daily calorie target
        #[arg(long, default_value = "2000")]
        calories: u32,

        /// Protein share of calories, in percent
        #[arg(long, default_value = "30")]
        protein: f64,

        /// Carbohydrate share of calories, in percent
        #[arg(long, default_value = "40")]
        carbs: f64,

        /// Fat share of calories, in percent
        #[arg(long, default_value = "30")]
        fat: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if let Some(path) = cli.catalog {
        config.catalog_path = path;
    }
    info!(config = %config.summary(), "Macroplan CLI");

    let catalog_path = config.catalog_path.clone();
    let store = Arc::new(
        InMemoryStore::open(&catalog_path)
            .await
            .with_context(|| format!("Failed to open catalogue {}", catalog_path.display()))?,
    );

    match cli.command {
        Command::Ingest { entries } => {
            commands::ingest::run(&config, store, &catalog_path, entries.as_deref()).await?;
        }
        Command::Recalculate { recipe } => {
            commands::recalculate::run(store, &catalog_path, recipe).await?;
        }
        Command::Plan { user } => {
            commands::plan::run(&config, store, user).await?;
        }
        Command::Profile { action } => match action {
            ProfileCommand::Set {
                user,
                calories,
                protein,
                carbs,
                fat,
            } => {
                commands::profile::set(store, &catalog_path, user, calories, protein, carbs, fat)
                    .await?;
            }
        },
    }

    Ok(())
}
