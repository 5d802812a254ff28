// ABOUTME: Output formatting helpers for macroplan-cli
// ABOUTME: Prints ingestion and recalculation summaries and plan JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macroplan Contributors

use macroplan::errors::AppResult;
use macroplan::ingestion::IngestionSummary;
use macroplan::services::{MealPlanResponse, RecalculationSummary};
use macroplan::NutritionSnapshot;

/// Display the counts of an ingestion run
pub fn display_ingestion_summary(summary: &IngestionSummary) {
    println!("\nIngestion finished");
    println!("{}", "=".repeat(40));
    println!("   Added:   {}", summary.added);
    println!("   Updated: {}", summary.updated);
    println!("   Failed:  {}", summary.failed);
}

/// Display one recipe's recomputed totals
pub fn display_snapshot(recipe: &str, snapshot: &NutritionSnapshot) {
    let t = snapshot.totals;
    println!(
        "{recipe}: {:.2} kcal, P {:.2} g, C {:.2} g, F {:.2} g{}",
        t.calories,
        t.protein_g,
        t.carbs_g,
        t.fat_g,
        if snapshot.complete { "" } else { " (incomplete)" }
    );
    for failed in &snapshot.failed_lines {
        println!("   unconvertible: {} [{}]", failed.ingredient, failed.unit);
    }
}

/// Display the counts of a bulk recalculation
pub fn display_recalculation_summary(summary: &RecalculationSummary) {
    println!(
        "\nRecalculated {} recipes ({} complete, {} incomplete)",
        summary.complete + summary.incomplete,
        summary.complete,
        summary.incomplete
    );
}

/// Print a plan as pretty JSON, or the no-plan message
pub fn display_plan(plan: Option<&MealPlanResponse>) -> AppResult<()> {
    match plan {
        Some(plan) => println!("{}", serde_json::to_string_pretty(plan)?),
        None => println!(
            "No meal plan available: breakfast, lunch, and dinner could not all be filled with the current recipes and targets."
        ),
    }
    Ok(())
}
