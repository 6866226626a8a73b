//! Basic usage example for bubblechart-rs
//!
//! This example demonstrates how to:
//! - Load a countries dataset from disk
//! - Run one chart cycle for a selection
//! - Read the positioned bubbles and the layout report

use bubblechart_core::prelude::*;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/crates/bubblechart-core/tests/fixtures/countries.json"
);

fn main() -> Result<()> {
    println!("=== bubblechart-rs Basic Usage Example ===\n");

    // Example 1: Load the dataset
    println!("Loading countries dataset...");
    let countries = load_from_path(FIXTURE)?;
    println!("✓ Loaded {} countries\n", countries.len());

    let stats = DatasetStats::from_countries(&countries);
    println!(
        "Regions: {}, distinct timezones: {}, population: {}\n",
        stats.regions, stats.timezones, stats.total_population
    );

    // Example 2: One cycle for population
    println!("--- Example 2: Population bubbles ---");
    let config = ChartConfig::default();
    let chart = run_cycle(&countries, "population", &config)?;
    println!("{}:", chart.mode.label());
    for item in &chart.items {
        println!(
            "  {:<4} {:>12}  r={:>6.2}  at ({:>7.1}, {:>7.1})  {}",
            item.name,
            item.value,
            item.radius,
            item.x,
            item.y,
            item.full_name.as_deref().unwrap_or("")
        );
    }
    println!();

    // Example 3: How the layout went
    println!("--- Example 3: Layout report ---");
    let report = &chart.report;
    println!("Steps: {} (converged: {})", report.steps, report.converged);
    println!("Relaxation passes: {}", report.relax_passes);
    println!("Largest remaining overlap: {:.4}", report.max_overlap);
    println!();

    // Example 4: A smaller canvas
    println!("--- Example 4: Custom canvas ---");
    let small = ChartConfig::default().with_canvas(800.0, 600.0);
    let chart = run_cycle(&countries, "borders", &small)?;
    let center = small.canvas.center();
    println!("Canvas center: ({:.0}, {:.0})", center.0, center.1);
    for (name, value) in chart.rows() {
        println!("  {name}: {value}");
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
