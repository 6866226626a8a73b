//! Region aggregation example for bubblechart-rs
//!
//! Walks every selection token and prints the table each one produces.

use bubblechart_core::prelude::*;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/crates/bubblechart-core/tests/fixtures/countries.json"
);

fn main() -> Result<()> {
    println!("=== bubblechart-rs Region Modes Example ===\n");

    let countries = load_from_path(FIXTURE)?;

    for token in AggregationMode::TOKENS {
        let mode = AggregationMode::from_token(token);
        let items = aggregate(&countries, mode)?;
        let scale = derive_scale(&items);
        println!("--- {token}: {} ---", mode.label());
        for item in &items {
            println!(
                "  {:<10} {:>12}  r={:.1}",
                item.name,
                item.value,
                scale.radius(item.value as f64)
            );
        }
        println!();
    }

    // Region names keep first-appearance order, not alphabetical order.
    let by_region = aggregate(&countries, AggregationMode::from_token("regionCountries"))?;
    let regions: Vec<String> = by_region
        .into_iter()
        .map(|item| item.name)
        .collect();
    println!("Region order: {}", regions.join(", "));

    println!("\n=== Example completed successfully ===");
    Ok(())
}
