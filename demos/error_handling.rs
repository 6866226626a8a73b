//! Error handling example for bubblechart-rs
//!
//! This example demonstrates the failures a cycle can report and how a
//! newer selection supersedes an older one.

use bubblechart_core::prelude::*;

fn main() -> Result<()> {
    println!("=== bubblechart-rs Error Handling Example ===\n");

    // Example 1: Missing dataset file
    println!("--- Example 1: Loading a dataset that does not exist ---");
    match load_from_path("no/such/countries.json") {
        Ok(countries) => println!("✓ Unexpectedly loaded {} countries", countries.len()),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Malformed JSON
    println!("--- Example 2: Malformed dataset ---");
    match load_from_str(r#"[{"name": "Nowhere"}]"#) {
        Ok(_) => println!("✓ Parsed"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: A field the selection needs is absent
    println!("--- Example 3: Missing field for the selected metric ---");
    let countries = vec![
        RawCountry::new("Aland", "ALA").with_population(5),
        RawCountry::new("Albania", "ALB")
            .with_population(100)
            .with_borders(["MNE", "GRC"]),
    ];
    match run_cycle(&countries, "borders", &ChartConfig::default()) {
        Ok(chart) => println!("✓ {} items", chart.items.len()),
        Err(ChartError::MissingField { country, field }) => {
            println!("✗ {country} has no '{field}' field; nothing was drawn")
        }
        Err(e) => return Err(e),
    }
    // Population is present everywhere, so this one works.
    let chart = run_cycle(&countries, "population", &ChartConfig::default())?;
    println!("✓ population works: {} items", chart.items.len());
    println!();

    // Example 4: Unrecognized selection
    println!("--- Example 4: Unrecognized selection token ---");
    let chart = run_cycle(&countries, "gdp", &ChartConfig::default())?;
    println!("Mode: {}", chart.mode);
    for (name, value) in chart.rows() {
        println!("  {name}: {value}");
    }
    println!();

    // Example 5: Invalid configuration
    println!("--- Example 5: Invalid canvas ---");
    let bad = ChartConfig::default().with_canvas(0.0, 600.0);
    if let Err(e) = run_cycle(&countries, "population", &bad) {
        println!("✗ {e}");
    }
    println!();

    // Example 6: Superseded cycle
    println!("--- Example 6: A newer selection supersedes an older one ---");
    let session = ChartSession::new();
    let older = session.begin();
    let newer = session.begin();
    let config = ChartConfig::default();
    match bubblechart_core::run_ticketed(&older, &countries, "population", &config) {
        Err(ChartError::Superseded { ticket, current }) => {
            println!("✗ cycle {ticket} dropped, cycle {current} is current")
        }
        Ok(_) => println!("older cycle finished first"),
        Err(e) => return Err(e),
    }
    let chart = bubblechart_core::run_ticketed(&newer, &countries, "population", &config)?;
    println!("✓ cycle {} drew {} bubbles", newer.id(), chart.items.len());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
