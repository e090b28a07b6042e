// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use chrono::Utc;
use std::env;

// Use library instead of local modules
use world_clock::{
    apply_search, compute_records, group_by_region, group_by_timezone, timezone_label, Catalog,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "snapshot" {
        // One-shot mode: print a grouped snapshot and exit
        run_snapshot(&args[2..])?;
    } else {
        // UI mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

/// Compute one grouped snapshot for the current instant and print it as
/// JSON. `--states` selects the US states catalog; any other argument is
/// treated as a search query.
fn run_snapshot(args: &[String]) -> Result<()> {
    let use_states = args.iter().any(|a| a == "--states");
    let query = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("");

    let catalog = if use_states {
        Catalog::us_states()
    } else {
        Catalog::world_locations()
    };

    let now = Utc::now();
    let records = compute_records(&catalog, now);
    let filtered = apply_search(&records, query);

    if filtered.is_empty() {
        println!("🔍 No locations match '{}'", query);
        return Ok(());
    }

    // The world catalog groups by region; the states catalog sections by
    // timezone, the way its grid renders.
    let groups: Vec<serde_json::Value> = if use_states {
        group_by_timezone(&filtered)
            .into_iter()
            .map(|(timezone, locations)| {
                serde_json::json!({
                    "label": timezone_label(&timezone),
                    "timezone": timezone,
                    "locations": locations,
                })
            })
            .collect()
    } else {
        group_by_region(&filtered)
            .into_iter()
            .map(|(region, locations)| {
                serde_json::json!({
                    "region": region.label(),
                    "locations": locations,
                })
            })
            .collect()
    };

    println!("{}", serde_json::to_string_pretty(&groups)?);

    eprintln!(
        "✓ {} of {} locations at {}",
        filtered.len(),
        catalog.len(),
        now.format("%Y-%m-%dT%H:%M:%SZ")
    );

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🕰️  Loading World Clock UI...\n");
    println!("Starting UI... (Press Esc to quit)\n");

    let mut app = ui::App::new();
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or print a snapshot: cargo run snapshot");
    std::process::exit(1);
}
