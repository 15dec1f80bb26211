// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
use space_trade::ui;

use anyhow::Result;
use space_trade::resources::{legal_catalog, marketplace_catalog};

fn main() -> Result<()> {
    run_console()
}

#[cfg(feature = "tui")]
fn run_console() -> Result<()> {
    println!("🛰️  Loading Space Trade Platform console...\n");

    // Parse and validate the embedded catalogs
    let marketplace = marketplace_catalog()?;
    let legal = legal_catalog()?;

    println!("✓ Loaded {} satellite assets", marketplace.len());
    println!("✓ Loaded {} legal resources\n", legal.len());
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(marketplace, legal);
    ui::run_ui(&mut app)?;

    println!("\n✅ Console closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_console() -> Result<()> {
    // Catalogs still load so a headless build catches data errors
    let marketplace = marketplace_catalog()?;
    let legal = legal_catalog()?;
    eprintln!(
        "Catalogs OK ({} assets, {} legal resources), but the console needs the TUI.",
        marketplace.len(),
        legal.len()
    );
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
