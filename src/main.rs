// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;
use std::path::Path;

// Use library instead of local modules
use beneficiary_directory::{bundled_roster, load_dataset, unions, villages, Beneficiary};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Optional first argument: path to an external CSV/JSON roster.
    let records = if args.len() > 1 {
        let path = Path::new(&args[1]);
        println!("📂 Loading roster from {}...", path.display());
        load_dataset(path)?
    } else {
        println!("📂 Loading bundled roster...");
        bundled_roster()?
    };

    report_roster(&records);
    run_ui_mode(records)?;

    Ok(())
}

fn report_roster(records: &[Beneficiary]) {
    let union_count = unions(records).len();
    let village_count = villages(records, "").len();

    println!(
        "✓ Loaded {} beneficiaries across {} unions and {} villages\n",
        records.len(),
        union_count,
        village_count
    );
}

#[cfg(feature = "tui")]
fn run_ui_mode(records: Vec<Beneficiary>) -> Result<()> {
    println!("Starting UI... (Press Esc to quit)\n");

    let mut app = ui::App::new(records);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_records: Vec<Beneficiary>) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
