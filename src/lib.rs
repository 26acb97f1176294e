// Beneficiary Directory - Core Library
// Exposes all modules for use in the terminal UI and tests

pub mod store;
pub mod search;
pub mod options;
pub mod engine;
pub mod export;

// Re-export commonly used types
pub use store::{
    Beneficiary,
    bundled_roster, load_csv, load_json, load_dataset,
};
pub use search::{SearchFilters, FilterField};
pub use options::{unions, villages, normalize_village};
pub use engine::{filter_records, digits, DirectoryStats};
pub use export::{
    ImageExporter, Printer, TextReportExporter, SpoolPrinter, NullPrinter,
    ExportController, ExportOutcome, ReportSignatory, render_report,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
