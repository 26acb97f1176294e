// 🖨️ Export - snapshot the filtered table out of the application
// Two capability seams (image-style file export, platform print) injected
// into the view, plus the busy-flag controller that owns the failure
// policy: catch, report, reset, no retry loop.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::engine::DirectoryStats;
use crate::store::Beneficiary;

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Renders the current table snapshot to a downloadable file.
pub trait ImageExporter {
    fn export(&self, report: &str) -> Result<PathBuf>;
}

/// Hands the current table snapshot to the platform print path.
pub trait Printer {
    fn print(&self, report: &str) -> Result<()>;
}

// ============================================================================
// BUNDLED COLLABORATORS
// ============================================================================

/// Writes the report as a plain-text file named
/// `Beneficiary-List-<unix-millis>.txt` in the target directory.
pub struct TextReportExporter {
    output_dir: PathBuf,
}

impl TextReportExporter {
    pub fn new(output_dir: &Path) -> Self {
        TextReportExporter {
            output_dir: output_dir.to_path_buf(),
        }
    }
}

impl ImageExporter for TextReportExporter {
    fn export(&self, report: &str) -> Result<PathBuf> {
        let filename = format!("Beneficiary-List-{}.txt", Utc::now().timestamp_millis());
        let path = self.output_dir.join(filename);

        fs::write(&path, report)
            .with_context(|| format!("Failed to save report to {}", path.display()))?;

        Ok(path)
    }
}

/// Pipes the report to the system print spooler (`lpr`).
pub struct SpoolPrinter;

impl Printer for SpoolPrinter {
    fn print(&self, report: &str) -> Result<()> {
        let mut child = Command::new("lpr")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to invoke the system print spooler")?;

        child
            .stdin
            .as_mut()
            .context("Print spooler closed its input")?
            .write_all(report.as_bytes())
            .context("Failed to hand the report to the print spooler")?;

        let status = child.wait().context("Print spooler did not finish")?;
        if !status.success() {
            bail!("Print spooler exited with {}", status);
        }

        Ok(())
    }
}

/// Accepts and discards the report. For tests and hosts with no spooler.
pub struct NullPrinter;

impl Printer for NullPrinter {
    fn print(&self, _report: &str) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// REPORT LAYOUT
// ============================================================================

/// Attestation block at the foot of every exported list.
#[derive(Debug, Clone)]
pub struct ReportSignatory {
    pub name: String,
    pub designation: String,
    pub area_code: String,
    pub project_area: String,
}

impl Default for ReportSignatory {
    fn default() -> Self {
        ReportSignatory {
            name: "Sakibul Islam Sabbir".to_string(),
            designation: "Upazila Representative".to_string(),
            area_code: "204".to_string(),
            project_area: "Durgapur, Rajshahi".to_string(),
        }
    }
}

/// Plain-text layout shared by the file exporter and the printer.
pub fn render_report(
    matched: &[Beneficiary],
    stats: &DirectoryStats,
    signatory: &ReportSignatory,
) -> String {
    let mut out = String::new();

    out.push_str("AS-SUNNAH FOUNDATION\n");
    out.push_str("Iftar Distribution Project - Beneficiary List\n");
    out.push_str(&format!(
        "Project Area: {}  |  Date: {}\n",
        signatory.project_area,
        Utc::now().format("%Y-%m-%d")
    ));
    out.push_str(&format!(
        "Applicants: {}  |  Listed: {}  |  Unions: {}  |  Villages: {}\n",
        stats.total, stats.matched, stats.unions, stats.villages
    ));
    out.push_str(&"-".repeat(100));
    out.push('\n');
    out.push_str(&format!(
        "{:<12} {:<24} {:<14} {:<12} {:<16} {:<12} {:<10}\n",
        "ID", "Name", "Phone", "Category", "Union", "Village", "Income"
    ));
    out.push_str(&"-".repeat(100));
    out.push('\n');

    for b in matched {
        out.push_str(&format!(
            "{:<12} {:<24} {:<14} {:<12} {:<16} {:<12} {:<10}\n",
            b.id,
            b.name,
            b.display_phone(),
            b.category,
            b.union_name,
            b.village,
            b.income
        ));
    }

    out.push_str(&"-".repeat(100));
    out.push('\n');
    out.push_str(&format!(
        "Volunteer: {} ({})  |  Area Code: {}\n",
        signatory.name, signatory.designation, signatory.area_code
    ));
    out.push_str("Authenticated digital document - As-Sunnah Foundation compliance\n");

    out
}

// ============================================================================
// EXPORT CONTROLLER
// ============================================================================

/// What an export or print attempt came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Report written; path for the status message.
    Saved(PathBuf),
    /// Handed to the print path.
    Printed,
    /// Refused: an export is already in flight.
    Busy,
    /// Transient failure; user-visible message, manual retry only.
    Failed(String),
}

/// Owns the busy flag and the failure policy for both collaborators.
///
/// One export at a time: a second invocation while one is in flight is
/// refused rather than queued, so two exports can never race on the same
/// output name. Failures are caught here, turned into a message for the
/// status bar, and the flag is reset; application state is untouched.
#[derive(Debug, Default)]
pub struct ExportController {
    busy: bool,
}

impl ExportController {
    pub fn new() -> Self {
        ExportController::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Claim the export slot. Returns false when one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    /// Release the export slot. Always called, success or failure.
    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn export(&mut self, exporter: &dyn ImageExporter, report: &str) -> ExportOutcome {
        if !self.begin() {
            return ExportOutcome::Busy;
        }

        let outcome = match exporter.export(report) {
            Ok(path) => ExportOutcome::Saved(path),
            Err(err) => ExportOutcome::Failed(format!("Could not generate the file: {:#}", err)),
        };

        self.finish();
        outcome
    }

    pub fn print(&mut self, printer: &dyn Printer, report: &str) -> ExportOutcome {
        if !self.begin() {
            return ExportOutcome::Busy;
        }

        let outcome = match printer.print(report) {
            Ok(()) => ExportOutcome::Printed,
            Err(err) => ExportOutcome::Failed(format!("Could not print the list: {:#}", err)),
        };

        self.finish();
        outcome
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn beneficiary(id: &str, name: &str) -> Beneficiary {
        Beneficiary {
            id: id.to_string(),
            name: name.to_string(),
            phone: "1712345678".to_string(),
            category: "Widow".to_string(),
            profession: "Housemaid".to_string(),
            income: "৳200".to_string(),
            union_name: "Nawpara".to_string(),
            village: "Charpara".to_string(),
        }
    }

    struct FailingExporter;

    impl ImageExporter for FailingExporter {
        fn export(&self, _report: &str) -> Result<PathBuf> {
            bail!("disk full")
        }
    }

    struct FailingPrinter;

    impl Printer for FailingPrinter {
        fn print(&self, _report: &str) -> Result<()> {
            bail!("no spooler")
        }
    }

    #[test]
    fn test_render_report_lists_every_matched_record() {
        let matched = vec![beneficiary("1", "Rahima Khatun"), beneficiary("2", "Abdul Karim")];
        let stats = DirectoryStats {
            total: 10,
            matched: 2,
            unions: 3,
            villages: 5,
        };

        let report = render_report(&matched, &stats, &ReportSignatory::default());

        assert!(report.contains("Rahima Khatun"));
        assert!(report.contains("Abdul Karim"));
        assert!(report.contains("Applicants: 10  |  Listed: 2  |  Unions: 3  |  Villages: 5"));
        assert!(report.contains("Sakibul Islam Sabbir"));
        // Leading zero is the display convention.
        assert!(report.contains("01712345678"));
    }

    #[test]
    fn test_text_exporter_writes_timestamped_file() {
        let dir = std::env::temp_dir().join("beneficiary-directory-export-test");
        fs::create_dir_all(&dir).unwrap();
        let exporter = TextReportExporter::new(&dir);

        let path = exporter.export("report body\n").unwrap();

        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("Beneficiary-List-"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "report body\n");

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_controller_refuses_second_export_while_busy() {
        let mut controller = ExportController::new();

        assert!(controller.begin());
        assert!(!controller.begin(), "Second export must be refused, not queued");
        assert!(controller.is_busy());

        controller.finish();
        assert!(controller.begin(), "Slot reopens after finish");
    }

    #[test]
    fn test_failed_export_reports_and_resets_flag() {
        let mut controller = ExportController::new();

        let outcome = controller.export(&FailingExporter, "report");

        match outcome {
            ExportOutcome::Failed(message) => assert!(message.contains("disk full")),
            other => panic!("Expected failure outcome, got {:?}", other),
        }
        assert!(!controller.is_busy(), "Flag must be reset on failure");

        // Manual retry path stays open.
        let dir = std::env::temp_dir();
        let retry = controller.export(&TextReportExporter::new(&dir), "report");
        match retry {
            ExportOutcome::Saved(path) => {
                let _ = fs::remove_file(path);
            }
            other => panic!("Expected retry to save, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_print_reports_and_resets_flag() {
        let mut controller = ExportController::new();

        let outcome = controller.print(&FailingPrinter, "report");

        assert!(matches!(outcome, ExportOutcome::Failed(_)));
        assert!(!controller.is_busy());
    }

    #[test]
    fn test_null_printer_accepts_report() {
        let mut controller = ExportController::new();

        assert_eq!(controller.print(&NullPrinter, "report"), ExportOutcome::Printed);
    }
}
