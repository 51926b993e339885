//! Output formatting for scan results.
//!
//! The next identifier goes to the primary writer; diagnostics and the
//! human-readable summary go to a separate diagnostic writer so the primary
//! stream stays machine-readable.

use std::io::Write;

use locid::LocationId;
use serde::Serialize;

use crate::report::ScanReport;

/// Diagnostic printed when the corpus holds no identifiers.
pub const NO_IDS_MESSAGE: &str = "No IDs found, starting with L1";

/// Write the next identifier as a single line.
///
/// On an empty corpus [`NO_IDS_MESSAGE`] is written to `diag` first.
///
/// # Errors
///
/// Returns an error if the next identifier would overflow or writing fails.
pub fn write_next_id(
    report: &ScanReport,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> anyhow::Result<LocationId> {
    let next = report.next_id()?;
    if report.is_empty() {
        writeln!(diag, "{NO_IDS_MESSAGE}")?;
    }
    writeln!(out, "{next}")?;
    Ok(next)
}

#[derive(Serialize)]
struct NextIdDocument<'a> {
    next_id: LocationId,
    report: &'a ScanReport,
}

/// Write the next identifier together with the full report as JSON.
///
/// # Errors
///
/// Returns an error if the next identifier would overflow, or if
/// serialization or writing fails.
pub fn write_json(report: &ScanReport, writer: &mut dyn Write) -> anyhow::Result<LocationId> {
    let next_id = report.next_id()?;
    let json = serde_json::to_string_pretty(&NextIdDocument { next_id, report })?;
    writeln!(writer, "{json}")?;
    Ok(next_id)
}

/// Write a human-readable scan summary.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_summary(report: &ScanReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "  Files scanned:  {}", report.scanned_files)?;
    writeln!(writer, "  Files failed:   {}", report.failed_files)?;
    writeln!(writer, "  IDs found:      {}", report.ids_found)?;
    match &report.highest {
        Some(occ) if occ.line > 0 => writeln!(
            writer,
            "  Highest ID:     {} ({}:{})",
            occ.id,
            occ.file.display(),
            occ.line
        )?,
        Some(occ) => writeln!(
            writer,
            "  Highest ID:     {} ({})",
            occ.id,
            occ.file.display()
        )?,
        None => writeln!(writer, "  Highest ID:     none")?,
    }

    if !report.scan_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(60))?;
        writeln!(writer, "  SKIPPED FILES")?;
        writeln!(writer, "{}", "-".repeat(60))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "{}", scan_err.format_human_readable())?;
        }
    }
    writeln!(writer, "{}", "=".repeat(60))?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ScanError, ScanErrorKind};
    use crate::report::IdOccurrence;
    use std::path::PathBuf;

    fn report_with_highest(value: u64) -> ScanReport {
        ScanReport {
            scanned_files: 2,
            ids_found: 3,
            highest: Some(IdOccurrence {
                id: LocationId::new(value),
                file: PathBuf::from("data/a.yaml"),
                line: 4,
            }),
            ..ScanReport::default()
        }
    }

    #[test]
    fn test_write_next_id_empty_corpus() {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let next = write_next_id(&ScanReport::default(), &mut out, &mut diag).unwrap();
        assert_eq!(next, LocationId::FIRST);
        assert_eq!(String::from_utf8(out).unwrap(), "L1\n");
        assert_eq!(
            String::from_utf8(diag).unwrap(),
            "No IDs found, starting with L1\n"
        );
    }

    #[test]
    fn test_write_next_id_increments_without_diagnostic() {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        write_next_id(&report_with_highest(7), &mut out, &mut diag).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "L8\n");
        assert!(diag.is_empty());
    }

    #[test]
    fn test_write_next_id_overflow_writes_nothing() {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        let result = write_next_id(&report_with_highest(u64::MAX), &mut out, &mut diag);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&report_with_highest(42), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["next_id"], "L43");
        assert_eq!(value["report"]["ids_found"], 3);
        assert_eq!(value["report"]["highest"]["id"], "L42");
        assert_eq!(value["report"]["highest"]["line"], 4);
    }

    #[test]
    fn test_write_summary_lists_skipped_files() {
        let mut report = report_with_highest(5);
        report.failed_files = 1;
        report.scan_errors.push(ScanError {
            file: PathBuf::from("data/blob.bin"),
            kind: ScanErrorKind::InvalidEncoding,
            message: "File is not valid UTF-8".to_owned(),
        });

        let mut out = Vec::new();
        write_summary(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Files scanned:  2"));
        assert!(text.contains("Highest ID:     L5 (data/a.yaml:4)"));
        assert!(text.contains("data/blob.bin: [scan error] File is not valid UTF-8"));
    }
}
