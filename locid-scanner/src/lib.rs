//! # locid-scanner
//!
//! Finds the highest `L<number>` location identifier in a tree of data files
//! so the next free one can be handed out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use locid_scanner::{ScanConfig, scan_fs};
//!
//! let report = scan_fs(&ScanConfig::for_dir("data")).unwrap();
//! println!("Next ID: {}", report.next_id().unwrap());
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Files skipped: {}", report.failed_files);
//! ```

mod config;
mod error;
mod format;
pub mod output;
mod report;
mod strategy;

pub use config::{ScanConfig, ScanMode};
pub use error::{ScanError, ScanErrorKind};
pub use report::{IdOccurrence, ScanReport};

use strategy::ContentFormat;
use strategy::fs::{ReadOutcome, content_format_for, find_files, read_file_bounded};
use tracing::{debug, info};

/// Scan files on disk for location identifiers.
///
/// This is the primary public API. The scan is best-effort: unreadable,
/// oversized, binary, or unparseable files are recorded in
/// `report.scan_errors` and skipped. A base path that does not exist is an
/// empty corpus.
///
/// # Errors
///
/// Returns an error only if `config.paths` is empty.
pub fn scan_fs(config: &ScanConfig) -> anyhow::Result<ScanReport> {
    if config.paths.is_empty() {
        anyhow::bail!("No paths provided for scanning");
    }

    let (files, scan_errors) = find_files(config);
    for e in &scan_errors {
        debug!(file = %e.file.display(), kind = ?e.kind, "skipping path: {}", e.message);
    }
    let mut report = ScanReport {
        failed_files: scan_errors.len(),
        scan_errors,
        ..ScanReport::default()
    };

    for file_path in &files {
        let Some(content_format) = content_format_for(file_path, config.mode) else {
            continue;
        };

        let content = match read_file_bounded(file_path, config.max_file_size, content_format) {
            ReadOutcome::Ok(c) => c,
            ReadOutcome::Err(e) => {
                debug!(file = %file_path.display(), kind = ?e.kind, "skipping file: {}", e.message);
                report.scan_errors.push(e);
                report.failed_files += 1;
                continue;
            }
        };

        let (occurrences, parse_errors) = match content_format {
            ContentFormat::Text => (
                format::text::scan_text_content(&content, file_path),
                Vec::new(),
            ),
            ContentFormat::Yaml => format::yaml::scan_yaml_content(&content, file_path),
        };

        // A partly parsed YAML stream still contributes its ids but counts as failed.
        if parse_errors.is_empty() {
            report.scanned_files += 1;
        } else {
            debug!(file = %file_path.display(), errors = parse_errors.len(), "YAML parse errors");
            report.failed_files += 1;
            report.scan_errors.extend(parse_errors);
        }
        report.record(occurrences);
    }

    let highest = report
        .highest
        .as_ref()
        .map_or_else(|| "none".to_owned(), |occ| occ.id.to_string());
    info!(
        scanned = report.scanned_files,
        failed = report.failed_files,
        ids = report.ids_found,
        highest = %highest,
        "scan complete"
    );
    Ok(report)
}
