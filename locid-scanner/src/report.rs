//! Scan report types.

use std::path::PathBuf;

use locid::{LocIdError, LocationId, next_after};
use serde::Serialize;

use crate::error::ScanError;

/// Where an identifier was found.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IdOccurrence {
    /// The identifier.
    pub id: LocationId,
    /// File containing it.
    pub file: PathBuf,
    /// Line number (1-indexed) for text matches; 0 for YAML matches.
    pub line: usize,
}

/// Result of a scan.
#[derive(Debug, Clone, Default, Serialize)]
#[non_exhaustive]
pub struct ScanReport {
    /// Number of files read and searched without error.
    pub scanned_files: usize,
    /// Number of files that could not be read or parsed, fully or in part.
    /// Each file counts once, in either this or `scanned_files`.
    pub failed_files: usize,
    /// Total identifier occurrences, duplicates included.
    pub ids_found: usize,
    /// First occurrence of the highest identifier, if any was found.
    pub highest: Option<IdOccurrence>,
    /// Files skipped because they could not be read, parsed, or reached.
    pub scan_errors: Vec<ScanError>,
}

impl ScanReport {
    /// Total number of files attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }

    /// Whether no identifier was found at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highest.is_none()
    }

    /// The identifier to hand out next: `L1` for an empty corpus, otherwise
    /// one past the highest found.
    ///
    /// # Errors
    /// Returns [`LocIdError::Overflow`] if the highest identifier is `u64::MAX`.
    pub fn next_id(&self) -> Result<LocationId, LocIdError> {
        next_after(self.highest.as_ref().map(|occ| occ.id))
    }

    /// Fold a batch of occurrences into the running maximum.
    ///
    /// Only a strictly greater value replaces the current highest, so ties keep
    /// the first occurrence seen.
    pub(crate) fn record(&mut self, occurrences: Vec<IdOccurrence>) {
        self.ids_found += occurrences.len();
        for occ in occurrences {
            if self.highest.as_ref().is_none_or(|h| occ.id > h.id) {
                self.highest = Some(occ);
            }
        }
    }
}
