//! Per-file scan failures.

use std::path::PathBuf;

use serde::Serialize;

/// The kind of failure that kept a file out of the scan.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file looks binary (contains NUL) or, in YAML mode, is not valid UTF-8.
    InvalidEncoding,
    /// The file content could not be parsed as YAML.
    YamlParseError,
    /// The resolved path is outside the scan root (symlink escape).
    OutsideRoot,
    /// A directory traversal error (permission denied, loop detected, etc.).
    WalkError,
    /// An exclude glob pattern could not be parsed.
    InvalidExcludePattern,
}

/// A file that could not be scanned.
///
/// Scanning is best-effort: these are collected in the report and logged,
/// never raised.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    pub(crate) fn new(file: impl Into<PathBuf>, kind: ScanErrorKind, message: String) -> Self {
        Self {
            file: file.into(),
            kind,
            message,
        }
    }

    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_human_readable() {
        let err = ScanError::new(
            "data/blob.bin",
            ScanErrorKind::InvalidEncoding,
            "File is not valid UTF-8".to_owned(),
        );
        assert_eq!(
            err.format_human_readable(),
            "data/blob.bin: [scan error] File is not valid UTF-8"
        );
    }
}
