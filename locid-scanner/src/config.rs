//! Configuration types for identifier scanning.

use std::path::PathBuf;

/// How identifier candidates are extracted from file content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanMode {
    /// Match `- id: L<digits>` at the start of any line of any text file (default).
    #[default]
    Text,
    /// Parse `.yaml`/`.yml` files and read the `id` key of every top-level list item.
    Yaml,
}

/// Scan options.
///
/// NOTE: `paths` is required and must be non-empty. The conventional `data`
/// base directory is a CLI concern, not baked into the library.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ScanConfig {
    /// Base directories (or single files) to scan.
    pub paths: Vec<PathBuf>,
    /// Extraction mode.
    pub mode: ScanMode,
    /// File extensions to read (without the dot). Empty means every file.
    pub extensions: Vec<String>,
    /// Exclude patterns (glob format), matched against the path and the file name.
    pub exclude: Vec<String>,
    /// Maximum file size in bytes. Larger files are skipped with a
    /// `FileTooLarge` scan error. Unlimited by default (`u64::MAX`).
    pub max_file_size: u64,
    /// Whether to follow symbolic links (default: `false`).
    pub follow_links: bool,
    /// Maximum directory traversal depth. Unlimited by default (`usize::MAX`).
    pub max_depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            mode: ScanMode::default(),
            extensions: Vec::new(),
            exclude: Vec::new(),
            max_file_size: u64::MAX,
            follow_links: false,
            max_depth: usize::MAX,
        }
    }
}

impl ScanConfig {
    /// Config scanning a single base directory with default options.
    #[must_use]
    pub fn for_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![path.into()],
            ..Self::default()
        }
    }
}
