//! Filesystem corpus source.
//!
//! Discovers files under the base directories and reads them for extraction.
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Resolved paths must stay within the scan root
//! - Device files, pipes, and sockets are skipped
//! - Reads are bounded by `max_file_size`
//!
//! Nothing here fails the scan: every problem becomes a [`ScanError`].

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::{ScanConfig, ScanMode};
use crate::error::{ScanError, ScanErrorKind};
use crate::strategy::ContentFormat;

/// Result of attempting to read a file for scanning.
pub enum ReadOutcome {
    /// File was read successfully; contains the decoded content.
    Ok(String),
    /// File could not be read; contains the scan error.
    Err(ScanError),
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

fn matches_extensions(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

/// Determine how a file is read, or `None` if the mode ignores it.
#[must_use]
pub fn content_format_for(path: &Path, mode: ScanMode) -> Option<ContentFormat> {
    match mode {
        ScanMode::Text => Some(ContentFormat::Text),
        ScanMode::Yaml if is_yaml(path) => Some(ContentFormat::Yaml),
        ScanMode::Yaml => None,
    }
}

fn compile_excludes(config: &ScanConfig, scan_errors: &mut Vec<ScanError>) -> Vec<Pattern> {
    let mut patterns = Vec::with_capacity(config.exclude.len());
    for pat_str in &config.exclude {
        match Pattern::new(pat_str) {
            Ok(pat) => patterns.push(pat),
            Err(e) => scan_errors.push(ScanError::new(
                pat_str,
                ScanErrorKind::InvalidExcludePattern,
                format!("Invalid exclude glob pattern '{pat_str}': {e}"),
            )),
        }
    }
    patterns
}

fn is_special_file(entry: &walkdir::DirEntry) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if let Ok(ft) = entry.metadata().map(|m| m.file_type()) {
            return ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket();
        }
    }
    #[cfg(not(unix))]
    let _ = entry;
    false
}

/// Find all files to scan under the configured paths.
///
/// Returns `(files, scan_errors)`. A path that does not exist contributes
/// nothing; it is an empty corpus, not an error. Files are sorted so results
/// do not depend on directory iteration order.
#[must_use]
pub fn find_files(config: &ScanConfig) -> (Vec<PathBuf>, Vec<ScanError>) {
    let mut files = Vec::new();
    let mut scan_errors = Vec::new();
    let exclude_patterns = compile_excludes(config, &mut scan_errors);

    let wanted = |path: &Path| {
        matches_extensions(path, &config.extensions)
            && content_format_for(path, config.mode).is_some()
            && !matches_exclude(path, &exclude_patterns)
    };

    for root in &config.paths {
        if !root.exists() {
            debug!(path = %root.display(), "base path does not exist, nothing to scan");
            continue;
        }

        let canonical_root = match root.canonicalize() {
            Ok(r) => r,
            Err(e) => {
                scan_errors.push(ScanError::new(
                    root.clone(),
                    ScanErrorKind::IoError,
                    format!("Failed to canonicalize root path: {e}"),
                ));
                continue;
            }
        };

        if root.is_file() {
            if wanted(root) {
                files.push(root.clone());
            }
            continue;
        }

        for entry_result in WalkDir::new(root)
            .follow_links(config.follow_links)
            .max_depth(config.max_depth)
        {
            let entry = match entry_result {
                Ok(e) => e,
                Err(walk_err) => {
                    let path = walk_err
                        .path()
                        .map_or_else(|| root.clone(), Path::to_path_buf);
                    scan_errors.push(ScanError::new(
                        path,
                        ScanErrorKind::WalkError,
                        format!("Directory traversal error: {walk_err}"),
                    ));
                    continue;
                }
            };

            let file_path = entry.path();
            if !file_path.is_file() || is_special_file(&entry) {
                continue;
            }

            match file_path.canonicalize() {
                Ok(canonical_path) if !canonical_path.starts_with(&canonical_root) => {
                    scan_errors.push(ScanError::new(
                        file_path,
                        ScanErrorKind::OutsideRoot,
                        format!(
                            "Path resolves outside scan root: {} -> {}",
                            file_path.display(),
                            canonical_path.display()
                        ),
                    ));
                    continue;
                }
                Ok(_) => {}
                Err(e) => {
                    scan_errors.push(ScanError::new(
                        file_path,
                        ScanErrorKind::IoError,
                        format!("Failed to canonicalize path: {e}"),
                    ));
                    continue;
                }
            }

            if wanted(file_path) {
                files.push(file_path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    (files, scan_errors)
}

/// Read a file with a bounded read, enforcing `max_file_size`.
///
/// Text content is decoded leniently: invalid UTF-8 sequences (a Latin-1
/// place name, say) become U+FFFD and the rest of the file is still searched.
/// Only content containing a NUL byte is treated as binary. YAML content
/// must be valid UTF-8.
///
/// Returns `ReadOutcome::Err` if the file is too large, cannot be read, or
/// cannot be decoded for `format`.
#[must_use]
pub fn read_file_bounded(path: &Path, max_file_size: u64, format: ContentFormat) -> ReadOutcome {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return ReadOutcome::Err(ScanError::new(
                path,
                ScanErrorKind::IoError,
                format!("Failed to open file: {e}"),
            ));
        }
    };

    // One byte past the limit tells an oversized file apart from an exact fit.
    let mut buffer = Vec::new();
    if let Err(e) = file
        .take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
    {
        return ReadOutcome::Err(ScanError::new(
            path,
            ScanErrorKind::IoError,
            format!("Failed to read file: {e}"),
        ));
    }

    if buffer.len() as u64 > max_file_size {
        return ReadOutcome::Err(ScanError::new(
            path,
            ScanErrorKind::FileTooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    match format {
        ContentFormat::Text if buffer.contains(&0) => ReadOutcome::Err(ScanError::new(
            path,
            ScanErrorKind::InvalidEncoding,
            "File looks binary (contains NUL bytes)".to_owned(),
        )),
        ContentFormat::Text => ReadOutcome::Ok(String::from_utf8_lossy(&buffer).into_owned()),
        ContentFormat::Yaml => match String::from_utf8(buffer) {
            Ok(content) => ReadOutcome::Ok(content),
            Err(_) => ReadOutcome::Err(ScanError::new(
                path,
                ScanErrorKind::InvalidEncoding,
                "File is not valid UTF-8".to_owned(),
            )),
        },
    }
}
