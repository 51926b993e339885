//! Corpus sources.
//!
//! Only the filesystem source exists; `scan_fs()` uses it directly.

pub mod fs;

/// Content format for dispatching to the correct extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Text,
    Yaml,
}
