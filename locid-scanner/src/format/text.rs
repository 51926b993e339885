//! Plain-text extractor.
//!
//! A line contributes an identifier when it starts with the literal
//! `- id: L` followed by at least one digit. Anything after the digit run is
//! ignored, so `- id: L12 # old` counts as `L12`.

use std::path::Path;
use std::sync::LazyLock;

use locid::LocationId;
use regex::Regex;
use tracing::debug;

use crate::report::IdOccurrence;

static ID_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^- id: (L[0-9]+)") {
    Ok(regex) => regex,
    Err(err) => panic!("Invalid id line regex: {err}"),
});

/// Extract every identifier occurrence from text content.
#[must_use]
pub fn scan_text_content(content: &str, path: &Path) -> Vec<IdOccurrence> {
    let mut found = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let Some(caps) = ID_LINE_PATTERN.captures(line) else {
            continue;
        };
        let raw = &caps[1];
        match raw.parse::<LocationId>() {
            Ok(id) => found.push(IdOccurrence {
                id,
                file: path.to_owned(),
                line: line_num + 1,
            }),
            Err(e) => {
                debug!(file = %path.display(), line = line_num + 1, "ignoring id line: {e}");
            }
        }
    }

    found
}
