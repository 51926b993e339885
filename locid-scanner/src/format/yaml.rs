//! YAML extractor for location record files.
//!
//! A record file holds a list of mappings, each with an `id` key:
//!
//! ```yaml
//! - id: L12
//!   names:
//!     - name: Springfield
//!   parents:
//!     - id: L3
//! ```
//!
//! Only the `id` of each top-level item names a record; nested ids such as
//! `parents[].id` are references and do not count.

use std::path::Path;

use locid::LocationId;
use serde_json::Value;
use tracing::debug;

use crate::error::{ScanError, ScanErrorKind};
use crate::report::IdOccurrence;

fn split_yaml_documents(content: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim() == "---" {
            if current.iter().any(|l| !l.trim().is_empty()) {
                documents.push(current.join("\n"));
            }
            current.clear();
        } else {
            current.push(line);
        }
    }
    if current.iter().any(|l| !l.trim().is_empty()) {
        documents.push(current.join("\n"));
    }

    documents
}

fn collect_record_ids(doc: &Value, path: &Path, found: &mut Vec<IdOccurrence>) {
    let Value::Array(items) = doc else {
        return;
    };
    for item in items {
        let Some(raw) = item.get("id").and_then(Value::as_str) else {
            continue;
        };
        match LocationId::from_prefix_of(raw) {
            Some(id) => found.push(IdOccurrence {
                id,
                file: path.to_owned(),
                line: 0,
            }),
            None => debug!(file = %path.display(), id = raw, "ignoring malformed record id"),
        }
    }
}

/// Extract record identifiers from YAML content.
///
/// Returns `(occurrences, scan_errors)`. In a multi-document stream a
/// malformed document yields a scan error while its valid siblings are still
/// read; if nothing parses, a single file-level error is returned.
#[must_use]
pub fn scan_yaml_content(content: &str, path: &Path) -> (Vec<IdOccurrence>, Vec<ScanError>) {
    let mut found = Vec::new();

    let stream_err = match serde_saphyr::from_multiple::<Value>(content) {
        Ok(documents) => {
            for doc in &documents {
                collect_record_ids(doc, path, &mut found);
            }
            return (found, Vec::new());
        }
        Err(e) => e,
    };

    let mut scan_errors = Vec::new();
    let mut any_parsed = false;
    for (idx, segment) in split_yaml_documents(content).iter().enumerate() {
        match serde_saphyr::from_str::<Value>(segment) {
            Ok(doc) => {
                any_parsed = true;
                collect_record_ids(&doc, path, &mut found);
            }
            Err(doc_err) => scan_errors.push(ScanError::new(
                path,
                ScanErrorKind::YamlParseError,
                format!("YAML parse error in document {}: {doc_err}", idx + 1),
            )),
        }
    }

    if !any_parsed {
        scan_errors = vec![ScanError::new(
            path,
            ScanErrorKind::YamlParseError,
            format!("YAML parse error: {stream_err}"),
        )];
    }

    (found, scan_errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(content: &str) -> (Vec<u64>, Vec<ScanError>) {
        let (found, errors) = scan_yaml_content(content, Path::new("records.yaml"));
        (found.into_iter().map(|occ| occ.id.value()).collect(), errors)
    }

    #[test]
    fn test_reads_top_level_record_ids() {
        let content = "\
- id: L1
  names:
    - name: Alpha
- id: L7
- id: L3
";
        let (ids, errors) = scan(content);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(ids, vec![1, 7, 3]);
    }

    #[test]
    fn test_ignores_parent_references() {
        let content = "\
- id: L2
  parents:
    - id: L40
      period: FROM 1900
";
        let (ids, _) = scan(content);
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_accepts_indented_and_quoted_ids() {
        let content = "\
-   names: []
    id: 'L11'
- {id: \"L12\"}
";
        let (ids, errors) = scan(content);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(ids, vec![11, 12]);
    }

    #[test]
    fn test_ignores_malformed_ids_and_non_lists() {
        let (ids, errors) = scan("- id: M3\n- id: L\n- name: no id\n");
        assert!(errors.is_empty());
        assert!(ids.is_empty());

        let (ids, errors) = scan("id: L9\n");
        assert!(errors.is_empty());
        assert!(ids.is_empty());
    }

    #[test]
    fn test_multi_document_stream() {
        let (ids, errors) = scan("- id: L1\n---\n- id: L5\n");
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_malformed_document_does_not_hide_siblings() {
        let content = "\
- id: L4
---
invalid: yaml: syntax:
---
- id: L6
";
        let (ids, errors) = scan(content);
        assert_eq!(ids, vec![4, 6]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ScanErrorKind::YamlParseError);
    }

    #[test]
    fn test_unparseable_file_is_single_scan_error() {
        let (ids, errors) = scan(": : :\n  - [unclosed\n");
        assert!(ids.is_empty());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("YAML parse error:"));
    }
}
