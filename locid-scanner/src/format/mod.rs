//! Extractors that pull location identifiers out of file content.
//!
//! - `text` — line matcher for `- id: L<digits>`
//! - `yaml` — structured reader for lists of location records

pub mod text;
pub mod yaml;
