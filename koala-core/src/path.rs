//! URL path escaping.
//!
//! Identifiers always occupy exactly one path segment. Document paths are the
//! one multi-segment value: each segment is escaped on its own and the
//! separators stay literal.

use std::borrow::Cow;

/// Percent-encode a value so it fits in a single path segment.
pub fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Encode a slash-joined path segment by segment, keeping `/` literal.
///
/// Empty segments (leading, trailing, or doubled slashes) are dropped.
pub fn encode_multi_segment(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
