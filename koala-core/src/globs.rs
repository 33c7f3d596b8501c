//! Service source-glob text handling.

/// Turn free-form editor text into the `sourceGlobs` sent to the backend.
///
/// One glob per line; surrounding whitespace (including `\r`) is trimmed and
/// blank lines are dropped. Order is preserved.
pub fn normalize_source_globs(input: &str) -> Vec<String> {
    input
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`normalize_source_globs`] for seeding an edit buffer.
pub fn join_source_globs(globs: &[String]) -> String {
    globs.join("\n")
}
