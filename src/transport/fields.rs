use once_cell::sync::Lazy;
use regex::Regex;

static FIELD_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*").expect("field separator is a valid regex"));

/// Split a plaintext gateway response into its comma-separated fields.
///
/// Whitespace directly after a comma is consumed; any other whitespace is kept.
/// A body without separators yields a single field holding the whole body.
pub fn split_fields(raw: &str) -> Vec<&str> {
    FIELD_SEPARATOR.split(raw).collect()
}
