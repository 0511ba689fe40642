//! Canonical text form for identity and containment comparisons.
//!
//! Applied to filenames before building dedup keys and to both resume
//! content and keyword terms before substring checks, so case and
//! incidental whitespace never change a matching outcome.

/// Trims surrounding whitespace and lowercases. Pure; no I/O.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
