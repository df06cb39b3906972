//! Strongly-typed tool identifiers.

use crate::newtype_string::define_identifier;

define_identifier! {
    /// Opaque catalog identifier assigned by the backing store.
    pub struct ToolId;
    accept = is_non_blank, "must not be blank";
}

define_identifier! {
    /// URL-safe routing key for a tool.
    ///
    /// Slugs are lowercase ASCII letters, digits and single hyphens, never
    /// starting or ending with a hyphen. They are the routing payload between
    /// pages and the dedup key of the comparison set.
    pub struct ToolSlug;
    accept = is_url_safe_slug, "must be lowercase letters, digits and hyphens";
}

fn is_non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Check whether a string is a valid slug (`clinical-notes-pro`).
pub fn is_url_safe_slug(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
#[path = "tool_id_test.rs"]
mod tests;
