//! Strips internal identifiers that leak into client-facing text fields.
//!
//! Operators sometimes end up with a record id or slug in a free-text
//! location field. Such values are dropped rather than shown to clients.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

/// Lower-case alphanumerics and hyphens only, with at least one hyphen.
static SLUG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]*-[a-z0-9-]*$").expect("slug pattern is a valid regex")
});

/// Values at or under this length are never treated as slugs.
const SLUG_MIN_LEN: usize = 20;

/// Return `true` if `value` is a hyphenated 8-4-4-4-12 hex UUID.
pub fn is_uuid(value: &str) -> bool {
    // `Uuid::try_parse` also accepts the simple, braced and urn forms; only
    // the hyphenated form is exactly 36 characters long.
    value.len() == 36 && Uuid::try_parse(value).is_ok()
}

/// Return `true` if `value` looks like a database slug or composite id.
pub fn is_slug_like(value: &str) -> bool {
    value.chars().count() > SLUG_MIN_LEN && SLUG_RE.is_match(value)
}

/// Clean a display string, returning `None` when nothing should be shown.
///
/// Rules, in order: missing or empty → `None`; UUID → `None`; long slug
/// (more than 20 characters of `[a-z0-9-]` with a hyphen) → `None`;
/// anything else is returned unchanged. Identifier checks ignore
/// surrounding whitespace.
pub fn sanitize(value: Option<&str>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if value.is_empty() || is_uuid(trimmed) || is_slug_like(trimmed) {
        return None;
    }
    Some(value.to_owned())
}
