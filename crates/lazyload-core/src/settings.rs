//! Library-wide constants and the supported-element check.

use crate::error::LazyError;

/// Attribute that records an element's lifecycle state.
///
/// This is the only durable artifact the library produces: it doubles as a
/// debugging hook and a CSS-selectable styling hook
/// (e.g. `[lazy-state="loaded"]`).
pub const STATE_ATTR: &str = "lazy-state";

/// Tag names eligible for lazy loading.
///
/// These are the element categories with a host-native asset fetch driven by
/// `src`/`srcset`/`poster`-style attributes. Internal constant, not exposed
/// as a configuration override.
pub const SUPPORTED_TAGS: [&str; 6] = ["img", "video", "embed", "object", "iframe", "audio"];

/// Fixed message reported when the host-native fetch fails.
pub const MEDIA_LOAD_ERROR: &str = "Loading media.";

/// Whether a tag name (any case) is in the supported set.
pub fn is_supported(tag: &str) -> bool {
    SUPPORTED_TAGS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(tag))
}

/// Precondition check run before any lazy processing of an element.
///
/// This is not a filter: callers handle the failure per element, marking it
/// `error` rather than aborting the batch.
///
/// # Errors
///
/// Returns [`LazyError::UnsupportedElement`] naming the offending tag.
pub fn assert_supported(tag: &str) -> Result<(), LazyError> {
    if is_supported(tag) {
        return Ok(());
    }
    Err(LazyError::UnsupportedElement {
        tag: tag.to_ascii_lowercase(),
    })
}
