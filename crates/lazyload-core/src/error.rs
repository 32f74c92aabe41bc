//! Error types for element resolution and support checking.

use thiserror::Error;

/// Errors surfaced while resolving or validating lazy-loadable elements.
///
/// None of these ever propagate out of the public entry point: resolution
/// failures are logged through the configured sink, and per-element failures
/// become an `error` state transition on that element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LazyError {
    /// A string selector matched nothing (strict mode only).
    #[error("No lazy loadable element found!")]
    NoElements,

    /// The element's tag is not in the supported set.
    #[error("{tag} element is not supported!")]
    UnsupportedElement { tag: String },

    /// The selector value is not an element, node list, array, or string.
    #[error("Selector must be an element, a node list, an array, or a query string")]
    InvalidSelector,

    /// The query string was rejected by the host's selector engine.
    #[error("Invalid selector query: {selector}")]
    BadQuery { selector: String },

    /// No global document is available in the host environment.
    #[error("No document available")]
    NoDocument,
}
