//! Lazyload Core - lifecycle and configuration logic for lazy loading
//!
//! This crate provides the DOM-independent core of the lazy loading library:
//! the per-element lifecycle state machine, configuration types and merging,
//! the supported-element check, and the one-shot trigger guard. The actual
//! DOM wiring (element resolution, IntersectionObserver, attribute writes)
//! lives in the `lazyload-wasm` bindings crate.
//!
//! Keeping this logic free of `web-sys` means it is unit-testable on any
//! target; the bindings crate stays a thin translation layer.

pub mod config;
pub mod error;
pub mod oneshot;
pub mod settings;
pub mod state;

pub use config::{AttrMap, Config, ObserverTuning, Overrides};
pub use error::LazyError;
pub use oneshot::OneShot;
pub use settings::{assert_supported, is_supported, MEDIA_LOAD_ERROR, STATE_ATTR, SUPPORTED_TAGS};
pub use state::LazyState;
