//! The per-element lifecycle state machine.
//!
//! State lives on the element itself as the `lazy-state` attribute; this
//! module defines the enumerated values and which transitions are legal.
//! The machine only ever moves forward:
//!
//! ```text
//! (none) -> waiting -> loading -> loaded
//!    \          \              \-> error   (host-native fetch failed)
//!     \          \-> error                 (watcher registration failed)
//!      \-> error                           (unsupported element)
//! ```

/// Lifecycle state of a lazy-loaded element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyState {
    /// Observed, not yet visible.
    Waiting,
    /// Became visible; the host-native fetch is in flight.
    Loading,
    /// The host reported a successful load. Terminal.
    Loaded,
    /// Support check or host-native fetch failed. Terminal, no retry.
    Error,
}

impl LazyState {
    /// The attribute value written for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            LazyState::Waiting => "waiting",
            LazyState::Loading => "loading",
            LazyState::Loaded => "loaded",
            LazyState::Error => "error",
        }
    }

    /// Parse an attribute value back into a state.
    pub fn parse(value: &str) -> Option<LazyState> {
        match value {
            "waiting" => Some(LazyState::Waiting),
            "loading" => Some(LazyState::Loading),
            "loaded" => Some(LazyState::Loaded),
            "error" => Some(LazyState::Error),
            _ => None,
        }
    }

    /// Whether an element currently in `current` may enter `next`.
    ///
    /// `current` is `None` for an element the library has not touched yet.
    /// An unsupported element goes straight to `Error` without ever being
    /// `Waiting`; a waiting element may fail if watcher registration is
    /// rejected; a loading element settles as `Loaded` or `Error`. Every
    /// other transition is rejected, which makes the terminal states sticky
    /// even if the host delivers stray duplicate `load`/`error` events.
    pub fn can_enter(current: Option<LazyState>, next: LazyState) -> bool {
        matches!(
            (current, next),
            (None, LazyState::Waiting)
                | (None, LazyState::Error)
                | (Some(LazyState::Waiting), LazyState::Loading)
                | (Some(LazyState::Waiting), LazyState::Error)
                | (Some(LazyState::Loading), LazyState::Loaded)
                | (Some(LazyState::Loading), LazyState::Error)
        )
    }
}
