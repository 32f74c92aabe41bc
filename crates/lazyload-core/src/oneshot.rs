//! One-shot trigger guard for the visibility watcher.

use std::cell::Cell;

/// Fired-flag guard that is true exactly once.
///
/// The visibility watcher unobserves an element after its first intersection
/// hit, but the underlying primitive may already have queued further entries
/// for the same target. Gating the callback on `fire()` keeps the
/// at-most-once invariant independent of host delivery behavior.
#[derive(Debug, Default)]
pub struct OneShot {
    fired: Cell<bool>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` on the first call, `false` on every call after.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    /// Whether the guard has already fired.
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}
