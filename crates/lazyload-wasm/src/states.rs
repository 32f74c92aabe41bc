//! The DOM state tracker.
//!
//! Each transition writes the `lazy-state` attribute and invokes the
//! matching user hook. Every write is gated on the core transition
//! predicate, so stray or duplicate host callbacks can never move an
//! element backward or out of a terminal state.

use lazyload_core::{LazyState, STATE_ATTR};
use web_sys::Element;

use crate::options::LazyOptions;

/// Read the element's current lifecycle state from its attribute.
pub fn current_state(element: &Element) -> Option<LazyState> {
    element
        .get_attribute(STATE_ATTR)
        .as_deref()
        .and_then(LazyState::parse)
}

/// Write `next` if the transition is legal. Returns whether it happened.
fn enter(element: &Element, next: LazyState) -> bool {
    if !LazyState::can_enter(current_state(element), next) {
        return false;
    }
    // STATE_ATTR is a fixed valid attribute name; this write cannot fail.
    let _ = element.set_attribute(STATE_ATTR, next.as_str());
    true
}

pub fn mark_waiting(element: &Element, options: &LazyOptions) {
    if enter(element, LazyState::Waiting) {
        options.notify_waiting(element);
    }
}

pub fn mark_loading(element: &Element, options: &LazyOptions) {
    if enter(element, LazyState::Loading) {
        options.notify_loading(element);
    }
}

/// Mark a successful load and strip the staged attributes, so re-querying
/// no longer reports a pending lazy source.
pub fn mark_loaded(element: &Element, options: &LazyOptions) {
    if !enter(element, LazyState::Loaded) {
        return;
    }
    for staged in options.config.attrs.values() {
        let _ = element.remove_attribute(staged);
    }
    options.notify_loaded(element);
}

/// Mark a terminal failure. No retry follows.
pub fn mark_error(element: &Element, options: &LazyOptions, reason: &str) {
    if enter(element, LazyState::Error) {
        options.notify_error(element, reason);
    }
}
