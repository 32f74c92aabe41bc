//! One-shot wrapper over the host `IntersectionObserver`.
//!
//! One observer per element, matching the source library's registration
//! pattern. The first intersecting entry fires the callback; the observer
//! is then torn down. A [`OneShot`] guard keeps the at-most-once invariant
//! even if the host has already queued further entries for the target.

use std::rc::Rc;

use lazyload_core::OneShot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observe `element` and invoke `on_visible` exactly once, the first time
/// it intersects the configured root region. Non-intersecting entries are
/// ignored.
///
/// The callback closure is handed to the host for the remaining lifetime of
/// the page; observation holds no other Rust state.
///
/// # Errors
///
/// Fails when the host rejects the observer construction (for example a
/// malformed root margin).
pub fn watch<F>(
    element: &Element,
    init: &IntersectionObserverInit,
    mut on_visible: F,
) -> Result<(), JsValue>
where
    F: FnMut(Element) + 'static,
{
    let guard = Rc::new(OneShot::new());
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if !guard.fire() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                observer.disconnect();
                on_visible(target);
            }
        },
    );

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?;
    observer.observe(element);
    // The closure must outlive the observation; released to the host.
    callback.forget();
    Ok(())
}
