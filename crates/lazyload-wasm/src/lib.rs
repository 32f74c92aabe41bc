//! Lazyload WASM - viewport-aware lazy loading for media elements
//!
//! This crate wires the `lazyload-core` lifecycle logic to the browser:
//! elements are resolved from a selector, watched with an
//! `IntersectionObserver`, and their staged `lazy-*` attributes are promoted
//! to the real attribute names the first time they scroll into view. Each
//! element records its progress in a `lazy-state` attribute
//! (`waiting | loading | loaded | error`), usable from CSS.
//!
//! # Module Structure
//!
//! - `options` - Options object parsing and the per-invocation configuration
//! - `resolve` - Selector normalization (element, node list, array, query)
//! - `states` - The DOM state tracker
//! - `assets` - Staged attribute promotion
//! - `watcher` - One-shot IntersectionObserver wrapper
//!
//! # Usage
//!
//! ```typescript
//! import init, { lazyLoad } from '@lazyload/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // <img lazy="hero.png"> becomes <img src="hero.png"> once visible
//! lazyLoad('[lazy]', {
//!   observer: { threshold: 0.5 },
//!   onLoaded: (element) => element.classList.add('is-loaded'),
//! });
//! ```
//!
//! The call is fire-and-forget: it never throws, returns nothing, and
//! isolates per-element failures from their siblings.

use std::rc::Rc;

use lazyload_core::{assert_supported, LazyError, MEDIA_LOAD_ERROR};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, IntersectionObserverInit};

mod assets;
mod options;
mod resolve;
mod states;
mod watcher;

use options::LazyOptions;

/// Defer loading of the selected media elements until they scroll into view.
///
/// `selector` is a single element, a `NodeList`, an array of elements, or a
/// query string. `options` may carry `attrs`, `observer`, `strict`, the
/// lifecycle hooks (`onWaiting`, `onLoading`, `onLoaded`, `onError`), and a
/// `logger` sink for top-level failures.
///
/// Never throws: resolution failures are logged, per-element failures end
/// as `lazy-state="error"` on that element only.
#[wasm_bindgen(js_name = lazyLoad)]
pub fn lazy_load(selector: &JsValue, options: &JsValue) {
    let opts = match LazyOptions::from_js(options) {
        Ok(parsed) => Rc::new(parsed),
        Err(message) => {
            options::log_fallback(&message);
            return;
        }
    };
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        opts.log(&LazyError::NoDocument.to_string());
        return;
    };
    let init = match opts.observer_init(&document) {
        Ok(init) => init,
        Err(message) => {
            opts.log(&message);
            return;
        }
    };
    let elements = match resolve::resolve(selector, &document, opts.config.strict) {
        Ok(elements) => elements,
        Err(err) => {
            opts.log(&err.to_string());
            return;
        }
    };

    for element in elements {
        process(element, &init, &opts);
    }
}

/// Run one element through the lifecycle, independently of its siblings.
fn process(element: Element, init: &IntersectionObserverInit, opts: &Rc<LazyOptions>) {
    if let Err(err) = assert_supported(&element.tag_name()) {
        states::mark_error(&element, opts, &err.to_string());
        return;
    }
    states::mark_waiting(&element, opts);

    let hooked = Rc::clone(opts);
    let registered = watcher::watch(&element, init, move |target| {
        begin_loading(target, &hooked);
    });
    if let Err(err) = registered {
        states::mark_error(&element, opts, &describe(&err));
    }
}

/// First-visibility handler: promote the staged attributes and wait for the
/// host-native load result.
fn begin_loading(element: Element, opts: &Rc<LazyOptions>) {
    states::mark_loading(&element, opts);

    if let Err(err) = assets::promote(&element, &opts.config.attrs) {
        states::mark_error(&element, opts, &describe(&err));
        return;
    }
    if let Err(err) = attach_settle_listeners(&element, opts) {
        states::mark_error(&element, opts, &describe(&err));
    }
}

/// One-shot `load`/`error` listeners that finalize the element's state.
fn attach_settle_listeners(element: &Element, opts: &Rc<LazyOptions>) -> Result<(), JsValue> {
    let once = AddEventListenerOptions::new();
    once.set_once(true);

    let on_load = {
        let element = element.clone();
        let opts = Rc::clone(opts);
        Closure::once(move || states::mark_loaded(&element, &opts))
    };
    element.add_event_listener_with_callback_and_add_event_listener_options(
        "load",
        on_load.as_ref().unchecked_ref(),
        &once,
    )?;
    on_load.forget();

    let on_error = {
        let element = element.clone();
        let opts = Rc::clone(opts);
        Closure::once(move || states::mark_error(&element, &opts, MEDIA_LOAD_ERROR))
    };
    element.add_event_listener_with_callback_and_add_event_listener_options(
        "error",
        on_error.as_ref().unchecked_ref(),
        &once,
    )?;
    on_error.forget();

    Ok(())
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Nothing to set up; state lives on the elements themselves.
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
