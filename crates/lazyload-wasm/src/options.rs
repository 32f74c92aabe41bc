//! Parsing of the caller's options object.
//!
//! The options value mixes plain data (`attrs`, `observer`, `strict`) with
//! functions (`onWaiting`, `onLoading`, `onLoaded`, `onError`, `logger`).
//! Data keys go through `serde-wasm-bindgen` into the core override types;
//! functions are pulled out with `Reflect` since they have no serde
//! representation. The merged result is immutable for the whole invocation.

use js_sys::{Function, Reflect};
use lazyload_core::{Config, Overrides};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, IntersectionObserverInit};

/// Lifecycle hooks supplied by the caller. Absent hooks are no-ops, except
/// `on_error`, which falls back to a console warning.
#[derive(Debug, Default)]
struct Callbacks {
    on_waiting: Option<Function>,
    on_loading: Option<Function>,
    on_loaded: Option<Function>,
    on_error: Option<Function>,
}

/// Merged configuration plus caller hooks for one `lazyLoad` invocation.
#[derive(Debug)]
pub struct LazyOptions {
    pub config: Config,
    callbacks: Callbacks,
    /// Injectable sink for top-level failures; `None` logs to the console.
    logger: Option<Function>,
}

impl LazyOptions {
    /// Parse a raw options value. `undefined`/`null` means all defaults.
    ///
    /// # Errors
    ///
    /// Returns a message when the value is not an object or one of the data
    /// keys does not deserialize. The caller logs it; nothing throws.
    pub fn from_js(raw: &JsValue) -> Result<LazyOptions, String> {
        if raw.is_undefined() || raw.is_null() {
            return Ok(LazyOptions {
                config: Config::default(),
                callbacks: Callbacks::default(),
                logger: None,
            });
        }
        if !raw.is_object() {
            return Err("Options must be an object".to_string());
        }

        let overrides = Overrides {
            attrs: data_key(raw, "attrs")?,
            observer: data_key(raw, "observer")?,
            strict: data_key(raw, "strict")?,
        };
        let callbacks = Callbacks {
            on_waiting: function_key(raw, "onWaiting"),
            on_loading: function_key(raw, "onLoading"),
            on_loaded: function_key(raw, "onLoaded"),
            on_error: function_key(raw, "onError"),
        };

        Ok(LazyOptions {
            config: Config::merge(overrides),
            callbacks,
            logger: function_key(raw, "logger"),
        })
    }

    /// Build the `IntersectionObserverInit` for this invocation, resolving
    /// the configured root selector against the document.
    ///
    /// # Errors
    ///
    /// Returns a message when the root selector is malformed or matches
    /// nothing.
    pub fn observer_init(&self, document: &Document) -> Result<IntersectionObserverInit, String> {
        let tuning = &self.config.observer;
        let init = IntersectionObserverInit::new();
        init.set_root_margin(&tuning.root_margin);
        init.set_threshold(&JsValue::from_f64(tuning.threshold));

        if let Some(selector) = &tuning.root {
            let root: Element = document
                .query_selector(selector)
                .ok()
                .flatten()
                .ok_or_else(|| format!("Observer root not found: {selector}"))?;
            init.set_root(Some(&root));
        }
        Ok(init)
    }

    pub fn notify_waiting(&self, element: &Element) {
        invoke(&self.callbacks.on_waiting, element);
    }

    pub fn notify_loading(&self, element: &Element) {
        invoke(&self.callbacks.on_loading, element);
    }

    pub fn notify_loaded(&self, element: &Element) {
        invoke(&self.callbacks.on_loaded, element);
    }

    /// Invoke the error hook with the element and a reason. The default hook
    /// warns on the console, matching the stock configuration.
    pub fn notify_error(&self, element: &Element, reason: &str) {
        match &self.callbacks.on_error {
            Some(hook) => {
                let _ = hook.call2(&JsValue::NULL, element, &JsValue::from_str(reason));
            }
            None => console::warn_2(&JsValue::from_str(&format!("Lazy error: {reason}")), element),
        }
    }

    /// Report a top-level failure through the injectable sink.
    pub fn log(&self, message: &str) {
        match &self.logger {
            Some(sink) => {
                let _ = sink.call1(&JsValue::NULL, &JsValue::from_str(message));
            }
            None => log_fallback(message),
        }
    }
}

/// Console fallback for failures that happen before options are parsed.
pub fn log_fallback(message: &str) {
    console::error_1(&JsValue::from_str(&format!("Lazy error: {message}")));
}

fn data_key<T: DeserializeOwned>(raw: &JsValue, key: &str) -> Result<Option<T>, String> {
    let value = Reflect::get(raw, &JsValue::from_str(key))
        .map_err(|_| format!("Options key `{key}` is not readable"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|err| format!("Invalid `{key}` option: {err}"))
}

fn function_key(raw: &JsValue, key: &str) -> Option<Function> {
    Reflect::get(raw, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn invoke(hook: &Option<Function>, element: &Element) {
    if let Some(hook) = hook {
        // A throwing user hook must not break sibling processing.
        let _ = hook.call1(&JsValue::NULL, element);
    }
}
