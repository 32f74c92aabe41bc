//! The attribute promoter: moves staged asset paths onto their real
//! attribute names, which triggers the host-native fetch.

use lazyload_core::AttrMap;
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Copy each non-empty staged attribute value onto its real counterpart.
///
/// Absent or empty staged attributes never overwrite the real attribute.
/// Staged attributes are left in place here; they are removed on successful
/// load by the state tracker, which keeps the mapping available should a
/// retry mechanism ever be layered on top.
///
/// # Errors
///
/// Fails only when a configured real attribute name is rejected by the
/// host; the caller converts that into an `error` transition.
pub fn promote(element: &Element, attrs: &AttrMap) -> Result<(), JsValue> {
    for (real, staged) in attrs {
        if let Some(path) = element.get_attribute(staged) {
            if !path.is_empty() {
                element.set_attribute(real, &path)?;
            }
        }
    }
    Ok(())
}
