//! Selector normalization: one element, a node list, an array, or a query
//! string, resolved into a flat collection of elements.

use lazyload_core::LazyError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, NodeList};

/// Resolve a selector value into the elements it denotes.
///
/// Non-element entries in a node list or array (text nodes, stray values)
/// are skipped. A query string matching nothing is [`LazyError::NoElements`]
/// under `strict`, an empty collection otherwise.
///
/// # Errors
///
/// [`LazyError::InvalidSelector`] for a value of any other shape and
/// [`LazyError::BadQuery`] when the selector engine rejects the string.
pub fn resolve(
    selector: &JsValue,
    document: &Document,
    strict: bool,
) -> Result<Vec<Element>, LazyError> {
    if let Some(element) = selector.dyn_ref::<Element>() {
        return Ok(vec![element.clone()]);
    }
    if let Some(list) = selector.dyn_ref::<NodeList>() {
        return Ok(elements_of(list));
    }
    if js_sys::Array::is_array(selector) {
        let entries = js_sys::Array::from(selector);
        return Ok(entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<Element>().ok())
            .collect());
    }

    let Some(query) = selector.as_string() else {
        return Err(LazyError::InvalidSelector);
    };
    let list = document
        .query_selector_all(&query)
        .map_err(|_| LazyError::BadQuery {
            selector: query.clone(),
        })?;
    let elements = elements_of(&list);
    if elements.is_empty() && strict {
        return Err(LazyError::NoElements);
    }
    Ok(elements)
}

fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Browser-only tests; run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_single_element_wraps_into_collection() {
        let doc = document();
        let img = doc.create_element("img").unwrap();
        let resolved = resolve(&JsValue::from(img.clone()), &doc, true).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0], img);
    }

    #[wasm_bindgen_test]
    fn test_array_passes_through_elements_only() {
        let doc = document();
        let entries = js_sys::Array::new();
        entries.push(doc.create_element("img").unwrap().as_ref());
        entries.push(&JsValue::from_str("not an element"));
        entries.push(doc.create_element("video").unwrap().as_ref());

        let resolved = resolve(&entries.into(), &doc, true).unwrap();
        assert_eq!(resolved.len(), 2);
    }

    #[wasm_bindgen_test]
    fn test_node_list_passes_through() {
        let doc = document();
        let body = doc.body().unwrap();
        let a = doc.create_element("img").unwrap();
        a.set_class_name("lazy-test-list");
        let b = doc.create_element("img").unwrap();
        b.set_class_name("lazy-test-list");
        body.append_child(&a).unwrap();
        body.append_child(&b).unwrap();

        let list = doc.query_selector_all(".lazy-test-list").unwrap();
        let resolved = resolve(&list.into(), &doc, true).unwrap();
        assert_eq!(resolved.len(), 2);

        a.remove();
        b.remove();
    }

    #[wasm_bindgen_test]
    fn test_query_string_resolves() {
        let doc = document();
        let img = doc.create_element("img").unwrap();
        img.set_class_name("lazy-test-query");
        doc.body().unwrap().append_child(&img).unwrap();

        let resolved = resolve(&JsValue::from_str(".lazy-test-query"), &doc, true).unwrap();
        assert_eq!(resolved.len(), 1);
        img.remove();
    }

    #[wasm_bindgen_test]
    fn test_empty_query_strict_is_error() {
        let err = resolve(&JsValue::from_str(".lazy-test-nothing"), &document(), true).unwrap_err();
        assert_eq!(err, LazyError::NoElements);
    }

    #[wasm_bindgen_test]
    fn test_empty_query_lenient_iterates_zero_times() {
        let resolved =
            resolve(&JsValue::from_str(".lazy-test-nothing"), &document(), false).unwrap();
        assert!(resolved.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_malformed_query_is_bad_query() {
        let err = resolve(&JsValue::from_str(":::nope"), &document(), true).unwrap_err();
        assert!(matches!(err, LazyError::BadQuery { .. }));
    }

    #[wasm_bindgen_test]
    fn test_other_values_are_invalid_selectors() {
        let doc = document();
        assert_eq!(
            resolve(&JsValue::from_f64(42.0), &doc, true).unwrap_err(),
            LazyError::InvalidSelector
        );
        assert_eq!(
            resolve(&JsValue::NULL, &doc, true).unwrap_err(),
            LazyError::InvalidSelector
        );
    }
}
