//! Document lookups and JS error reporting.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::error::HostError;

pub fn window() -> Result<web_sys::Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document() -> Result<Document, HostError> {
    window()?.document().ok_or(HostError::NoDocument)
}

/// First element matching `selector` within `root`.
pub fn qs(root: &Document, selector: &str) -> Result<Element, HostError> {
    match root.query_selector(selector) {
        Ok(Some(el)) => Ok(el),
        Ok(None) | Err(_) => Err(HostError::MissingElement(selector.to_owned())),
    }
}

/// First element matching `selector` within `scope`.
pub fn qs_in(scope: &Element, selector: &str) -> Result<Element, HostError> {
    match scope.query_selector(selector) {
        Ok(Some(el)) => Ok(el),
        Ok(None) | Err(_) => Err(HostError::MissingElement(selector.to_owned())),
    }
}

/// Typed lookup, failing if the element is missing or of another type.
pub fn qs_as<T: JsCast>(root: &Document, selector: &str, expected: &'static str) -> Result<T, HostError> {
    qs(root, selector)?
        .dyn_into::<T>()
        .map_err(|_| HostError::WrongElementType { selector: selector.to_owned(), expected })
}

/// Every element matching `selector`, in document order.
pub fn qsa(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("invalid selector {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Log a failed DOM write; callers carry on regardless.
pub fn warn_on_err<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(e) = result {
        log::warn!("{what} failed: {e:?}");
    }
}
