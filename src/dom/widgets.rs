//! Bootstrap 5 modal and toast, bound as opaque widgets.
//!
//! Only construction and `show()` are used; the page loads Bootstrap's bundle
//! before this module runs.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Modal;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method)]
    pub fn show(this: &Modal);
}

#[wasm_bindgen(js_namespace = bootstrap)]
extern "C" {
    pub type Toast;

    #[wasm_bindgen(constructor, catch)]
    pub fn new(element: &Element) -> Result<Toast, JsValue>;

    #[wasm_bindgen(method)]
    pub fn show(this: &Toast);
}
