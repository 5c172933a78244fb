//! `IntersectionObserver` plumbing.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::ObserverOptions;
use crate::error::HostError;
use crate::host::VisibilityObserver;
use crate::reveal::RevealId;

/// Create an observer whose callback lives for the rest of the page.
pub fn create<F>(options: &ObserverOptions, callback: F) -> Result<IntersectionObserver, HostError>
where
    F: FnMut(Array, IntersectionObserver) + 'static,
{
    let closure = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(callback);

    let init = IntersectionObserverInit::new();
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }
    init.set_threshold(&JsValue::from_f64(options.threshold));

    let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
        .map_err(|_| HostError::Js("IntersectionObserver"))?;
    closure.forget();
    Ok(observer)
}

/// Entries delivered to an observer callback.
pub fn entries(batch: &Array) -> Vec<IntersectionObserverEntry> {
    batch
        .iter()
        .filter_map(|value| value.dyn_ref::<IntersectionObserverEntry>().cloned())
        .collect()
}

/// An observer paired with the element list its reveal ids index into.
pub struct IndexedObserver {
    pub observer: IntersectionObserver,
    pub elements: Rc<Vec<Element>>,
}

impl IndexedObserver {
    /// Reveal id of `target`, if it is one of the tracked elements.
    pub fn id_of(&self, target: &Element) -> Option<RevealId> {
        self.elements.iter().position(|el| el == target)
    }
}

impl VisibilityObserver<RevealId> for IndexedObserver {
    fn observe(&mut self, target: &RevealId) {
        if let Some(el) = self.elements.get(*target) {
            self.observer.observe(el);
        }
    }

    fn unobserve(&mut self, target: &RevealId) {
        if let Some(el) = self.elements.get(*target) {
            self.observer.unobserve(el);
        }
    }
}
