//! `web_sys` implementations of the host capabilities.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Storage};

use super::query::warn_on_err;
use super::widgets::{Modal, Toast};
use crate::consts::{ACTIVE_CLASS, HIDDEN_CLASS, REVEALED_CLASS, THEME_ATTRIBUTE};
use crate::contact::ContactDraft;
use crate::host::{
    ContactSurface, FilterCard, FilterChip, KeyValueStore, NavLink, PreviewDialog, RevealTarget, TextSlot,
    ThemeSurface,
};

fn dataset_value(element: &Element, key: &str) -> Option<String> {
    element.dyn_ref::<HtmlElement>().and_then(|el| el.dataset().get(key))
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    warn_on_err("classList.toggle", element.class_list().toggle_with_force(class, on));
}

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage`, or nothing when storage is unavailable (private mode).
pub struct LocalStore(pub Option<Storage>);

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.0.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read failed: {e:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            warn_on_err("localStorage write", storage.set_item(key, value));
        }
    }
}

pub struct DomThemeSurface {
    pub root: Element,
    pub toggle: Element,
}

impl ThemeSurface for DomThemeSurface {
    fn set_theme_attribute(&mut self, value: &str) {
        warn_on_err("set theme attribute", self.root.set_attribute(THEME_ATTRIBUTE, value));
    }

    fn set_toggle_glyph(&mut self, glyph: &str) {
        self.toggle.set_text_content(Some(glyph));
    }
}

// ── Scroll-spy / reveal ─────────────────────────────────────────

pub struct DomNavLink(pub Element);

impl NavLink for DomNavLink {
    fn href(&self) -> Option<String> {
        self.0.get_attribute("href")
    }

    fn set_active(&mut self, active: bool) {
        toggle_class(&self.0, ACTIVE_CLASS, active);
    }
}

pub struct DomRevealTarget(pub Element);

impl RevealTarget for DomRevealTarget {
    fn mark_revealed(&mut self) {
        warn_on_err("classList.add", self.0.class_list().add_1(REVEALED_CLASS));
    }
}

// ── Filter ──────────────────────────────────────────────────────

pub struct DomChip(pub Element);

impl FilterChip for DomChip {
    fn filter(&self) -> String {
        dataset_value(&self.0, "filter").unwrap_or_default()
    }

    fn is_marked_active(&self) -> bool {
        self.0.class_list().contains(ACTIVE_CLASS)
    }

    fn set_selected(&mut self, selected: bool) {
        toggle_class(&self.0, ACTIVE_CLASS, selected);
        let aria = if selected { "true" } else { "false" };
        warn_on_err("set aria-selected", self.0.set_attribute("aria-selected", aria));
    }
}

pub struct DomCard(pub Element);

impl FilterCard for DomCard {
    fn category(&self) -> Option<String> {
        dataset_value(&self.0, "category")
    }

    fn set_hidden(&mut self, hidden: bool) {
        toggle_class(&self.0, HIDDEN_CLASS, hidden);
    }
}

/// `data-*` lookup for the preview request of `card`.
pub fn card_data(card: &Element, key: &str) -> Option<String> {
    dataset_value(card, key)
}

// ── Preview dialog ──────────────────────────────────────────────

pub struct DomPreviewDialog {
    pub title: Element,
    pub description: Element,
    pub demo: HtmlElement,
    pub code: HtmlElement,
    pub modal: Modal,
}

fn set_action_link(button: &HtmlElement, href: Option<&str>) {
    let display = if href.is_some() { "inline-flex" } else { "none" };
    warn_on_err("set button display", button.style().set_property("display", display));
    if let Some(href) = href {
        warn_on_err("set button href", button.set_attribute("href", href));
    }
}

impl PreviewDialog for DomPreviewDialog {
    fn set_title(&mut self, title: &str) {
        self.title.set_text_content(Some(title));
    }

    fn set_description(&mut self, description: &str) {
        self.description.set_text_content(Some(description));
    }

    fn set_demo_link(&mut self, href: Option<&str>) {
        set_action_link(&self.demo, href);
    }

    fn set_code_link(&mut self, href: Option<&str>) {
        set_action_link(&self.code, href);
    }

    fn show(&mut self) {
        self.modal.show();
    }
}

// ── Contact form ────────────────────────────────────────────────

/// A text field that is either `<input>` or `<textarea>`.
pub enum TextField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    #[must_use]
    pub fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(element) => match element.dyn_into::<HtmlTextAreaElement>() {
                Ok(area) => Some(Self::TextArea(area)),
                Err(_) => None,
            },
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        match self {
            Self::Input(el) => el.as_ref(),
            Self::TextArea(el) => el.as_ref(),
        }
    }
}

pub struct DomContactForm {
    pub form: HtmlFormElement,
    pub name: TextField,
    pub email: TextField,
    pub message: TextField,
    pub honeypot: TextField,
    pub status: Element,
    pub live_link: Element,
    pub toast: Toast,
}

impl ContactSurface for DomContactForm {
    fn read_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.value(),
            email: self.email.value(),
            message: self.message.value(),
            honeypot: self.honeypot.value(),
        }
    }

    fn set_status(&mut self, message: &str) {
        self.status.set_text_content(Some(message));
    }

    fn set_live_link(&mut self, href: &str) {
        warn_on_err("set live mailto href", self.live_link.set_attribute("href", href));
    }

    fn show_toast(&mut self) {
        self.toast.show();
    }

    fn navigate(&mut self, href: &str) {
        if let Some(window) = web_sys::window() {
            warn_on_err("navigate to mailto", window.location().set_href(href));
        } else {
            log::warn!("no window to navigate");
        }
    }

    fn clear_fields(&mut self) {
        self.form.reset();
    }
}

// ── Footer ──────────────────────────────────────────────────────

pub struct DomTextSlot(pub Element);

impl TextSlot for DomTextSlot {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}
