//! In-memory fakes for the host capabilities.
//!
//! Each fake shares its state through `Rc<RefCell<_>>` so a test can keep a
//! handle after moving the fake into a controller.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::contact::ContactDraft;
use crate::host::{
    ContactSurface, FilterCard, FilterChip, KeyValueStore, NavLink, PreviewDialog, RevealTarget, TextSlot,
    ThemeSurface, VisibilityObserver,
};

// =============================================================
// Theme
// =============================================================

#[derive(Clone, Default)]
pub struct MemoryStore(pub Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.0.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Default)]
pub struct ThemeView {
    pub attribute: Option<String>,
    pub glyph: Option<String>,
    pub applies: usize,
}

#[derive(Clone, Default)]
pub struct FakeThemeSurface(pub Rc<RefCell<ThemeView>>);

impl ThemeSurface for FakeThemeSurface {
    fn set_theme_attribute(&mut self, value: &str) {
        let mut view = self.0.borrow_mut();
        view.attribute = Some(value.to_owned());
        view.applies += 1;
    }

    fn set_toggle_glyph(&mut self, glyph: &str) {
        self.0.borrow_mut().glyph = Some(glyph.to_owned());
    }
}

// =============================================================
// Scroll-spy
// =============================================================

#[derive(Clone)]
pub struct FakeLink {
    pub href: Option<String>,
    pub active: Rc<RefCell<bool>>,
}

impl FakeLink {
    pub fn new(href: &str) -> Self {
        Self { href: Some(href.to_owned()), active: Rc::new(RefCell::new(false)) }
    }

    pub fn is_active(&self) -> bool {
        *self.active.borrow()
    }
}

impl NavLink for FakeLink {
    fn href(&self) -> Option<String> {
        self.href.clone()
    }

    fn set_active(&mut self, active: bool) {
        *self.active.borrow_mut() = active;
    }
}

// =============================================================
// Reveal
// =============================================================

#[derive(Clone, Default)]
pub struct FakeRevealTarget {
    pub reveals: Rc<RefCell<usize>>,
}

impl FakeRevealTarget {
    pub fn reveal_count(&self) -> usize {
        *self.reveals.borrow()
    }
}

impl RevealTarget for FakeRevealTarget {
    fn mark_revealed(&mut self) {
        *self.reveals.borrow_mut() += 1;
    }
}

#[derive(Default)]
pub struct FakeObserver {
    pub observed: BTreeSet<usize>,
    pub observe_calls: usize,
    pub unobserve_calls: usize,
}

impl VisibilityObserver<usize> for FakeObserver {
    fn observe(&mut self, target: &usize) {
        self.observe_calls += 1;
        self.observed.insert(*target);
    }

    fn unobserve(&mut self, target: &usize) {
        self.unobserve_calls += 1;
        self.observed.remove(target);
    }
}

// =============================================================
// Filter
// =============================================================

#[derive(Clone)]
pub struct FakeChip {
    pub filter: String,
    pub marked: bool,
    pub selected: Rc<RefCell<Option<bool>>>,
}

impl FakeChip {
    pub fn new(filter: &str) -> Self {
        Self { filter: filter.to_owned(), marked: false, selected: Rc::new(RefCell::new(None)) }
    }

    pub fn marked(filter: &str) -> Self {
        Self { marked: true, ..Self::new(filter) }
    }

    pub fn is_selected(&self) -> bool {
        self.selected.borrow().unwrap_or(false)
    }
}

impl FilterChip for FakeChip {
    fn filter(&self) -> String {
        self.filter.clone()
    }

    fn is_marked_active(&self) -> bool {
        self.marked
    }

    fn set_selected(&mut self, selected: bool) {
        *self.selected.borrow_mut() = Some(selected);
    }
}

#[derive(Clone)]
pub struct FakeCard {
    pub category: Option<String>,
    pub hidden: Rc<RefCell<bool>>,
}

impl FakeCard {
    pub fn new(category: &str) -> Self {
        Self { category: Some(category.to_owned()), hidden: Rc::new(RefCell::new(false)) }
    }

    pub fn uncategorized() -> Self {
        Self { category: None, hidden: Rc::new(RefCell::new(false)) }
    }

    pub fn is_hidden(&self) -> bool {
        *self.hidden.borrow()
    }
}

impl FilterCard for FakeCard {
    fn category(&self) -> Option<String> {
        self.category.clone()
    }

    fn set_hidden(&mut self, hidden: bool) {
        *self.hidden.borrow_mut() = hidden;
    }
}

// =============================================================
// Preview dialog
// =============================================================

#[derive(Default)]
pub struct DialogView {
    pub title: String,
    pub description: String,
    pub demo: Option<String>,
    pub code: Option<String>,
    pub shown: usize,
}

#[derive(Clone, Default)]
pub struct FakeDialog(pub Rc<RefCell<DialogView>>);

impl PreviewDialog for FakeDialog {
    fn set_title(&mut self, title: &str) {
        self.0.borrow_mut().title = title.to_owned();
    }

    fn set_description(&mut self, description: &str) {
        self.0.borrow_mut().description = description.to_owned();
    }

    fn set_demo_link(&mut self, href: Option<&str>) {
        self.0.borrow_mut().demo = href.map(str::to_owned);
    }

    fn set_code_link(&mut self, href: Option<&str>) {
        self.0.borrow_mut().code = href.map(str::to_owned);
    }

    fn show(&mut self) {
        self.0.borrow_mut().shown += 1;
    }
}

// =============================================================
// Contact form
// =============================================================

#[derive(Default)]
pub struct FormView {
    pub draft: ContactDraft,
    pub status: String,
    pub live_link: String,
    pub toasts: usize,
    pub navigations: Vec<String>,
}

#[derive(Clone, Default)]
pub struct FakeForm(pub Rc<RefCell<FormView>>);

impl FakeForm {
    pub fn fill(&self, name: &str, email: &str, message: &str) {
        let mut view = self.0.borrow_mut();
        view.draft.name = name.to_owned();
        view.draft.email = email.to_owned();
        view.draft.message = message.to_owned();
    }

    pub fn set_honeypot(&self, value: &str) {
        self.0.borrow_mut().draft.honeypot = value.to_owned();
    }

    pub fn status(&self) -> String {
        self.0.borrow().status.clone()
    }

    pub fn live_link(&self) -> String {
        self.0.borrow().live_link.clone()
    }

    pub fn draft(&self) -> ContactDraft {
        self.0.borrow().draft.clone()
    }
}

impl ContactSurface for FakeForm {
    fn read_draft(&self) -> ContactDraft {
        self.draft()
    }

    fn set_status(&mut self, message: &str) {
        self.0.borrow_mut().status = message.to_owned();
    }

    fn set_live_link(&mut self, href: &str) {
        self.0.borrow_mut().live_link = href.to_owned();
    }

    fn show_toast(&mut self) {
        self.0.borrow_mut().toasts += 1;
    }

    fn navigate(&mut self, href: &str) {
        self.0.borrow_mut().navigations.push(href.to_owned());
    }

    fn clear_fields(&mut self) {
        self.0.borrow_mut().draft = ContactDraft::default();
    }
}

// =============================================================
// Text
// =============================================================

#[derive(Clone, Default)]
pub struct FakeSlot(pub Rc<RefCell<String>>);

impl TextSlot for FakeSlot {
    fn set_text(&mut self, text: &str) {
        *self.0.borrow_mut() = text.to_owned();
    }
}
