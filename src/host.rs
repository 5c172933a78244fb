//! Capabilities the host document provides to the controllers.
//!
//! DESIGN
//! ======
//! Controllers never query the document themselves. Each one is constructed
//! with the elements it drives, expressed as the small traits below. The
//! `hydrate` build implements them over `web_sys` elements; tests implement
//! them with in-memory fakes.

use crate::contact::ContactDraft;

/// Durable string key-value store (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Write failures are not reported.
    fn set(&mut self, key: &str, value: &str);
}

/// Document root plus the theme toggle control.
pub trait ThemeSurface {
    fn set_theme_attribute(&mut self, value: &str);
    fn set_toggle_glyph(&mut self, glyph: &str);
}

/// One entry in the navigation list.
pub trait NavLink {
    fn href(&self) -> Option<String>;
    fn set_active(&mut self, active: bool);
}

/// An element flagged for reveal-on-scroll.
pub trait RevealTarget {
    fn mark_revealed(&mut self);
}

/// A viewport intersection observer keyed by `K`.
pub trait VisibilityObserver<K> {
    fn observe(&mut self, target: &K);
    fn unobserve(&mut self, target: &K);
}

/// A single intersection notification delivered in a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityChange<K> {
    pub target: K,
    pub is_intersecting: bool,
}

impl<K> VisibilityChange<K> {
    #[must_use]
    pub fn entered(target: K) -> Self {
        Self { target, is_intersecting: true }
    }

    #[must_use]
    pub fn left(target: K) -> Self {
        Self { target, is_intersecting: false }
    }
}

/// A category chip in the project filter bar.
pub trait FilterChip {
    /// Raw `data-filter` value.
    fn filter(&self) -> String;
    /// Whether the markup rendered this chip as the active one.
    fn is_marked_active(&self) -> bool;
    /// Toggle the `active` class and `aria-selected` together.
    fn set_selected(&mut self, selected: bool);
}

/// A project card subject to filtering.
pub trait FilterCard {
    /// Raw `data-category` value.
    fn category(&self) -> Option<String>;
    fn set_hidden(&mut self, hidden: bool);
}

/// The shared project preview dialog.
pub trait PreviewDialog {
    fn set_title(&mut self, title: &str);
    fn set_description(&mut self, description: &str);
    /// `None` hides the demo button.
    fn set_demo_link(&mut self, href: Option<&str>);
    /// `None` hides the source-code button.
    fn set_code_link(&mut self, href: Option<&str>);
    fn show(&mut self);
}

/// The contact form and the regions around it.
pub trait ContactSurface {
    /// Current raw field values, untrimmed.
    fn read_draft(&self) -> ContactDraft;
    fn set_status(&mut self, message: &str);
    fn set_live_link(&mut self, href: &str);
    fn show_toast(&mut self);
    /// Hand `href` to the browser's navigation.
    fn navigate(&mut self, href: &str);
    /// Reset every field, honeypot included.
    fn clear_fields(&mut self);
}

/// A region whose text content is replaced wholesale.
pub trait TextSlot {
    fn set_text(&mut self, text: &str);
}
