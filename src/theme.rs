//! Light/dark theme with persistence.
//!
//! The effective theme is resolved once at load with the precedence
//! persisted value, then system dark-mode preference, then light. Every apply
//! writes the document attribute, the store key, and the toggle glyph.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_GLYPH, LIGHT_GLYPH};
use crate::host::{KeyValueStore, ThemeSurface};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Anything but `"light"`/`"dark"` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => LIGHT_GLYPH,
            Self::Dark => DARK_GLYPH,
        }
    }

    /// Resolve the load-time theme from the stored value and system preference.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Self::parse) {
            Some(theme) => theme,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    storage_key: String,
    current: Theme,
}

impl<S: KeyValueStore, D: ThemeSurface> ThemeController<S, D> {
    /// Resolve the initial theme and apply it.
    pub fn initialize(store: S, surface: D, storage_key: impl Into<String>, prefers_dark: bool) -> Self {
        let storage_key = storage_key.into();
        let stored = store.get(&storage_key);
        if let Some(raw) = stored.as_deref()
            && Theme::parse(raw).is_none()
        {
            log::warn!("ignoring unrecognized stored theme {raw:?}");
        }
        let current = Theme::resolve(stored.as_deref(), prefers_dark);

        let mut controller = Self { store, surface, storage_key, current };
        controller.apply(current);
        controller
    }

    /// Apply `theme` to the document, the store, and the toggle glyph.
    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.surface.set_theme_attribute(theme.as_str());
        self.store.set(&self.storage_key, theme.as_str());
        self.surface.set_toggle_glyph(theme.glyph());
        log::debug!("theme applied: {}", theme.as_str());
    }

    /// Flip the applied theme. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        next
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }
}
