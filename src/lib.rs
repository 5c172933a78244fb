//! # portfolio-site
//!
//! Client-side behavior for a single static portfolio page, compiled to
//! WebAssembly. The page markup is rendered ahead of time; this crate attaches
//! a handful of independent controllers to it and drives them from DOM events.
//!
//! Each controller is a plain state machine constructed with the document
//! capabilities it needs (see [`host`]), so all behavior is testable natively.
//! The browser bindings in `dom` are compiled only with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference, persisted in `localStorage` |
//! | [`scroll_spy`] | Highlights the nav link of the section in view |
//! | [`reveal`] | One-shot reveal-on-scroll flag per marked element |
//! | [`filter`] | Category chips that hide non-matching project cards |
//! | [`preview`] | Fills and opens the shared project preview dialog |
//! | [`contact`] | Contact form validation, live mailto link, submit flow |
//! | [`mailto`] | `mailto:` URI construction and component encoding |
//! | [`footer`] | Current year in the footer |
//! | [`host`] | Capability traits the document must provide |
//! | [`config`] | Tunables with defaults, optionally overridden by the page |
//! | [`consts`] | Fixed strings and defaults |
//! | [`error`] | Mount and configuration errors |

pub mod config;
pub mod consts;
pub mod contact;
pub mod error;
pub mod filter;
pub mod footer;
pub mod host;
pub mod mailto;
pub mod preview;
pub mod reveal;
pub mod scroll_spy;
pub mod theme;

#[cfg(test)]
mod test_support;

#[cfg(feature = "hydrate")]
pub mod dom;

/// WASM entry point: install panic/console hooks and mount every controller.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {e}");
    }

    match dom::mount() {
        Ok(site) => {
            log::info!(
                "portfolio site mounted: {} ({} observers)",
                site.mounted().join(", "),
                site.observer_count()
            );
            dom::retain(site);
        }
        Err(e) => log::error!("portfolio site mount failed: {e}"),
    }
}
