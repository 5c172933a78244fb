//! Fixed strings and defaults shared across controllers.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Document-level attribute Bootstrap 5.3 reads the color mode from.
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";

pub const LIGHT_GLYPH: &str = "☀️";
pub const DARK_GLYPH: &str = "🌙";

// ── Scroll-spy ──────────────────────────────────────────────────

/// Page sections tracked by the scroll-spy, in document order.
pub const SECTION_IDS: [&str; 4] = ["home", "about", "projects", "contact"];

/// Activation band: only the middle strip of the viewport counts.
pub const SCROLL_SPY_ROOT_MARGIN: &str = "-35% 0px -55% 0px";
pub const SCROLL_SPY_THRESHOLD: f64 = 0.1;

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.1;

// ── Class names ─────────────────────────────────────────────────

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const REVEALED_CLASS: &str = "on";

// ── Filter ──────────────────────────────────────────────────────

/// Chip filter value that matches every card.
pub const FILTER_ALL: &str = "all";

// ── Preview dialog ──────────────────────────────────────────────

pub const DEFAULT_PREVIEW_TITLE: &str = "Project";

// ── Contact form ────────────────────────────────────────────────

pub const CONTACT_EMAIL: &str = "muazmuhammad21@gmail.com";

/// Name used in the live mailto link while the name field is empty.
pub const FALLBACK_VISITOR_NAME: &str = "Friend";

pub const SUBJECT_PREFIX: &str = "Portfolio Inquiry from ";

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Delay between handing off the mailto link and clearing the form.
pub const RESET_DELAY_MS: u32 = 400;

pub const SUBMITTED_STATUS: &str = "Your email app should open now. If not, email me directly.";
