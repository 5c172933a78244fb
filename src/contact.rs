//! Contact form: validation, live mailto preview, and the submit flow.
//!
//! Nothing is delivered from here. A submission succeeds once a well-formed
//! `mailto:` link has been handed to the browser; the form is cleared after a
//! short delay so the navigation is issued before the fields empty.
//!
//! STATE MACHINE
//! =============
//! `Editing` → `submit()` → `Submitted` → `complete_reset()` → `Editing`
//! `Editing` → `submit()` → `Rejected` → next input → `Editing`
//!
//! There is no submission lock. A second accepted submission during the reset
//! delay issues a new ticket and the earlier one becomes stale, so at most one
//! reset runs per burst of submissions.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SiteConfig;
use crate::consts::{MIN_MESSAGE_CHARS, MIN_NAME_CHARS, SUBMITTED_STATUS};
use crate::host::ContactSurface;
use crate::mailto::{Inquiry, MailtoLink};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden field; only bots fill it in.
    pub honeypot: String,
}

impl ContactDraft {
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            message: self.message.trim().to_owned(),
            honeypot: self.honeypot.trim().to_owned(),
        }
    }
}

/// Why a submission was refused. `Display` is the status message shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// Deliberately generic so the detection mechanism is not revealed.
    #[error("Spam detected.")]
    Spam,
    #[error("Please enter your full name.")]
    NameTooShort,
    #[error("Please enter a valid email.")]
    InvalidEmail,
    #[error("Message is too short.")]
    MessageTooShort,
}

/// Trimmed fields that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ValidContact {
    #[must_use]
    pub fn inquiry(&self) -> Inquiry<'_> {
        Inquiry { name: &self.name, email: &self.email, message: &self.message }
    }
}

/// Basic `local@domain.tld` shape check.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(value))
}

/// Validate a draft, stopping at the first failure.
///
/// Order: honeypot, name, email, message. Lengths count characters after
/// trimming.
///
/// # Errors
///
/// Returns the first [`ContactError`] that applies.
pub fn validate(draft: &ContactDraft) -> Result<ValidContact, ContactError> {
    let ContactDraft { name, email, message, honeypot } = draft.trimmed();

    if !honeypot.is_empty() {
        return Err(ContactError::Spam);
    }
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(ContactError::NameTooShort);
    }
    if !is_valid_email(&email) {
        return Err(ContactError::InvalidEmail);
    }
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ContactError::MessageTooShort);
    }
    Ok(ValidContact { name, email, message })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editing,
    Rejected(ContactError),
    Submitted,
}

/// A scheduled form reset. Only the most recently issued ticket is honored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket {
    pub id: u64,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ContactError),
    /// The host must run [`ContactController::complete_reset`] with `reset`
    /// after `reset.delay_ms`.
    Accepted { href: String, reset: ResetTicket },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSettings {
    pub address: String,
    pub fallback_name: String,
    pub reset_delay_ms: u32,
}

impl From<&SiteConfig> for ContactSettings {
    fn from(config: &SiteConfig) -> Self {
        Self {
            address: config.contact_email.clone(),
            fallback_name: config.fallback_name.clone(),
            reset_delay_ms: config.reset_delay_ms,
        }
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self::from(&SiteConfig::default())
    }
}

/// Live preview link for a draft. Empty name falls back to the visitor placeholder.
#[must_use]
pub fn live_link(settings: &ContactSettings, draft: &ContactDraft) -> MailtoLink {
    let draft = draft.trimmed();
    let name = if draft.name.is_empty() { settings.fallback_name.as_str() } else { draft.name.as_str() };
    MailtoLink::for_inquiry(&settings.address, Inquiry { name, email: &draft.email, message: &draft.message })
}

pub struct ContactController<F> {
    surface: F,
    settings: ContactSettings,
    state: FormState,
    pending_reset: Option<ResetTicket>,
    next_ticket: u64,
}

impl<F: ContactSurface> ContactController<F> {
    /// Bind the form and render the initial live link.
    pub fn new(surface: F, settings: ContactSettings) -> Self {
        let mut controller = Self { surface, settings, state: FormState::Editing, pending_reset: None, next_ticket: 0 };
        controller.refresh_live_link();
        controller
    }

    /// Recompute the live mailto link from the current fields.
    ///
    /// Bound to `input`, `change`, and `keyup` on the visible fields.
    pub fn refresh_live_link(&mut self) -> String {
        if matches!(self.state, FormState::Rejected(_)) {
            self.state = FormState::Editing;
        }
        let href = live_link(&self.settings, &self.surface.read_draft()).href();
        self.surface.set_live_link(&href);
        href
    }

    /// Validate and, on success, hand the mailto link to the browser.
    pub fn submit(&mut self) -> SubmitOutcome {
        let valid = match validate(&self.surface.read_draft()) {
            Ok(valid) => valid,
            Err(e) => {
                log::debug!("contact submission rejected: {e:?}");
                self.surface.set_status(&e.to_string());
                self.state = FormState::Rejected(e);
                return SubmitOutcome::Rejected(e);
            }
        };

        let href = MailtoLink::for_inquiry(&self.settings.address, valid.inquiry()).href();
        self.surface.show_toast();
        self.surface.navigate(&href);
        self.surface.set_status(SUBMITTED_STATUS);
        self.state = FormState::Submitted;

        if let Some(stale) = self.pending_reset {
            log::debug!("contact reset {} superseded by resubmission", stale.id);
        }
        self.next_ticket += 1;
        let reset = ResetTicket { id: self.next_ticket, delay_ms: self.settings.reset_delay_ms };
        self.pending_reset = Some(reset);

        SubmitOutcome::Accepted { href, reset }
    }

    /// Clear the form if `ticket` is still the pending reset.
    ///
    /// Returns `false` for stale or cancelled tickets.
    pub fn complete_reset(&mut self, ticket: ResetTicket) -> bool {
        if self.pending_reset != Some(ticket) {
            return false;
        }
        self.pending_reset = None;
        self.surface.clear_fields();
        self.state = FormState::Editing;
        self.refresh_live_link();
        true
    }

    pub fn cancel_pending_reset(&mut self) -> Option<ResetTicket> {
        self.pending_reset.take()
    }

    #[must_use]
    pub fn pending_reset(&self) -> Option<ResetTicket> {
        self.pending_reset
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }
}
