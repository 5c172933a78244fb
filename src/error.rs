//! Errors raised while reading configuration or binding to the document.
//!
//! Contact form validation failures are user-facing and live next to the
//! validator in [`crate::contact::ContactError`].

/// A required part of the host document is missing or malformed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HostError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("required element `{0}` not found")]
    MissingElement(String),
    #[error("element `{selector}` is not a {expected}")]
    WrongElementType { selector: String, expected: &'static str },
    #[error("failed to create {0}")]
    Js(&'static str),
}

/// The page-supplied configuration block could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("observer threshold {0} is outside 0..=1")]
    Threshold(f64),
    #[error("scroll-spy section list is empty")]
    NoSections,
    #[error("contact address `{0}` is not an email address")]
    ContactAddress(String),
}
