//! `mailto:` link construction.
//!
//! Subject and body are percent-encoded with the same unreserved set as
//! JavaScript's `encodeURIComponent`, so mail clients decode them the way the
//! page's readers expect (spaces as `%20`, newlines as `%0A`).

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::consts::SUBJECT_PREFIX;

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// The inquiry fields embedded in the message.
#[derive(Clone, Copy, Debug)]
pub struct Inquiry<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    #[must_use]
    pub fn for_inquiry(to: &str, inquiry: Inquiry<'_>) -> Self {
        let Inquiry { name, email, message } = inquiry;
        Self {
            to: to.to_owned(),
            subject: format!("{SUBJECT_PREFIX}{name}"),
            body: format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}"),
        }
    }

    #[must_use]
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mailto:{}?subject={}&body={}",
            self.to,
            encode_component(&self.subject),
            encode_component(&self.body),
        )
    }
}
