//! Project preview dialog.
//!
//! A single dialog instance is shared by every card. Each open overwrites all
//! four regions before showing it, so nothing carries over from the previous
//! card.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::consts::DEFAULT_PREVIEW_TITLE;
use crate::host::PreviewDialog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRequest {
    pub title: String,
    pub description: String,
    pub demo_url: Option<String>,
    pub code_url: Option<String>,
}

impl PreviewRequest {
    /// Build a request from a card's `data-*` lookup.
    ///
    /// Empty values count as absent.
    pub fn from_card_data<F>(data: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| data(key).filter(|v| !v.is_empty());
        Self {
            title: present("title").unwrap_or_else(|| DEFAULT_PREVIEW_TITLE.to_owned()),
            description: present("desc").unwrap_or_default(),
            demo_url: present("demo"),
            code_url: present("code"),
        }
    }
}

pub struct PreviewController<D> {
    dialog: D,
}

impl<D: PreviewDialog> PreviewController<D> {
    #[must_use]
    pub fn new(dialog: D) -> Self {
        Self { dialog }
    }

    pub fn open(&mut self, request: &PreviewRequest) {
        self.dialog.set_title(&request.title);
        self.dialog.set_description(&request.description);
        self.dialog.set_demo_link(request.demo_url.as_deref());
        self.dialog.set_code_link(request.code_url.as_deref());
        self.dialog.show();
        log::debug!("preview opened: {}", request.title);
    }
}
