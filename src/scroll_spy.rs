//! Highlights the navigation link of whichever section sits in the
//! activation band of the viewport.
//!
//! The observer's root margin shrinks the viewport to a narrow middle strip,
//! so normally only one section intersects at a time. When a batch reports
//! several, the last intersecting entry wins.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use crate::host::{NavLink, VisibilityChange};

pub struct ScrollSpy<L> {
    sections: Vec<String>,
    links: Vec<L>,
    active_section: Option<String>,
}

impl<L: NavLink> ScrollSpy<L> {
    #[must_use]
    pub fn new(sections: Vec<String>, links: Vec<L>) -> Self {
        Self { sections, links, active_section: None }
    }

    /// Section ids to register with the observer, in document order.
    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Process one observer callback batch.
    pub fn on_intersections(&mut self, changes: &[VisibilityChange<String>]) {
        for change in changes.iter().filter(|c| c.is_intersecting) {
            if !self.sections.contains(&change.target) {
                log::warn!("scroll-spy ignoring untracked section {:?}", change.target);
                continue;
            }
            self.activate(&change.target);
        }
    }

    /// Mark the link targeting `#section_id` active and every other link inactive.
    pub fn activate(&mut self, section_id: &str) {
        let fragment = format!("#{section_id}");
        for link in &mut self.links {
            let matches = link.href().is_some_and(|href| href == fragment);
            link.set_active(matches);
        }
        if self.active_section.as_deref() != Some(section_id) {
            log::debug!("scroll-spy active section: {section_id}");
        }
        self.active_section = Some(section_id.to_owned());
    }

    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }
}
