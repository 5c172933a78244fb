//! Footer copyright year.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use crate::host::TextSlot;

/// Write `year` into the footer's year region.
pub fn render_year<S: TextSlot>(slot: &mut S, year: u32) {
    slot.set_text(&year.to_string());
}
