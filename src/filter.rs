//! Project category filter.
//!
//! Exactly one chip is selected at a time. Card visibility is recomputed from
//! scratch on every selection, so it depends only on the selected filter and
//! each card's category. Hidden cards stay in the document.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::consts::FILTER_ALL;
use crate::host::{FilterCard, FilterChip};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == FILTER_ALL { Self::All } else { Self::Category(raw.to_owned()) }
    }

    /// Whether a card with `category` is visible under this filter.
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

pub struct FilterController<C, K> {
    chips: Vec<C>,
    cards: Vec<K>,
    selected: Option<usize>,
}

impl<C: FilterChip, K: FilterCard> FilterController<C, K> {
    /// Bind chips and cards and apply the markup's initial selection.
    ///
    /// The initial chip is the one marked active in markup, else the `all`
    /// chip, else the first chip.
    #[must_use]
    pub fn new(chips: Vec<C>, cards: Vec<K>) -> Self {
        let initial = chips
            .iter()
            .position(FilterChip::is_marked_active)
            .or_else(|| chips.iter().position(|c| c.filter() == FILTER_ALL))
            .or((!chips.is_empty()).then_some(0));

        let mut controller = Self { chips, cards, selected: None };
        if let Some(index) = initial {
            controller.select(index);
        }
        controller
    }

    /// Select the chip at `index` and recompute card visibility.
    ///
    /// Returns `false` if `index` is out of range; the selection is unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(chip) = self.chips.get(index) else {
            log::warn!("filter chip {index} does not exist");
            return false;
        };
        let filter = Filter::parse(&chip.filter());

        for (i, chip) in self.chips.iter_mut().enumerate() {
            chip.set_selected(i == index);
        }
        for card in &mut self.cards {
            let visible = filter.matches(card.category().as_deref());
            card.set_hidden(!visible);
        }

        self.selected = Some(index);
        log::debug!("filter selected: {filter:?}");
        true
    }

    /// Select the first chip whose `data-filter` equals `raw`.
    pub fn select_filter(&mut self, raw: &str) -> bool {
        match self.chips.iter().position(|c| c.filter() == raw) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<Filter> {
        self.selected
            .and_then(|i| self.chips.get(i))
            .map(|chip| Filter::parse(&chip.filter()))
    }

    /// Indices of the cards visible under the current selection.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<usize> {
        let Some(filter) = self.selected() else {
            return (0..self.cards.len()).collect();
        };
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| filter.matches(card.category().as_deref()))
            .map(|(i, _)| i)
            .collect()
    }
}
