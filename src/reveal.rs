//! One-shot reveal-on-scroll.
//!
//! Every marked element is observed once. The first intersection sets its
//! revealed flag and unobserves it; the flag never clears.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::host::{RevealTarget, VisibilityChange, VisibilityObserver};

/// Index of a marked element in document order.
pub type RevealId = usize;

struct Revealable<T> {
    target: T,
    revealed: bool,
}

pub struct RevealController<T> {
    items: Vec<Revealable<T>>,
    attached: bool,
}

impl<T: RevealTarget> RevealController<T> {
    #[must_use]
    pub fn new(targets: Vec<T>) -> Self {
        let items = targets.into_iter().map(|target| Revealable { target, revealed: false }).collect();
        Self { items, attached: false }
    }

    /// Register every marked element with `observer`. A second call is a no-op.
    pub fn attach<O: VisibilityObserver<RevealId>>(&mut self, observer: &mut O) {
        if self.attached {
            return;
        }
        self.attached = true;
        for (id, item) in self.items.iter().enumerate() {
            if !item.revealed {
                observer.observe(&id);
            }
        }
    }

    /// Process one observer callback batch.
    pub fn on_intersections<O: VisibilityObserver<RevealId>>(
        &mut self,
        changes: &[VisibilityChange<RevealId>],
        observer: &mut O,
    ) {
        for change in changes.iter().filter(|c| c.is_intersecting) {
            let Some(item) = self.items.get_mut(change.target) else {
                log::warn!("reveal notification for unknown element {}", change.target);
                continue;
            };
            if item.revealed {
                continue;
            }
            item.revealed = true;
            item.target.mark_revealed();
            observer.unobserve(&change.target);
        }
    }

    #[must_use]
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.items.get(id).is_some_and(|item| item.revealed)
    }
}
