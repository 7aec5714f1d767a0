//! Navigation tickets.
//!
//! Page renderers load data asynchronously. When the user navigates again
//! before a load finishes, the late response must not land on the new page.
//! Each navigation takes a [`NavTicket`] from the shared [`Navigator`]; only
//! the most recently issued ticket is current, and renderers check it before
//! committing anything they fetched.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Issues navigation tickets. Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    latest: Arc<AtomicU64>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a navigation, superseding every ticket issued before.
    pub fn begin(&self) -> NavTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        NavTicket {
            generation,
            latest: Arc::clone(&self.latest),
        }
    }
}

/// Proof of ownership over the content region for one navigation.
#[derive(Clone, Debug)]
pub struct NavTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl NavTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether no newer navigation has started.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        !self.is_current()
    }
}

impl PartialEq for NavTicket {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation && Arc::ptr_eq(&self.latest, &other.latest)
    }
}

impl Eq for NavTicket {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let navigator = Navigator::new();
        let first = navigator.begin();
        assert!(first.is_current());

        let second = navigator.begin();
        assert!(first.is_cancelled());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_clones_share_counter() {
        let navigator = Navigator::new();
        let ticket = navigator.begin();
        let copy = ticket.clone();
        assert_eq!(ticket, copy);

        navigator.clone().begin();
        assert!(copy.is_cancelled());
    }

    #[test]
    fn test_tickets_from_different_navigators_differ() {
        let a = Navigator::new().begin();
        let b = Navigator::new().begin();
        assert_eq!(a.generation(), b.generation());
        assert_ne!(a, b);
    }
}
