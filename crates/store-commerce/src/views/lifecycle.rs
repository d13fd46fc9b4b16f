//! Mount state and fetch tickets for views.

use std::cell::Cell;
use std::rc::Rc;

/// Identifies one catalog read started by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Tracks whether a view is still mounted and which fetch is current.
///
/// A view hands out a ticket when it starts a read and checks it when the
/// result arrives. Results for an older ticket, or for a view that has been
/// torn down in the meantime, are dropped.
#[derive(Debug)]
pub struct ViewLifecycle {
    name: &'static str,
    mounted: Rc<Cell<bool>>,
    generation: u64,
}

impl ViewLifecycle {
    /// A mounted lifecycle for the named view.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            mounted: Rc::new(Cell::new(true)),
            generation: 0,
        }
    }

    /// Start a new read; any older ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Whether a result for `ticket` may be written into the view.
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        let accepted = self.mounted.get() && ticket.generation == self.generation;
        if !accepted {
            tracing::debug!(
                view = self.name,
                ticket = ticket.generation,
                current = self.generation,
                mounted = self.mounted.get(),
                "discarding stale fetch result"
            );
        }
        accepted
    }

    /// Unmount the view.
    pub fn teardown(&self) {
        self.mounted.set(false);
    }

    /// A handle that can unmount the view from elsewhere (e.g., navigation).
    pub fn teardown_handle(&self) -> TeardownHandle {
        TeardownHandle {
            mounted: Rc::clone(&self.mounted),
        }
    }
}

/// Unmounts a view when triggered.
#[derive(Debug, Clone)]
pub struct TeardownHandle {
    mounted: Rc<Cell<bool>>,
}

impl TeardownHandle {
    /// Unmount the view this handle belongs to.
    pub fn teardown(&self) {
        self.mounted.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut lifecycle = ViewLifecycle::new("test");
        let first = lifecycle.begin_fetch();
        let second = lifecycle.begin_fetch();

        assert!(!lifecycle.accepts(first));
        assert!(lifecycle.accepts(second));
    }

    #[test]
    fn test_teardown_rejects_pending_results() {
        let mut lifecycle = ViewLifecycle::new("test");
        let ticket = lifecycle.begin_fetch();
        let handle = lifecycle.teardown_handle();

        handle.teardown();

        assert!(!lifecycle.accepts(ticket));
        let after = lifecycle.begin_fetch();
        assert!(!lifecycle.accepts(after));
    }
}
