use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket handed out when a load starts. Later loads get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Orders concurrent loads of shared data.
///
/// A load takes a ticket before it starts fetching. Writers call
/// [`LoadGeneration::invalidate`] after changing the underlying data, which
/// marks every ticket issued so far as stale. A result may only replace a
/// cached one when its ticket is newer than the cached ticket and is not
/// stale, so a slow load can never overwrite a newer result.
#[derive(Debug, Default)]
pub struct LoadGeneration {
    issued: AtomicU64,
    stale_up_to: AtomicU64,
}

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn invalidate(&self) {
        let current = self.issued.load(Ordering::SeqCst);
        self.stale_up_to.fetch_max(current, Ordering::SeqCst);
    }

    pub fn is_stale(&self, ticket: LoadTicket) -> bool {
        ticket.0 <= self.stale_up_to.load(Ordering::SeqCst)
    }

    /// Whether a finished load may replace the result committed under `committed`
    pub fn may_commit(&self, ticket: LoadTicket, committed: Option<LoadTicket>) -> bool {
        !self.is_stale(ticket) && committed.is_none_or(|c| ticket > c)
    }
}
