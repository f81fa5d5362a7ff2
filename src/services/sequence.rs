use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Orders writes to the status element by request start.
///
/// A ticket is issued before a request goes out. Its write is applied only if
/// no later-issued ticket has written yet, so a slow response that finishes
/// after a newer one is dropped.
#[derive(Debug, Default)]
pub struct StatusSequencer {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl StatusSequencer {
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn try_apply(&self, ticket: Ticket) -> bool {
        self.applied
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                (ticket.0 > current).then_some(ticket.0)
            })
            .is_ok()
    }

    #[cfg(test)]
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}
