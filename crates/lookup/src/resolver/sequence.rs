//! Monotonic sequence counter guarding against stale responses.

use std::sync::atomic::{AtomicU64, Ordering};

/// Staleness guard for dispatched lookup queries.
///
/// Each dispatched query takes a ticket from [`issue`](Self::issue); a
/// response is allowed to mutate visible state only while its ticket is
/// still the current value, i.e. while no newer query has been dispatched.
/// An explicit counter is used rather than re-comparing query text, since
/// two distinct queries can normalize to the same string.
#[derive(Debug, Default)]
pub struct SequenceGuard {
    current: AtomicU64,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a query about to be dispatched.
    ///
    /// Tickets are strictly increasing; issuing a new one makes every
    /// earlier in-flight response stale.
    pub fn issue(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a response holding `seq` is still the freshest dispatch.
    pub fn is_current(&self, seq: u64) -> bool {
        self.current.load(Ordering::SeqCst) == seq
    }

    /// Bump the counter without a dispatch.
    ///
    /// Used on terminal actions (result pick, teardown) so that any
    /// in-flight response is discarded on arrival.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}
