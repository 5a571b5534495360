//! Frame processing counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of what the manager has done with inbound traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManagerStats {
    /// Address claim frames processed
    pub claims: u64,
    /// Request frames processed
    pub requests: u64,
    /// Frames that were neither claims nor requests
    pub ignored: u64,
    /// Claim frames without a decodable name
    pub malformed: u64,
    /// Unicast events with no controller to deliver to
    pub dropped: u64,
    /// Individual event deliveries to controllers
    pub deliveries: u64,
    /// Controller names observed for the first time
    pub new_controllers: u64,
    /// Currently managed controllers
    pub controllers: usize,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub(crate) claims: AtomicU64,
    pub(crate) requests: AtomicU64,
    pub(crate) ignored: AtomicU64,
    pub(crate) malformed: AtomicU64,
    pub(crate) dropped: AtomicU64,
    pub(crate) deliveries: AtomicU64,
    pub(crate) new_controllers: AtomicU64,
}

impl Counters {
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add(counter: &AtomicU64, amount: usize) {
        counter.fetch_add(amount as u64, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, controllers: usize) -> ManagerStats {
        ManagerStats {
            claims: self.claims.load(Ordering::Relaxed),
            requests: self.requests.load(Ordering::Relaxed),
            ignored: self.ignored.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            deliveries: self.deliveries.load(Ordering::Relaxed),
            new_controllers: self.new_controllers.load(Ordering::Relaxed),
            controllers,
        }
    }
}
