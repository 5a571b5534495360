//! Test utilities for the address network.
//!
//! Recording implementations of the outbound ports for deterministic tests.
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use j1939_network::test_utils::RecordingClaimer;
//!
//! let claimer = RecordingClaimer::new(Name::new(42));
//! manager.insert_controller(&claimer);
//! manager.process(&frame);
//! assert_eq!(claimer.claims().len(), 1);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{AddressClaim, AddressRequest, Name, NewController};
use crate::ports::{AddressClaimer, NewControllerObserver};

/// Event received by a [`RecordingClaimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimerEvent {
    Claim(AddressClaim),
    Request,
}

/// Controller handle that records every event it receives.
#[derive(Debug)]
pub struct RecordingClaimer {
    name: Name,
    events: Mutex<Vec<ClaimerEvent>>,
}

impl RecordingClaimer {
    pub fn new(name: Name) -> Arc<Self> {
        Arc::new(Self {
            name,
            events: Mutex::new(Vec::new()),
        })
    }

    /// All events in arrival order.
    pub fn events(&self) -> Vec<ClaimerEvent> {
        self.events.lock().clone()
    }

    pub fn claims(&self) -> Vec<AddressClaim> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ClaimerEvent::Claim(claim) => Some(*claim),
                ClaimerEvent::Request => None,
            })
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, ClaimerEvent::Request))
            .count()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().len()
    }
}

impl AddressClaimer for RecordingClaimer {
    fn name(&self) -> Name {
        self.name
    }

    fn address_claim(&self, claim: &AddressClaim) {
        self.events.lock().push(ClaimerEvent::Claim(*claim));
    }

    fn address_request(&self, _request: &AddressRequest) {
        self.events.lock().push(ClaimerEvent::Request);
    }
}

/// Observer that records every new-controller notification.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    seen: Mutex<Vec<NewController>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn seen(&self) -> Vec<NewController> {
        self.seen.lock().clone()
    }
}

impl NewControllerObserver for RecordingObserver {
    fn on_new_controller(&self, controller: &NewController) {
        self.seen.lock().push(*controller);
    }
}
