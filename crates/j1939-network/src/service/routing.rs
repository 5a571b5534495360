//! Claim/request handling and event routing.

use tracing::{debug, trace};

use crate::domain::{
    Address, AddressClaim, AddressRequest, DropReason, Name, NewController, ProcessOutcome,
    Routing,
};
use crate::ports::{AddressClaimer, FrameProcessor, InboundFrame};

use super::manager::NetworkManager;
use super::stats::Counters;

impl NetworkManager {
    /// Process one inbound frame.
    ///
    /// - Address claim: the claim is recorded in the table, a new controller
    ///   is announced to the observer, and an [`AddressClaim`] is routed.
    /// - Request: an [`AddressRequest`] is routed.
    /// - Anything else is ignored.
    ///
    /// Events go to the controller holding the frame's destination address,
    /// or to every managed controller when the destination is not unicast.
    pub fn process<F: InboundFrame + ?Sized>(&self, frame: &F) -> ProcessOutcome {
        if frame.is_claim() {
            let Some(name) = frame.claimed_name() else {
                Counters::bump(&self.counters.malformed);
                debug!(
                    "[network] claim from {} without a name",
                    frame.source_address()
                );
                return ProcessOutcome::Malformed;
            };
            Counters::bump(&self.counters.claims);
            return ProcessOutcome::Claim(self.on_claim(
                name,
                frame.pdu_specific(),
                frame.source_address(),
            ));
        }

        if frame.is_request() {
            Counters::bump(&self.counters.requests);
            return ProcessOutcome::Request(self.on_request(frame.pdu_specific()));
        }

        Counters::bump(&self.counters.ignored);
        ProcessOutcome::Ignored
    }

    fn on_claim(&self, name: Name, target: Address, source: Address) -> Routing {
        trace!("[network] claim {} at {} -> {}", name, source, target);

        let registration = self.table.register(name, source);
        if registration.is_new() {
            Counters::bump(&self.counters.new_controllers);
            debug!("[network] new controller {} at {}", name, source);
            if let Some(observer) = &self.observer {
                observer.on_new_controller(&NewController {
                    name,
                    address: source,
                });
            }
        }

        let claim = AddressClaim::new(name, source);
        self.route(target, |controller| controller.address_claim(&claim))
    }

    fn on_request(&self, target: Address) -> Routing {
        trace!("[network] request -> {}", target);

        let request = AddressRequest;
        self.route(target, |controller| controller.address_request(&request))
    }

    /// Deliver to the holder of a unicast `target`, or to everyone otherwise.
    fn route<D>(&self, target: Address, deliver: D) -> Routing
    where
        D: Fn(&dyn AddressClaimer),
    {
        if !target.is_unicast() {
            let mut delivered = 0;
            for (name, handle) in &self.controllers {
                match handle.upgrade() {
                    Some(controller) => {
                        deliver(controller.as_ref());
                        delivered += 1;
                    }
                    None => trace!("[network] skipping dropped controller {}", name),
                }
            }
            Counters::add(&self.counters.deliveries, delivered);
            return Routing::Broadcast(delivered);
        }

        let Some(name) = self.table.get_name(target) else {
            return self.dropped(DropReason::UnclaimedAddress(target));
        };
        let Some(handle) = self.controllers.get(&name) else {
            return self.dropped(DropReason::UnmanagedController(name));
        };
        let Some(controller) = handle.upgrade() else {
            return self.dropped(DropReason::ControllerGone(name));
        };

        deliver(controller.as_ref());
        Counters::bump(&self.counters.deliveries);
        Routing::Unicast(name)
    }

    fn dropped(&self, reason: DropReason) -> Routing {
        Counters::bump(&self.counters.dropped);
        trace!("[network] dropped event: {}", reason);
        Routing::Dropped(reason)
    }
}

impl FrameProcessor for NetworkManager {
    fn process<F: InboundFrame + ?Sized>(&self, frame: &F) -> ProcessOutcome {
        NetworkManager::process(self, frame)
    }
}
