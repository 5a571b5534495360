//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this subsystem **requires** the host application to implement.

use crate::domain::{Address, AddressClaim, AddressRequest, Name, NetworkConfig, NewController};

/// Handle of one managed controller's address-claim state machine.
///
/// The state machine decides what to do with each event (send a counter
/// claim, give up its address, re-announce). Delivery is a direct call from
/// the frame processing thread, so implementations must not block.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; events arrive through `&self`.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct Claimer {
///     name: Name,
///     events: parking_lot::Mutex<VecDeque<Event>>,
/// }
///
/// impl AddressClaimer for Claimer {
///     fn name(&self) -> Name {
///         self.name
///     }
///     fn address_claim(&self, claim: &AddressClaim) {
///         self.events.lock().push_back(Event::Claim(*claim));
///     }
///     fn address_request(&self, _request: &AddressRequest) {
///         self.events.lock().push_back(Event::Request);
///     }
/// }
/// ```
pub trait AddressClaimer: Send + Sync {
    /// Name this controller claims addresses for.
    fn name(&self) -> Name;

    /// Another (or this) controller claimed an address.
    fn address_claim(&self, claim: &AddressClaim);

    /// This controller is asked to announce its claim.
    fn address_request(&self, request: &AddressRequest);
}

/// Notified once for every controller name seen on the bus for the first time.
///
/// Any `Fn(Name, Address) + Send + Sync` closure is an observer.
pub trait NewControllerObserver: Send + Sync {
    fn on_new_controller(&self, controller: &NewController);
}

impl<F> NewControllerObserver for F
where
    F: Fn(Name, Address) + Send + Sync,
{
    fn on_new_controller(&self, controller: &NewController) {
        self(controller.name, controller.address)
    }
}

/// Abstract interface for configuration loading.
///
/// Allows different configuration sources (file, static, etc.)
pub trait ConfigProvider: Send + Sync {
    /// Get the network configuration.
    fn get_network_config(&self) -> NetworkConfig;
}
