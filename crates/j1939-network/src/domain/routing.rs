//! Outcomes of routing a claim or request frame.
//!
//! Unroutable and irrelevant traffic is normal on a live bus, so none of
//! these are errors. They exist so callers and tests can tell what happened.

use std::fmt;

use super::value_objects::{Address, Name};

/// What the network manager did with one inbound frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Address claim, routed as described
    Claim(Routing),
    /// Address request, routed as described
    Request(Routing),
    /// Neither a claim nor a request
    Ignored,
    /// Claim frame whose payload carries no name
    Malformed,
}

impl ProcessOutcome {
    /// Routing decision, if the frame was a claim or request.
    pub fn routing(&self) -> Option<Routing> {
        match self {
            Self::Claim(routing) | Self::Request(routing) => Some(*routing),
            Self::Ignored | Self::Malformed => None,
        }
    }

    /// Number of controllers that received an event.
    pub fn deliveries(&self) -> usize {
        self.routing().map_or(0, |routing| routing.deliveries())
    }
}

/// Where an event went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    /// Delivered to the single controller holding the target address
    Unicast(Name),
    /// Delivered to this many controllers
    Broadcast(usize),
    /// Not delivered
    Dropped(DropReason),
}

impl Routing {
    pub fn deliveries(&self) -> usize {
        match self {
            Self::Unicast(_) => 1,
            Self::Broadcast(count) => *count,
            Self::Dropped(_) => 0,
        }
    }
}

/// Why a unicast event was not delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Nobody holds the target address
    UnclaimedAddress(Address),
    /// The holder of the target address is not managed here
    UnmanagedController(Name),
    /// The managed controller has been dropped
    ControllerGone(Name),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclaimedAddress(address) => write!(f, "No controller at {}", address),
            Self::UnmanagedController(name) => write!(f, "Controller {} is not managed", name),
            Self::ControllerGone(name) => write!(f, "Controller {} was dropped", name),
        }
    }
}
