//! State machine events produced from claim and request frames.

use super::value_objects::{Address, Name};

/// A controller asserted ownership of `address`.
///
/// `address` is the sender's source address, which may be
/// [`Address::IDLE`] for a "cannot claim" announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressClaim {
    pub name: Name,
    pub address: Address,
}

impl AddressClaim {
    pub fn new(name: Name, address: Address) -> Self {
        Self { name, address }
    }
}

/// Someone asked the addressed controller(s) to announce their claim again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressRequest;

/// A controller name seen on the bus for the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewController {
    pub name: Name,
    pub address: Address,
}
