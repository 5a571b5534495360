//! Value Objects for the Address Network
//!
//! `Name` is the 64-bit controller identity, `Address` the 8-bit bus address.

use std::fmt;

/// Highest address a controller can claim.
pub const MAX_UNICAST_ADDRESS: u8 = 253;

/// Sentinel for a registered controller that currently holds no address.
pub const IDLE_ADDRESS: u8 = 254;

/// Sentinel for "no controller". Doubles as the global (broadcast) destination.
pub const NO_ADDRESS: u8 = 255;

/// Alias of [`NO_ADDRESS`] used when the value is a destination.
pub const GLOBAL_ADDRESS: u8 = NO_ADDRESS;

/// 64-bit controller name.
///
/// Names are totally ordered by their unsigned value and the order doubles as
/// arbitration priority: the numerically smaller name wins an address.
/// The bit fields inside the name (identity number, function, industry group,
/// ...) are not interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Name(pub u64);

impl Name {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw 64-bit value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Decode a name from an address claim payload (little-endian on the wire).
    pub fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }

    /// Encode the name the way it is transmitted in an address claim.
    pub fn to_le_bytes(&self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// True if `self` wins arbitration against `other`.
    pub fn has_priority_over(&self, other: &Name) -> bool {
        self < other
    }
}

impl From<u64> for Name {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Name> for u64 {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// 8-bit J1939 bus address.
///
/// - `0..=253`: unicast, assignable to a controller
/// - `254`: idle, registered controller without an address
/// - `255`: no address / global destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub u8);

impl Address {
    /// Highest claimable address
    pub const MAX_UNICAST: Address = Address(MAX_UNICAST_ADDRESS);
    /// Registered but unaddressed
    pub const IDLE: Address = Address(IDLE_ADDRESS);
    /// No controller
    pub const NO_ADDRESS: Address = Address(NO_ADDRESS);
    /// Broadcast destination (same value as `NO_ADDRESS`)
    pub const GLOBAL: Address = Address(GLOBAL_ADDRESS);

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// True for addresses a controller can hold (`0..=253`).
    pub fn is_unicast(&self) -> bool {
        self.0 <= MAX_UNICAST_ADDRESS
    }

    pub fn is_idle(&self) -> bool {
        self.0 == IDLE_ADDRESS
    }

    pub fn is_global(&self) -> bool {
        self.0 == GLOBAL_ADDRESS
    }

    /// Clamp into the unicast range.
    pub fn clamp_unicast(self) -> Self {
        Self(self.0.min(MAX_UNICAST_ADDRESS))
    }
}

impl Default for Address {
    fn default() -> Self {
        Self::NO_ADDRESS
    }
}

impl From<u8> for Address {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Address> for u8 {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            IDLE_ADDRESS => write!(f, "idle"),
            GLOBAL_ADDRESS => write!(f, "global"),
            value => write!(f, "{:#04x}", value),
        }
    }
}
