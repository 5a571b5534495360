//! Address table result and statistics types.

/// Outcome of [`AddressTable::register`](super::AddressTable::register).
///
/// Both fields are decided under the same write lock, so `was_known == false`
/// is reported to exactly one caller per name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// The table changed (new name, new address, or arbitration recorded)
    pub changed: bool,
    /// The name was registered before this call
    pub was_known: bool,
}

impl Registration {
    /// True if this call registered the name for the first time.
    pub fn is_new(&self) -> bool {
        !self.was_known
    }
}

/// Point-in-time statistics of an address table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressTableStats {
    /// Registered names, idle ones included
    pub name_count: usize,
    /// Claimed unicast addresses
    pub address_count: usize,
    /// Registered names without an address
    pub idle_count: usize,
    /// Every unicast address is claimed
    pub full: bool,
}
