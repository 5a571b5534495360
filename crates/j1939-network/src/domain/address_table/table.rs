//! Main AddressTable implementation.

use std::collections::{BTreeSet, HashMap};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::domain::{Address, Name, NetworkConfig, MAX_UNICAST_ADDRESS};

use super::types::{AddressTableStats, Registration};

/// The two directions of the relation. Only ever touched under the table lock.
#[derive(Debug, Default)]
pub(super) struct Maps {
    /// Every registered name, mapped to a unicast address or IDLE
    pub(super) name_to_address: HashMap<Name, Address>,
    /// Every claimed unicast address, mapped to its holder
    pub(super) address_to_name: HashMap<Address, Name>,
}

impl Maps {
    fn register(&mut self, name: Name, address: Address) -> Registration {
        let current = self.name_to_address.get(&name).copied();
        let was_known = current.is_some();

        if !address.is_unicast() {
            // Re-registering a known name without an address never clears it
            if was_known {
                return Registration {
                    changed: false,
                    was_known,
                };
            }
            self.name_to_address.insert(name, Address::IDLE);
            trace!("[network] registered {} without address", name);
            return Registration {
                changed: true,
                was_known,
            };
        }

        if current == Some(address) {
            return Registration {
                changed: false,
                was_known,
            };
        }

        if let Some(&holder) = self.address_to_name.get(&address) {
            if holder.has_priority_over(&name) {
                self.set_idle(name);
                debug!(
                    "[network] {} lost {} to {}, now idle",
                    name, address, holder
                );
                return Registration {
                    changed: true,
                    was_known,
                };
            }

            self.name_to_address.insert(holder, Address::IDLE);
            debug!("[network] {} evicted {} from {}", name, holder, address);
        }

        if let Some(previous) = current {
            self.unlink(previous, name);
        }
        self.address_to_name.insert(address, name);
        self.name_to_address.insert(name, address);
        trace!("[network] {} now holds {}", name, address);

        Registration {
            changed: true,
            was_known,
        }
    }

    /// Point `name` at IDLE and free whatever address it held.
    fn set_idle(&mut self, name: Name) {
        if let Some(previous) = self.name_to_address.insert(name, Address::IDLE) {
            self.unlink(previous, name);
        }
    }

    /// Drop the reverse entry for `address` if `name` holds it.
    fn unlink(&mut self, address: Address, name: Name) {
        if self.address_to_name.get(&address) == Some(&name) {
            self.address_to_name.remove(&address);
        }
    }
}

/// Thread-safe registry of which controller name owns which bus address.
///
/// # Arbitration
///
/// When two names contend for the same address the numerically smaller name
/// wins. The loser stays registered with [`Address::IDLE`].
///
/// # Thread Safety
///
/// Both maps sit behind one `RwLock`. Queries take the shared lock,
/// mutations the exclusive lock, each for the whole call. The lock is never
/// held while calling back into caller code. Share the table via `Arc`.
///
/// # Example
///
/// ```rust
/// use j1939_network::{Address, AddressTable, Name};
///
/// let table = AddressTable::with_interface("vcan0");
/// let a = Name::new(0xa00c81045a20021b);
/// let b = Name::new(0xa00c810c5a20021b);
///
/// assert!(table.insert(a, Address::new(0x96)));
/// // b has the larger name and loses arbitration
/// assert!(table.insert(b, Address::new(0x96)));
/// assert_eq!(table.get_address(b), Address::IDLE);
/// assert_eq!(table.get_name(Address::new(0x96)), Some(a));
/// ```
#[derive(Debug)]
pub struct AddressTable {
    /// Bus interface this table describes
    interface_name: String,
    maps: RwLock<Maps>,
}

impl AddressTable {
    /// Create an empty table bound to the default interface.
    pub fn new() -> Self {
        Self::from_config(&NetworkConfig::default())
    }

    /// Create an empty table bound to `interface_name`.
    pub fn with_interface(interface_name: impl Into<String>) -> Self {
        Self {
            interface_name: interface_name.into(),
            maps: RwLock::new(Maps::default()),
        }
    }

    pub fn from_config(config: &NetworkConfig) -> Self {
        Self::with_interface(config.interface_name.clone())
    }

    /// Bus interface this table describes
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Add or update a name.
    ///
    /// - Non-unicast `address`: registers an unknown name as IDLE; a known
    ///   name is left untouched.
    /// - `name` already holds `address`: no-op.
    /// - `address` held by a higher priority name: `name` is registered IDLE.
    /// - `address` held by a lower priority name: the holder is evicted to
    ///   IDLE and `address` goes to `name`.
    /// - `address` free: assigned to `name`.
    ///
    /// # Returns
    ///
    /// `true` if the table changed, `false` for a no-op.
    pub fn insert(&self, name: Name, address: Address) -> bool {
        self.register(name, address).changed
    }

    /// Same as [`insert`](Self::insert), additionally reporting whether the
    /// name was known before the call. Both answers come from one write lock.
    pub fn register(&self, name: Name, address: Address) -> Registration {
        self.maps.write().register(name, address)
    }

    /// Free the address of `name`, keeping the name registered as IDLE.
    pub fn release(&self, name: Name) {
        let mut maps = self.maps.write();
        if maps.name_to_address.contains_key(&name) {
            maps.set_idle(name);
            trace!("[network] {} released its address", name);
        }
    }

    /// Forget `name` entirely, freeing its address.
    pub fn remove(&self, name: Name) {
        let mut maps = self.maps.write();
        if let Some(address) = maps.name_to_address.remove(&name) {
            maps.unlink(address, name);
            trace!("[network] {} removed", name);
        }
    }

    /// Remove every name and address.
    pub fn clear(&self) {
        let mut maps = self.maps.write();
        maps.name_to_address.clear();
        maps.address_to_name.clear();
    }

    /// True if `address` is unicast and nobody holds it.
    pub fn available(&self, address: Address) -> bool {
        if !address.is_unicast() {
            return false;
        }
        !self.maps.read().address_to_name.contains_key(&address)
    }

    /// True if `name` could take `address`: it is unicast and either free or
    /// held by a lower priority name.
    pub fn claimable(&self, address: Address, name: Name) -> bool {
        if !address.is_unicast() {
            return false;
        }
        match self.maps.read().address_to_name.get(&address) {
            Some(holder) => name.has_priority_over(holder),
            None => true,
        }
    }

    /// True if `name` is registered, with or without an address.
    pub fn in_network(&self, name: Name) -> bool {
        self.maps.read().name_to_address.contains_key(&name)
    }

    /// True if `name` currently maps to exactly `address`.
    pub fn matches(&self, name: Name, address: Address) -> bool {
        self.maps.read().name_to_address.get(&name) == Some(&address)
    }

    /// Number of claimed addresses
    pub fn address_count(&self) -> usize {
        self.maps.read().address_to_name.len()
    }

    /// Number of registered names, idle ones included
    pub fn name_count(&self) -> usize {
        self.maps.read().name_to_address.len()
    }

    /// Holder of `address`, if claimed.
    pub fn get_name(&self, address: Address) -> Option<Name> {
        self.maps.read().address_to_name.get(&address).copied()
    }

    /// Address of `name`.
    ///
    /// # Returns
    ///
    /// - the claimed address
    /// - [`Address::IDLE`] for a registered name without an address
    /// - [`Address::NO_ADDRESS`] for an unknown name
    pub fn get_address(&self, name: Name) -> Address {
        self.maps
            .read()
            .name_to_address
            .get(&name)
            .copied()
            .unwrap_or(Address::NO_ADDRESS)
    }

    /// True once all 254 unicast addresses are claimed.
    pub fn full(&self) -> bool {
        self.maps.read().address_to_name.len() > usize::from(MAX_UNICAST_ADDRESS)
    }

    /// Look for an address `name` could claim.
    ///
    /// Scans upward from `preferred` (clamped to the unicast range) and wraps
    /// around to the addresses below it. With `force`, addresses held by lower
    /// priority names also qualify; nothing is evicted until the caller
    /// actually inserts.
    ///
    /// # Returns
    ///
    /// The first qualifying address, or [`Address::NO_ADDRESS`].
    pub fn find_address(&self, name: Name, preferred: Address, force: bool) -> Address {
        self.maps.read().find_address(name, preferred, force)
    }

    /// [`find_address`](Self::find_address) with the search defaults of `config`.
    pub fn search(&self, name: Name, config: &NetworkConfig) -> Address {
        self.find_address(name, config.preferred_address, config.force_search)
    }

    /// Sorted set of every registered name.
    pub fn names(&self) -> BTreeSet<Name> {
        self.maps.read().name_to_address.keys().copied().collect()
    }

    /// Sorted `(name, address)` pairs, idle names included.
    pub fn snapshot(&self) -> Vec<(Name, Address)> {
        let mut entries: Vec<_> = self
            .maps
            .read()
            .name_to_address
            .iter()
            .map(|(name, address)| (*name, *address))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn stats(&self) -> AddressTableStats {
        let maps = self.maps.read();
        let name_count = maps.name_to_address.len();
        let address_count = maps.address_to_name.len();

        AddressTableStats {
            name_count,
            address_count,
            idle_count: maps
                .name_to_address
                .values()
                .filter(|address| address.is_idle())
                .count(),
            full: address_count > usize::from(MAX_UNICAST_ADDRESS),
        }
    }
}

impl Default for AddressTable {
    fn default() -> Self {
        Self::new()
    }
}
