//! Free-address search.

use crate::domain::{Address, Name, IDLE_ADDRESS};

use super::table::Maps;

impl Maps {
    /// Two-pass ascending search: `[preferred, IDLE)` first, then wrap to
    /// `[0, preferred)`. A slot qualifies if it is free, or if `force` is set
    /// and its holder loses arbitration against `name`.
    pub(super) fn find_address(&self, name: Name, preferred: Address, force: bool) -> Address {
        let preferred = preferred.clamp_unicast().value();

        self.scan(name, preferred, IDLE_ADDRESS, force)
            .or_else(|| self.scan(name, 0, preferred, force))
            .unwrap_or(Address::NO_ADDRESS)
    }

    fn scan(&self, name: Name, start: u8, end: u8, force: bool) -> Option<Address> {
        (start..end).map(Address).find(|address| {
            match self.address_to_name.get(address) {
                None => true,
                Some(holder) => force && name.has_priority_over(holder),
            }
        })
    }
}
