//! Network configuration.

use super::errors::ConfigError;
use super::value_objects::Address;

/// Configuration for one address network.
///
/// `preferred_address` and `force_search` are the defaults used by
/// [`AddressTable::search`](crate::domain::AddressTable::search) when a
/// controller looks for a free address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Bus interface this network describes (default: "can0")
    pub interface_name: String,
    /// Where the free-address search starts (default: 0)
    pub preferred_address: Address,
    /// Accept addresses held by lower priority names (default: false)
    pub force_search: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            interface_name: "can0".to_string(),
            preferred_address: Address::new(0),
            force_search: false,
        }
    }
}

impl NetworkConfig {
    /// Create a config suitable for testing (virtual CAN interface)
    pub fn for_testing() -> Self {
        Self {
            interface_name: "vcan0".to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interface_name.trim().is_empty() {
            return Err(ConfigError::EmptyInterfaceName);
        }
        if !self.preferred_address.is_unicast() {
            return Err(ConfigError::InvalidAddress(self.preferred_address.value()));
        }
        Ok(())
    }
}
