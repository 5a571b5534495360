use crate::domain::{Address, NetworkConfig};
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Static configuration provider with hardcoded values.
///
/// Useful for testing and development. For production, use `TomlConfigProvider`.
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    config: NetworkConfig,
}

impl StaticConfigProvider {
    /// Create with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: NetworkConfig::default(),
        }
    }

    #[must_use]
    pub fn with_interface(mut self, interface_name: impl Into<String>) -> Self {
        self.config.interface_name = interface_name.into();
        self
    }

    /// Start free-address searches at `address`.
    #[must_use]
    pub fn with_preferred_address(mut self, address: Address) -> Self {
        self.config.preferred_address = address;
        self
    }

    #[must_use]
    pub fn with_force_search(mut self, force: bool) -> Self {
        self.config.force_search = force;
        self
    }

    /// Create with the specified network config.
    #[must_use]
    pub fn with_config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for StaticConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_network_config(&self) -> NetworkConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - Config file loading (requires "config" feature)
// ============================================================================

#[cfg(feature = "config")]
mod toml_config {
    use super::*;
    use crate::domain::ConfigError;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use tracing::debug;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        network: NetworkSection,
    }

    #[derive(Debug, Deserialize, Default)]
    struct NetworkSection {
        interface: Option<String>,
        preferred_address: Option<u8>,
        force_search: Option<bool>,
    }

    /// TOML-based configuration provider.
    ///
    /// Missing keys fall back to [`NetworkConfig::default`]. The result is
    /// validated before it is returned.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [network]
    /// interface = "can0"
    /// preferred_address = 128
    /// force_search = false
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: NetworkConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read, parsed or validated.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let path = path.as_ref();
            let content = fs::read_to_string(path).map_err(|error| ConfigError::Io {
                path: path.display().to_string(),
                error,
            })?;

            debug!("[network] loading config from {}", path.display());
            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let defaults = NetworkConfig::default();
            let section = file.network;
            let config = NetworkConfig {
                interface_name: section.interface.unwrap_or(defaults.interface_name),
                preferred_address: section
                    .preferred_address
                    .map(Address::new)
                    .unwrap_or(defaults.preferred_address),
                force_search: section.force_search.unwrap_or(defaults.force_search),
            };
            config.validate()?;

            Ok(Self { config })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn get_network_config(&self) -> NetworkConfig {
            self.config.clone()
        }
    }
}

#[cfg(feature = "config")]
pub use toml_config::TomlConfigProvider;
