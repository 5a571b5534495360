//! # Adapters
//!
//! Concrete implementations of the outbound ports.
//!
//! - `config` - static provider, plus the TOML file provider (feature `config`)
//! - `channel` - tokio mpsc new-controller observer (feature `channel`)

pub mod config;

#[cfg(feature = "channel")]
pub mod channel;

pub use config::StaticConfigProvider;

#[cfg(feature = "config")]
pub use config::TomlConfigProvider;

#[cfg(feature = "channel")]
pub use channel::ChannelObserver;
