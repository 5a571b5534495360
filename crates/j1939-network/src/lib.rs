//! # J1939 Address Network
//!
//! Address-claim bookkeeping for a J1939 CAN network: which 64-bit controller
//! name currently owns which 8-bit bus address, arbitration between names
//! contending for the same address, and routing of claim and request frames
//! to the controller state machines managed by this node.
//!
//! ## Lean Core
//!
//! The core library (domain, ports, service) depends only on `parking_lot`,
//! `thiserror` and `tracing`. Optional adapters are feature-gated:
//!
//! - `config` - TOML config file provider (serde, toml)
//! - `channel` - new-controller notifications over tokio mpsc
//! - `test-utils` - recording port implementations for tests
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** names, addresses, the address table and frames
//! - **Ports Layer:** traits for inbound frames and outbound state machines
//! - **Service Layer:** the network manager routing frames to controllers
//! - **Adapters Layer:** config providers and observers
//!
//! ## Example
//!
//! ```rust
//! use j1939_network::{Address, AddressTable, Frame, Name, NetworkManager};
//! use std::sync::Arc;
//!
//! let table = Arc::new(AddressTable::with_interface("vcan0"));
//! let manager = NetworkManager::new(Arc::clone(&table));
//!
//! let name = Name::new(0xa00c81045a20021b);
//! manager.process(&Frame::claim(name, Address::new(0x96), Address::GLOBAL));
//!
//! assert_eq!(table.get_address(name), Address::new(0x96));
//! assert_eq!(table.get_name(Address::new(0x96)), Some(name));
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod domain;
pub mod ports;
pub mod service;

// =============================================================================
// ADAPTERS
// =============================================================================

/// Config providers and observers.
/// `TomlConfigProvider` requires feature `config`, `ChannelObserver` feature `channel`.
pub mod adapters;

/// Test utilities (RecordingClaimer, RecordingObserver)
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// CORE RE-EXPORTS (Always Available)
// =============================================================================

// Domain entities
pub use domain::{
    Address, AddressTable, AddressTableStats, Name, Registration, GLOBAL_ADDRESS, IDLE_ADDRESS,
    MAX_UNICAST_ADDRESS, NO_ADDRESS,
};

// Frames and events
pub use domain::{
    AddressClaim, AddressRequest, Frame, FrameHeader, NewController, PF_ADDRESS_CLAIM, PF_REQUEST,
    PGN_ADDRESS_CLAIM, PGN_REQUEST,
};

// Routing, config and errors
pub use domain::{ConfigError, DropReason, FrameError, NetworkConfig, ProcessOutcome, Routing};

// Port traits
pub use ports::{
    AddressClaimer, ConfigProvider, FrameProcessor, InboundFrame, NewControllerObserver,
};

// Service
pub use service::{ManagerStats, NetworkManager};

// =============================================================================
// ADAPTER RE-EXPORTS
// =============================================================================

pub use adapters::StaticConfigProvider;

#[cfg(feature = "config")]
pub use adapters::TomlConfigProvider;

#[cfg(feature = "channel")]
pub use adapters::ChannelObserver;

// =============================================================================
// TEST UTILITIES (Requires `test-utils` feature)
// =============================================================================

#[cfg(feature = "test-utils")]
pub use test_utils::{ClaimerEvent, RecordingClaimer, RecordingObserver};
