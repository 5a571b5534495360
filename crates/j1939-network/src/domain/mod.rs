//! Domain Layer - Pure address-claim logic with no I/O
//!
//! This module contains:
//! - Names, addresses and the address range constants
//! - The address network table with claim arbitration
//! - State machine events built from claim/request traffic
//! - Structured J1939 frames
//! - Routing outcomes for inbound frames
//! - Network configuration and errors

pub mod address_table;
pub mod config;
pub mod errors;
pub mod events;
pub mod frame;
pub mod routing;
pub mod value_objects;

pub use address_table::*;
pub use config::*;
pub use errors::*;
pub use events::*;
pub use frame::*;
pub use routing::*;
pub use value_objects::*;
