//! # Network Manager Service
//!
//! Consumes frames classified as address claims or requests, keeps the
//! address table up to date and routes the resulting events to the managed
//! controller state machines.
//!
//! ## Routing
//!
//! - unicast destination: the one managed controller holding that address,
//!   dropped if there is none
//! - idle or global destination: every managed controller

// Semantic submodules
mod manager;
mod routing;
mod stats;

// Re-export public API
pub use manager::NetworkManager;
pub use stats::ManagerStats;
