//! # Integration Flows
//!
//! End-to-end scenarios driving the address table through the network
//! manager, the way a bus reader would.

pub mod concurrency;
pub mod notifications;
