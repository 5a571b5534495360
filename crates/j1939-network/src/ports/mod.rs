//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! This module defines the port interfaces (traits) for the address network.
//!
//! ## Architecture
//!
//! - **Driving Ports (Inbound):** classified frames and the frame processing API
//! - **Driven Ports (Outbound):** controller state machines, new-controller
//!   observers and configuration sources supplied by the host

pub mod inbound;
pub mod outbound;

pub use inbound::{FrameProcessor, InboundFrame};
pub use outbound::{AddressClaimer, ConfigProvider, NewControllerObserver};
