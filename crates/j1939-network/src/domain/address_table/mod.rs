//! Address Network Table
//!
//! Thread-safe bidirectional registry of `name <-> address` with arbitration
//! aware insertion and free-address search.
//!
//! Both directions live behind a single readers-writer lock so that every
//! public call observes and leaves the two maps consistent with each other.

// Semantic submodules
mod search;
mod table;
mod types;

// Re-export public API
pub use table::AddressTable;
pub use types::{AddressTableStats, Registration};
