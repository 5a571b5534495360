//! # J1939 Network Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks
//! │   ├── address_table.rs
//! │   └── network_manager.rs
//! │
//! └── integration/      # Table + manager flows over the public API
//!     ├── claim_flows.rs
//!     ├── concurrency.rs
//!     └── notifications.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p j1939-tests
//!
//! # By category
//! cargo test -p j1939-tests integration::
//!
//! # Benchmarks
//! cargo bench -p j1939-tests
//! ```
//!
//! Set `RUST_LOG=j1939_network=trace` to see table and routing decisions.

pub mod integration;

use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`, defaulting to `warn`. Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
