//! Domain Errors for the Address Network
//!
//! Table and manager operations never fail: absence and conflicts are plain
//! return values. Errors only arise when building frames or loading config.

use thiserror::Error;

/// Errors raised while building a structured frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Identifier does not fit in 29 bits
    #[error("identifier {0:#x} exceeds 29 bits")]
    IdentifierOutOfRange(u32),

    /// Classic CAN frames carry at most 8 data bytes
    #[error("payload of {len} bytes exceeds 8")]
    PayloadTooLong { len: usize },
}

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read {path}: {error}")]
    Io {
        /// Path of the file that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Interface name must not be empty")]
    EmptyInterfaceName,

    /// Preferred address outside the unicast range.
    #[error("Address {0} is not a unicast address")]
    InvalidAddress(u8),
}
