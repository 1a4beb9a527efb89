//! Public API traits and types for the byteutils library
//!
//! This crate provides the public API surface shared by every byteutils
//! container: the error taxonomy, the `Result` alias, argument validation
//! guards and the hex/byte codec traits.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use traits::{HexSerialize, Serialize};
