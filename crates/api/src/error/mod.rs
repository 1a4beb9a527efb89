//! Error handling for the byteutils containers

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};
