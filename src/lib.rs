//! # byteutils
//!
//! Bit-addressable byte, word and byte-sequence containers: the arithmetic
//! layer underneath AES-style cipher code.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! byteutils = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: hex-string `Serialize`/`Deserialize` for every container
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`byteutils-api`]: error taxonomy, validation guards and codec traits
//! - [`byteutils-internal`]: constant-time and endian helpers
//! - [`byteutils-primitives`]: `BitByte`, `BitWord`, `ByteSequence`
//!
//! ## Example
//!
//! ```
//! use byteutils::prelude::*;
//!
//! let a = BitByte::new(0x57);
//! let b = BitByte::new(0x83);
//! assert_eq!((a * b).to_hex(), "c1");
//!
//! let mut bytes = ByteSequence::from_hex("ff").unwrap();
//! bytes.push_word(&Word32::from_hex("1a1b1c1d").unwrap());
//! assert_eq!(bytes.to_hex(), "ff1a1b1c1d");
//! ```

pub use byteutils_api as api;
pub use byteutils_internal as internal;
pub use byteutils_primitives as primitives;

pub use byteutils_primitives::{BitByte, BitWord, ByteSequence, Word128, Word32, Word64};

/// Common imports for byteutils users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export codec traits
    pub use crate::api::{HexSerialize, Serialize};

    // Re-export the containers
    pub use crate::primitives::{
        BitByte, BitWord, ByteSequence, Truncation, Word128, Word32, Word64,
    };
}
