//! Bit-level byte, word and byte-sequence containers
//!
//! This crate provides the primitive layer consumed by AES-style cipher
//! code:
//!
//! - [`BitByte`]: an 8-bit value with per-bit addressing (bit 0 is the most
//!   significant bit), bitwise algebra and GF(2^8) multiplication modulo the
//!   AES polynomial x^8 + x^4 + x^3 + x + 1
//! - [`BitWord`]: a fixed number of bytes treated as one big-endian scalar,
//!   with carry-propagating shifts and modulo-2^bits addition
//! - [`ByteSequence`]: a growable byte buffer that words are sliced from and
//!   appended into
//!
//! All containers parse from and render to lowercase hexadecimal text.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod byte;
pub mod sequence;
pub mod word;

mod codec;
#[cfg(feature = "serde")]
mod serde_impl;

// Error module re-exports
pub use byteutils_api::{validate, Error, HexSerialize, Result, Serialize};

pub use byte::{BitByte, Bits, IRREDUCIBLE_POLY};
pub use sequence::ByteSequence;
pub use word::{BitWord, Truncation, Word128, Word32, Word64};
