//! Traits for byte and hex-text serialization of bit containers.

use crate::Result;

/// A trait for containers that can be serialized to and from raw bytes.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector, most-significant byte first.
    fn to_bytes(&self) -> Vec<u8>;
}

/// A trait for containers with a hexadecimal text form.
///
/// Input is case-insensitive; output is always lowercase with two digits
/// per byte.
pub trait HexSerialize: Sized {
    /// Parses an object from hexadecimal text.
    fn from_hex(hex: &str) -> Result<Self>;
    /// Renders the object as lowercase hexadecimal text.
    fn to_hex(&self) -> String;
}
