//! Internal utilities for the byteutils library
//!
//! Helpers shared by the containers that are not part of the public API
//! contract: constant-time comparison and big-endian integer packing.

pub mod constant_time;
pub mod endian;
