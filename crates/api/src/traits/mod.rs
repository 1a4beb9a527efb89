//! Codec traits implemented by the byteutils containers

pub mod serialize;

pub use serialize::{HexSerialize, Serialize};
