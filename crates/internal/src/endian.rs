//! Big-endian packing between native integers and fixed-width byte arrays

use byteorder::{BigEndian, ByteOrder};

/// Big-endian bytes of a u64
pub fn u64_to_be_bytes(value: u64) -> [u8; 8] {
    let mut buf = [0u8; 8];
    BigEndian::write_u64(&mut buf, value);
    buf
}

/// Big-endian bytes of a u128
pub fn u128_to_be_bytes(value: u128) -> [u8; 16] {
    let mut buf = [0u8; 16];
    BigEndian::write_u128(&mut buf, value);
    buf
}

/// Fit a big-endian byte string into exactly `N` bytes.
///
/// Keeps the lowest (rightmost) `N` bytes when `bytes` is longer and
/// zero-extends on the most-significant side when it is shorter.
pub fn be_fit<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    if bytes.len() >= N {
        out.copy_from_slice(&bytes[bytes.len() - N..]);
    } else {
        out[N - bytes.len()..].copy_from_slice(bytes);
    }
    out
}

/// Read a big-endian byte string of any length as a u128.
///
/// Returns `None` when a non-zero byte sits above the low 16 bytes.
pub fn u128_from_be_bytes(bytes: &[u8]) -> Option<u128> {
    let split = bytes.len().saturating_sub(16);
    if bytes[..split].iter().any(|&b| b != 0) {
        return None;
    }
    let low: [u8; 16] = be_fit(&bytes[split..]);
    Some(BigEndian::read_u128(&low))
}
