//! Testing utilities and benchmarks for the byteutils crates

use byteutils_primitives::{BitByte, Word32};

/// The AES S-box entry for `byte`: multiplicative inverse followed by the
/// FIPS-197 affine transform.
pub fn sub_byte(byte: BitByte) -> BitByte {
    let b = byte.gf_inverse().value();
    let mixed = b
        ^ b.rotate_left(1)
        ^ b.rotate_left(2)
        ^ b.rotate_left(3)
        ^ b.rotate_left(4)
        ^ 0x63;
    BitByte::new(mixed)
}

/// One MixColumns column transform over GF(2^8)
pub fn mix_column(column: &Word32) -> Word32 {
    let [a0, a1, a2, a3] = column.to_be_bytes().map(BitByte::new);
    let two = BitByte::new(0x02);
    let three = BitByte::new(0x03);

    Word32::new([
        two * a0 ^ three * a1 ^ a2 ^ a3,
        a0 ^ two * a1 ^ three * a2 ^ a3,
        a0 ^ a1 ^ two * a2 ^ three * a3,
        three * a0 ^ a1 ^ a2 ^ two * a3,
    ])
}
