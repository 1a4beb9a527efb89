//! Fixed-width multi-byte words
//!
//! A [`BitWord<N>`] holds `N` bytes, most-significant byte first, and behaves
//! as one `8 * N`-bit unsigned scalar: bitwise algebra is position-wise,
//! shifts carry bits across byte boundaries, and addition wraps modulo
//! 2^(8N). Bits shifted or carried past the top byte are lost.

use core::fmt;

use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use tracing::warn;
use zeroize::Zeroize;

use byteutils_api::{validate, Error, HexSerialize, Result, Serialize};
use byteutils_internal::constant_time::ct_eq_choice;
use byteutils_internal::endian::{be_fit, u128_from_be_bytes, u128_to_be_bytes, u64_to_be_bytes};

use crate::byte::BitByte;
use crate::codec;

mod ops;

/// 32-bit word, the AES column size
pub type Word32 = BitWord<4>;
/// 64-bit word
pub type Word64 = BitWord<8>;
/// 128-bit word, the AES block size
pub type Word128 = BitWord<16>;

/// Report of the most-significant input bytes dropped while parsing hex text
/// into a word that is narrower than the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Truncation {
    /// Bytes the input decoded to
    pub input_bytes: usize,
    /// Bytes discarded from the most-significant end
    pub discarded_bytes: usize,
    /// Width of the target word in bits
    pub width_bits: usize,
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hex input of {} bytes exceeds {} bits; {} leading bytes discarded",
            self.input_bytes, self.width_bits, self.discarded_bytes
        )
    }
}

/// A word of `N` bytes stored most-significant byte first.
///
/// # Example
///
/// ```
/// use byteutils_primitives::Word32;
///
/// let word = Word32::from_hex("faf").unwrap();
/// assert_eq!(word.to_hex(), "00000faf");
/// assert_eq!(word.shift_left(4).unwrap().to_hex(), "0000faf0");
/// ```
#[derive(Clone, Copy, Zeroize)]
pub struct BitWord<const N: usize> {
    bytes: [BitByte; N],
}

impl<const N: usize> BitWord<N> {
    /// Width in bytes
    pub const BYTES: usize = N;

    /// Width in bits
    pub const BITS: usize = N * 8;

    /// Create a word from its bytes, most-significant first
    pub const fn new(bytes: [BitByte; N]) -> Self {
        Self { bytes }
    }

    /// The all-zero word
    pub const fn zeroed() -> Self {
        Self {
            bytes: [BitByte::ZERO; N],
        }
    }

    /// Create a word from raw big-endian bytes
    pub fn from_be_bytes(bytes: [u8; N]) -> Self {
        Self {
            bytes: bytes.map(BitByte::new),
        }
    }

    /// Create from a slice, if it has exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::size("BitWord::from_slice", N, slice.len())?;

        let mut bytes = [0u8; N];
        bytes.copy_from_slice(slice);
        Ok(Self::from_be_bytes(bytes))
    }

    /// Raw big-endian bytes of the word
    pub fn to_be_bytes(&self) -> [u8; N] {
        self.bytes.map(BitByte::value)
    }

    /// Parse hex text, reporting any truncation in-band.
    ///
    /// An odd digit count is completed with one leading `0`. Input wider than
    /// the word keeps only its rightmost `N` bytes; the dropped bytes are
    /// reported both as a `warn` event and as the returned [`Truncation`].
    /// Narrower input is zero-extended on the most-significant side.
    pub fn parse_hex(text: &str) -> Result<(Self, Option<Truncation>)> {
        let decoded = codec::decode("BitWord::from_hex", text)?;

        let truncation = if decoded.len() > N {
            let report = Truncation {
                input_bytes: decoded.len(),
                discarded_bytes: decoded.len() - N,
                width_bits: Self::BITS,
            };
            warn!(
                input_bytes = report.input_bytes,
                width_bits = report.width_bits,
                discarded_bytes = report.discarded_bytes,
                "hex value is larger than the word; truncation applied"
            );
            Some(report)
        } else {
            None
        };

        Ok((Self::from_be_bytes(be_fit(&decoded)), truncation))
    }

    /// Parse hex text; see [`BitWord::parse_hex`] for padding and truncation
    pub fn from_hex(text: &str) -> Result<Self> {
        Self::parse_hex(text).map(|(word, _)| word)
    }

    /// The lowest `N` bytes of `value`, big-endian, zero-extended
    pub fn from_u64(value: u64) -> Self {
        Self::from_be_bytes(be_fit(&u64_to_be_bytes(value)))
    }

    /// The lowest `N` bytes of `value`, big-endian, zero-extended
    pub fn from_u128(value: u128) -> Self {
        Self::from_be_bytes(be_fit(&u128_to_be_bytes(value)))
    }

    /// The word as an unsigned integer, if it fits in 128 bits
    pub fn to_u128(&self) -> Result<u128> {
        let bytes = self.to_be_bytes();
        u128_from_be_bytes(&bytes).ok_or_else(|| {
            let leading_zero = bytes.iter().take_while(|&&b| b == 0).count();
            Error::LengthError {
                context: "BitWord::to_u128",
                max: 16,
                actual: N - leading_zero,
            }
        })
    }

    /// Generate a random word
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; N];
        rng.fill_bytes(&mut bytes);
        Self::from_be_bytes(bytes)
    }

    /// Read the byte at `pos`, 0 being the most significant
    pub fn byte(&self, pos: usize) -> Result<BitByte> {
        validate::index("BitWord::byte", pos, N)?;
        Ok(self.bytes[pos])
    }

    /// Replace the byte at `pos`
    pub fn set_byte(&mut self, pos: usize, byte: BitByte) -> Result<()> {
        validate::index("BitWord::set_byte", pos, N)?;
        self.bytes[pos] = byte;
        Ok(())
    }

    /// Mutable access to the byte at `pos`
    pub fn byte_mut(&mut self, pos: usize) -> Result<&mut BitByte> {
        validate::index("BitWord::byte_mut", pos, N)?;
        Ok(&mut self.bytes[pos])
    }

    /// The bytes, most-significant first
    pub fn as_slice(&self) -> &[BitByte] {
        &self.bytes
    }

    /// Iterate over the bytes, most-significant first
    pub fn iter(&self) -> core::slice::Iter<'_, BitByte> {
        self.bytes.iter()
    }

    /// Mutably iterate over the bytes, most-significant first
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, BitByte> {
        self.bytes.iter_mut()
    }

    /// True iff at least one bit is set
    pub fn is_any_set(&self) -> bool {
        self.bytes.iter().any(|b| b.is_any_set())
    }

    /// Lowercase hex, two digits per byte, most-significant byte first
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Left shift by `n` bits, `n` in `0..=BITS`.
    ///
    /// Each byte's vacated high bits are filled from the next less
    /// significant byte; bits leaving the top byte are dropped.
    pub fn shift_left(&self, n: usize) -> Result<Self> {
        validate::shift("BitWord::shift_left", n, Self::BITS)?;

        let byte_shift = n / 8;
        let bit_shift = (n % 8) as u32;
        let src = self.to_be_bytes();
        let mut out = [BitByte::ZERO; N];

        for i in 0..N.saturating_sub(byte_shift) {
            let from = i + byte_shift;
            let mut value = src[from] << bit_shift;
            if bit_shift > 0 && from + 1 < N {
                value |= src[from + 1] >> (8 - bit_shift);
            }
            out[i] = BitByte::new(value);
        }

        Ok(Self { bytes: out })
    }

    /// Right shift by `n` bits, `n` in `0..=BITS`.
    ///
    /// Each byte's vacated low bits are filled from the next more significant
    /// byte; bits leaving the bottom byte are dropped.
    pub fn shift_right(&self, n: usize) -> Result<Self> {
        validate::shift("BitWord::shift_right", n, Self::BITS)?;

        let byte_shift = n / 8;
        let bit_shift = (n % 8) as u32;
        let src = self.to_be_bytes();
        let mut out = [BitByte::ZERO; N];

        for i in byte_shift..N {
            let from = i - byte_shift;
            let mut value = src[from] >> bit_shift;
            if bit_shift > 0 && from > 0 {
                value |= src[from - 1] << (8 - bit_shift);
            }
            out[i] = BitByte::new(value);
        }

        Ok(Self { bytes: out })
    }

    /// In-place left shift
    pub fn shift_left_assign(&mut self, n: usize) -> Result<()> {
        *self = self.shift_left(n)?;
        Ok(())
    }

    /// In-place right shift
    pub fn shift_right_assign(&mut self, n: usize) -> Result<()> {
        *self = self.shift_right(n)?;
        Ok(())
    }

    /// Sum modulo 2^BITS, both operands read as big-endian unsigned integers
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        let mut out = [BitByte::ZERO; N];
        let mut carry = 0u16;
        for i in (0..N).rev() {
            let sum = self.bytes[i].value() as u16 + rhs.bytes[i].value() as u16 + carry;
            out[i] = BitByte::new(sum as u8);
            carry = sum >> 8;
        }
        Self { bytes: out }
    }

    /// XOR with a word of any width; widths must match
    pub fn try_xor<const M: usize>(&self, rhs: &BitWord<M>) -> Result<Self> {
        self.zip_with("BitWord::xor", rhs, |a, b| a ^ b)
    }

    /// AND with a word of any width; widths must match
    pub fn try_and<const M: usize>(&self, rhs: &BitWord<M>) -> Result<Self> {
        self.zip_with("BitWord::and", rhs, |a, b| a & b)
    }

    /// OR with a word of any width; widths must match
    pub fn try_or<const M: usize>(&self, rhs: &BitWord<M>) -> Result<Self> {
        self.zip_with("BitWord::or", rhs, |a, b| a | b)
    }

    fn zip_with<const M: usize, F>(&self, context: &'static str, rhs: &BitWord<M>, op: F) -> Result<Self>
    where
        F: Fn(BitByte, BitByte) -> BitByte,
    {
        validate::size(context, N, M)?;

        let mut out = self.bytes;
        for (o, &r) in out.iter_mut().zip(rhs.bytes.iter()) {
            *o = op(*o, r);
        }
        Ok(Self { bytes: out })
    }
}

impl<const N: usize> Default for BitWord<N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const N: usize> From<[u8; N]> for BitWord<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

impl<const N: usize> From<[BitByte; N]> for BitWord<N> {
    fn from(bytes: [BitByte; N]) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> From<BitWord<N>> for [u8; N] {
    fn from(word: BitWord<N>) -> Self {
        word.to_be_bytes()
    }
}

impl<const N: usize> AsRef<[BitByte]> for BitWord<N> {
    fn as_ref(&self) -> &[BitByte] {
        &self.bytes
    }
}

impl<const N: usize> IntoIterator for BitWord<N> {
    type Item = BitByte;
    type IntoIter = core::array::IntoIter<BitByte, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_iter()
    }
}

impl<'a, const N: usize> IntoIterator for &'a BitWord<N> {
    type Item = &'a BitByte;
    type IntoIter = core::slice::Iter<'a, BitByte>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter()
    }
}

impl<'a, const N: usize> IntoIterator for &'a mut BitWord<N> {
    type Item = &'a mut BitByte;
    type IntoIter = core::slice::IterMut<'a, BitByte>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter_mut()
    }
}

impl<const N: usize> ConstantTimeEq for BitWord<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_eq_choice(self.to_be_bytes(), other.to_be_bytes())
    }
}

impl<const N: usize> PartialEq for BitWord<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const N: usize> Eq for BitWord<N> {}

impl<const N: usize> Serialize for BitWord<N> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }
}

impl<const N: usize> HexSerialize for BitWord<N> {
    fn from_hex(hex: &str) -> Result<Self> {
        BitWord::<N>::from_hex(hex)
    }

    fn to_hex(&self) -> String {
        BitWord::<N>::to_hex(self)
    }
}

impl<const N: usize> fmt::Display for BitWord<N> {
    /// Binary digits of every byte, most-significant first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for BitWord<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitWord<{}>({})", N, self.to_hex())
    }
}

impl<const N: usize> fmt::LowerHex for BitWord<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
