//! Single-byte container with per-bit addressing
//!
//! Bits are addressed most-significant first: position 0 is the MSB and
//! position 7 is the LSB. Indexing, iteration, shifts and rendering all
//! follow that order.

use core::fmt;
use core::iter::FusedIterator;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use core::str::FromStr;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use byteutils_api::{validate, Error, HexSerialize, Result};

mod gf;

pub use gf::IRREDUCIBLE_POLY;

/// Number of bits held by a [`BitByte`]
pub const BITS: usize = 8;

/// Bases accepted by [`BitByte::from_str_radix`]
const SUPPORTED_BASES: [u32; 3] = [2, 10, 16];

/// An 8-bit value addressed MSB first.
///
/// # Example
///
/// ```
/// use byteutils_primitives::BitByte;
///
/// let a = BitByte::new(0x57);
/// let b = BitByte::from_str_radix("83", 16).unwrap();
/// assert_eq!((a * b).to_hex(), "c1");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Zeroize)]
pub struct BitByte(u8);

impl BitByte {
    /// The all-zero byte
    pub const ZERO: Self = Self(0x00);

    /// The multiplicative identity of GF(2^8)
    pub const ONE: Self = Self(0x01);

    /// Create a byte from its integer value
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Parse a byte from digits in base 2, 10 or 16.
    ///
    /// Binary input may hold at most 8 digits and hexadecimal input at most 2;
    /// decimal input must not exceed 255. Sign characters are not digits in
    /// any base and are rejected as `InvalidCharacter`.
    pub fn from_str_radix(text: &str, base: u32) -> Result<Self> {
        const CONTEXT: &str = "BitByte::from_str_radix";

        validate::base(CONTEXT, base, &SUPPORTED_BASES)?;
        if text.is_empty() {
            return Err(Error::format(CONTEXT, "empty input"));
        }

        let mut value: usize = 0;
        let mut digits = 0;
        for (position, character) in text.chars().enumerate() {
            let digit = character.to_digit(base).ok_or(Error::InvalidCharacter {
                context: CONTEXT,
                character,
                position,
                base,
            })?;
            value = value
                .saturating_mul(base as usize)
                .saturating_add(digit as usize);
            digits += 1;
        }

        match base {
            2 => validate::max_length(CONTEXT, digits, BITS)?,
            16 => validate::max_length(CONTEXT, digits, 2)?,
            _ => {}
        }
        validate::max_length(CONTEXT, value, u8::MAX as usize)?;

        Ok(Self(value as u8))
    }

    /// Integer value of the byte
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The byte read as an ASCII/Latin-1 character
    pub fn to_char(self) -> char {
        self.0 as char
    }

    /// True iff at least one bit is set
    pub const fn is_any_set(self) -> bool {
        self.0 != 0
    }

    /// Read the bit at `pos` (0 = MSB, 7 = LSB)
    pub fn bit(self, pos: usize) -> Result<bool> {
        validate::index("BitByte::bit", pos, BITS)?;
        Ok(self.0 & mask(pos) != 0)
    }

    /// Set the bit at `pos` (0 = MSB, 7 = LSB) to `value`
    pub fn set_bit(&mut self, pos: usize, value: bool) -> Result<()> {
        validate::index("BitByte::set_bit", pos, BITS)?;
        if value {
            self.0 |= mask(pos);
        } else {
            self.0 &= !mask(pos);
        }
        Ok(())
    }

    /// Logical left shift by `n` positions, `n` in `0..=7`
    pub fn shift_left(self, n: usize) -> Result<Self> {
        validate::shift("BitByte::shift_left", n, BITS - 1)?;
        Ok(Self(self.0 << n))
    }

    /// Logical right shift by `n` positions, `n` in `0..=7`
    pub fn shift_right(self, n: usize) -> Result<Self> {
        validate::shift("BitByte::shift_right", n, BITS - 1)?;
        Ok(Self(self.0 >> n))
    }

    /// In-place logical left shift
    pub fn shift_left_assign(&mut self, n: usize) -> Result<()> {
        *self = self.shift_left(n)?;
        Ok(())
    }

    /// In-place logical right shift
    pub fn shift_right_assign(&mut self, n: usize) -> Result<()> {
        *self = self.shift_right(n)?;
        Ok(())
    }

    /// Iterate over the bits, MSB first
    pub fn bits(self) -> Bits {
        Bits {
            byte: self.0,
            front: 0,
            back: BITS,
        }
    }

    /// Two lowercase hexadecimal digits
    pub fn to_hex(self) -> String {
        format!("{:02x}", self.0)
    }

    /// Eight binary digits, MSB first
    pub fn to_binary(self) -> String {
        format!("{:08b}", self.0)
    }
}

/// Single-bit mask for an MSB-first position
#[inline(always)]
const fn mask(pos: usize) -> u8 {
    0x80 >> pos
}

/// Iterator over the bits of a [`BitByte`], MSB first.
///
/// Reversing it walks LSB first.
#[derive(Clone, Debug)]
pub struct Bits {
    byte: u8,
    front: usize,
    back: usize,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let bit = self.byte & mask(self.front) != 0;
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Bits {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.byte & mask(self.back) != 0)
    }
}

impl ExactSizeIterator for Bits {}

impl FusedIterator for Bits {}

impl From<u8> for BitByte {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<BitByte> for u8 {
    fn from(byte: BitByte) -> Self {
        byte.0
    }
}

impl From<[bool; 8]> for BitByte {
    /// Build a byte from its bits, MSB first
    fn from(bits: [bool; 8]) -> Self {
        Self(bits.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
    }
}

impl FromStr for BitByte {
    type Err = Error;

    /// Parse up to two hexadecimal digits
    fn from_str(text: &str) -> Result<Self> {
        Self::from_str_radix(text, 16)
    }
}

impl HexSerialize for BitByte {
    fn from_hex(hex: &str) -> Result<Self> {
        Self::from_str_radix(hex, 16)
    }

    fn to_hex(&self) -> String {
        BitByte::to_hex(*self)
    }
}

impl BitAnd for BitByte {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for BitByte {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for BitByte {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl BitAndAssign for BitByte {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for BitByte {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for BitByte {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Not for BitByte {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl ConstantTimeEq for BitByte {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for BitByte {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(u8::conditional_select(&a.0, &b.0, choice))
    }
}

impl fmt::Display for BitByte {
    /// Eight binary digits, MSB first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08b}", self.0)
    }
}

impl fmt::Debug for BitByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitByte(0x{:02x})", self.0)
    }
}

impl fmt::LowerHex for BitByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for BitByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for BitByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
