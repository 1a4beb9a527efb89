//! Growable byte buffer that words are sliced from and appended into

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use byteutils_api::{validate, Error, HexSerialize, Result, Serialize};
use byteutils_internal::constant_time::ct_eq_choice;

use crate::byte::BitByte;
use crate::codec;
use crate::word::BitWord;

/// An ordered, growable sequence of bytes.
///
/// # Example
///
/// ```
/// use byteutils_primitives::{ByteSequence, Word32};
///
/// let bytes = ByteSequence::from_hex("0a0b0c0d1a1b1c1d").unwrap();
/// let word: Word32 = bytes.word(1).unwrap();
/// assert_eq!(word.to_hex(), "1a1b1c1d");
/// ```
#[derive(Clone, Default, Zeroize)]
pub struct ByteSequence {
    bytes: Vec<BitByte>,
}

impl ByteSequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create an empty sequence with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    /// Parse hex text, two digits per byte, left to right.
    ///
    /// An odd digit count is completed with one leading `0`; any character
    /// outside `[0-9a-fA-F]` is rejected.
    pub fn from_hex(text: &str) -> Result<Self> {
        let decoded = codec::decode("ByteSequence::from_hex", text)?;
        Ok(decoded.into())
    }

    /// Number of bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the sequence holds no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read the byte at `pos`
    pub fn byte(&self, pos: usize) -> Result<BitByte> {
        validate::index("ByteSequence::byte", pos, self.len())?;
        Ok(self.bytes[pos])
    }

    /// Replace the byte at `pos`
    pub fn set_byte(&mut self, pos: usize, byte: BitByte) -> Result<()> {
        validate::index("ByteSequence::set_byte", pos, self.len())?;
        self.bytes[pos] = byte;
        Ok(())
    }

    /// Mutable access to the byte at `pos`
    pub fn byte_mut(&mut self, pos: usize) -> Result<&mut BitByte> {
        validate::index("ByteSequence::byte_mut", pos, self.len())?;
        Ok(&mut self.bytes[pos])
    }

    /// Append one byte
    pub fn push(&mut self, byte: BitByte) {
        self.bytes.push(byte);
    }

    /// Append the bytes of `word`, most-significant first
    pub fn push_word<const N: usize>(&mut self, word: &BitWord<N>) {
        self.bytes.extend_from_slice(word.as_slice());
    }

    /// The `pos`-th `N`-byte word, i.e. the bytes starting at `pos * N`
    pub fn word<const N: usize>(&self, pos: usize) -> Result<BitWord<N>> {
        let span = pos
            .checked_mul(N)
            .and_then(|start| start.checked_add(N).map(|end| (start, end)))
            .filter(|&(_, end)| end <= self.len());

        let (start, end) = span.ok_or(Error::IndexOutOfRange {
            context: "ByteSequence::word",
            index: pos,
            len: self.len().checked_div(N).unwrap_or(0),
        })?;

        let mut bytes = [BitByte::ZERO; N];
        bytes.copy_from_slice(&self.bytes[start..end]);
        Ok(BitWord::new(bytes))
    }

    /// `count` consecutive words starting at word position `pos`
    pub fn words<const N: usize>(&self, pos: usize, count: usize) -> Result<Vec<BitWord<N>>> {
        (0..count)
            .map(|offset| {
                let index = pos.checked_add(offset).ok_or(Error::IndexOutOfRange {
                    context: "ByteSequence::words",
                    index: pos,
                    len: self.len().checked_div(N).unwrap_or(0),
                })?;
                self.word(index)
            })
            .collect()
    }

    /// The bytes in order
    pub fn as_slice(&self) -> &[BitByte] {
        &self.bytes
    }

    /// Raw byte values in order
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.iter().map(|b| b.value()).collect()
    }

    /// Iterate over the bytes in order
    pub fn iter(&self) -> core::slice::Iter<'_, BitByte> {
        self.bytes.iter()
    }

    /// Mutably iterate over the bytes in order
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, BitByte> {
        self.bytes.iter_mut()
    }

    /// Lowercase hex, two digits per byte
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_vec())
    }
}

impl From<Vec<BitByte>> for ByteSequence {
    fn from(bytes: Vec<BitByte>) -> Self {
        Self { bytes }
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        bytes.into_iter().map(BitByte::new).collect()
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(bytes: &[u8]) -> Self {
        bytes.iter().copied().map(BitByte::new).collect()
    }
}

impl FromIterator<BitByte> for ByteSequence {
    fn from_iter<I: IntoIterator<Item = BitByte>>(iter: I) -> Self {
        Self {
            bytes: iter.into_iter().collect(),
        }
    }
}

impl Extend<BitByte> for ByteSequence {
    fn extend<I: IntoIterator<Item = BitByte>>(&mut self, iter: I) {
        self.bytes.extend(iter);
    }
}

impl IntoIterator for ByteSequence {
    type Item = BitByte;
    type IntoIter = std::vec::IntoIter<BitByte>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ByteSequence {
    type Item = &'a BitByte;
    type IntoIter = core::slice::Iter<'a, BitByte>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter()
    }
}

impl<'a> IntoIterator for &'a mut ByteSequence {
    type Item = &'a mut BitByte;
    type IntoIter = core::slice::IterMut<'a, BitByte>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.iter_mut()
    }
}

impl AsRef<[BitByte]> for ByteSequence {
    fn as_ref(&self) -> &[BitByte] {
        &self.bytes
    }
}

impl ConstantTimeEq for ByteSequence {
    fn ct_eq(&self, other: &Self) -> Choice {
        ct_eq_choice(self.to_vec(), other.to_vec())
    }
}

impl PartialEq for ByteSequence {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ByteSequence {}

impl Serialize for ByteSequence {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bytes.into())
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl HexSerialize for ByteSequence {
    fn from_hex(hex: &str) -> Result<Self> {
        ByteSequence::from_hex(hex)
    }

    fn to_hex(&self) -> String {
        ByteSequence::to_hex(self)
    }
}

impl fmt::Display for ByteSequence {
    /// Binary digits of every byte, in order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteSequence({})", self.to_hex())
    }
}
