use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not,
};

use super::BitWord;
use crate::byte::BitByte;

impl<const N: usize> BitXor for BitWord<N> {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self {
        self ^= rhs;
        self
    }
}

impl<const N: usize> BitXorAssign for BitWord<N> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(l, &r)| *l ^= r);
    }
}

/// XOR every byte of the word with the same byte
impl<const N: usize> BitXor<BitByte> for BitWord<N> {
    type Output = Self;

    fn bitxor(mut self, rhs: BitByte) -> Self {
        self ^= rhs;
        self
    }
}

impl<const N: usize> BitXorAssign<BitByte> for BitWord<N> {
    fn bitxor_assign(&mut self, rhs: BitByte) {
        self.iter_mut().for_each(|l| *l ^= rhs);
    }
}

impl<const N: usize> BitAnd for BitWord<N> {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}

impl<const N: usize> BitAndAssign for BitWord<N> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(l, &r)| *l &= r);
    }
}

impl<const N: usize> BitOr for BitWord<N> {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl<const N: usize> BitOrAssign for BitWord<N> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.iter_mut()
            .zip(rhs.iter())
            .for_each(|(l, &r)| *l |= r);
    }
}

impl<const N: usize> Not for BitWord<N> {
    type Output = Self;

    fn not(mut self) -> Self {
        self.iter_mut().for_each(|b| *b = !*b);
        self
    }
}

/// Addition modulo 2^BITS
impl<const N: usize> Add for BitWord<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(&rhs)
    }
}

impl<const N: usize> AddAssign for BitWord<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(&rhs);
    }
}
