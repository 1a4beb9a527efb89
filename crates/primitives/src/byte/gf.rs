//! GF(2⁸) arithmetic over [`BitByte`]
//!
//! Elements are polynomials over GF(2) of degree below 8, reduced modulo the
//! AES polynomial x⁸ + x⁴ + x³ + x + 1. Addition is XOR (see the `BitXor`
//! impl); this module adds multiplication and its derived operations.

use core::ops::{Mul, MulAssign};

use byteutils_internal::constant_time::ct_mask;

use super::BitByte;

/// Low byte of the AES reduction polynomial x⁸ + x⁴ + x³ + x + 1
pub const IRREDUCIBLE_POLY: u8 = 0x1b;

impl BitByte {
    /// Multiply two bytes in GF(2⁸) with AES's reduction polynomial.
    ///
    /// Shift-and-add: while `rhs` has bits left, fold the current `self`
    /// multiple into the product when the low bit of `rhs` is set, then double
    /// `self`, reducing by 0x1b whenever its MSB was set before the shift.
    pub fn gf_mul(self, rhs: Self) -> Self {
        let mut product = 0u8;
        let mut a = self.0;
        let mut b = rhs.0;
        while b != 0 {
            if b & 1 != 0 {
                product ^= a;
            }
            b >>= 1;
            if a & 0x80 != 0 {
                a = (a << 1) ^ IRREDUCIBLE_POLY;
            } else {
                a <<= 1;
            }
        }
        Self(product)
    }

    /// Multiply by x (0x02) without branching on the value
    #[inline(always)]
    pub fn xtime(self) -> Self {
        let hi = self.0 & 0x80 != 0;
        Self((self.0 << 1) ^ (ct_mask(hi) & IRREDUCIBLE_POLY))
    }

    /// Raise to `exp` by square-and-multiply
    pub fn gf_pow(self, exp: u8) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        let mut exp = exp;
        while exp != 0 {
            if exp & 1 != 0 {
                result = result.gf_mul(base);
            }
            base = base.gf_mul(base);
            exp >>= 1;
        }
        result
    }

    /// Multiplicative inverse as x²⁵⁴; zero maps to zero
    pub fn gf_inverse(self) -> Self {
        self.gf_pow(254)
    }
}

impl Mul for BitByte {
    type Output = Self;

    /// GF(2⁸) product
    fn mul(self, rhs: Self) -> Self {
        self.gf_mul(rhs)
    }
}

impl MulAssign for BitByte {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.gf_mul(rhs);
    }
}
