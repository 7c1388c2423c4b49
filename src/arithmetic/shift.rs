use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::{Signed, Wide};
use crate::numbers::Digit;

use super::divide::div_rem_assign_digit;
use super::multiply::mul_assign_digit;

impl<const W: usize> Wide<W> {
    /// Note that "left" means "higher number".
    ///
    /// Truncating: bits shifted past the top are lost, and shifting by
    /// `BITS` or more gives zero (unlike `u32::wrapping_shl`, the amount is not masked).
    pub fn shift_left(self, bits: u32) -> Self {
        if bits >= Self::BITS {
            return Self::ZERO;
        }

        // shift by whole digits
        let n_digits = (bits / Digit::BITS) as usize;
        let mut shifted = Self::ZERO;
        shifted.0[n_digits..].copy_from_slice(&self.0[..W - n_digits]);

        // shift the sub-digit amount of bits, as multiplication by a power of two
        let n_bits = bits % Digit::BITS;
        if n_bits > 0 {
            mul_assign_digit(&mut shifted.0, 1 << n_bits);
        }
        shifted
    }

    /// Note that "right" means "lower number". Vacated bits are zero.
    pub fn shift_right_logical(self, bits: u32) -> Self {
        self.shift_right(bits, 0)
    }

    /// Vacated bits are copies of the sign bit, so this divides by a power of
    /// two rounding toward negative infinity.
    pub fn shift_right_arithmetic(self, bits: u32) -> Self {
        let fill = if self.is_negative() { Digit::MAX } else { 0 };
        self.shift_right(bits, fill)
    }

    fn shift_right(self, bits: u32, fill: Digit) -> Self {
        if bits >= Self::BITS {
            return Self([fill; W]);
        }

        let n_digits = (bits / Digit::BITS) as usize;
        let mut shifted = Self([fill; W]);
        shifted.0[..W - n_digits].copy_from_slice(&self.0[n_digits..]);

        // division by a power of two shifts in zeros at the top, patch in the fill
        let n_bits = bits % Digit::BITS;
        if n_bits > 0 {
            div_rem_assign_digit(&mut shifted.0, 1 << n_bits);
            shifted.0[W - 1] |= fill << (Digit::BITS - n_bits);
        }
        shifted
    }
}

impl<const W: usize> ShlAssign<u32> for Wide<W> {
    fn shl_assign(&mut self, bits: u32) {
        *self = self.shift_left(bits);
    }
}

impl<const W: usize> ShrAssign<u32> for Wide<W> {
    fn shr_assign(&mut self, bits: u32) {
        *self = self.shift_right_logical(bits);
    }
}

impl<const W: usize> Shl<u32> for Wide<W> {
    type Output = Self;

    #[inline]
    fn shl(self, bits: u32) -> Self::Output {
        self.shift_left(bits)
    }
}

impl<const W: usize> Shr<u32> for Wide<W> {
    type Output = Self;

    #[inline]
    fn shr(self, bits: u32) -> Self::Output {
        self.shift_right_logical(bits)
    }
}

impl<const W: usize> Shl<u32> for Signed<W> {
    type Output = Self;

    #[inline]
    fn shl(self, bits: u32) -> Self::Output {
        Signed(self.0.shift_left(bits))
    }
}

impl<const W: usize> Shr<u32> for Signed<W> {
    type Output = Self;

    #[inline]
    fn shr(self, bits: u32) -> Self::Output {
        Signed(self.0.shift_right_arithmetic(bits))
    }
}

impl<const W: usize> ShlAssign<u32> for Signed<W> {
    fn shl_assign(&mut self, bits: u32) {
        *self = *self << bits;
    }
}

impl<const W: usize> ShrAssign<u32> for Signed<W> {
    fn shr_assign(&mut self, bits: u32) {
        *self = *self >> bits;
    }
}
