use core::ops::{Mul, MulAssign};

use crate::{Signed, Wide};
use crate::numbers::{Digit, DoubleDigit};

use super::add::add_assign_carry;

/// Multiplies the digits of `x` in place by a single digit, returning the carry out.
///
/// `y` is a digit, so the carry always fits in one too.
pub(crate) fn mul_assign_digit(x: &mut [Digit], y: Digit) -> Digit {
    let mut carry: DoubleDigit = 0;
    for digit in x.iter_mut() {
        carry += (*digit as DoubleDigit) * (y as DoubleDigit);
        *digit = carry as Digit;
        carry >>= Digit::BITS;
    }
    carry as Digit
}

impl<const W: usize> Wide<W> {
    /// Full unsigned product as `(low, high)` halves.
    ///
    /// Operand-scanning schoolbook multiplication: each row `self[i] * other`
    /// is accumulated into a scratch of 2W digits with its own carry chain.
    pub fn widening_mul(self, other: Self) -> (Self, Self) {
        let mut product = [[0 as Digit; W]; 2];
        let z = product.as_flattened_mut();

        for (i, &x) in self.0.iter().enumerate() {
            if x == 0 {
                continue;
            }
            let mut carry: DoubleDigit = 0;
            for (j, &y) in other.0.iter().enumerate() {
                // 255 * 255 + 255 + 255 = 0xFFFF, no overflow
                carry += (x as DoubleDigit) * (y as DoubleDigit) + z[i + j] as DoubleDigit;
                z[i + j] = carry as Digit;
                carry >>= Digit::BITS;
            }
            add_assign_carry(&mut z[i + W..], &[carry as Digit]);
        }

        (Self(product[0]), Self(product[1]))
    }

    /// Unsigned product modulo $2^{8W}$: the high half is dropped.
    pub fn wrapping_mul(self, other: Self) -> Self {
        self.widening_mul(other).0
    }

    /// Unsigned product, `None` if the high half does not vanish.
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        let (lo, hi) = self.widening_mul(other);
        hi.is_zero().then(|| lo)
    }

    /// Signed product modulo $2^{8W}$.
    ///
    /// Multiplies the magnitudes and negates if exactly one factor is negative.
    pub fn wrapping_mul_signed(self, other: Self) -> Self {
        let product = self.unsigned_abs().wrapping_mul(other.unsigned_abs());
        if self.is_negative() != other.is_negative() {
            product.wrapping_neg()
        } else {
            product
        }
    }
}

impl<const W: usize> Mul for Wide<W> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.wrapping_mul(other)
    }
}

impl<const W: usize> MulAssign for Wide<W> {
    fn mul_assign(&mut self, other: Self) {
        *self = self.wrapping_mul(other);
    }
}

impl<const W: usize> Mul for Signed<W> {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Signed(self.0.wrapping_mul_signed(other.0))
    }
}

impl<const W: usize> MulAssign for Signed<W> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
