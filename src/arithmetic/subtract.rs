use core::ops::{Neg, Sub, SubAssign};

use crate::{Signed, Wide};
use crate::numbers::Digit;

use super::add::add_assign_carry;

/// Subtract with borrow:
#[inline]
pub fn sbb(a: Digit, b: Digit, acc: &mut i16) -> Digit {
    *acc += a as i16;
    *acc -= b as i16;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

// A non-zero borrow (if a.len() == b.len()) is -1, which as unsigned is
// the same as "all bits set", i.e., 0xFF for Digit = u8
pub(crate) fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());
    let mut borrow = 0;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow as Digit
}

impl<const W: usize> Wide<W> {
    /// Two's complement: flip every bit, then add one.
    pub fn wrapping_neg(self) -> Self {
        let mut negated = self.complement();
        add_assign_carry(&mut negated.0, &[1]);
        negated
    }

    /// Difference modulo $2^{8W}$, computed as `self + (-subtrahend)`.
    ///
    /// Like [`Wide::wrapping_add`], this serves signed and unsigned readings alike.
    pub fn wrapping_sub(self, subtrahend: Self) -> Self {
        self.wrapping_add(subtrahend.wrapping_neg())
    }

    /// Unsigned difference, `None` if `subtrahend > self`.
    pub fn checked_sub(self, subtrahend: Self) -> Option<Self> {
        let mut difference = self;
        let borrow = sub_assign_borrow(&mut difference.0, &subtrahend.0);
        (borrow == 0).then(|| difference)
    }
}

impl<const W: usize> Neg for Wide<W> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

impl<const W: usize> SubAssign for Wide<W> {
    fn sub_assign(&mut self, subtrahend: Self) {
        *self = self.wrapping_sub(subtrahend);
    }
}

impl<const W: usize> Sub for Wide<W> {
    type Output = Self;

    fn sub(self, subtrahend: Self) -> Self::Output {
        self.wrapping_sub(subtrahend)
    }
}

impl<const W: usize> Neg for Signed<W> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Signed(self.0.wrapping_neg())
    }
}

impl<const W: usize> SubAssign for Signed<W> {
    fn sub_assign(&mut self, subtrahend: Self) {
        self.0 -= subtrahend.0;
    }
}

impl<const W: usize> Sub for Signed<W> {
    type Output = Self;

    fn sub(self, subtrahend: Self) -> Self::Output {
        Signed(self.0.wrapping_sub(subtrahend.0))
    }
}
