use core::ops::{Add, AddAssign};

use crate::{Signed, Wide};
use crate::numbers::{Digit, DoubleDigit};

// Add with carry:
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= Digit::BITS;
    lo
}

#[inline]
/// Two argument addition of raw slices:
/// a += b
///
/// Returns the carry out of `a`; `b` may be shorter than `a`, in which case the
/// carry ripples through the rest of `a` as far as necessary.
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

impl<const W: usize> Wide<W> {
    /// Sum modulo $2^{8W}$.
    ///
    /// With two's complement this is also the signed sum, there is no separate
    /// signed addition.
    pub fn wrapping_add(self, summand: Self) -> Self {
        let mut sum = self;
        add_assign_carry(&mut sum.0, &summand.0);
        sum
    }

    /// Unsigned sum, `None` if it does not fit.
    pub fn checked_add(self, summand: Self) -> Option<Self> {
        let mut sum = self;
        let carry = add_assign_carry(&mut sum.0, &summand.0);
        (carry == 0).then(|| sum)
    }
}

impl<const W: usize> AddAssign for Wide<W> {
    fn add_assign(&mut self, summand: Self) {
        add_assign_carry(&mut self.0, &summand.0);
    }
}

impl<const W: usize> Add for Wide<W> {
    type Output = Self;

    fn add(self, summand: Self) -> Self::Output {
        self.wrapping_add(summand)
    }
}

// Identical digits either way, the signed variant exists for readability at call sites.

impl<const W: usize> AddAssign for Signed<W> {
    fn add_assign(&mut self, summand: Self) {
        self.0 += summand.0;
    }
}

impl<const W: usize> Add for Signed<W> {
    type Output = Self;

    fn add(self, summand: Self) -> Self::Output {
        Signed(self.0.wrapping_add(summand.0))
    }
}
