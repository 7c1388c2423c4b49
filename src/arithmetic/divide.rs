use core::{cmp::Ordering, ops::{Div, DivAssign, Rem, RemAssign}};

use crate::{Signed, Wide};
use crate::numbers::{cmp_unsigned, significant_len, Digit, DoubleDigit, BASE};

use super::multiply::mul_assign_digit;
use super::subtract::sub_assign_borrow;

/// Which part of a division to return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivMode {
    Quotient,
    Remainder,
}

/// Divides `x` in place by the non-zero digit `divisor`, returning the remainder.
///
/// This is the scalar case: a single pass from the most significant digit down,
/// carrying `remainder * 256 + digit` along.
pub(crate) fn div_rem_assign_digit(x: &mut [Digit], divisor: Digit) -> Digit {
    debug_assert!(divisor != 0);
    let divisor = divisor as DoubleDigit;
    let mut remainder: DoubleDigit = 0;

    for digit in x.iter_mut().rev() {
        let accumulator = remainder * BASE + *digit as DoubleDigit;
        *digit = (accumulator / divisor) as Digit;
        remainder = accumulator % divisor;
    }

    remainder as Digit
}

/// `dq = divisor * qk`, with `dq` one digit longer than `divisor`.
fn trial_product(dq: &mut [Digit], divisor: &[Digit], qk: Digit) {
    let (lo, hi) = dq.split_at_mut(divisor.len());
    lo.copy_from_slice(divisor);
    hi[0] = mul_assign_digit(lo, qk);
}

/// Unsigned long division, returns `(quotient, remainder)`.
///
/// A zero divisor yields zero for both.
///
/// This is Knuth's algorithm D (TAOCP vol 2, section 4.3.1) without the normalization
/// step. Each quotient digit is estimated from the top three digits of the current
/// remainder window and the top two digits of the divisor. That estimate is never too
/// small, and since the divisor's top digit is non-zero it is at most one too large,
/// so a single downward correction suffices.
pub(crate) fn div_rem<const W: usize>(x: &Wide<W>, y: &Wide<W>) -> (Wide<W>, Wide<W>) {
    let n = significant_len(&x.0);
    let m = significant_len(&y.0);

    if m == 1 {
        let divisor = y.0[0];
        if divisor == 0 {
            return (Wide::ZERO, Wide::ZERO);
        }
        let mut quotient = *x;
        let remainder = div_rem_assign_digit(&mut quotient.0[..n], divisor);
        return (quotient, Wide::from_le_slice(&[remainder]));
    }

    if m > n {
        return (Wide::ZERO, *x);
    }

    // the remainder window needs one digit more than the dividend, `W + 1` in general
    let mut scratch = [[0 as Digit; W]; 2];
    let rem = &mut scratch.as_flattened_mut()[..=n];
    rem[..n].copy_from_slice(&x.0[..n]);

    let mut product = [[0 as Digit; W]; 2];
    let dq = &mut product.as_flattened_mut()[..=m];

    let divisor = &y.0[..m];
    let y2 = (divisor[m - 1] as u32) << Digit::BITS | divisor[m - 2] as u32;

    let mut quotient = Wide::ZERO;

    for k in (0..=(n - m)).rev() {
        let top = k + m;
        let r3 = (rem[top] as u32) << (2 * Digit::BITS)
            | (rem[top - 1] as u32) << Digit::BITS
            | rem[top - 2] as u32;

        let mut qk = (r3 / y2).min(Digit::MAX as u32) as Digit;
        trial_product(dq, divisor, qk);

        if cmp_unsigned(&rem[k..=top], dq) == Ordering::Less {
            qk -= 1;
            trial_product(dq, divisor, qk);
        }
        debug_assert!(cmp_unsigned(&rem[k..=top], dq) != Ordering::Less);

        let borrow = sub_assign_borrow(&mut rem[k..=top], dq);
        debug_assert_eq!(borrow, 0);
        quotient.0[k] = qk;
    }

    // everything above the low `m` digits has been cancelled
    debug_assert!(rem[m..].iter().all(|&d| d == 0));
    (quotient, Wide::from_le_slice(&rem[..m]))
}

impl<const W: usize> Wide<W> {
    /// Unsigned quotient and remainder; both are zero for a zero divisor.
    pub fn div_rem(self, divisor: Self) -> (Self, Self) {
        div_rem(&self, &divisor)
    }

    /// Unsigned quotient or remainder, as selected by `mode`.
    pub fn divide(self, divisor: Self, mode: DivMode) -> Self {
        let (quotient, remainder) = self.div_rem(divisor);
        match mode {
            DivMode::Quotient => quotient,
            DivMode::Remainder => remainder,
        }
    }

    /// Signed quotient and remainder; both are zero for a zero divisor.
    ///
    /// Truncates toward zero, the remainder carries the sign of the dividend.
    /// `SIGNED_MIN / -1` wraps to `SIGNED_MIN`.
    pub fn div_rem_signed(self, divisor: Self) -> (Self, Self) {
        let (quotient, remainder) = div_rem(&self.unsigned_abs(), &divisor.unsigned_abs());

        let quotient = if self.is_negative() != divisor.is_negative() {
            quotient.wrapping_neg()
        } else {
            quotient
        };
        let remainder = if self.is_negative() {
            remainder.wrapping_neg()
        } else {
            remainder
        };

        (quotient, remainder)
    }

    /// Signed quotient or remainder, as selected by `mode`.
    pub fn divide_signed(self, divisor: Self, mode: DivMode) -> Self {
        let (quotient, remainder) = self.div_rem_signed(divisor);
        match mode {
            DivMode::Quotient => quotient,
            DivMode::Remainder => remainder,
        }
    }

    /// Like [`Wide::div_rem`], but `None` for a zero divisor.
    pub fn checked_div_rem(self, divisor: Self) -> Option<(Self, Self)> {
        (!divisor.is_zero()).then(|| self.div_rem(divisor))
    }

    /// Like [`Wide::div_rem_signed`], but `None` for a zero divisor.
    pub fn checked_div_rem_signed(self, divisor: Self) -> Option<(Self, Self)> {
        (!divisor.is_zero()).then(|| self.div_rem_signed(divisor))
    }
}

//
// Implement Div and Rem; as everywhere else, division by zero gives zero.
//

impl<const W: usize> Div for Wide<W> {
    type Output = Self;
    fn div(self, divisor: Self) -> Self::Output {
        self.divide(divisor, DivMode::Quotient)
    }
}

impl<const W: usize> Rem for Wide<W> {
    type Output = Self;
    fn rem(self, divisor: Self) -> Self::Output {
        self.divide(divisor, DivMode::Remainder)
    }
}

impl<const W: usize> DivAssign for Wide<W> {
    fn div_assign(&mut self, divisor: Self) {
        *self = *self / divisor;
    }
}

impl<const W: usize> RemAssign for Wide<W> {
    fn rem_assign(&mut self, divisor: Self) {
        *self = *self % divisor;
    }
}

impl<const W: usize> Div for Signed<W> {
    type Output = Self;
    fn div(self, divisor: Self) -> Self::Output {
        Signed(self.0.divide_signed(divisor.0, DivMode::Quotient))
    }
}

impl<const W: usize> Rem for Signed<W> {
    type Output = Self;
    fn rem(self, divisor: Self) -> Self::Output {
        Signed(self.0.divide_signed(divisor.0, DivMode::Remainder))
    }
}

impl<const W: usize> DivAssign for Signed<W> {
    fn div_assign(&mut self, divisor: Self) {
        *self = *self / divisor;
    }
}

impl<const W: usize> RemAssign for Signed<W> {
    fn rem_assign(&mut self, divisor: Self) {
        *self = *self % divisor;
    }
}
