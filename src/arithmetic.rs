//! Arithmetic "$\text{mod } 2^{8W}$", that is, dropping all carries and borrows.
//!
//! Addition, subtraction and negation do not care whether the digits are read as
//! unsigned or as two's complement. Multiplication, division, right shifts and
//! comparisons do, and come in both flavors: the plain methods on [`Wide`] are
//! unsigned, the `_signed` ones (and the operators on [`Signed`]) are two's complement.

use core::cmp::Ordering;

use ref_cast::RefCast;
#[cfg(feature = "ct-maybe")]
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use crate::Wide;

mod add;
mod bitwise;
mod divide;
mod multiply;
mod shift;
mod subtract;

pub use bitwise::BitOp;
pub use divide::DivMode;

pub(crate) use add::add_assign_carry;
pub(crate) use divide::div_rem_assign_digit;
pub(crate) use multiply::mul_assign_digit;

/// Two's complement reading of a [`Wide`].
///
/// Same digits, different semantics: ordering, formatting, `*`, `/`, `%` and `>>`
/// are signed. Can be borrowed from a `&Wide` without copying, see [`Wide::as_signed`].
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, RefCast, Zeroize)]
pub struct Signed<const W: usize>(pub Wide<W>);

impl<const W: usize> Wide<W> {
    /// The same digits, read as two's complement.
    pub fn as_signed(&self) -> &Signed<W> {
        Signed::ref_cast(self)
    }

    /// Magnitude of the two's complement reading.
    ///
    /// `SIGNED_MIN` maps to itself, which read as unsigned is the correct magnitude.
    pub fn unsigned_abs(self) -> Self {
        #[cfg(not(feature = "ct-maybe"))] {
            if self.is_negative() {
                self.wrapping_neg()
            } else {
                self
            }
        }

        #[cfg(feature = "ct-maybe")] {
            Self::conditional_select(
                &self,
                &self.wrapping_neg(),
                Choice::from(self.is_negative() as u8),
            )
        }
    }
}

impl<const W: usize> Signed<W> {
    pub const ZERO: Self = Self(Wide::ZERO);
    pub const ONE: Self = Self(Wide::ONE);
    pub const MAX: Self = Self(Wide::SIGNED_MAX);
    pub const MIN: Self = Self(Wide::SIGNED_MIN);
    pub const MINUS_ONE: Self = Self(Wide::MAX);

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn unsigned_abs(self) -> Wide<W> {
        self.0.unsigned_abs()
    }
}

impl<const W: usize> From<Wide<W>> for Signed<W> {
    fn from(unsigned: Wide<W>) -> Self {
        Self(unsigned)
    }
}

impl<const W: usize> From<Signed<W>> for Wide<W> {
    fn from(signed: Signed<W>) -> Self {
        signed.0
    }
}

impl<const W: usize> Ord for Signed<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_signed(&other.0)
    }
}

impl<const W: usize> PartialOrd for Signed<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
