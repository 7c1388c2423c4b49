//! Conversions between [`Wide`] and the native [`Word`], [`SignedWord`] and `f64`.
//!
//! The plain conversions never fail: they truncate, wrap or saturate. The `try_`
//! variants report what the plain ones would have papered over.

use crate::{Error, Result, Signed, SignedWord, Wide, Word, WORD_DIGITS};
use crate::numbers::Digit;

const RADIX: f64 = 256.0;

impl<const W: usize> Wide<W> {
    /// Low-order digits of `value`; those beyond `W` are dropped.
    pub fn from_uint(value: Word) -> Self {
        Self::from_le_slice(&value.to_le_bytes())
    }

    /// Two's complement of `value`, truncated to `W` digits.
    pub fn from_int(value: SignedWord) -> Self {
        let magnitude = Self::from_uint(value.unsigned_abs());
        if value < 0 {
            magnitude.wrapping_neg()
        } else {
            magnitude
        }
    }

    /// The low `Word` of the value. Silently truncates.
    pub fn to_uint(&self) -> Word {
        let n = W.min(WORD_DIGITS);
        self.0[..n].iter().rev()
            .fold(0, |value, &digit| value << Digit::BITS | digit as Word)
    }

    /// The value read as two's complement, sign-extended or truncated to a
    /// `SignedWord`.
    pub fn to_int(&self) -> SignedWord {
        if self.is_negative() {
            (self.wrapping_neg().to_uint() as SignedWord).wrapping_neg()
        } else {
            self.to_uint() as SignedWord
        }
    }

    /// Like [`Wide::to_uint`], but fails instead of truncating.
    pub fn try_to_uint(&self) -> Result<Word> {
        let value = self.to_uint();
        if Self::from_uint(value) == *self {
            Ok(value)
        } else {
            Err(Error::Overflow)
        }
    }

    /// Like [`Wide::to_int`], but fails instead of truncating.
    pub fn try_to_int(&self) -> Result<SignedWord> {
        let value = self.to_int();
        if Self::from_int(value) == *self {
            Ok(value)
        } else {
            Err(Error::Overflow)
        }
    }

    /// Integer part of `value`, saturating.
    ///
    /// Too large positive values give [`Wide::MAX`], too large negative ones
    /// [`Wide::SIGNED_MIN`]; NaN gives zero.
    pub fn from_f64(value: f64) -> Self {
        match Self::try_from_f64(value) {
            Ok(x) => x,
            Err(Error::NotANumber) => Self::ZERO,
            Err(_) if value < 0.0 => Self::SIGNED_MIN,
            Err(_) => Self::MAX,
        }
    }

    /// Integer part of `value`, failing where [`Wide::from_f64`] would saturate.
    ///
    /// Non-negative values must stay below $2^{8W}$, negative ones must not go
    /// below $-2^{8W-1}$.
    pub fn try_from_f64(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(Error::NotANumber);
        }

        let negative = value < 0.0;
        let mut magnitude = if negative { -value } else { value };

        // dividing by a power of two is exact, so each remainder is a true digit
        let mut x = Self::ZERO;
        for digit in x.0.iter_mut() {
            if magnitude < 1.0 {
                break;
            }
            *digit = (magnitude % RADIX) as Digit;
            magnitude /= RADIX;
        }

        if magnitude >= 1.0 {
            return Err(Error::Overflow);
        }

        if negative {
            if x > Self::SIGNED_MIN {
                return Err(Error::Overflow);
            }
            Ok(x.wrapping_neg())
        } else {
            Ok(x)
        }
    }

    /// The unsigned value, rounded to the nearest `f64`.
    pub fn to_f64_unsigned(&self) -> f64 {
        self.0.iter().rev()
            .fold(0.0, |value, &digit| value * RADIX + digit as f64)
    }

    /// The two's complement value, rounded to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        if self.is_negative() {
            -self.wrapping_neg().to_f64_unsigned()
        } else {
            self.to_f64_unsigned()
        }
    }
}

impl<const W: usize> From<Word> for Wide<W> {
    fn from(value: Word) -> Self {
        Self::from_uint(value)
    }
}

impl<const W: usize> From<SignedWord> for Wide<W> {
    fn from(value: SignedWord) -> Self {
        Self::from_int(value)
    }
}

impl<const W: usize> From<SignedWord> for Signed<W> {
    fn from(value: SignedWord) -> Self {
        Signed(Wide::from_int(value))
    }
}

impl<const W: usize> TryFrom<f64> for Wide<W> {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::try_from_f64(value)
    }
}

impl<const W: usize> TryFrom<Wide<W>> for Word {
    type Error = Error;

    fn try_from(x: Wide<W>) -> Result<Self> {
        x.try_to_uint()
    }
}

impl<const W: usize> TryFrom<Signed<W>> for SignedWord {
    type Error = Error;

    fn try_from(x: Signed<W>) -> Result<Self> {
        x.0.try_to_int()
    }
}
