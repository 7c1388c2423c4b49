use zeroize::Zeroize;

mod trait_implementations;
pub(crate) use trait_implementations::cmp_unsigned;

/// One base-256 digit of a [`Wide`].
pub(crate) type Digit = u8;
/// Room for a digit product plus carry, `255 * 255 + 255 + 255 < 2^16`.
pub(crate) type DoubleDigit = u16;

/// The radix of the digit representation.
pub(crate) const BASE: DoubleDigit = 1 << Digit::BITS;

/// Integer with `W` base-256 digits (W for width).
///
/// Internal representation as little-endian: index 0 is the least significant digit.
///
/// There is no sign field. The same bit pattern is read as unsigned by the plain
/// operations and as two's complement by the `_signed` operations and by the
/// [`Signed`][crate::Signed] view; the sign is the top bit of the last digit.
///
/// Values are `Copy`, and apart from the `*Assign` operators every operation
/// returns a fresh value. Overflow wraps and division by zero gives zero; the
/// `checked_*` and `try_*` methods are the strict variants.
///
/// `W = 0` is not supported (bound not expressable).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Zeroize)]
pub struct Wide<const W: usize>(pub(crate) [Digit; W]);

/// Number of digits left after dropping high-order zero digits, at least 1.
#[inline]
pub(crate) fn significant_len(digits: &[Digit]) -> usize {
    digits.iter()
        .rposition(|&d| d != 0)
        .map(|i| i + 1)
        .unwrap_or(1)
}

// constants
impl<const W: usize> Wide<W> {
    pub const DIGITS: usize = W;
    pub const BITS: u32 = (W as u32) * Digit::BITS;

    pub const ZERO: Self = Self([0; W]);
    pub const ONE: Self = {
        let mut digits = [0; W];
        digits[0] = 1;
        Self(digits)
    };
    /// All bits set: the largest unsigned value, `-1` when signed.
    pub const MAX: Self = Self([0xff; W]);
    /// `0x7f ff .. ff`, the largest signed value.
    pub const SIGNED_MAX: Self = {
        let mut digits = [0xff; W];
        digits[W - 1] = 0x7f;
        Self(digits)
    };
    /// `0x80 00 .. 00`, the smallest signed value.
    pub const SIGNED_MIN: Self = {
        let mut digits = [0; W];
        digits[W - 1] = 0x80;
        Self(digits)
    };
}

// c'tors and such
impl<const W: usize> Wide<W> {
    pub const fn from_le_bytes(bytes: [u8; W]) -> Self {
        Self(bytes)
    }

    pub const fn to_le_bytes(&self) -> [u8; W] {
        self.0
    }

    pub fn from_be_bytes(mut bytes: [u8; W]) -> Self {
        bytes.reverse();
        Self(bytes)
    }

    pub fn to_be_bytes(&self) -> [u8; W] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    /// Little-endian digits, zero-padded. Digits beyond `W` are dropped.
    pub fn from_le_slice(slice: &[u8]) -> Self {
        let mut x = Self::ZERO;
        let l = slice.len().min(W);
        x.0[..l].copy_from_slice(&slice[..l]);
        x
    }

    /// The base-256 digits, least significant first.
    pub fn digits(&self) -> &[u8; W] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }

    /// The sign bit, i.e. the top bit of the most significant digit.
    pub fn is_negative(&self) -> bool {
        self.0[W - 1] >> (Digit::BITS - 1) != 0
    }

    /// `W` minus the number of high-order zero digits, at least 1.
    pub fn significant_len(&self) -> usize {
        significant_len(&self.0)
    }
}
