use core::{cmp::Ordering, fmt, ops::Deref};

#[cfg(feature = "ct-maybe")]
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::{Digit, Wide};

impl<const W: usize> Default for Wide<W> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const W: usize> Deref for Wide<W> {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize> AsRef<[u8]> for Wide<W> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const W: usize> From<[u8; W]> for Wide<W> {
    /// Little-endian bytes.
    fn from(bytes: [u8; W]) -> Self {
        Self(bytes)
    }
}

/// This is *little endian* ordering, as opposed to the default
/// ordering on arrays and slices!
pub(crate) fn cmp_unsigned(m: &[Digit], n: &[Digit]) -> Ordering {
    debug_assert_eq!(m.len(), n.len());
    for (a, b) in m.iter().zip(n).rev() {
        match a.cmp(b) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl<const W: usize> Ord for Wide<W> {
    /// Unsigned ordering; see [`Signed`][crate::Signed] for the signed one.
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_unsigned(&self.0, &other.0)
    }
}

impl<const W: usize> PartialOrd for Wide<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const W: usize> Wide<W> {
    /// Compares as unsigned integers, most significant digit first.
    pub fn cmp_unsigned(&self, other: &Self) -> Ordering {
        cmp_unsigned(&self.0, &other.0)
    }

    /// Compares as two's complement integers: with differing signs the
    /// non-negative one is greater, otherwise the unsigned order applies.
    pub fn cmp_signed(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            _ => self.cmp_unsigned(other),
        }
    }
}

impl<const W: usize> fmt::Debug for Wide<W> {
    /// Big-endian, so the output reads like the number.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let be = self.to_be_bytes();

        #[cfg(feature = "hex-debug")]
        {
            write!(f, "Wide({})", delog::hex_str!(&be[..], 4))
        }

        #[cfg(not(feature = "hex-debug"))]
        {
            fmt::Debug::fmt(&be[..], f)
        }
    }
}

#[cfg(feature = "ct-maybe")]
impl<const W: usize> ConstantTimeEq for Wide<W> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

#[cfg(feature = "ct-maybe")]
impl<const W: usize> ConditionallySelectable for Wide<W> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = Self::ZERO;
        for ((r, a), b) in r.0.iter_mut().zip(&a.0).zip(&b.0) {
            *r = Digit::conditional_select(a, b, choice);
        }
        r
    }
}
