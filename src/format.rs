//! Writing [`Wide`] values as text, in radix 2 to 36.
//!
//! Digits are produced least significant first, by repeated scalar division,
//! into a [`Formatted`] buffer that lives on the caller's stack.

use core::{fmt, ops::Deref};

use crate::{Signed, Wide};
use crate::arithmetic::div_rem_assign_digit;
use crate::numbers::{significant_len, Digit};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Text rendering of a [`Wide`], as returned by [`Wide::to_str_radix`].
///
/// Room for `8W` binary digits and a sign, which is the longest any radix needs.
/// Dereferences to `str`.
#[derive(Clone)]
pub struct Formatted<const W: usize> {
    // `[u8; 9 * W]` is not expressible yet
    buf: [[u8; W]; 9],
    start: usize,
}

impl<const W: usize> Formatted<W> {
    fn new() -> Self {
        Self { buf: [[0; W]; 9], start: 9 * W }
    }

    fn push_front(&mut self, byte: u8) {
        self.start -= 1;
        self.buf.as_flattened_mut()[self.start] = byte;
    }

    fn bytes(&self) -> &[u8] {
        &self.buf.as_flattened()[self.start..]
    }

    fn make_ascii_uppercase(&mut self) {
        self.buf.as_flattened_mut()[self.start..].make_ascii_uppercase();
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: only bytes of ALPHABET and b'-' are ever pushed, all ASCII
        unsafe { core::str::from_utf8_unchecked(self.bytes()) }
    }
}

impl<const W: usize> Deref for Formatted<W> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const W: usize> AsRef<str> for Formatted<W> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const W: usize> fmt::Display for Formatted<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl<const W: usize> fmt::Debug for Formatted<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const W: usize> PartialEq for Formatted<W> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const W: usize> Eq for Formatted<W> {}

impl<const W: usize> PartialEq<str> for Formatted<W> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const W: usize> PartialEq<&str> for Formatted<W> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

fn assert_radix(radix: u32) {
    assert!((2..=36).contains(&radix), "radix must lie in 2..=36, not {}", radix);
}

/// Pushes the unsigned digits of `x`, at least one.
fn push_digits<const W: usize>(out: &mut Formatted<W>, mut x: Wide<W>, radix: u32) {
    loop {
        // high-order zeros contribute nothing to the division
        let n = significant_len(&x.0);
        let digit = div_rem_assign_digit(&mut x.0[..n], radix as Digit);
        out.push_front(ALPHABET[digit as usize]);
        if x.is_zero() {
            break;
        }
    }
}

impl<const W: usize> Wide<W> {
    /// The unsigned value in lowercase digits of `radix`.
    ///
    /// # Panics
    ///
    /// If `radix` is not in `2..=36`.
    pub fn to_str_radix(&self, radix: u32) -> Formatted<W> {
        assert_radix(radix);
        let mut out = Formatted::new();
        push_digits(&mut out, *self, radix);
        out
    }

    /// The two's complement value in lowercase digits of `radix`, with a
    /// leading `-` if negative.
    ///
    /// # Panics
    ///
    /// If `radix` is not in `2..=36`.
    pub fn to_str_radix_signed(&self, radix: u32) -> Formatted<W> {
        assert_radix(radix);
        let mut out = Formatted::new();
        push_digits(&mut out, self.unsigned_abs(), radix);
        if self.is_negative() {
            out.push_front(b'-');
        }
        out
    }
}

impl<const W: usize> fmt::Display for Wide<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_str_radix(10))
    }
}

impl<const W: usize> fmt::LowerHex for Wide<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_str_radix(16))
    }
}

impl<const W: usize> fmt::UpperHex for Wide<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = self.to_str_radix(16);
        digits.make_ascii_uppercase();
        f.pad_integral(true, "0x", &digits)
    }
}

impl<const W: usize> fmt::Octal for Wide<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0o", &self.to_str_radix(8))
    }
}

impl<const W: usize> fmt::Binary for Wide<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.to_str_radix(2))
    }
}

impl<const W: usize> fmt::Display for Signed<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.unsigned_abs().to_str_radix(10))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Wide128, Wide256, Wide64};

    #[test]
    fn radixes() {
        let x = Wide64::from_uint(0xffff_ffff);
        assert_eq!(x.to_str_radix(10), "4294967295");
        assert_eq!(x.to_str_radix(16), "ffffffff");
        assert_eq!(x.to_str_radix(2), "11111111111111111111111111111111");
        assert_eq!(x.to_str_radix(36), "1z141z3");

        assert_eq!(Wide64::ZERO.to_str_radix(10), "0");
        assert_eq!(Wide64::ZERO.to_str_radix_signed(7), "0");
        assert_eq!(Wide64::MAX.to_str_radix(8), "1777777777777777777777");
        assert_eq!(Wide64::MAX.to_str_radix_signed(10), "-1");
        assert_eq!(Wide64::SIGNED_MIN.to_str_radix_signed(10), "-9223372036854775808");
        assert_eq!(Wide64::SIGNED_MIN.to_str_radix_signed(16), "-8000000000000000");
    }

    #[test]
    fn longest() {
        let x = Wide256::SIGNED_MIN.to_str_radix_signed(2);
        assert_eq!(x.len(), 257);
        assert!(x.starts_with("-1"));
        assert!(x[2..].bytes().all(|b| b == b'0'));
        assert_eq!(Wide256::MAX.to_str_radix(2).len(), 256);
    }

    #[test]
    #[should_panic]
    fn radix_too_large() {
        Wide64::ONE.to_str_radix(37);
    }

    #[test]
    fn formatter() {
        let x = Wide128::from_uint(0xbeef);
        assert_eq!(format!("{}", x), "48879");
        assert_eq!(format!("{:x}", x), "beef");
        assert_eq!(format!("{:#X}", x), "0xBEEF");
        assert_eq!(format!("{:o}", x), "137357");
        assert_eq!(format!("{:#b}", Wide64::from_uint(5)), "0b101");
        assert_eq!(format!("{:>8}", x), "   48879");
        assert_eq!(format!("{:08x}", x), "0000beef");

        let minus = Signed(Wide64::from_int(-42));
        assert_eq!(format!("{}", minus), "-42");
        assert_eq!(format!("{:+}", Signed(Wide64::from_int(42))), "+42");
        assert_eq!(format!("{:05}", minus), "-0042");
        assert_eq!(format!("{}", minus.0), "18446744073709551574");
        assert_eq!(format!("[{:<5}]", Wide64::ONE.to_str_radix(10)), "[1    ]");
    }
}
