//! Reading [`Wide`] values from text, in radix 2 to 36.
//!
//! The lenient [`Wide::from_str_partial`] follows C's `strtoul`: it skips leading
//! whitespace, takes an optional sign and an optional `0x` prefix, and reads as
//! many digits as fit. [`Wide::from_str_radix`] and [`FromStr`] additionally
//! require that the whole input was consumed.

use core::str::FromStr;

use crate::{Error, Result, Signed, Wide};
use crate::arithmetic::{add_assign_carry, mul_assign_digit};
use crate::numbers::Digit;

/// C's `isspace` in the "C" locale, which unlike [`u8::is_ascii_whitespace`]
/// includes the vertical tab.
fn is_space(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t'..=b'\r')
}

struct Parsed<const W: usize> {
    value: Wide<W>,
    /// Bytes consumed, zero if no digit was read.
    consumed: usize,
    /// Stopped at a valid digit because the value would no longer fit.
    overflow: bool,
}

fn parse<const W: usize>(text: &str, radix: u32) -> Parsed<W> {
    assert!(
        radix == 0 || (2..=36).contains(&radix),
        "radix must be 0 or lie in 2..=36, not {}", radix,
    );

    let bytes = text.as_bytes();
    let mut p = bytes.iter().take_while(|b| is_space(b)).count();

    let negative = match bytes.get(p) {
        Some(b'-') => { p += 1; true }
        Some(b'+') => { p += 1; false }
        _ => false,
    };

    // a prefix only counts if a hex digit follows it
    let hex_prefix = |p: usize| {
        bytes.get(p) == Some(&b'0')
            && matches!(bytes.get(p + 1), Some(b'x' | b'X'))
            && bytes.get(p + 2).is_some_and(u8::is_ascii_hexdigit)
    };

    let radix = match radix {
        0 if bytes.get(p) != Some(&b'0') => 10,
        0 | 16 if hex_prefix(p) => { p += 2; 16 }
        0 => 8,
        radix => radix,
    };

    let start = p;
    let mut value = Wide::ZERO;
    let mut overflow = false;

    while let Some(digit) = bytes.get(p).and_then(|&b| (b as char).to_digit(radix)) {
        let mut next = value;
        if mul_assign_digit(&mut next.0, radix as Digit) != 0
            || add_assign_carry(&mut next.0, &[digit as Digit]) != 0
        {
            overflow = true;
            break;
        }
        value = next;
        p += 1;
    }

    if p == start {
        return Parsed { value: Wide::ZERO, consumed: 0, overflow: false };
    }

    let value = if negative { value.wrapping_neg() } else { value };
    Parsed { value, consumed: p, overflow }
}

impl<const W: usize> Wide<W> {
    /// Reads a number from the start of `text`, returning it along with the
    /// number of bytes consumed.
    ///
    /// `radix` 0 infers the radix from the prefix: `0x` or `0X` for 16, a leading `0`
    /// for 8, otherwise 10. With `radix` 16 an explicit `0x` prefix is allowed.
    /// A leading `-` negates (wrapping) the value read.
    ///
    /// Reading stops at the first character that is not a digit, or at the first
    /// digit that would overflow `W` digits; the value read so far is kept.
    /// If no digit can be read, the result is `(ZERO, 0)`.
    ///
    /// # Panics
    ///
    /// If `radix` is neither 0 nor in `2..=36`.
    pub fn from_str_partial(text: &str, radix: u32) -> (Self, usize) {
        let parsed = parse(text, radix);
        (parsed.value, parsed.consumed)
    }

    /// Like [`Wide::from_str_partial`], but the whole of `text` must be a number.
    ///
    /// # Panics
    ///
    /// If `radix` is neither 0 nor in `2..=36`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        let parsed = parse(text, radix);
        if parsed.consumed == 0 {
            Err(Error::Empty)
        } else if parsed.consumed < text.len() {
            Err(if parsed.overflow { Error::Overflow } else { Error::InvalidDigit })
        } else {
            Ok(parsed.value)
        }
    }
}

impl<const W: usize> FromStr for Wide<W> {
    type Err = Error;

    /// Strict parsing, inferring the radix.
    fn from_str(text: &str) -> Result<Self> {
        Self::from_str_radix(text, 0)
    }
}

impl<const W: usize> FromStr for Signed<W> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Wide::from_str_radix(text, 0).map(Signed)
    }
}
