#![cfg_attr(not(test), no_std)]
//! Fixed-width integers of `W` base-256 digits, typically twice the native word.
//!
//! A [`Wide`] is a plain `Copy` array of digits. Arithmetic wraps modulo $2^{8W}$,
//! division by zero gives zero, and the unsigned or two's complement reading is
//! chosen per operation, or by wrapping the value in [`Signed`].
//!
//! ```
//! use dwa::{DoubleWord, Signed};
//!
//! let x: DoubleWord = "123456789".parse().unwrap();
//! let y = x * x;
//! assert_eq!(y.to_str_radix(10), "15241578750190521");
//! assert_eq!((-Signed(y)).to_string(), "-15241578750190521");
//! ```

mod aliases;
pub use aliases::*;
mod arithmetic;
pub use arithmetic::{BitOp, DivMode, Signed};
mod convert;
mod error;
pub use error::{Error, Result};
mod format;
pub use format::Formatted;
mod numbers;
pub use numbers::Wide;
mod parse;
mod word;
pub use word::{SignedWord, Word, WORD_DIGITS};

#[cfg(test)]
mod proptests;
