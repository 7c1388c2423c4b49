use core::fmt;

/// Failures of the checked entry points.
///
/// The default operations never fail: they wrap, truncate, saturate or
/// return zero instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// No digit could be read.
    Empty,
    /// Input continues with a character that is not a digit in the radix.
    InvalidDigit,
    /// The value does not fit the target width.
    Overflow,
    /// Floating-point input was NaN.
    NotANumber,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::Empty => "no digits",
            Error::InvalidDigit => "invalid digit",
            Error::Overflow => "value out of range",
            Error::NotANumber => "not a number",
        })
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
