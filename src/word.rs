/// The native machine word. [`Wide`][crate::Wide] holds twice as many bits in its
/// canonical form, [`DoubleWord`][crate::DoubleWord].
///
/// Feature `u32` forces the word to be 32-bit even on 64-bit architectures,
/// feature `u64` forces the word to be 64-bit even on 32-bit architectures.
///
/// This is done only for easier testing (typically embedded targets are 32 bit,
/// while desktop/server targets as 64 bit).
pub type Word = word::Word;

/// Signed counterpart of [`Word`].
pub type SignedWord = word::SignedWord;

/// Number of base-256 digits in a [`Word`].
pub const WORD_DIGITS: usize = core::mem::size_of::<Word>();

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

#[cfg(feature = "u32")]
mod word {
    pub type Word = u32;
    pub type SignedWord = i32;
}

#[cfg(feature = "u64")]
mod word {
    pub type Word = u64;
    pub type SignedWord = i64;
}
