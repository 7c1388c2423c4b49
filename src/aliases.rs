//! Type aliases by bit-size; `DoubleWord` depends on the architecture/features.

use crate::{Signed, Wide};
pub use aliases::*;

pub type Wide32 = Wide<4>;
pub type Wide64 = Wide<8>;
pub type Wide128 = Wide<16>;
pub type Wide256 = Wide<32>;

// 32-bit
#[cfg(feature = "u32")]
mod aliases {
    use super::*;

    /// Twice the native word.
    pub type DoubleWord = Wide64;
    pub type SignedDoubleWord = Signed<8>;
}

// 64-bit
#[cfg(feature = "u64")]
mod aliases {
    use super::*;

    /// Twice the native word.
    pub type DoubleWord = Wide128;
    pub type SignedDoubleWord = Signed<16>;
}
