use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::{Signed, Wide};

/// Digit-wise boolean operation, see [`Wide::bitwise`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitOp {
    And,
    Xor,
    Or,
}

impl BitOp {
    #[inline]
    fn apply(self, x: u8, y: u8) -> u8 {
        match self {
            BitOp::And => x & y,
            BitOp::Xor => x ^ y,
            BitOp::Or => x | y,
        }
    }
}

impl<const W: usize> Wide<W> {
    /// Every bit flipped (one's complement).
    pub fn complement(self) -> Self {
        let mut flipped = self;
        flipped.0.iter_mut().for_each(|d| *d = !*d);
        flipped
    }

    pub fn bitwise(self, other: Self, op: BitOp) -> Self {
        let mut result = self;
        for (x, y) in result.0.iter_mut().zip(other.0.iter()) {
            *x = op.apply(*x, *y);
        }
        result
    }
}

impl<const W: usize> Not for Wide<W> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl<const W: usize> Not for Signed<W> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Signed(self.0.complement())
    }
}

macro_rules! impl_bitop {
    ($Trait:ident::$method:ident, $AssignTrait:ident::$assign_method:ident, $op:expr) => {
        impl<const W: usize> $Trait for Wide<W> {
            type Output = Self;

            fn $method(self, other: Self) -> Self::Output {
                self.bitwise(other, $op)
            }
        }

        impl<const W: usize> $AssignTrait for Wide<W> {
            fn $assign_method(&mut self, other: Self) {
                *self = self.bitwise(other, $op);
            }
        }

        impl<const W: usize> $Trait for Signed<W> {
            type Output = Self;

            fn $method(self, other: Self) -> Self::Output {
                Signed(self.0.bitwise(other.0, $op))
            }
        }

        impl<const W: usize> $AssignTrait for Signed<W> {
            fn $assign_method(&mut self, other: Self) {
                self.0 = self.0.bitwise(other.0, $op);
            }
        }
    };
}

impl_bitop!(BitAnd::bitand, BitAndAssign::bitand_assign, BitOp::And);
impl_bitop!(BitOr::bitor, BitOrAssign::bitor_assign, BitOp::Or);
impl_bitop!(BitXor::bitxor, BitXorAssign::bitxor_assign, BitOp::Xor);

#[cfg(test)]
mod test {
    use super::*;
    use crate::Wide64;

    #[test]
    fn operations() {
        let x = Wide64::from_uint(0xffff_ffff);
        assert_eq!(x.bitwise(x, BitOp::Xor), Wide64::ZERO);
        assert_eq!(x.bitwise(x, BitOp::And), x);

        let y = Wide64::from_int(-1).shift_left(30);
        assert_eq!(y.to_str_radix(16), "ffffffffc0000000");
        assert_eq!((x | y).to_str_radix(16), "ffffffffffffffff");
        assert_eq!(x.bitwise(y, BitOp::Or), Wide64::MAX);

        let z = x.shift_left(33);
        assert_eq!((z & y).to_str_radix(16), "fffffffe00000000");
        assert_eq!((z ^ y).to_str_radix(16), "1c0000000");
    }

    #[test]
    fn complement() {
        assert_eq!(!Wide64::ZERO, Wide64::MAX);
        assert_eq!(Wide64::SIGNED_MAX.complement(), Wide64::SIGNED_MIN);
        assert_eq!(!Signed(Wide64::from_int(5)), Signed(Wide64::from_int(-6)));
    }

    #[test]
    fn assignment() {
        let mut x = Wide64::from_uint(0b1100);
        x &= Wide64::from_uint(0b1010);
        assert_eq!(x, Wide64::from_uint(0b1000));
        x |= Wide64::from_uint(0b0001);
        assert_eq!(x, Wide64::from_uint(0b1001));
        x ^= Wide64::from_uint(0b1111);
        assert_eq!(x, Wide64::from_uint(0b0110));

        let mut s = Signed::<8>::MINUS_ONE;
        s &= Signed(Wide64::from_uint(0xff));
        assert_eq!(s, Signed(Wide64::from_uint(0xff)));
    }
}
