//! Property-based tests against the native integer of the same width.

use proptest::prelude::*;

use crate::{DoubleWord, SignedWord, Word};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: if cfg!(feature = "extended-testing") { 10_000 } else { 256 },
        ..ProptestConfig::default()
    }
}

macro_rules! against_native {
    ($name:ident, $W:literal, $u:ty, $i:ty) => {
        mod $name {
            use core::cmp::Ordering;

            use proptest::prelude::*;

            use crate::{BitOp, DivMode, Signed, Wide};

            type X = Wide<$W>;

            fn wide(x: $u) -> X {
                Wide::from_le_bytes(x.to_le_bytes())
            }

            fn native(x: X) -> $u {
                <$u>::from_le_bytes(x.to_le_bytes())
            }

            fn signed(x: X) -> $i {
                <$i>::from_le_bytes(x.to_le_bytes())
            }

            // uniform values are almost always full length, so also shorten them
            fn any_length() -> impl Strategy<Value = $u> {
                (any::<$u>(), 0..(<$u>::BITS)).prop_map(|(x, s)| x >> s)
            }

            fn any_length_signed() -> impl Strategy<Value = $i> {
                (any_length(), any::<bool>()).prop_map(|(x, negate)| {
                    if negate { (x as $i).wrapping_neg() } else { x as $i }
                })
            }

            proptest! {
                #![proptest_config(super::config())]

                #[test]
                fn add_sub_neg(a in any_length(), b in any_length()) {
                    let (x, y) = (wide(a), wide(b));
                    prop_assert_eq!(native(x + y), a.wrapping_add(b));
                    prop_assert_eq!(native(x - y), a.wrapping_sub(b));
                    prop_assert_eq!(native(-x), a.wrapping_neg());
                    prop_assert_eq!(x + -x, X::ZERO);
                    prop_assert_eq!(x.checked_add(y).map(native), a.checked_add(b));
                    prop_assert_eq!(x.checked_sub(y).map(native), a.checked_sub(b));
                }

                #[test]
                fn multiply(a in any_length(), b in any_length()) {
                    let (x, y) = (wide(a), wide(b));
                    prop_assert_eq!(native(x * y), a.wrapping_mul(b));
                    prop_assert_eq!(x.checked_mul(y).map(native), a.checked_mul(b));
                    prop_assert_eq!(
                        signed(x.wrapping_mul_signed(y)),
                        signed(x).wrapping_mul(signed(y)),
                    );
                }

                #[test]
                fn divide(a in any_length(), b in any_length()) {
                    let (x, y) = (wide(a), wide(b));
                    let (q, r) = x.div_rem(y);
                    if b == 0 {
                        prop_assert_eq!((q, r), (X::ZERO, X::ZERO));
                        prop_assert_eq!(x.checked_div_rem(y), None);
                    } else {
                        prop_assert_eq!(native(q), a / b);
                        prop_assert_eq!(native(r), a % b);
                        prop_assert_eq!(q.wrapping_mul(y).wrapping_add(r), x);
                        prop_assert!(r < y);
                    }
                    prop_assert_eq!(x.divide(y, DivMode::Quotient), q);
                    prop_assert_eq!(x.divide(y, DivMode::Remainder), r);
                }

                #[test]
                fn divide_signed(a in any_length_signed(), b in any_length_signed()) {
                    let (x, y) = (wide(a as $u), wide(b as $u));
                    let (q, r) = x.div_rem_signed(y);
                    if b == 0 {
                        prop_assert_eq!((q, r), (X::ZERO, X::ZERO));
                    } else {
                        prop_assert_eq!(signed(q), a.wrapping_div(b));
                        prop_assert_eq!(signed(r), a.wrapping_rem(b));
                    }
                    prop_assert_eq!(Signed(x) / Signed(y), Signed(q));
                    prop_assert_eq!(Signed(x) % Signed(y), Signed(r));
                }

                #[test]
                fn shifts(a in any::<$u>(), bits in 0..(2 * <$u>::BITS)) {
                    let x = wide(a);
                    let in_range = bits < <$u>::BITS;
                    prop_assert_eq!(native(x << bits), if in_range { a << bits } else { 0 });
                    prop_assert_eq!(native(x >> bits), if in_range { a >> bits } else { 0 });
                    prop_assert_eq!(
                        signed(x.shift_right_arithmetic(bits)),
                        (a as $i) >> bits.min(<$u>::BITS - 1),
                    );
                }

                #[test]
                fn bitwise(a in any::<$u>(), b in any::<$u>()) {
                    let (x, y) = (wide(a), wide(b));
                    prop_assert_eq!(native(x & y), a & b);
                    prop_assert_eq!(native(x | y), a | b);
                    prop_assert_eq!(native(x ^ y), a ^ b);
                    prop_assert_eq!(native(!x), !a);
                    prop_assert_eq!(x.bitwise(y, BitOp::Xor), x ^ y);
                }

                #[test]
                fn compare(a in any_length(), b in any_length()) {
                    let (x, y) = (wide(a), wide(b));
                    prop_assert_eq!(x.cmp(&y), a.cmp(&b));
                    prop_assert_eq!(x.cmp_signed(&y), (a as $i).cmp(&(b as $i)));
                    prop_assert_eq!(Signed(x).cmp(&Signed(y)), (a as $i).cmp(&(b as $i)));
                    prop_assert_eq!(x.cmp(&x), Ordering::Equal);
                }

                #[test]
                fn radix_round_trip(a in any_length(), radix in 2u32..=36) {
                    let x = wide(a);
                    let text = x.to_str_radix(radix);
                    prop_assert_eq!(X::from_str_radix(&text, radix), Ok(x));
                    let text = x.to_str_radix_signed(radix);
                    prop_assert_eq!(X::from_str_radix(&text, radix), Ok(x));
                    prop_assert_eq!(X::from_str_partial(&text, radix), (x, text.len()));
                }

                #[test]
                fn formatting(a in any::<$u>(), b in any::<$i>()) {
                    let x = wide(a);
                    prop_assert_eq!(x.to_string(), a.to_string());
                    prop_assert_eq!(format!("{:#x}", x), format!("{:#x}", a));
                    prop_assert_eq!(format!("{:X}", x), format!("{:X}", a));
                    prop_assert_eq!(format!("{:o}", x), format!("{:o}", a));
                    prop_assert_eq!(format!("{:b}", x), format!("{:b}", a));

                    let y = wide(b as $u);
                    prop_assert_eq!(Signed(y).to_string(), b.to_string());
                    let text = y.to_str_radix_signed(10);
                    prop_assert_eq!(text.as_str(), b.to_string());
                }

                #[test]
                fn parsing(a in any::<$u>(), b in any::<$i>()) {
                    prop_assert_eq!(a.to_string().parse::<X>(), Ok(wide(a)));
                    prop_assert_eq!(format!("{:#x}", a).parse::<X>(), Ok(wide(a)));
                    prop_assert_eq!(b.to_string().parse::<Signed<$W>>(), Ok(Signed(wide(b as $u))));
                }

                #[test]
                fn floats(a in any_length(), negate in any::<bool>()) {
                    // exactly representable, so no rounding to disagree about
                    let a = a >> <$u>::BITS.saturating_sub(53);
                    let x = wide(a);
                    prop_assert_eq!(x.to_f64_unsigned(), a as f64);
                    prop_assert_eq!(X::from_f64(a as f64), x);

                    let b = if negate { (a as $i).wrapping_neg() } else { a as $i };
                    let y = wide(b as $u);
                    prop_assert_eq!(y.to_f64(), b as f64);
                    prop_assert_eq!(X::from_f64(b as f64), y);
                }
            }
        }
    };
}

against_native!(wide32, 4, u32, i32);
against_native!(wide64, 8, u64, i64);
against_native!(wide128, 16, u128, i128);

proptest! {
    #![proptest_config(config())]

    #[test]
    fn double_word_native(a in any::<Word>(), b in any::<SignedWord>()) {
        prop_assert_eq!(DoubleWord::from_uint(a).to_uint(), a);
        prop_assert_eq!(DoubleWord::from_int(b).to_int(), b);
        prop_assert_eq!(DoubleWord::from_uint(a).try_to_uint(), Ok(a));
        prop_assert_eq!(DoubleWord::from_int(b).try_to_int(), Ok(b));
        prop_assert_eq!(DoubleWord::from(b).is_negative(), b < 0);
    }

    #[test]
    fn double_word_product(a in any::<Word>(), b in any::<Word>()) {
        let product = DoubleWord::from_uint(a) * DoubleWord::from_uint(b);
        let (q, r) = product.div_rem(DoubleWord::from_uint(a.max(1)));
        prop_assert!(r.is_zero());
        prop_assert_eq!(q.to_uint(), if a == 0 { 0 } else { b });
    }
}
