//! Value tags and the representation traits behind them.
//!
//! A [`ValueTag`] is a zero-sized marker naming how a share is stored: its
//! representation type and its runtime [`HeapTypeId`]. Operations are written
//! once, generically over the tag, and monomorphized per representation.
//!
//! Capabilities are layered so that each operation can ask only for what it
//! needs:
//!
//! - [`Repr`]: every representation (copy, compare, zero test, random fill).
//! - [`Arithmetic`]: wrapping integer or IEEE float arithmetic.
//! - [`ConvertTo`]: value conversion between representations.
//!
//! Bitwise operations use the `std::ops` traits directly, so they are
//! available for integers and `bool` but not for floats.

use std::fmt::Debug;

use num_traits::{AsPrimitive, One, Zero};
use rand::RngCore;

use crate::id::HeapTypeId;

/// Storage type of a share value.
pub trait Repr: Copy + Default + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Whether the value is anything other than zero (or `false`).
    fn is_nonzero(self) -> bool;

    /// Draw a uniformly random bit pattern from `rng`.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

/// Arithmetic following the representation's native behaviour.
///
/// Integers wrap on overflow, including `MIN / -1` and `MIN % -1`. Floats
/// follow IEEE 754. Division and remainder by zero are the caller's problem:
/// the operation engine rejects zero divisors before calling these.
pub trait Arithmetic: Repr + Zero + One {
    /// `self + rhs`.
    fn add_wrapping(self, rhs: Self) -> Self;
    /// `self - rhs`.
    fn sub_wrapping(self, rhs: Self) -> Self;
    /// `self * rhs`.
    fn mul_wrapping(self, rhs: Self) -> Self;
    /// `self / rhs`; `rhs` must be nonzero for integers.
    fn div_wrapping(self, rhs: Self) -> Self;
    /// `self % rhs`; `rhs` must be nonzero for integers.
    fn rem_wrapping(self, rhs: Self) -> Self;
    /// `-self`.
    fn neg_wrapping(self) -> Self;
}

/// Conversion of one share into another representation.
///
/// Numeric targets follow Rust `as` casts: integers truncate or
/// sign-extend, floats saturate toward the integer range with NaN becoming
/// zero. `bool` sources become 0 or 1. Any source converts into `bool` as
/// [`Repr::is_nonzero`].
pub trait ConvertTo<U: Repr>: Repr {
    /// `self` as a `U`.
    fn convert_to(self) -> U;
}

impl<T: Repr> ConvertTo<bool> for T {
    fn convert_to(self) -> bool {
        self.is_nonzero()
    }
}

macro_rules! numeric_conversions {
    (@into $src:ty; $($dst:ty),*) => {$(
        impl ConvertTo<$dst> for $src {
            fn convert_to(self) -> $dst {
                AsPrimitive::<$dst>::as_(self)
            }
        }
    )*};
    ($($src:ty),*) => {
        $(numeric_conversions!(@into $src; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);)*

        $(
            impl ConvertTo<$src> for bool {
                fn convert_to(self) -> $src {
                    if self { <$src>::one() } else { <$src>::zero() }
                }
            }
        )*
    };
}

numeric_conversions!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Compile-time marker for a share representation.
pub trait ValueTag: Copy + Debug + Default + Send + Sync + 'static {
    /// The in-memory representation of one share.
    type Repr: Repr;
    /// Runtime type id stored next to heap vectors of this tag.
    const TYPE_ID: HeapTypeId;
    /// Human-readable tag name.
    const NAME: &'static str;
}

impl Repr for bool {
    fn is_nonzero(self) -> bool {
        self
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        rng.next_u32() & 1 == 1
    }
}

macro_rules! int_repr {
    ($($t:ty),* $(,)?) => {$(
        impl Repr for $t {
            fn is_nonzero(self) -> bool {
                self != 0
            }

            fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$t>()];
                rng.fill_bytes(&mut bytes);
                <$t>::from_le_bytes(bytes)
            }
        }

        impl Arithmetic for $t {
            fn add_wrapping(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }
            fn sub_wrapping(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }
            fn mul_wrapping(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }
            fn div_wrapping(self, rhs: Self) -> Self {
                <$t>::wrapping_div(self, rhs)
            }
            fn rem_wrapping(self, rhs: Self) -> Self {
                <$t>::wrapping_rem(self, rhs)
            }
            fn neg_wrapping(self) -> Self {
                <$t>::wrapping_neg(self)
            }
        }
    )*};
}

int_repr!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! float_repr {
    ($($t:ty => $bits:ty),* $(,)?) => {$(
        impl Repr for $t {
            fn is_nonzero(self) -> bool {
                self != 0.0
            }

            fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                <$t>::from_bits(<$bits as Repr>::random(rng))
            }
        }

        impl Arithmetic for $t {
            fn add_wrapping(self, rhs: Self) -> Self {
                self + rhs
            }
            fn sub_wrapping(self, rhs: Self) -> Self {
                self - rhs
            }
            fn mul_wrapping(self, rhs: Self) -> Self {
                self * rhs
            }
            fn div_wrapping(self, rhs: Self) -> Self {
                self / rhs
            }
            fn rem_wrapping(self, rhs: Self) -> Self {
                self % rhs
            }
            fn neg_wrapping(self) -> Self {
                -self
            }
        }
    )*};
}

float_repr!(f32 => u32, f64 => u64);

macro_rules! value_tags {
    ($($(#[$meta:meta])* $tag:ident => $repr:ty, $id:literal, $name:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $tag;

            impl ValueTag for $tag {
                type Repr = $repr;
                const TYPE_ID: HeapTypeId = HeapTypeId($id);
                const NAME: &'static str = $name;
            }
        )*

        /// Name of the tag registered under `id`, if any.
        pub fn type_name(id: HeapTypeId) -> Option<&'static str> {
            match id.0 {
                $($id => Some($name),)*
                _ => None,
            }
        }
    };
}

value_tags! {
    /// Boolean shares; the output tag of every comparison.
    Bool => bool, 1, "bool";
    /// Additively shared 8-bit signed integers.
    Int8 => i8, 2, "int8";
    /// Additively shared 16-bit signed integers.
    Int16 => i16, 3, "int16";
    /// Additively shared 32-bit signed integers.
    Int32 => i32, 4, "int32";
    /// Additively shared 64-bit signed integers.
    Int64 => i64, 5, "int64";
    /// Additively shared 8-bit unsigned integers.
    Uint8 => u8, 6, "uint8";
    /// Additively shared 16-bit unsigned integers.
    Uint16 => u16, 7, "uint16";
    /// Additively shared 32-bit unsigned integers.
    Uint32 => u32, 8, "uint32";
    /// Additively shared 64-bit unsigned integers.
    Uint64 => u64, 9, "uint64";
    /// Bitwise (xor) shared 8-bit unsigned integers.
    Xor8 => u8, 10, "xor_uint8";
    /// Bitwise (xor) shared 16-bit unsigned integers.
    Xor16 => u16, 11, "xor_uint16";
    /// Bitwise (xor) shared 32-bit unsigned integers.
    Xor32 => u32, 12, "xor_uint32";
    /// Bitwise (xor) shared 64-bit unsigned integers.
    Xor64 => u64, 13, "xor_uint64";
    /// Single-precision float shares.
    Float32 => f32, 14, "float32";
    /// Double-precision float shares.
    Float64 => f64, 15, "float64";
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn type_ids_are_unique() {
        let ids = [
            Bool::TYPE_ID,
            Int8::TYPE_ID,
            Int16::TYPE_ID,
            Int32::TYPE_ID,
            Int64::TYPE_ID,
            Uint8::TYPE_ID,
            Uint16::TYPE_ID,
            Uint32::TYPE_ID,
            Uint64::TYPE_ID,
            Xor8::TYPE_ID,
            Xor16::TYPE_ID,
            Xor32::TYPE_ID,
            Xor64::TYPE_ID,
            Float32::TYPE_ID,
            Float64::TYPE_ID,
        ];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
            assert!(type_name(*a).is_some());
        }
    }

    #[test]
    fn xor_tags_share_repr_but_not_id() {
        assert_ne!(Uint32::TYPE_ID, Xor32::TYPE_ID);
        assert_eq!(
            std::mem::size_of::<<Uint32 as ValueTag>::Repr>(),
            std::mem::size_of::<<Xor32 as ValueTag>::Repr>()
        );
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(i8::MAX.add_wrapping(1), i8::MIN);
        assert_eq!(0u16.sub_wrapping(1), u16::MAX);
        assert_eq!(i32::MIN.div_wrapping(-1), i32::MIN);
        assert_eq!(i32::MIN.rem_wrapping(-1), 0);
        assert_eq!(i64::MIN.neg_wrapping(), i64::MIN);
        assert_eq!(5u8.neg_wrapping(), 251);
    }

    #[test]
    fn float_arithmetic_is_native() {
        assert_eq!(1.5f64.mul_wrapping(2.0), 3.0);
        assert_eq!(7.0f32.rem_wrapping(4.0), 3.0);
        assert!(1.0f64.div_wrapping(0.0).is_infinite());
    }

    #[test]
    fn nonzero_detection() {
        assert!(!0i32.is_nonzero());
        assert!((-1i32).is_nonzero());
        assert!(!(-0.0f32).is_nonzero());
        assert!(true.is_nonzero());
        assert!(!false.is_nonzero());
    }

    #[test]
    fn random_is_deterministic_for_a_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let xs: Vec<u64> = (0..16).map(|_| u64::random(&mut a)).collect();
        let ys: Vec<u64> = (0..16).map(|_| u64::random(&mut b)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().any(|&x| x != xs[0]));
    }

    #[test]
    fn conversions_follow_as_casts() {
        assert_eq!(ConvertTo::<i8>::convert_to(300i16), 44);
        assert_eq!(ConvertTo::<u32>::convert_to(-1i8), u32::MAX);
        assert_eq!(ConvertTo::<i16>::convert_to(f32::NAN), 0);
        assert_eq!(ConvertTo::<u8>::convert_to(1e9f64), u8::MAX);
        assert_eq!(ConvertTo::<f64>::convert_to(true), 1.0);
        assert_eq!(ConvertTo::<u64>::convert_to(false), 0);
    }

    #[test]
    fn conversions_into_bool_test_nonzero() {
        assert!(!ConvertTo::<bool>::convert_to(0i32));
        assert!(ConvertTo::<bool>::convert_to(-3i32));
        assert!(ConvertTo::<bool>::convert_to(0.5f32));
        assert!(!ConvertTo::<bool>::convert_to(-0.0f64));
        assert!(ConvertTo::<bool>::convert_to(true));
    }

    #[test]
    fn random_accepts_trait_objects() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let dyn_rng: &mut dyn RngCore = &mut rng;
        let bits: Vec<bool> = (0..64).map(|_| bool::random(&mut *dyn_rng)).collect();
        assert!(bits.iter().any(|&b| b));
        assert!(bits.iter().any(|&b| !b));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn wrapping_ops_match_std(a in any::<i32>(), b in any::<i32>()) {
                prop_assert_eq!(a.add_wrapping(b), a.wrapping_add(b));
                prop_assert_eq!(a.sub_wrapping(b), a.wrapping_sub(b));
                prop_assert_eq!(a.mul_wrapping(b), a.wrapping_mul(b));
                if b != 0 {
                    prop_assert_eq!(a.div_wrapping(b), a.wrapping_div(b));
                    prop_assert_eq!(a.rem_wrapping(b), a.wrapping_rem(b));
                }
            }

            #[test]
            fn signed_widening_is_lossless(x in any::<i16>()) {
                let wide: i64 = x.convert_to();
                let back: i16 = wide.convert_to();
                prop_assert_eq!(back, x);
            }

            #[test]
            fn bool_target_agrees_with_zero_test(x in any::<u64>()) {
                let flag: bool = x.convert_to();
                prop_assert_eq!(flag, x != 0);
            }
        }
    }
}
