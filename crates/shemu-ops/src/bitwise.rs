//! Bitwise and logical operations.
//!
//! Available for integer tags and [`Bool`]; float tags do not implement the
//! bit operators and so cannot be passed here.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use shemu_core::{Bool, OpError, Repr, ValueTag};
use shemu_heap::{ShareSink, ShareSource};

use crate::transform::{self, Shape};

/// `out[i] = lhs[i] & rhs[i]`.
pub fn and<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: BitAnd<Output = T::Repr>,
{
    transform::zip(
        "and",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        |a, b| a & b,
    )
}

/// `out[i] = lhs[i] | rhs[i]`.
pub fn or<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: BitOr<Output = T::Repr>,
{
    transform::zip(
        "or",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        |a, b| a | b,
    )
}

/// `out[i] = lhs[i] ^ rhs[i]`.
pub fn xor<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: BitXor<Output = T::Repr>,
{
    transform::zip(
        "xor",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        |a, b| a ^ b,
    )
}

/// `out[i] = !input[i]`: bitwise complement, or logical negation for [`Bool`].
pub fn invert<T: ValueTag>(
    input: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Not<Output = T::Repr>,
{
    transform::map("invert", input.shares(), out.shares_mut(), |x| !x)
}

/// `out[i]` is true where `input[i]` is zero.
pub fn logical_not<T: ValueTag>(
    input: &impl ShareSource<T>,
    out: &mut impl ShareSink<Bool>,
) -> Result<(), OpError> {
    transform::map("logical_not", input.shares(), out.shares_mut(), |x| {
        !Repr::is_nonzero(x)
    })
}
