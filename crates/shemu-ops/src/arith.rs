//! Elementwise arithmetic.
//!
//! Integer tags wrap on overflow; float tags follow IEEE 754. Division and
//! remainder reject any zero divisor before writing, for floats as well as
//! integers.
//!
//! The `*_external` variants take their right operand from host memory. That
//! operand may be longer than the left one; only its leading elements are
//! read, but a divisor operand must be nonzero throughout.

use num_traits::{One, Zero};
use shemu_core::{Arithmetic, OpError, ValueTag};
use shemu_heap::{ImmutableView, ShareSink, ShareSource};

use crate::transform::{self, Shape};

/// `out[i] = lhs[i] + rhs[i]`.
pub fn add<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    transform::zip(
        "add",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        Arithmetic::add_wrapping,
    )
}

/// `out[i] = lhs[i] - rhs[i]`.
pub fn subtract<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    transform::zip(
        "subtract",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        Arithmetic::sub_wrapping,
    )
}

/// `out[i] = lhs[i] * rhs[i]`.
pub fn multiply<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    transform::zip(
        "multiply",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        Arithmetic::mul_wrapping,
    )
}

/// `out[i] = lhs[i] / rhs[i]`, failing on any zero in `rhs`.
pub fn divide<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    transform::zip_divisors(
        "divide",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        Arithmetic::div_wrapping,
    )
}

/// `out[i] = lhs[i] % rhs[i]`, failing on any zero in `rhs`.
///
/// The result takes the sign of the dividend.
pub fn remainder<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    transform::zip_divisors(
        "remainder",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        Arithmetic::rem_wrapping,
    )
}

/// `out[i] = lhs[i] * rhs[i]` with `rhs` in host memory.
pub fn multiply_external<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: ImmutableView<'_, T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    transform::zip(
        "multiply_external",
        Shape::Prefix,
        lhs.shares(),
        rhs.as_slice(),
        out.shares_mut(),
        Arithmetic::mul_wrapping,
    )
}

/// `out[i] = lhs[i] / rhs[i]` with `rhs` in host memory.
///
/// Every element of `rhs` is checked for zero, including those past
/// `lhs.len()` that are never read.
pub fn divide_external<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: ImmutableView<'_, T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    transform::zip_divisors(
        "divide_external",
        Shape::Prefix,
        lhs.shares(),
        rhs.as_slice(),
        out.shares_mut(),
        Arithmetic::div_wrapping,
    )
}

/// `out[i] = lhs[i] % rhs[i]` with `rhs` in host memory.
pub fn remainder_external<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: ImmutableView<'_, T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    transform::zip_divisors(
        "remainder_external",
        Shape::Prefix,
        lhs.shares(),
        rhs.as_slice(),
        out.shares_mut(),
        Arithmetic::rem_wrapping,
    )
}

/// `out[i] = -input[i]`, wrapping for integers.
pub fn negate<T: ValueTag>(
    input: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    transform::map("negate", input.shares(), out.shares_mut(), Arithmetic::neg_wrapping)
}

/// `out[i]` is -1, 0, or 1 as `input[i]` is negative, zero, or positive.
///
/// Unsigned inputs yield only 0 and 1. NaN yields 0.
pub fn sign<T: ValueTag>(
    input: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError>
where
    T::Repr: Arithmetic,
{
    let zero = T::Repr::zero();
    let one = T::Repr::one();
    let minus_one = one.neg_wrapping();
    transform::map("sign", input.shares(), out.shares_mut(), |x| {
        if x > zero {
            one
        } else if x < zero {
            minus_one
        } else {
            zero
        }
    })
}
