//! Grouped reductions.
//!
//! An input of length `L` reduced into an output of length `M` is split into
//! `M` consecutive groups of `L / M` elements, each reduced in input order
//! into one output slot. `M` must be nonzero and divide `L`.
//!
//! An empty input has no elements to reduce. [`product`] writes its identity
//! (one) when `M` is 1; every other empty-input case is rejected with
//! [`ShapeViolation::EmptyGroups`](shemu_core::ShapeViolation::EmptyGroups).

use num_traits::{AsPrimitive, One, Zero};
use shemu_core::{Arithmetic, OpError, ValueTag};
use shemu_heap::{ShareSink, ShareSource};

use crate::transform::{self, OnEmpty};

/// Per-group sums, accumulated in the output tag `U`.
///
/// Each input share is converted to `U` with `as` semantics before it is
/// added, so summing into a wider tag avoids overflow.
pub fn sum<T, U>(input: &impl ShareSource<T>, out: &mut impl ShareSink<U>) -> Result<(), OpError>
where
    T: ValueTag,
    U: ValueTag,
    T::Repr: AsPrimitive<U::Repr>,
    U::Repr: Arithmetic,
{
    transform::reduce_groups(
        "sum",
        input.shares(),
        out.shares_mut(),
        OnEmpty::Reject,
        |group| {
            group
                .iter()
                .fold(U::Repr::zero(), |acc, &x| acc.add_wrapping(x.as_()))
        },
    )
}

/// Per-group products, accumulated in the output tag `U`.
pub fn product<T, U>(
    input: &impl ShareSource<T>,
    out: &mut impl ShareSink<U>,
) -> Result<(), OpError>
where
    T: ValueTag,
    U: ValueTag,
    T::Repr: AsPrimitive<U::Repr>,
    U::Repr: Arithmetic,
{
    transform::reduce_groups(
        "product",
        input.shares(),
        out.shares_mut(),
        OnEmpty::Identity(U::Repr::one()),
        |group| {
            group
                .iter()
                .fold(U::Repr::one(), |acc, &x| acc.mul_wrapping(x.as_()))
        },
    )
}

/// Per-group minimum. The first of several equal minima is kept.
pub fn group_min<T: ValueTag>(
    input: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError> {
    transform::reduce_groups(
        "group_min",
        input.shares(),
        out.shares_mut(),
        OnEmpty::Reject,
        |group| {
            group[1..]
                .iter()
                .fold(group[0], |best, &x| if x < best { x } else { best })
        },
    )
}

/// Per-group maximum. The first of several equal maxima is kept.
pub fn group_max<T: ValueTag>(
    input: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError> {
    transform::reduce_groups(
        "group_max",
        input.shares(),
        out.shares_mut(),
        OnEmpty::Reject,
        |group| {
            group[1..]
                .iter()
                .fold(group[0], |best, &x| if best < x { x } else { best })
        },
    )
}
