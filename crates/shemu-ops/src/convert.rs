//! Tag conversion.

use shemu_core::{ConvertTo, OpError, ValueTag};
use shemu_heap::{ShareSink, ShareSource};

use crate::transform;

/// `out[i] = input[i]` converted to `U`.
///
/// Numeric targets follow Rust `as` casts: integers truncate or sign-extend,
/// floats saturate toward the integer range (NaN becomes zero), and `bool`
/// becomes 0 or 1. Converting into [`Bool`](shemu_core::Bool) yields `true`
/// for every nonzero share.
pub fn convert<T, U>(input: &impl ShareSource<T>, out: &mut impl ShareSink<U>) -> Result<(), OpError>
where
    T: ValueTag,
    U: ValueTag,
    T::Repr: ConvertTo<U::Repr>,
{
    transform::map("convert", input.shares(), out.shares_mut(), ConvertTo::convert_to)
}
