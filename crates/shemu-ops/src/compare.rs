//! Comparisons and elementwise extrema.
//!
//! Comparisons write [`Bool`] shares under the representation's native
//! ordering; any comparison involving NaN is false.

use shemu_core::{Bool, OpError, ValueTag};
use shemu_heap::{ShareSink, ShareSource};

use crate::transform::{self, Shape};

macro_rules! comparison {
    ($($(#[$meta:meta])* $name:ident => $op:tt;)*) => {$(
        $(#[$meta])*
        pub fn $name<T: ValueTag>(
            lhs: &impl ShareSource<T>,
            rhs: &impl ShareSource<T>,
            out: &mut impl ShareSink<Bool>,
        ) -> Result<(), OpError> {
            transform::zip(
                stringify!($name),
                Shape::Elementwise,
                lhs.shares(),
                rhs.shares(),
                out.shares_mut(),
                |a, b| a $op b,
            )
        }
    )*};
}

comparison! {
    /// `out[i] = lhs[i] == rhs[i]`.
    equal => ==;
    /// `out[i] = lhs[i] > rhs[i]`.
    greater_than => >;
    /// `out[i] = lhs[i] >= rhs[i]`.
    greater_or_equal => >=;
    /// `out[i] = lhs[i] < rhs[i]`.
    less_than => <;
    /// `out[i] = lhs[i] <= rhs[i]`.
    less_or_equal => <=;
}

/// `out[i]` is the smaller of `lhs[i]` and `rhs[i]`, preferring `rhs` when
/// neither is less.
pub fn minimum<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError> {
    transform::zip(
        "minimum",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        |a, b| if a < b { a } else { b },
    )
}

/// `out[i]` is the larger of `lhs[i]` and `rhs[i]`, preferring `rhs` when
/// neither is greater.
pub fn maximum<T: ValueTag>(
    lhs: &impl ShareSource<T>,
    rhs: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError> {
    transform::zip(
        "maximum",
        Shape::Elementwise,
        lhs.shares(),
        rhs.shares(),
        out.shares_mut(),
        |a, b| if a > b { a } else { b },
    )
}
