//! Conditional selection.

use shemu_core::{OpError, Repr, ValueTag};
use shemu_heap::{ShareSink, ShareSource};

use crate::transform;

/// `out[i] = if selector[i] != 0 { on_true[i] } else { on_false[i] }`.
///
/// The selector may be of any tag; all four operands must have equal length.
pub fn select<S: ValueTag, T: ValueTag>(
    selector: &impl ShareSource<S>,
    on_true: &impl ShareSource<T>,
    on_false: &impl ShareSource<T>,
    out: &mut impl ShareSink<T>,
) -> Result<(), OpError> {
    transform::zip3(
        "select",
        selector.shares(),
        on_true.shares(),
        on_false.shares(),
        out.shares_mut(),
        |s, a, b| if s.is_nonzero() { a } else { b },
    )
}
