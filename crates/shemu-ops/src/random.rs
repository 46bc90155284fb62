//! Fresh random shares.

use shemu_core::{ExecutionContext, Repr, ValueTag};
use shemu_heap::ShareSink;

/// Overwrite every share of `out` with randomness drawn from `ctx`.
///
/// Every length is valid, so this cannot fail.
pub fn randomize<T: ValueTag>(ctx: &mut impl ExecutionContext, out: &mut impl ShareSink<T>) {
    let rng = ctx.rng();
    for share in out.shares_mut() {
        *share = T::Repr::random(&mut *rng);
    }
}
