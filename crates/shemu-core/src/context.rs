//! The execution context lent to operations.

use rand::RngCore;

/// Caller-supplied context for a single operation call.
///
/// The core only needs one capability from the context: borrowing its
/// randomness source. The context owns the source; operations borrow it for
/// the duration of the call and never seed, store, or replace it.
pub trait ExecutionContext {
    /// Borrow the randomness source.
    fn rng(&mut self) -> &mut dyn RngCore;
}

impl<R: RngCore> ExecutionContext for R {
    fn rng(&mut self) -> &mut dyn RngCore {
        self
    }
}
