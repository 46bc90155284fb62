//! Benchmark workloads for the shemu share emulator.
//!
//! - [`random_operands`]: a pair of equal-length random vectors
//! - [`nonzero_divisors`]: a random vector with no zero shares
//! - [`populated_heap`]: a heap preloaded with vectors of mixed tags

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use num_traits::One;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shemu_core::{Arithmetic, Float64, Int32, Repr, Uint8, ValueTag};
use shemu_heap::{HeapError, OwnedVector, TypedHeap};

/// Element count used by the reference benchmarks.
pub const REFERENCE_LEN: usize = 10_000;

/// Two random vectors of `len` shares, deterministic in `seed`.
pub fn random_operands<T: ValueTag>(len: usize, seed: u64) -> (OwnedVector<T>, OwnedVector<T>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut a = OwnedVector::new(len);
    let mut b = OwnedVector::new(len);
    a.randomize(&mut rng);
    b.randomize(&mut rng);
    (a, b)
}

/// A random vector of `len` shares with every zero replaced by one.
pub fn nonzero_divisors<T: ValueTag>(len: usize, seed: u64) -> OwnedVector<T>
where
    T::Repr: Arithmetic,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut v = OwnedVector::<T>::new(len);
    v.randomize(&mut rng);
    for x in v.iter_mut() {
        if !x.is_nonzero() {
            *x = T::Repr::one();
        }
    }
    v
}

/// A heap holding `count` vectors of `len` shares, cycling through int32,
/// uint8, and float64 tags.
pub fn populated_heap(count: usize, len: usize) -> Result<TypedHeap, HeapError> {
    let mut heap = TypedHeap::new();
    for i in 0..count {
        match i % 3 {
            0 => {
                heap.alloc::<Int32>(len)?;
            }
            1 => {
                heap.alloc::<Uint8>(len)?;
            }
            _ => {
                heap.alloc::<Float64>(len)?;
            }
        }
    }
    Ok(heap)
}
