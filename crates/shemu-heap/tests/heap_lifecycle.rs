//! Integration tests for heap handle lifecycle across tags.

use std::collections::HashMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shemu_core::{Float64, Int32, RawHandle, Uint64, ValueTag, Xor32};
use shemu_heap::{Handle, HeapError, OwnedVector, TypedHeap};

#[test]
fn insert_erase_contains_sequence() {
    let mut heap = TypedHeap::new();
    let h = heap
        .insert(OwnedVector::<Int32>::from_vec(vec![4, 5, 6]))
        .unwrap();

    assert!(matches!(
        heap.erase::<Uint64>(h.raw()),
        Err(HeapError::TypeMismatch { .. })
    ));
    assert!(heap.contains::<Int32>(h));

    assert!(heap.erase::<Int32>(h).is_ok());
    assert!(!heap.contains::<Int32>(h));

    assert_eq!(
        heap.erase::<Int32>(h),
        Err(HeapError::HandleNotFound { handle: h.raw() })
    );
}

#[test]
fn same_repr_different_tag_is_a_mismatch() {
    let mut heap = TypedHeap::new();
    let h = heap.alloc::<Xor32>(3).unwrap();
    let raw: RawHandle = h.into();
    assert!(!heap.contains::<shemu_core::Uint32>(raw));
    assert!(heap.get::<shemu_core::Uint32>(raw).is_err());
    assert!(heap.get::<Xor32>(raw).is_ok());
}

#[test]
fn raw_handle_round_trip_through_host() {
    let mut heap = TypedHeap::new();
    let h = heap.alloc::<Float64>(2).unwrap();
    let wire: u64 = h.raw().0;
    let back: Handle<Float64> = Handle::from_raw(RawHandle(wire));
    assert_eq!(back, h);
    assert_eq!(heap.get::<Float64>(back).unwrap().len(), 2);
}

#[test]
fn randomize_in_place_through_get_mut() {
    let mut heap = TypedHeap::new();
    let h = heap.alloc::<Uint64>(16).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    heap.get_mut::<Uint64>(h).unwrap().randomize(&mut rng);
    assert!(heap.get::<Uint64>(h).unwrap().iter().any(|&x| x != 0));
}

#[test]
fn drop_with_live_vectors_is_clean() {
    let mut heap = TypedHeap::new();
    for n in 0..32 {
        heap.alloc::<Int32>(n).unwrap();
    }
    assert_eq!(heap.len(), 32);
    drop(heap);
}

#[derive(Clone, Debug)]
enum Step {
    Insert(usize),
    Erase(usize),
    EraseWrongTag(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..8).prop_map(Step::Insert),
        (0usize..16).prop_map(Step::Erase),
        (0usize..16).prop_map(Step::EraseWrongTag),
    ]
}

proptest! {
    #[test]
    fn heap_matches_model(steps in proptest::collection::vec(step(), 1..64)) {
        let mut heap = TypedHeap::new();
        let mut issued: Vec<Handle<Int32>> = Vec::new();
        let mut live: HashMap<RawHandle, usize> = HashMap::new();

        for s in steps {
            match s {
                Step::Insert(len) => {
                    let h = heap.alloc::<Int32>(len).unwrap();
                    prop_assert!(!issued.contains(&h), "handle reissued");
                    issued.push(h);
                    live.insert(h.raw(), len);
                }
                Step::Erase(i) => {
                    if let Some(&h) = issued.get(i % issued.len().max(1)) {
                        let res = heap.erase::<Int32>(h);
                        prop_assert_eq!(res.is_ok(), live.remove(&h.raw()).is_some());
                    }
                }
                Step::EraseWrongTag(i) => {
                    if let Some(&h) = issued.get(i % issued.len().max(1)) {
                        let res = heap.erase::<Float64>(h.raw());
                        prop_assert!(res.is_err());
                    }
                }
            }
            prop_assert_eq!(heap.len(), live.len());
        }

        for h in &issued {
            let expected = live.get(&h.raw()).copied();
            prop_assert_eq!(heap.get::<Int32>(*h).ok().map(|v| v.len()), expected);
        }
        let elements: usize = live.values().sum();
        let counted = heap
            .stats()
            .get(&Int32::TYPE_ID)
            .map_or(0, |s| s.elements);
        prop_assert_eq!(counted, elements);
    }
}
