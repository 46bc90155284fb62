//! End-to-end usage through the facade crate.

use shemu::ops;
use shemu::prelude::*;
use shemu_test_utils::SeededContext;

#[test]
fn reduce_then_compare_through_prelude() {
    let config = HeapConfig::new().with_initial_slots(8).with_max_live_vectors(8);
    let mut heap = TypedHeap::with_config(config).unwrap();

    let data = heap
        .insert(OwnedVector::<Int16>::from_vec(vec![1, 2, 3, 4]))
        .unwrap();
    let sums = heap.alloc::<Int32>(2).unwrap();
    let products = heap.alloc::<Int32>(2).unwrap();
    let larger = heap.alloc::<Bool>(2).unwrap();

    heap.with_output::<Int32, _, ExecError, _>(sums, |heap, out| {
        ops::sum(heap.get(data)?, out)?;
        Ok(())
    })
    .unwrap();
    heap.with_output::<Int32, _, ExecError, _>(products, |heap, out| {
        ops::product(heap.get(data)?, out)?;
        Ok(())
    })
    .unwrap();
    heap.with_output::<Bool, _, ExecError, _>(larger, |heap, out| {
        ops::greater_than(heap.get(products)?, heap.get(sums)?, out)?;
        Ok(())
    })
    .unwrap();

    assert_eq!(heap.get(sums).unwrap().as_slice(), &[3, 7]);
    assert_eq!(heap.get(products).unwrap().as_slice(), &[2, 12]);
    assert_eq!(heap.get(larger).unwrap().as_slice(), &[false, true]);

    let stats = heap.stats();
    assert_eq!(stats[&Int32::TYPE_ID].vectors, 2);
    assert_eq!(heap.len(), 4);
}

#[test]
fn randomized_shares_recombine_with_xor() {
    let mut ctx = SeededContext::new(9);
    let secret = OwnedVector::<Xor32>::from_vec(vec![0xdead_beef, 7, 0]);
    let mut mask = OwnedVector::<Xor32>::new(3);
    let mut masked = OwnedVector::<Xor32>::new(3);
    let mut opened = OwnedVector::<Xor32>::new(3);

    ops::randomize(&mut ctx, &mut mask);
    ops::xor(&secret, &mask, &mut masked).unwrap();
    ops::xor(&masked, &mask, &mut opened).unwrap();

    assert_eq!(opened, secret);
}

#[test]
fn capacity_errors_are_typed() {
    let config = HeapConfig::new().with_initial_slots(1).with_max_live_vectors(1);
    let mut heap = TypedHeap::with_config(config).unwrap();
    heap.alloc::<Float64>(1).unwrap();
    assert_eq!(
        heap.alloc::<Float64>(1),
        Err(HeapError::CapacityExceeded { live: 1, max: 1 })
    );
}
