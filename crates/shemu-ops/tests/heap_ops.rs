//! Integration tests running operations on heap handles and host memory.
//!
//! These exercise the full call path a host makes: resolve handles on the
//! heap, view host references, run the operation, and observe the output.

use shemu_core::{Bool, Int32, Int64, OpError, Uint32, Uint8};
use shemu_heap::{HeapError, ImmutableView, MutableView, TypedHeap};
use shemu_ops::{
    add, divide, divide_external, equal, multiply_external, randomize, select, sum, ExecError,
};
use shemu_test_utils::fixtures::{alloc_out, heap_with, owned, vm_cref, vm_ref};
use shemu_test_utils::SeededContext;

#[test]
fn heap_inputs_heap_output() {
    let (mut heap, a) = heap_with::<Int32>(&[1, 2, 3]);
    let b = heap.insert(owned::<Int32>(&[10, 20, 30])).unwrap();
    let r = alloc_out::<Int32>(&mut heap, 3);

    heap.with_output::<Int32, _, ExecError, _>(r, |heap, out| {
        add(heap.get(a)?, heap.get(b)?, out)?;
        Ok(())
    })
    .unwrap();

    assert_eq!(heap.get(r).unwrap().as_slice(), &[11, 22, 33]);
}

#[test]
fn output_aliasing_input_is_busy() {
    let (mut heap, a) = heap_with::<Int32>(&[1, 2, 3]);

    let err = heap
        .with_output::<Int32, _, ExecError, _>(a, |heap, out| {
            add(heap.get(a)?, heap.get(a)?, out)?;
            Ok(())
        })
        .unwrap_err();

    assert_eq!(err, ExecError::Heap(HeapError::HandleBusy { handle: a.raw() }));
    assert_eq!(heap.get(a).unwrap().as_slice(), &[1, 2, 3]);
}

#[test]
fn stale_input_handle_fails_before_writing() {
    let (mut heap, a) = heap_with::<Int32>(&[4, 4]);
    let r = heap.insert(owned::<Int32>(&[9, 9])).unwrap();
    heap.erase::<Int32>(a).unwrap();

    let err = heap
        .with_output::<Int32, _, ExecError, _>(r, |heap, out| {
            divide(heap.get(a)?, heap.get(a)?, out)?;
            Ok(())
        })
        .unwrap_err();

    assert!(matches!(err, ExecError::Heap(HeapError::HandleNotFound { .. })));
    assert_eq!(heap.get(r).unwrap().as_slice(), &[9, 9]);
}

#[test]
fn op_error_surfaces_through_exec_error() {
    let (mut heap, a) = heap_with::<Int32>(&[1, 2]);
    let zeros = heap.insert(owned::<Int32>(&[1, 0])).unwrap();
    let r = alloc_out::<Int32>(&mut heap, 2);

    let err = heap
        .with_output::<Int32, _, ExecError, _>(r, |heap, out| {
            divide(heap.get(a)?, heap.get(zeros)?, out)?;
            Ok(())
        })
        .unwrap_err();

    assert_eq!(
        err,
        ExecError::Op(OpError::DivideByZero {
            op: "divide",
            index: 1,
        })
    );
    assert_eq!(err.to_string(), "divide: zero divisor at index 1");
}

#[test]
fn heap_input_host_operand_host_output() {
    let (heap, a) = heap_with::<Uint32>(&[6, 8, 10]);
    let host_in = [3u32, 2, 5, 99];
    let mut host_out = [0u32; 3];

    {
        // SAFETY: both buffers outlive the views and are not otherwise accessed.
        let rhs: ImmutableView<'_, Uint32> = unsafe { ImmutableView::from_vm_cref(vm_cref(&host_in)) };
        let mut out: MutableView<'_, Uint32> = unsafe { MutableView::from_vm_ref(vm_ref(&mut host_out)) };
        divide_external(heap.get(a).unwrap(), rhs, &mut out).unwrap();
    }

    assert_eq!(host_out, [2, 4, 2]);
}

#[test]
fn malformed_host_reference_is_rejected_by_shape_check() {
    let (heap, a) = heap_with::<Int32>(&[1, 2]);
    let host = [7i32, 7];
    let mut bad = vm_cref(&host);
    bad.size = 7;
    let mut r = owned::<Int32>(&[0, 0]);

    // SAFETY: `host` outlives the view.
    let rhs: ImmutableView<'_, Int32> = unsafe { ImmutableView::from_vm_cref(bad) };
    assert!(rhs.is_empty());
    assert!(multiply_external(heap.get(a).unwrap(), rhs, &mut r).is_err());
    assert_eq!(r.as_slice(), &[0, 0]);
}

#[test]
fn comparison_and_select_pipeline() {
    let mut heap = TypedHeap::new();
    let a = heap.insert(owned::<Uint8>(&[1, 5, 3])).unwrap();
    let b = heap.insert(owned::<Uint8>(&[1, 4, 3])).unwrap();
    let eq = alloc_out::<Bool>(&mut heap, 3);
    let picked = alloc_out::<Uint8>(&mut heap, 3);

    heap.with_output::<Bool, _, ExecError, _>(eq, |heap, out| {
        equal(heap.get(a)?, heap.get(b)?, out)?;
        Ok(())
    })
    .unwrap();
    heap.with_output::<Uint8, _, ExecError, _>(picked, |heap, out| {
        select(heap.get(eq)?, heap.get(a)?, heap.get(b)?, out)?;
        Ok(())
    })
    .unwrap();

    assert_eq!(heap.get(eq).unwrap().as_slice(), &[true, false, true]);
    assert_eq!(heap.get(picked).unwrap().as_slice(), &[1, 4, 3]);
}

#[test]
fn randomize_then_sum_into_wider_tag() {
    let mut heap = TypedHeap::new();
    let noise = alloc_out::<Uint8>(&mut heap, 256);
    let total = alloc_out::<Int64>(&mut heap, 1);
    let mut ctx = SeededContext::new(42);

    randomize(&mut ctx, heap.get_mut(noise).unwrap());
    assert_eq!(ctx.draws(), 1);

    let expected: i64 = heap.get(noise).unwrap().iter().map(|&x| i64::from(x)).sum();
    heap.with_output::<Int64, _, ExecError, _>(total, |heap, out| {
        sum(heap.get(noise)?, out)?;
        Ok(())
    })
    .unwrap();
    assert_eq!(heap.get(total).unwrap()[0], expected);
}
