//! The validated-transform engine behind every operation.
//!
//! Each helper checks operand shapes first, then writes the whole output.
//! A rejected call returns before the output is touched.

use shemu_core::{OpError, Repr, ShapeViolation};
use tracing::debug;

/// How a second operand's length relates to the primary operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Same length as the primary operand.
    Elementwise,
    /// At least as long as the primary operand; only the prefix is read.
    Prefix,
}

/// What a grouped reduction does when its input is empty.
#[derive(Clone, Copy, Debug)]
pub(crate) enum OnEmpty<O> {
    /// Reject with [`ShapeViolation::EmptyGroups`].
    Reject,
    /// Write this value when the output has exactly one slot.
    Identity(O),
}

pub(crate) fn reject(op: &'static str, violation: ShapeViolation) -> OpError {
    let err = OpError::ShapeMismatch { op, violation };
    debug!(op, error = %err, "operation rejected");
    err
}

fn check_len(op: &'static str, expected: usize, found: usize) -> Result<(), OpError> {
    if expected != found {
        return Err(reject(op, ShapeViolation::LengthMismatch { expected, found }));
    }
    Ok(())
}

/// Validate a second operand against the primary length and return the part
/// of it that will be read.
fn operand<'a, B>(op: &'static str, shape: Shape, len: usize, rhs: &'a [B]) -> Result<&'a [B], OpError> {
    match shape {
        Shape::Elementwise => {
            check_len(op, len, rhs.len())?;
            Ok(rhs)
        }
        Shape::Prefix => rhs.get(..len).ok_or_else(|| {
            reject(
                op,
                ShapeViolation::PrefixTooShort {
                    required: len,
                    available: rhs.len(),
                },
            )
        }),
    }
}

/// Fail on the first zero divisor.
pub(crate) fn check_divisors<B: Repr>(op: &'static str, divisors: &[B]) -> Result<(), OpError> {
    match divisors.iter().position(|d| !d.is_nonzero()) {
        Some(index) => {
            let err = OpError::DivideByZero { op, index };
            debug!(op, index, "operation rejected: zero divisor");
            Err(err)
        }
        None => Ok(()),
    }
}

/// `out[i] = f(input[i])`.
pub(crate) fn map<A: Copy, O>(
    op: &'static str,
    input: &[A],
    out: &mut [O],
    f: impl Fn(A) -> O,
) -> Result<(), OpError> {
    check_len(op, input.len(), out.len())?;
    for (o, &a) in out.iter_mut().zip(input) {
        *o = f(a);
    }
    Ok(())
}

/// `out[i] = f(lhs[i], rhs[i])`.
pub(crate) fn zip<A: Copy, B: Copy, O>(
    op: &'static str,
    shape: Shape,
    lhs: &[A],
    rhs: &[B],
    out: &mut [O],
    f: impl Fn(A, B) -> O,
) -> Result<(), OpError> {
    let rhs = operand(op, shape, lhs.len(), rhs)?;
    check_len(op, lhs.len(), out.len())?;
    for ((o, &a), &b) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = f(a, b);
    }
    Ok(())
}

/// Like [`zip`], but every element of `rhs` must be nonzero, including an
/// unread tail past the prefix.
pub(crate) fn zip_divisors<A: Copy, B: Repr, O>(
    op: &'static str,
    shape: Shape,
    lhs: &[A],
    rhs: &[B],
    out: &mut [O],
    f: impl Fn(A, B) -> O,
) -> Result<(), OpError> {
    let read = operand(op, shape, lhs.len(), rhs)?;
    check_len(op, lhs.len(), out.len())?;
    check_divisors(op, rhs)?;
    zip(op, Shape::Elementwise, lhs, read, out, f)
}

/// `out[i] = f(a[i], b[i], c[i])`, all operands of equal length.
pub(crate) fn zip3<A: Copy, B: Copy, C: Copy, O>(
    op: &'static str,
    a: &[A],
    b: &[B],
    c: &[C],
    out: &mut [O],
    f: impl Fn(A, B, C) -> O,
) -> Result<(), OpError> {
    check_len(op, a.len(), b.len())?;
    check_len(op, a.len(), c.len())?;
    check_len(op, a.len(), out.len())?;
    for (((o, &x), &y), &z) in out.iter_mut().zip(a).zip(b).zip(c) {
        *o = f(x, y, z);
    }
    Ok(())
}

/// Split `input` into `out.len()` consecutive equal groups and write
/// `f(group)` into each output slot.
///
/// `f` is only ever called with a nonempty group.
pub(crate) fn reduce_groups<A, O>(
    op: &'static str,
    input: &[A],
    out: &mut [O],
    on_empty: OnEmpty<O>,
    f: impl Fn(&[A]) -> O,
) -> Result<(), OpError> {
    let groups = out.len();
    if groups == 0 {
        return Err(reject(op, ShapeViolation::EmptyOutput));
    }
    if input.len() % groups != 0 {
        return Err(reject(
            op,
            ShapeViolation::UnevenGroups {
                input: input.len(),
                output: groups,
            },
        ));
    }
    if input.is_empty() {
        return match on_empty {
            OnEmpty::Identity(identity) if groups == 1 => {
                out[0] = identity;
                Ok(())
            }
            _ => Err(reject(op, ShapeViolation::EmptyGroups)),
        };
    }

    let width = input.len() / groups;
    for (o, group) in out.iter_mut().zip(input.chunks_exact(width)) {
        *o = f(group);
    }
    Ok(())
}
