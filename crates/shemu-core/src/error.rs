//! Error types for the operation engine.
//!
//! Every operation either succeeds having written all of its output, or
//! fails with one of these errors having written nothing.

use thiserror::Error;

/// Why a set of operand lengths was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    /// An operand or the output did not have the common length.
    #[error("expected length {expected}, found {found}")]
    LengthMismatch {
        /// Length every operand had to match.
        expected: usize,
        /// Offending length.
        found: usize,
    },
    /// A host-owned operand is shorter than the primary operand.
    #[error("external operand holds {available} elements, {required} required")]
    PrefixTooShort {
        /// Length of the primary operand.
        required: usize,
        /// Length of the external operand.
        available: usize,
    },
    /// A reduction was asked to produce zero groups.
    #[error("reduction output is empty")]
    EmptyOutput,
    /// The input does not split into equally sized groups.
    #[error("input length {input} is not a multiple of output length {output}")]
    UnevenGroups {
        /// Input length.
        input: usize,
        /// Output length (group count).
        output: usize,
    },
    /// A reduction without an identity element received empty groups.
    #[error("reduction over empty groups has no defined result")]
    EmptyGroups,
}

/// Errors returned by the operation engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OpError {
    /// Operand lengths violate the operation's shape rule.
    #[error("{op}: shape mismatch: {violation}")]
    ShapeMismatch {
        /// Name of the rejected operation.
        op: &'static str,
        /// The violated rule.
        violation: ShapeViolation,
    },
    /// A divisor in the validated range is zero.
    #[error("{op}: zero divisor at index {index}")]
    DivideByZero {
        /// Name of the rejected operation.
        op: &'static str,
        /// Index of the first zero divisor.
        index: usize,
    },
}

impl OpError {
    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { op, .. } | Self::DivideByZero { op, .. } => op,
        }
    }
}
