//! Shape-validated operations over share vectors.
//!
//! Every operation is a free function generic over its value tag(s). Operands
//! are anything implementing [`ShareSource`](shemu_heap::ShareSource) or
//! [`ShareSink`](shemu_heap::ShareSink): heap vectors and host views mix
//! freely.
//!
//! # Contract
//!
//! 1. All operand lengths are validated against the operation's shape rule.
//! 2. Every divisor operand is checked for zero, whole host operands included.
//! 3. Only then is the output written, in full.
//!
//! A call that returns `Err` has written nothing.
//!
//! # Operation families
//!
//! | Module      | Operations |
//! |-------------|------------|
//! | [`arith`]   | add, subtract, multiply, divide, remainder, the `*_external` variants, negate, sign |
//! | [`bitwise`] | and, or, xor, invert, logical_not |
//! | [`compare`] | equal, greater_than, greater_or_equal, less_than, less_or_equal, minimum, maximum |
//! | [`reduce`]  | sum, product, group_min, group_max |
//! | [`convert`] | convert |
//! | [`select`]  | select |
//! | [`random`]  | randomize |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod arith;
pub mod bitwise;
pub mod compare;
pub mod convert;
pub mod error;
pub mod random;
pub mod reduce;
pub mod select;
mod transform;

pub use arith::{
    add, divide, divide_external, multiply, multiply_external, negate, remainder,
    remainder_external, sign, subtract,
};
pub use bitwise::{and, invert, logical_not, or, xor};
pub use compare::{
    equal, greater_or_equal, greater_than, less_or_equal, less_than, maximum, minimum,
};
pub use convert::convert;
pub use error::ExecError;
pub use random::randomize;
pub use reduce::{group_max, group_min, product, sum};
pub use select::select;
