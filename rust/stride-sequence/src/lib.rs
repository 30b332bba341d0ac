//! Lazy arithmetic stepped-sequence primitive.
//!
//! This crate provides a small reusable abstraction: a pull-based producer
//! of arithmetic progression values with an eager-materialization escape
//! hatch. It offers:
//!
//! - **Lazy production**: values are computed one per pull, never allocated
//!   up front, and stopping early never computes unconsumed values.
//! - **Well-founded termination**: a step that does not progress toward the
//!   end bound yields an empty sequence instead of looping forever.
//! - **Eager materialization**: draining a generator into a `Vec`, with an
//!   optional (possibly fallible) per-value transform.
//!
//! # Key Types
//!
//! - [`SequenceDescriptor`] - Validated, immutable `(start, end, step)`
//!   progression parameters
//! - [`SequenceGenerator`] - A lazy, one-shot producer over a descriptor;
//!   the pull operation is its [`Iterator`] implementation
//! - [`materialize`] / [`materialize_with`] / [`try_materialize_with`] -
//!   Eager drains of a generator's remaining values
//!
//! # Example
//!
//! ```
//! use stride_sequence::{SequenceGenerator, materialize};
//!
//! # fn main() -> stride_common::Result<()> {
//! let mut generator = SequenceGenerator::new(1, 100, 10)?;
//! assert_eq!(
//!     materialize(&mut generator),
//!     vec![1, 11, 21, 31, 41, 51, 61, 71, 81, 91],
//! );
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod generator;
pub mod materialize;

pub use descriptor::SequenceDescriptor;
pub use generator::SequenceGenerator;
pub use materialize::{materialize, materialize_with, try_materialize_with};
