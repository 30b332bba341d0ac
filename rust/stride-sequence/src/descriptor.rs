//! Immutable arithmetic progression parameters.

use stride_common::{Result, verify_arg};

/// Parameters of an arithmetic progression: every value from `start` toward
/// `end` (exclusive) in increments of `step`.
///
/// A descriptor is immutable once constructed, and construction guarantees
/// `step != 0`. The sign of `step` determines the direction of progression;
/// a combination whose `step` does not progress from `start` toward `end`
/// (e.g. positive `step` with `end` below `start`) describes an empty
/// sequence rather than a non-terminating one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceDescriptor {
    start: i64,
    end: i64,
    step: i64,
}

impl SequenceDescriptor {
    /// Creates a validated descriptor.
    ///
    /// # Errors
    ///
    /// Fails with an `InvalidArgument` error when `step` is zero. A
    /// "backwards" range is not an error; it describes an empty sequence.
    pub fn new(start: i64, end: i64, step: i64) -> Result<SequenceDescriptor> {
        verify_arg!(step, step != 0);
        Ok(SequenceDescriptor { start, end, step })
    }

    /// First value of the progression (inclusive).
    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Terminal bound of the progression (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Increment applied on each pull. Never zero.
    #[inline]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of values a fresh generator over this descriptor yields.
    ///
    /// Direction-aware ceiling of `(end - start) / step`, and zero when
    /// `step` does not progress toward `end`.
    pub fn len(&self) -> usize {
        self.len_from(self.start)
    }

    /// Returns `true` when a fresh generator over this descriptor would be
    /// exhausted from the outset.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count of values between `from` (inclusive) and `end` (exclusive) in
    /// increments of `step`.
    ///
    /// Computed in `i128` so extreme bounds cannot overflow.
    pub(crate) fn len_from(&self, from: i64) -> usize {
        let span = self.end as i128 - from as i128;
        let step = self.step as i128;
        if span == 0 || (span > 0) != (step > 0) {
            return 0;
        }
        // span and step share a sign here, so the quotient is non-negative
        // and truncation toward zero yields the ceiling of span / step.
        let count = (span + step - step.signum()) / step;
        count as usize
    }
}

impl Default for SequenceDescriptor {
    /// An empty but valid descriptor: `start = 0`, `end = 0`, `step = 1`.
    fn default() -> Self {
        SequenceDescriptor {
            start: 0,
            end: 0,
            step: 1,
        }
    }
}
