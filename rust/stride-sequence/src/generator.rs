//! Pull-based lazy producer of arithmetic sequence values.

use stride_common::Result;

use crate::descriptor::SequenceDescriptor;

/// Mutable progress state of a single generator instance.
#[derive(Debug, Clone)]
struct Cursor {
    /// Next value to be yielded, when not exhausted.
    current: i64,
    /// Terminal flag; once set it is never cleared.
    exhausted: bool,
}

/// A lazy, one-shot producer of the values described by a
/// [`SequenceDescriptor`].
///
/// Values are computed one per pull; nothing is allocated up front. The pull
/// operation is [`Iterator::next`]: `Some(value)` yields the cursor's current
/// value and advances it, `None` reports exhaustion. Exhaustion is a normal
/// terminal state, not an error, and is idempotent: once `None` has been
/// returned, every subsequent pull returns `None` (the generator implements
/// [`std::iter::FusedIterator`]).
///
/// Generators are **one-shot**: there is no rewind or replay. Re-iterating
/// the same range requires constructing a fresh generator. This keeps the
/// cursor state trivial and makes accidental re-entrancy impossible.
///
/// A generator's cursor is owned by one logical consumer; callers needing
/// concurrent consumption construct independent generators (or clone one
/// before it is pulled).
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    descriptor: SequenceDescriptor,
    cursor: Cursor,
}

impl SequenceGenerator {
    /// Creates a generator yielding `start`, `start + step`, ... up to but
    /// never including `end`.
    ///
    /// # Errors
    ///
    /// Fails with an `InvalidArgument` error when `step == 0`. A
    /// sign-mismatched range (positive `step` with `end` below `start`, or
    /// the mirror case) does not fail; it yields a generator that is
    /// exhausted from the outset.
    pub fn new(start: i64, end: i64, step: i64) -> Result<SequenceGenerator> {
        Ok(Self::from_descriptor(SequenceDescriptor::new(
            start, end, step,
        )?))
    }

    /// Creates a generator from an already-validated descriptor.
    pub fn from_descriptor(descriptor: SequenceDescriptor) -> SequenceGenerator {
        let cursor = Cursor {
            current: descriptor.start(),
            exhausted: descriptor.is_empty(),
        };
        SequenceGenerator { descriptor, cursor }
    }

    /// The immutable progression parameters this generator was created with.
    #[inline]
    pub fn descriptor(&self) -> &SequenceDescriptor {
        &self.descriptor
    }

    /// Whether the terminal state has been reached.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.exhausted
    }

    /// Number of values not yet pulled.
    pub fn remaining(&self) -> usize {
        if self.cursor.exhausted {
            0
        } else {
            self.descriptor.len_from(self.cursor.current)
        }
    }
}

impl Iterator for SequenceGenerator {
    type Item = i64;

    /// Pulls the next value and advances the cursor.
    #[inline]
    fn next(&mut self) -> Option<i64> {
        if self.cursor.exhausted {
            return None;
        }
        let value = self.cursor.current;
        let step = self.descriptor.step();
        match value.checked_add(step) {
            Some(next) if !crossed(next, self.descriptor.end(), step) => {
                self.cursor.current = next;
            }
            // The next value either crosses `end` or is unrepresentable in
            // i64. An unrepresentable value lies past `end` as well: a live
            // cursor has not crossed `end`, so `end` sits between `current`
            // and the numeric bound in the direction of travel.
            _ => self.cursor.exhausted = true,
        }
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SequenceGenerator {}

impl std::iter::FusedIterator for SequenceGenerator {}

/// Direction-aware test of whether `value` has reached or passed `end`.
#[inline]
fn crossed(value: i64, end: i64, step: i64) -> bool {
    if step > 0 { value >= end } else { value <= end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_common::error::ErrorKind;

    #[test]
    fn test_ascending_pull_order() {
        let generator = SequenceGenerator::new(0, 10, 1).unwrap();
        let values: Vec<i64> = generator.collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_stepped_ascending() {
        let generator = SequenceGenerator::new(1, 100, 10).unwrap();
        let values: Vec<i64> = generator.collect();
        assert_eq!(values, vec![1, 11, 21, 31, 41, 51, 61, 71, 81, 91]);
    }

    #[test]
    fn test_descending() {
        let generator = SequenceGenerator::new(10, 0, -2).unwrap();
        let values: Vec<i64> = generator.collect();
        assert_eq!(values, vec![10, 8, 6, 4, 2]);
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = SequenceGenerator::new(3, 7, 0).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
    }

    #[test]
    fn test_backwards_range_is_empty_not_infinite() {
        let mut generator = SequenceGenerator::new(10, 0, 1).unwrap();
        assert!(generator.is_exhausted());
        assert_eq!(generator.next(), None);

        let mut generator = SequenceGenerator::new(0, 10, -1).unwrap();
        assert!(generator.is_exhausted());
        assert_eq!(generator.next(), None);
    }

    #[test]
    fn test_start_equals_end_is_empty() {
        let mut generator = SequenceGenerator::new(5, 5, 1).unwrap();
        assert_eq!(generator.next(), None);
    }

    #[test]
    fn test_exhaustion_is_idempotent() {
        let mut generator = SequenceGenerator::new(0, 3, 1).unwrap();
        assert_eq!(generator.by_ref().count(), 3);
        assert!(generator.is_exhausted());
        for _ in 0..4 {
            assert_eq!(generator.next(), None);
        }
    }

    #[test]
    fn test_early_termination_computes_nothing_extra() {
        let mut computed = 0usize;
        let mut generator = SequenceGenerator::new(0, 1000, 1).unwrap();
        let head: Vec<i64> = generator
            .by_ref()
            .map(|v| {
                computed += 1;
                v
            })
            .take(3)
            .collect();
        assert_eq!(head, vec![0, 1, 2]);
        assert_eq!(computed, 3);
        assert_eq!(generator.remaining(), 997);
        assert!(!generator.is_exhausted());
    }

    #[test]
    fn test_one_shot_requires_fresh_generator() {
        let mut generator = SequenceGenerator::new(0, 4, 1).unwrap();
        assert_eq!(generator.by_ref().count(), 4);
        // A drained generator stays empty; only a new one replays the range.
        assert_eq!(generator.by_ref().count(), 0);
        let replay = SequenceGenerator::new(0, 4, 1).unwrap();
        assert_eq!(replay.count(), 4);
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut generator = SequenceGenerator::new(1, 100, 10).unwrap();
        assert_eq!(generator.len(), 10);
        assert_eq!(generator.size_hint(), (10, Some(10)));
        generator.next();
        generator.next();
        generator.next();
        assert_eq!(generator.remaining(), 7);
        assert_eq!(generator.size_hint(), (7, Some(7)));
    }

    #[test]
    fn test_cursor_overflow_terminates() {
        let generator = SequenceGenerator::new(i64::MAX - 3, i64::MAX, 2).unwrap();
        let values: Vec<i64> = generator.collect();
        assert_eq!(values, vec![i64::MAX - 3, i64::MAX - 1]);
    }

    #[test]
    fn test_cursor_underflow_terminates() {
        let generator = SequenceGenerator::new(i64::MIN + 3, i64::MIN, -2).unwrap();
        let values: Vec<i64> = generator.collect();
        assert_eq!(values, vec![i64::MIN + 3, i64::MIN + 1]);
    }

    #[test]
    fn test_clone_before_pulling_is_independent() {
        let mut first = SequenceGenerator::new(0, 5, 1).unwrap();
        let mut second = first.clone();
        assert_eq!(first.by_ref().count(), 5);
        assert_eq!(second.next(), Some(0));
    }

    #[test]
    fn test_randomized_descriptor_coverage() {
        for _ in 0..1000 {
            let start = fastrand::i64(-1000..=1000);
            let end = fastrand::i64(-1000..=1000);
            let step = loop {
                let s = fastrand::i64(-50..=50);
                if s != 0 {
                    break s;
                }
            };
            let generator = SequenceGenerator::new(start, end, step).unwrap();
            let expected_len = generator.descriptor().len();
            let values: Vec<i64> = generator.collect();
            assert_eq!(values.len(), expected_len, "({start}, {end}, {step})");
            if let Some(&first) = values.first() {
                assert_eq!(first, start);
            }
            for window in values.windows(2) {
                assert_eq!(window[1] - window[0], step);
            }
            for &v in &values {
                if step > 0 {
                    assert!(v >= start && v < end);
                } else {
                    assert!(v <= start && v > end);
                }
            }
        }
    }
}
