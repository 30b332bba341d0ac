//! Eager materialization of a lazy sequence into an ordered collection.
//!
//! These functions drain whatever remains of a [`SequenceGenerator`] into a
//! `Vec`, preserving pull order. They take the generator by `&mut` rather
//! than by value, so the one-shot cursor contract stays observable: a second
//! materialization of the same (now exhausted) generator yields an empty
//! collection.

use stride_common::{Result, error::Error};

use crate::generator::SequenceGenerator;

/// Drains the remaining values of `generator` into a `Vec`, in pull order.
pub fn materialize(generator: &mut SequenceGenerator) -> Vec<i64> {
    materialize_with(generator, |value| value)
}

/// Drains the remaining values of `generator`, applying `transform` to each
/// value and collecting the results in pull order.
pub fn materialize_with<T>(
    generator: &mut SequenceGenerator,
    mut transform: impl FnMut(i64) -> T,
) -> Vec<T> {
    let mut values = Vec::with_capacity(generator.remaining());
    for value in generator {
        values.push(transform(value));
    }
    values
}

/// Drains the remaining values of `generator`, applying a fallible
/// `transform` to each value.
///
/// Fail-fast: the first transform error aborts the drain, is wrapped as a
/// `TransformFailure` (with the offending value as context and the caller's
/// error as source), and is returned immediately. Partial results are
/// discarded, never returned.
pub fn try_materialize_with<T, E>(
    generator: &mut SequenceGenerator,
    mut transform: impl FnMut(i64) -> std::result::Result<T, E>,
) -> Result<Vec<T>>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let mut values = Vec::with_capacity(generator.remaining());
    for value in generator {
        match transform(value) {
            Ok(item) => values.push(item),
            Err(e) => return Err(Error::transform(format!("value {value}"), e)),
        }
    }
    Ok(values)
}
