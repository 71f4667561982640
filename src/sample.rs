//! Sample input and the validation shared by every statistic.
//!
//! A sample reaches the statistics through [`AsSample`], which lets callers
//! pass slices, arrays, vectors, or an `Option` of any of those. `None`
//! stands for an absent sample and is reported as
//! [`StatsError::NullInput`] rather than being silently treated as empty.
//!
//! Checks run in a fixed order and the first failure wins: presence, then
//! emptiness, then (for paired samples) matching lengths, then rounding
//! digits. Element kind and dimensionality are guaranteed by the type system
//! for typed input; the `json` module checks them at runtime.

use tracing::debug;

use crate::error::{Result, StatsError};
use crate::numeric::Numeric;

/// Largest accepted rounding precision, in decimal digits.
pub const MAX_DIGITS: u32 = 15;

/// Anything that can be viewed as a one-dimensional sample of `T`.
///
/// Returns `None` when the sample is absent.
pub trait AsSample<T> {
    fn as_sample(&self) -> Option<&[T]>;
}

impl<T> AsSample<T> for [T] {
    fn as_sample(&self) -> Option<&[T]> {
        Some(self)
    }
}

impl<T, const N: usize> AsSample<T> for [T; N] {
    fn as_sample(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T> AsSample<T> for Vec<T> {
    fn as_sample(&self) -> Option<&[T]> {
        Some(self.as_slice())
    }
}

impl<T, S> AsSample<T> for &S
where
    S: AsSample<T> + ?Sized,
{
    fn as_sample(&self) -> Option<&[T]> {
        (**self).as_sample()
    }
}

impl<T, S> AsSample<T> for Option<S>
where
    S: AsSample<T>,
{
    fn as_sample(&self) -> Option<&[T]> {
        self.as_ref().and_then(AsSample::as_sample)
    }
}

/// Validates a single sample and returns it as a slice.
pub(crate) fn check<T, S>(data: &S) -> Result<&[T]>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    check_named(data, "values")
}

fn check_named<'a, T, S>(data: &'a S, argument: &'static str) -> Result<&'a [T]>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let Some(values) = data.as_sample() else {
        debug!(argument, kind = T::KIND, "rejected absent sample");
        return Err(StatsError::NullInput { argument });
    };
    if values.is_empty() {
        debug!(argument, kind = T::KIND, "rejected empty sample");
        return Err(StatsError::EmptyInput { argument });
    }
    Ok(values)
}

/// Validates a value sample and its positional weights.
///
/// Each sample is checked on its own (values first) before their lengths
/// are compared.
pub(crate) fn check_paired<'a, 'b, T, U, S, W>(
    values: &'a S,
    weights: &'b W,
) -> Result<(&'a [T], &'b [U])>
where
    T: Numeric,
    U: Numeric,
    S: AsSample<T> + ?Sized,
    W: AsSample<U> + ?Sized,
{
    let values = check_named(values, "values")?;
    let weights = check_named(weights, "weights")?;
    if values.len() != weights.len() {
        debug!(
            values = values.len(),
            weights = weights.len(),
            "rejected unpaired weights"
        );
        return Err(StatsError::LengthMismatch {
            values: values.len(),
            weights: weights.len(),
        });
    }
    Ok((values, weights))
}

/// Validates a rounding precision, closed range `0..=MAX_DIGITS`.
pub(crate) fn check_digits(digits: i32) -> Result<u32> {
    match u32::try_from(digits) {
        Ok(d) if d <= MAX_DIGITS => Ok(d),
        _ => {
            debug!(digits, "rejected rounding precision");
            Err(StatsError::OutOfRange {
                digits,
                min: 0,
                max: MAX_DIGITS,
            })
        }
    }
}

/// Rounds `value` to `digits` decimals, halves away from zero.
///
/// Non-finite values pass through. When scaling would push the value past
/// the range where `f64` still resolves fractions, the value is already as
/// precise as it can be and is returned unchanged.
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10_f64.powi(digits as i32);
    let scaled = value * scale;
    // 2^52: above this every f64 is already an integer.
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    scaled.round() / scale
}
