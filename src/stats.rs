//! Descriptive statistics over homogeneous numeric samples.
//!
//! Every function validates its sample before computing (see
//! [`crate::sample`]) and fails with a [`StatsError`] describing the first
//! violated check. Structurally valid but degenerate input is not guarded:
//! a zero mean, a zero in a harmonic mean, or a negative product under a
//! fractional power propagate as IEEE-754 infinities or NaN.
//!
//! Functions returning `f64` come in two forms: a plain one and a
//! `_rounded` one taking a precision in `0..=15` decimal digits. Rounding is
//! half away from zero, so `2.5` rounds to `3` and `-2.5` to `-3`.
//!
//! # Algorithms
//!
//! - **Sums**: Neumaier compensated summation for O(ε) error independent
//!   of n.
//! - **Median**: sort of an owned copy; the caller's data is never touched.
//! - **Mode**: index sort grouping equal values, O(n log n).
//! - **Deviations**: two-pass, population (denominator `n`).

use std::cmp::Ordering;

use crate::error::{Result, StatsError};
use crate::numeric::Numeric;
use crate::sample::{check, check_digits, check_paired, round_to, AsSample};

// ---------------------------------------------------------------------------
// Central tendency
// ---------------------------------------------------------------------------

/// Computes the arithmetic mean.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Errors
/// - [`StatsError::NullInput`] if the sample is absent.
/// - [`StatsError::EmptyInput`] if the sample is empty.
///
/// # Examples
/// ```
/// use u_stats::stats::mean;
/// assert_eq!(mean(&[1_i32, 2, 3, 4]).unwrap(), 2.5);
/// ```
pub fn mean<T, S>(data: &S) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    Ok(mean_of(check(data)?))
}

/// Computes the arithmetic mean rounded to `digits` decimals.
///
/// # Errors
/// As [`mean`], plus [`StatsError::OutOfRange`] if `digits` is outside
/// `0..=15`.
///
/// # Examples
/// ```
/// use u_stats::stats::mean_rounded;
/// assert_eq!(mean_rounded(&[1_i32, 2, 3, 4], 0).unwrap(), 3.0);
/// ```
pub fn mean_rounded<T, S>(data: &S, digits: i32) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let values = check(data)?;
    let digits = check_digits(digits)?;
    Ok(round_to(mean_of(values), digits))
}

/// Computes the median without mutating the input.
///
/// Internally copies and sorts the data, then returns the middle element
/// (or the average of the two middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_stats::stats::median;
/// assert_eq!(median(&[3.0_f64, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4_u8, 1, 3, 2]).unwrap(), 2.5);
/// ```
pub fn median<T, S>(data: &S) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    Ok(median_of(check(data)?))
}

/// Computes the median rounded to `digits` decimals.
///
/// Rounding applies to both odd and even sample lengths.
pub fn median_rounded<T, S>(data: &S, digits: i32) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let values = check(data)?;
    let digits = check_digits(digits)?;
    Ok(round_to(median_of(values), digits))
}

/// Outcome of [`mode_with_count`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeResult<T> {
    /// The most frequent value alone.
    Value(T),
    /// The most frequent value and how many times it occurs.
    ValueWithCount(T, usize),
}

impl<T: Copy> ModeResult<T> {
    /// The most frequent value.
    pub fn value(&self) -> T {
        match *self {
            ModeResult::Value(v) | ModeResult::ValueWithCount(v, _) => v,
        }
    }

    /// The occurrence count, when it was requested.
    pub fn count(&self) -> Option<usize> {
        match *self {
            ModeResult::Value(_) => None,
            ModeResult::ValueWithCount(_, n) => Some(n),
        }
    }
}

/// Returns the most frequently occurring value.
///
/// When several values share the highest count, the one that appears first
/// in the sample wins. Equality follows the kind's natural ordering, so for
/// floats `-0.0` and `0.0` count as one value, and so do all NaNs.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_stats::stats::mode;
/// assert_eq!(mode(&[1_i32, 2, 2, 3]).unwrap(), 2);
/// assert_eq!(mode(&[1_i32, 1, 2, 2]).unwrap(), 1);
/// ```
pub fn mode<T, S>(data: &S) -> Result<T>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let (value, _) = tally(check(data)?);
    Ok(value)
}

/// Returns the most frequent value, paired with its count when
/// `include_count` is set.
///
/// # Examples
/// ```
/// use u_stats::stats::{mode_with_count, ModeResult};
/// let m = mode_with_count(&[1_i32, 2, 2, 3], true).unwrap();
/// assert_eq!(m, ModeResult::ValueWithCount(2, 2));
/// ```
pub fn mode_with_count<T, S>(data: &S, include_count: bool) -> Result<ModeResult<T>>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let (value, count) = tally(check(data)?);
    Ok(if include_count {
        ModeResult::ValueWithCount(value, count)
    } else {
        ModeResult::Value(value)
    })
}

/// Computes the weighted mean `Σ(vᵢ·wᵢ) / Σwᵢ`.
///
/// Weights need not be positive or normalized; they are paired with values
/// by position. A zero weight total yields an IEEE infinity or NaN.
///
/// # Errors
/// - [`StatsError::NullInput`] / [`StatsError::EmptyInput`] naming the
///   offending argument (values are checked before weights).
/// - [`StatsError::LengthMismatch`] if the two samples differ in length.
///
/// # Examples
/// ```
/// use u_stats::stats::weighted_mean;
/// let m = weighted_mean(&[1.0_f64, 2.0, 3.0], &[3_u32, 1, 0]).unwrap();
/// assert_eq!(m, 1.25);
/// ```
pub fn weighted_mean<T, U, S, W>(values: &S, weights: &W) -> Result<f64>
where
    T: Numeric,
    U: Numeric,
    S: AsSample<T> + ?Sized,
    W: AsSample<U> + ?Sized,
{
    let (values, weights) = check_paired(values, weights)?;
    Ok(weighted_mean_of(values, weights))
}

/// Computes the weighted mean rounded to `digits` decimals.
pub fn weighted_mean_rounded<T, U, S, W>(values: &S, weights: &W, digits: i32) -> Result<f64>
where
    T: Numeric,
    U: Numeric,
    S: AsSample<T> + ?Sized,
    W: AsSample<U> + ?Sized,
{
    let (values, weights) = check_paired(values, weights)?;
    let digits = check_digits(digits)?;
    Ok(round_to(weighted_mean_of(values, weights), digits))
}

/// Computes the geometric mean `(∏xᵢ)^(1/n)`.
///
/// Only meaningful for positive samples. A zero gives `0`; a negative
/// product gives NaN.
///
/// # Examples
/// ```
/// use u_stats::stats::geometric_mean;
/// assert!((geometric_mean(&[2_u32, 8]).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn geometric_mean<T, S>(data: &S) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    Ok(geometric_mean_of(check(data)?))
}

/// Computes the geometric mean rounded to `digits` decimals.
pub fn geometric_mean_rounded<T, S>(data: &S, digits: i32) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let values = check(data)?;
    let digits = check_digits(digits)?;
    Ok(round_to(geometric_mean_of(values), digits))
}

/// Computes the harmonic mean `n / Σ(1/xᵢ)`.
///
/// A zero anywhere in the sample drives the result to `0` through an
/// infinite reciprocal.
///
/// # Examples
/// ```
/// use u_stats::stats::harmonic_mean;
/// let h = harmonic_mean(&[1_i32, 2, 4]).unwrap();
/// assert!((h - 12.0 / 7.0).abs() < 1e-12);
/// ```
pub fn harmonic_mean<T, S>(data: &S) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    Ok(harmonic_mean_of(check(data)?))
}

/// Computes the harmonic mean rounded to `digits` decimals.
pub fn harmonic_mean_rounded<T, S>(data: &S, digits: i32) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let values = check(data)?;
    let digits = check_digits(digits)?;
    Ok(round_to(harmonic_mean_of(values), digits))
}

// ---------------------------------------------------------------------------
// Extremes
// ---------------------------------------------------------------------------

/// Returns the smallest value by the kind's native ordering.
///
/// NaN ranks below every other float, so a sample holding NaN has NaN as
/// its minimum.
///
/// # Examples
/// ```
/// use u_stats::stats::min;
/// assert_eq!(min(&[3_i64, 1, 4, 1, 5]).unwrap(), 1);
/// ```
pub fn min<T, S>(data: &S) -> Result<T>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    Ok(extreme(check(data)?, Ordering::Less))
}

/// Returns the largest value by the kind's native ordering.
///
/// NaN ranks below every other float and is only the maximum of a sample
/// made entirely of NaN.
///
/// # Examples
/// ```
/// use u_stats::stats::max;
/// assert_eq!(max(&[3_i64, 1, 4, 1, 5]).unwrap(), 5);
/// ```
pub fn max<T, S>(data: &S) -> Result<T>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    Ok(extreme(check(data)?, Ordering::Greater))
}

/// Returns `max − min`, computed in the sample's own kind.
///
/// # Errors
/// As [`min`], plus [`StatsError::Overflow`] when the difference of a
/// signed integer sample does not fit its kind (e.g. `i8` spanning
/// `-128..=127`).
///
/// # Examples
/// ```
/// use u_stats::stats::range;
/// assert_eq!(range(&[7_u8, 2, 9]).unwrap(), 7);
/// ```
pub fn range<T, S>(data: &S) -> Result<T>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let values = check(data)?;
    let hi = extreme(values, Ordering::Greater);
    let lo = extreme(values, Ordering::Less);
    hi.checked_sub(lo)
        .ok_or(StatsError::Overflow { kind: T::KIND })
}

// ---------------------------------------------------------------------------
// Dispersion
// ---------------------------------------------------------------------------

/// Computes the population standard deviation `√(Σ(xᵢ − x̄)² / n)`.
///
/// There is no sample (n − 1) variant.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_stats::stats::standard_deviation;
/// let sd = standard_deviation(&[2_i32, 4, 4, 4, 5, 5, 7, 9]).unwrap();
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn standard_deviation<T, S>(data: &S) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    Ok(standard_deviation_of(check(data)?))
}

/// Computes the population standard deviation rounded to `digits` decimals.
pub fn standard_deviation_rounded<T, S>(data: &S, digits: i32) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let values = check(data)?;
    let digits = check_digits(digits)?;
    Ok(round_to(standard_deviation_of(values), digits))
}

/// Computes the mean absolute deviation `Σ|xᵢ − x̄| / n`.
///
/// # Examples
/// ```
/// use u_stats::stats::average_deviation;
/// assert_eq!(average_deviation(&[1_i32, 2, 3, 4]).unwrap(), 1.0);
/// ```
pub fn average_deviation<T, S>(data: &S) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    Ok(average_deviation_of(check(data)?))
}

/// Computes the mean absolute deviation rounded to `digits` decimals.
pub fn average_deviation_rounded<T, S>(data: &S, digits: i32) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let values = check(data)?;
    let digits = check_digits(digits)?;
    Ok(round_to(average_deviation_of(values), digits))
}

/// Computes the coefficient of variation, standard deviation over mean.
///
/// A zero mean yields an infinity (or NaN for a constant zero sample).
///
/// # Examples
/// ```
/// use u_stats::stats::coefficient_of_variation;
/// let cv = coefficient_of_variation(&[2_i32, 4, 4, 4, 5, 5, 7, 9]).unwrap();
/// assert!((cv - 0.4).abs() < 1e-12);
/// ```
pub fn coefficient_of_variation<T, S>(data: &S) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    Ok(coefficient_of_variation_of(check(data)?))
}

/// Computes the coefficient of variation rounded to `digits` decimals.
pub fn coefficient_of_variation_rounded<T, S>(data: &S, digits: i32) -> Result<f64>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let values = check(data)?;
    let digits = check_digits(digits)?;
    Ok(round_to(coefficient_of_variation_of(values), digits))
}

// ---------------------------------------------------------------------------
// Kernels over validated, non-empty slices
// ---------------------------------------------------------------------------

fn mean_of<T: Numeric>(values: &[T]) -> f64 {
    kahan_sum(values.iter().map(|&x| x.to_f64())) / values.len() as f64
}

fn median_of<T: Numeric>(values: &[T]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(Numeric::natural_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2].to_f64()
    } else {
        (sorted[n / 2 - 1].to_f64() + sorted[n / 2].to_f64()) / 2.0
    }
}

/// Most frequent value and its count, earliest first occurrence on ties.
fn tally<T: Numeric>(values: &[T]) -> (T, usize) {
    // Stable on index, so each run of equal values starts at its first
    // occurrence in the sample.
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].natural_cmp(&values[b]).then(a.cmp(&b)));

    let mut best = (order[0], 0_usize);
    let mut start = 0;
    while start < order.len() {
        let first = order[start];
        let mut end = start + 1;
        while end < order.len() && values[order[end]].natural_cmp(&values[first]).is_eq() {
            end += 1;
        }
        let count = end - start;
        if count > best.1 || (count == best.1 && first < best.0) {
            best = (first, count);
        }
        start = end;
    }
    (values[best.0], best.1)
}

fn weighted_mean_of<T: Numeric, U: Numeric>(values: &[T], weights: &[U]) -> f64 {
    let weighted = kahan_sum(
        values
            .iter()
            .zip(weights)
            .map(|(&v, &w)| v.to_f64() * w.to_f64()),
    );
    let total = kahan_sum(weights.iter().map(|&w| w.to_f64()));
    weighted / total
}

fn geometric_mean_of<T: Numeric>(values: &[T]) -> f64 {
    let product: f64 = values.iter().map(|&x| x.to_f64()).product();
    product.powf(1.0 / values.len() as f64)
}

fn harmonic_mean_of<T: Numeric>(values: &[T]) -> f64 {
    let reciprocals = kahan_sum(values.iter().map(|&x| 1.0 / x.to_f64()));
    values.len() as f64 / reciprocals
}

/// First value that is not beaten in the direction of `wins`.
fn extreme<T: Numeric>(values: &[T], wins: Ordering) -> T {
    values[1..].iter().fold(values[0], |best, &x| {
        if x.natural_cmp(&best) == wins {
            x
        } else {
            best
        }
    })
}

fn standard_deviation_of<T: Numeric>(values: &[T]) -> f64 {
    let m = mean_of(values);
    let squares = kahan_sum(values.iter().map(|&x| {
        let d = x.to_f64() - m;
        d * d
    }));
    (squares / values.len() as f64).sqrt()
}

fn average_deviation_of<T: Numeric>(values: &[T]) -> f64 {
    let m = mean_of(values);
    kahan_sum(values.iter().map(|&x| (x.to_f64() - m).abs())) / values.len() as f64
}

fn coefficient_of_variation_of<T: Numeric>(values: &[T]) -> f64 {
    standard_deviation_of(values) / mean_of(values)
}

// ---------------------------------------------------------------------------
// Kahan compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *Zeitschrift für Angewandte
/// Mathematik und Mechanik* 54(1), pp. 39–51.
fn kahan_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    // Once the running sum leaves the finite range the compensation term
    // is NaN (inf - inf); the plain sum carries the IEEE result.
    if sum.is_finite() {
        sum + c
    } else {
        sum
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
