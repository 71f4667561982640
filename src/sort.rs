//! Ordered copies of a sample.
//!
//! Sorting never touches the caller's data: every entry point returns a
//! freshly allocated `Vec`. Ordering is the element kind's native order:
//! integers compare exactly, floats compare numerically with NaN first.

use crate::error::Result;
use crate::numeric::Numeric;
use crate::sample::{check, AsSample};

/// Direction of [`sort_values_by`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Returns an ascending copy of the sample.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_stats::sort::sort_values;
/// let data = vec![3_i32, 1, 2];
/// assert_eq!(sort_values(&data).unwrap(), vec![1, 2, 3]);
/// assert_eq!(data, vec![3, 1, 2]);
/// ```
pub fn sort_values<T, S>(data: &S) -> Result<Vec<T>>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    sort_values_by(data, SortOrder::Ascending)
}

/// Returns a copy of the sample sorted in `order`.
///
/// The descending result is the exact reverse of the ascending one.
///
/// # Examples
/// ```
/// use u_stats::sort::{sort_values_by, SortOrder};
/// let sorted = sort_values_by(&[0.5_f64, 2.0, -1.0], SortOrder::Descending).unwrap();
/// assert_eq!(sorted, vec![2.0, 0.5, -1.0]);
/// ```
pub fn sort_values_by<T, S>(data: &S, order: SortOrder) -> Result<Vec<T>>
where
    T: Numeric,
    S: AsSample<T> + ?Sized,
{
    let mut sorted = check(data)?.to_vec();
    sorted.sort_unstable_by(Numeric::natural_cmp);
    if order == SortOrder::Descending {
        sorted.reverse();
    }
    Ok(sorted)
}
