//! # u-stats
//!
//! Descriptive statistics for the U-Engine ecosystem.
//!
//! This crate summarizes homogeneous one-dimensional numeric samples: mean,
//! median, mode, extremes, range, deviations, and weighted, geometric and
//! harmonic means. It knows nothing about where the numbers come from.
//!
//! ## Modules
//!
//! - [`stats`] — Central tendency and dispersion
//! - [`sort`] — Ordered copies of a sample
//! - [`numeric`] — The closed set of supported element kinds
//! - [`sample`] — Sample input and shared validation
//! - [`json`] — Runtime-checked samples decoded from JSON (feature `json`)
//!
//! ## Design Philosophy
//!
//! - **Fail fast**: every function validates before computing and returns a
//!   [`StatsError`] naming the first violated check
//! - **Never mutate input**: sorting works on owned copies
//! - **Native where it matters**: min, max, range, mode and sorting use the
//!   element kind's own ordering and arithmetic; everything fractional goes
//!   through one `f64` conversion
//! - **Property-based testing**: invariants verified via proptest
//!
//! ```
//! use u_stats::{mean_rounded, mode_with_count, range, ModeResult};
//!
//! let data = [1_i32, 2, 2, 3];
//! assert_eq!(mean_rounded(&data, 0).unwrap(), 2.0);
//! assert_eq!(mode_with_count(&data, true).unwrap(), ModeResult::ValueWithCount(2, 2));
//! assert_eq!(range(&data).unwrap(), 2);
//! ```

pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod numeric;
pub mod sample;
pub mod sort;
pub mod stats;

pub use error::{Result, StatsError};
pub use numeric::Numeric;
pub use sample::{AsSample, MAX_DIGITS};
pub use sort::{sort_values, sort_values_by, SortOrder};
pub use stats::{
    average_deviation, average_deviation_rounded, coefficient_of_variation,
    coefficient_of_variation_rounded, geometric_mean, geometric_mean_rounded, harmonic_mean,
    harmonic_mean_rounded, max, mean, mean_rounded, median, median_rounded, min, mode,
    mode_with_count, range, standard_deviation, standard_deviation_rounded, weighted_mean,
    weighted_mean_rounded, ModeResult,
};
