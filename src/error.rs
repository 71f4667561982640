//! Error taxonomy for sample validation.

use thiserror::Error;

/// Reasons a statistic refuses to compute.
///
/// Every public function validates its inputs eagerly and reports the first
/// violated check. Degenerate but well-formed inputs (a zero mean, a negative
/// value under a fractional power) are not errors; they surface as IEEE-754
/// infinities or NaN.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// An element is not one of the supported numeric kinds.
    #[error("{argument} is not numerical: found {found}")]
    InvalidType {
        argument: &'static str,
        found: String,
    },

    /// A required sample was not supplied.
    #[error("{argument} is absent")]
    NullInput { argument: &'static str },

    /// A sample has no elements.
    #[error("{argument} is empty")]
    EmptyInput { argument: &'static str },

    /// A sample nests arrays instead of holding plain values.
    #[error("{argument} is not one dimensional")]
    InvalidShape { argument: &'static str },

    /// Values and weights are not paired one to one.
    #[error("lengths differ: {values} values but {weights} weights")]
    LengthMismatch { values: usize, weights: usize },

    /// Rounding precision outside the accepted window.
    #[error("rounding digits must lie within {min}..={max}, got {digits}")]
    OutOfRange { digits: i32, min: u32, max: u32 },

    /// The spread of a sample does not fit in its own element kind.
    #[error("range of {kind} sample overflows")]
    Overflow { kind: &'static str },
}

/// Crate-wide result alias.
pub type Result<T, E = StatsError> = std::result::Result<T, E>;
