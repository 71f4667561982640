//! Supported element kinds.
//!
//! [`Numeric`] is sealed: the closed set of kinds a sample may hold is the
//! signed and unsigned integers of 8 to 64 bits, `f32`, `f64`, and (with the
//! `decimal` feature) [`rust_decimal::Decimal`]. Anything else is rejected at
//! compile time.
//!
//! Statistics with fractional results coerce through [`Numeric::to_f64`].
//! Statistics that return the element kind itself (min, max, range, mode,
//! sorting) stay in native ordering and arithmetic so that large integers do
//! not lose precision in a round-trip through `f64`.

use std::cmp::Ordering;
use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A numeric element kind a sample may be made of.
pub trait Numeric: sealed::Sealed + Copy + Debug {
    /// Human-readable kind name, used in diagnostics.
    const KIND: &'static str;

    /// Converts the element to double precision.
    fn to_f64(self) -> f64;

    /// Native ordering of the kind, total over every value.
    ///
    /// Floats order numerically, so `-0.0` equals `0.0`. NaN ranks below
    /// every other value and all NaNs are equal to each other.
    fn natural_cmp(&self, other: &Self) -> Ordering;

    /// Native subtraction, `None` when the difference does not fit.
    fn checked_sub(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const KIND: &'static str = stringify!($t);

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Numeric for $t {
                const KIND: &'static str = stringify!($t);

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn natural_cmp(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                    }
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float!(f32, f64);

#[cfg(feature = "decimal")]
mod decimal {
    use super::{sealed, Numeric};
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use std::cmp::Ordering;

    impl sealed::Sealed for Decimal {}

    impl Numeric for Decimal {
        const KIND: &'static str = "decimal";

        fn to_f64(self) -> f64 {
            // Every Decimal is within f64 range; the fallback is unreachable.
            ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
        }

        fn natural_cmp(&self, other: &Self) -> Ordering {
            Ord::cmp(self, other)
        }

        fn checked_sub(self, rhs: Self) -> Option<Self> {
            Decimal::checked_sub(self, rhs)
        }
    }
}
