//! Dynamic entry point for samples arriving as JSON.
//!
//! Typed callers get element-kind and dimensionality checks for free from
//! the compiler. Data decoded from JSON has neither guarantee, so this
//! module runs the full check sequence at runtime before handing back a
//! plain `Vec<f64>` that every statistic accepts:
//!
//! 1. every element must be a number (nested arrays are left to step 4),
//! 2. the value must not be `null`,
//! 3. the array must not be empty,
//! 4. the array must not nest arrays.

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, StatsError};

const ARGUMENT: &str = "values";

/// Converts a JSON array of numbers into a validated sample.
///
/// # Errors
/// - [`StatsError::InvalidType`] if the value is not an array, or an element
///   is neither a number nor an array.
/// - [`StatsError::NullInput`] if the value is `null`.
/// - [`StatsError::EmptyInput`] if the array is empty.
/// - [`StatsError::InvalidShape`] if an element is itself an array.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use u_stats::{json::sample_from_json, stats::mean};
/// let sample = sample_from_json(&json!([1, 2.5, -0.5])).unwrap();
/// assert_eq!(mean(&sample).unwrap(), 1.0);
/// ```
pub fn sample_from_json(value: &Value) -> Result<Vec<f64>> {
    let items = match value {
        Value::Null => return Err(reject(StatsError::NullInput { argument: ARGUMENT })),
        Value::Array(items) => items,
        other => {
            return Err(reject(StatsError::InvalidType {
                argument: ARGUMENT,
                found: kind_of(other).to_owned(),
            }))
        }
    };

    if let Some(bad) = items
        .iter()
        .find(|v| !matches!(v, Value::Number(_) | Value::Array(_)))
    {
        return Err(reject(StatsError::InvalidType {
            argument: ARGUMENT,
            found: kind_of(bad).to_owned(),
        }));
    }
    if items.is_empty() {
        return Err(reject(StatsError::EmptyInput { argument: ARGUMENT }));
    }

    items
        .iter()
        .map(|v| match v {
            Value::Number(n) => n.as_f64().ok_or_else(|| StatsError::InvalidType {
                argument: ARGUMENT,
                found: n.to_string(),
            }),
            _ => Err(StatsError::InvalidShape { argument: ARGUMENT }),
        })
        .collect::<Result<Vec<f64>>>()
        .map_err(reject)
}

fn reject(err: StatsError) -> StatsError {
    debug!(error = %err, "rejected json sample");
    err
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortOrder;
    use crate::stats::ModeResult;
    use serde_json::json;

    #[test]
    fn test_accepts_mixed_numbers() {
        let sample = sample_from_json(&json!([1, -2, 3.5, 18446744073709551615_u64])).unwrap();
        assert_eq!(sample, vec![1.0, -2.0, 3.5, 18_446_744_073_709_551_615.0]);
    }

    #[test]
    fn test_rejects_non_numeric_elements() {
        assert_eq!(
            sample_from_json(&json!([1, "two", 3])),
            Err(StatsError::InvalidType {
                argument: "values",
                found: "string".into()
            })
        );
        assert_eq!(
            sample_from_json(&json!([true])),
            Err(StatsError::InvalidType {
                argument: "values",
                found: "boolean".into()
            })
        );
    }

    #[test]
    fn test_rejects_non_array() {
        assert_eq!(
            sample_from_json(&json!({"a": 1})),
            Err(StatsError::InvalidType {
                argument: "values",
                found: "object".into()
            })
        );
        assert_eq!(
            sample_from_json(&json!(4)),
            Err(StatsError::InvalidType {
                argument: "values",
                found: "number".into()
            })
        );
    }

    #[test]
    fn test_rejects_null_and_empty() {
        assert_eq!(
            sample_from_json(&Value::Null),
            Err(StatsError::NullInput { argument: "values" })
        );
        assert_eq!(
            sample_from_json(&json!([])),
            Err(StatsError::EmptyInput { argument: "values" })
        );
    }

    #[test]
    fn test_rejects_nested_arrays() {
        assert_eq!(
            sample_from_json(&json!([[1, 2], [3, 4]])),
            Err(StatsError::InvalidShape { argument: "values" })
        );
        assert_eq!(
            sample_from_json(&json!([1, [2]])),
            Err(StatsError::InvalidShape { argument: "values" })
        );
    }

    #[test]
    fn test_type_checked_before_shape() {
        assert_eq!(
            sample_from_json(&json!([[1], null])),
            Err(StatsError::InvalidType {
                argument: "values",
                found: "null".into()
            })
        );
    }

    #[test]
    fn test_mode_result_serde() {
        let m = ModeResult::ValueWithCount(2_i32, 2);
        assert_eq!(
            serde_json::to_value(m).unwrap(),
            json!({"ValueWithCount": [2, 2]})
        );
        let back: ModeResult<i32> = serde_json::from_value(json!({"Value": 7})).unwrap();
        assert_eq!(back, ModeResult::Value(7));
    }

    #[test]
    fn test_sort_order_serde() {
        let order: SortOrder = serde_json::from_value(json!("descending")).unwrap();
        assert_eq!(order, SortOrder::Descending);
        assert_eq!(
            serde_json::to_value(SortOrder::Ascending).unwrap(),
            json!("ascending")
        );
    }
}
