//! Public surface checks, one statistic family at a time.

use u_stats::{
    average_deviation, coefficient_of_variation, geometric_mean, harmonic_mean, max, mean,
    mean_rounded, median, min, mode, mode_with_count, range, sort_values, sort_values_by,
    standard_deviation, standard_deviation_rounded, weighted_mean, ModeResult, SortOrder,
    StatsError,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("u_stats=debug"))
        .with_test_writer()
        .try_init();
}

#[test]
fn summary_of_a_single_sample() {
    init_tracing();
    let data = vec![2_i32, 4, 4, 4, 5, 5, 7, 9];

    assert_eq!(mean(&data), Ok(5.0));
    assert_eq!(median(&data), Ok(4.5));
    assert_eq!(mode(&data), Ok(4));
    assert_eq!(min(&data), Ok(2));
    assert_eq!(max(&data), Ok(9));
    assert_eq!(range(&data), Ok(7));
    assert_eq!(standard_deviation(&data), Ok(2.0));
    assert_eq!(average_deviation(&data), Ok(1.5));
    assert_eq!(coefficient_of_variation(&data), Ok(0.4));
    assert_eq!(sort_values(&data), Ok(vec![2, 4, 4, 4, 5, 5, 7, 9]));

    // Nothing above reordered the caller's vector.
    assert_eq!(data, vec![2, 4, 4, 4, 5, 5, 7, 9]);
}

#[test]
fn every_statistic_rejects_an_empty_sample() {
    init_tracing();
    let empty: Vec<f64> = Vec::new();
    let expected = StatsError::EmptyInput { argument: "values" };

    assert_eq!(mean(&empty), Err(expected.clone()));
    assert_eq!(median(&empty), Err(expected.clone()));
    assert_eq!(mode(&empty), Err(expected.clone()));
    assert_eq!(min(&empty), Err(expected.clone()));
    assert_eq!(max(&empty), Err(expected.clone()));
    assert_eq!(range(&empty), Err(expected.clone()));
    assert_eq!(sort_values(&empty), Err(expected.clone()));
    assert_eq!(standard_deviation(&empty), Err(expected.clone()));
    assert_eq!(average_deviation(&empty), Err(expected.clone()));
    assert_eq!(coefficient_of_variation(&empty), Err(expected.clone()));
    assert_eq!(geometric_mean(&empty), Err(expected.clone()));
    assert_eq!(harmonic_mean(&empty), Err(expected.clone()));
    assert_eq!(weighted_mean(&empty, &empty), Err(expected));
}

#[test]
fn every_statistic_rejects_an_absent_sample() {
    init_tracing();
    let absent: Option<Vec<u32>> = None;
    let expected = StatsError::NullInput { argument: "values" };

    assert_eq!(mean(&absent), Err(expected.clone()));
    assert_eq!(median(&absent), Err(expected.clone()));
    assert_eq!(mode_with_count(&absent, true), Err(expected.clone()));
    assert_eq!(range(&absent), Err(expected.clone()));
    assert_eq!(
        sort_values_by(&absent, SortOrder::Descending),
        Err(expected.clone())
    );
    assert_eq!(harmonic_mean(&absent), Err(expected));
}

#[test]
fn present_optional_sample_is_used() {
    let present = Some(vec![1.5_f64, 2.5]);
    assert_eq!(mean(&present), Ok(2.0));
}

#[test]
fn rounding_precision_window() {
    init_tracing();
    let data = [1_i32, 2, 3, 4];
    assert_eq!(mean_rounded(&data, 0), Ok(3.0));
    assert_eq!(
        mean_rounded(&data, -1),
        Err(StatsError::OutOfRange {
            digits: -1,
            min: 0,
            max: 15
        })
    );
    assert_eq!(
        standard_deviation_rounded(&data, 16),
        Err(StatsError::OutOfRange {
            digits: 16,
            min: 0,
            max: 15
        })
    );
}

#[test]
fn weights_of_another_kind() {
    let values = [10_u8, 20, 30];
    let weights = [0.25_f32, 0.25, 0.5];
    assert_eq!(weighted_mean(&values, &weights), Ok(22.5));
    assert_eq!(
        weighted_mean(&values, &weights[..2]),
        Err(StatsError::LengthMismatch {
            values: 3,
            weights: 2
        })
    );
}

#[test]
fn mode_variants() {
    let data = [1_i32, 2, 2, 3];
    assert_eq!(mode(&data), Ok(2));
    assert_eq!(
        mode_with_count(&data, true),
        Ok(ModeResult::ValueWithCount(2, 2))
    );
    assert_eq!(mode(&[1_i32, 1, 2, 2]), Ok(1));
}

#[test]
fn means_of_known_samples() {
    assert_eq!(geometric_mean(&[1_u16, 1, 1, 1]), Ok(1.0));
    let h = harmonic_mean(&[1_i32, 2, 4]).unwrap();
    assert!((h - 1.714_285_714).abs() < 1e-9);
}

#[cfg(feature = "decimal")]
#[test]
fn decimal_samples_stay_exact() {
    use rust_decimal::Decimal;

    let data = [
        Decimal::new(10_01, 2),
        Decimal::new(2_50, 2),
        Decimal::new(7_25, 2),
    ];
    assert_eq!(range(&data), Ok(Decimal::new(7_51, 2)));
    assert_eq!(max(&data), Ok(Decimal::new(10_01, 2)));
    assert_eq!(
        sort_values_by(&data, SortOrder::Descending),
        Ok(vec![
            Decimal::new(10_01, 2),
            Decimal::new(7_25, 2),
            Decimal::new(2_50, 2)
        ])
    );
    assert!((mean(&data).unwrap() - 6.586_666_666).abs() < 1e-8);
}

#[cfg(feature = "json")]
#[test]
fn json_samples_flow_into_statistics() {
    use serde_json::json;
    use u_stats::json::sample_from_json;

    init_tracing();
    let sample = sample_from_json(&json!([2, 4, 4, 4, 5, 5, 7, 9])).unwrap();
    assert_eq!(standard_deviation(&sample), Ok(2.0));

    assert_eq!(
        sample_from_json(&json!([[1.0], [2.0]])),
        Err(StatsError::InvalidShape { argument: "values" })
    );
    assert!(matches!(
        sample_from_json(&json!(["a"])),
        Err(StatsError::InvalidType { .. })
    ));
}
