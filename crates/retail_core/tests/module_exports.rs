//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Test that statistics functions are accessible via absolute path.
#[test]
fn test_stats_module_exports() {
    use retail_core::math::stats::covariance;
    use retail_core::math::stats::is_constant;
    use retail_core::math::stats::mean;
    use retail_core::math::stats::pearson;
    use retail_core::math::stats::variance;

    let xs = [1.0_f64, 2.0, 3.0];
    let ys = [3.0_f64, 5.0, 4.0];

    assert_eq!(mean(&xs), Some(2.0));
    assert!(variance(&xs).is_some());
    assert!(covariance(&xs, &ys).is_some());
    assert!(pearson(&xs, &ys).is_ok());
    assert!(!is_constant(&xs));
}

/// Test that types are accessible via absolute path and re-exports.
#[test]
fn test_types_module_exports() {
    use retail_core::types::error::RetailError as ErrorByPath;
    use retail_core::types::segment::Segment as SegmentByPath;
    use retail_core::types::series::Series as SeriesByPath;
    use retail_core::types::{RetailError, Segment, Series};

    let series: Series = SeriesByPath::from(vec![1.0, 2.0]);
    assert_eq!(series.len(), 2);

    let segment: Segment = SegmentByPath::full();
    assert_eq!(segment.resolve(&series).unwrap(), (1.0, 2.0));

    let err: RetailError = ErrorByPath::InvalidInput("x".to_string());
    assert!(format!("{}", err).starts_with("Invalid input"));
}

/// Test that the Float re-export works for generic code.
#[test]
fn test_float_reexport() {
    use retail_core::math::Float;

    fn half<T: Float>(x: T) -> T {
        x / (T::one() + T::one())
    }
    assert_eq!(half(3.0_f64), 1.5);
}

/// Test that a series built from a nested table feeds the statistics.
#[test]
fn test_flattened_table_feeds_pearson() {
    use retail_core::math::stats::pearson;
    use retail_core::types::Series;

    let retail_column = vec![vec![1.99], vec![2.49], vec![2.99], vec![3.99]];
    let units_column = vec![vec![50.0], vec![40.0], vec![30.0], vec![20.0]];

    let prices = Series::flatten(&retail_column);
    let units = Series::flatten(&units_column);

    let r = pearson(&prices, &units).unwrap();
    assert!((r + 0.9827076298239906).abs() < 1e-12);
}
