//! Price/units correlation.

use retail_core::math::stats::pearson;
use retail_core::types::error::{ensure_finite, ensure_same_length};
use retail_core::types::{RetailError, Series};

/// Pearson correlation coefficient between retail prices and unit sales.
///
/// A strongly negative value indicates demand that falls as price rises.
///
/// # Errors
///
/// - `InvalidInput` if the lengths differ, a value is not finite, or either
///   series has zero variance (the coefficient is undefined, so no NaN is
///   returned)
/// - `InsufficientData` if fewer than two pairs are given
///
/// # Examples
/// ```
/// use retail_analytics::correlation;
///
/// let r = correlation(&[1.99, 2.49, 2.99, 3.99], &[50.0, 40.0, 30.0, 20.0]).unwrap();
/// assert!((r - (-0.9827076298239906)).abs() < 1e-12);
/// ```
pub fn correlation(prices: &[f64], units: &[f64]) -> Result<f64, RetailError> {
    ensure_same_length("prices", prices, "units", units)?;
    ensure_finite("prices", prices)?;
    ensure_finite("units", units)?;
    pearson(prices, units)
}

/// [`correlation`] over nested rows, flattened in row order first.
///
/// Accepts single-column tables or any other row-shaped container.
pub fn correlation_flat<I, J, R, S>(prices: I, units: J) -> Result<f64, RetailError>
where
    I: IntoIterator<Item = R>,
    J: IntoIterator<Item = S>,
    R: AsRef<[f64]>,
    S: AsRef<[f64]>,
{
    let prices = Series::flatten(prices);
    let units = Series::flatten(units);
    correlation(&prices, &units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_value() {
        let r = correlation(&[1.99, 2.49, 2.99, 3.99], &[50.0, 40.0, 30.0, 20.0]).unwrap();
        assert_relative_eq!(r, -0.9827076298239906, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_matches_plain() {
        let rows_p = vec![vec![1.99, 2.49], vec![2.99, 3.99]];
        let rows_u = vec![vec![50.0], vec![40.0], vec![30.0], vec![20.0]];
        let flat = correlation_flat(&rows_p, &rows_u).unwrap();
        let plain = correlation(&[1.99, 2.49, 2.99, 3.99], &[50.0, 40.0, 30.0, 20.0]).unwrap();
        assert_eq!(flat, plain);
    }

    #[test]
    fn test_length_mismatch() {
        let result = correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert!(matches!(result, Err(RetailError::InvalidInput(_))));
    }

    #[test]
    fn test_single_pair() {
        let result = correlation(&[1.0], &[2.0]);
        assert_eq!(result, Err(RetailError::InsufficientData { got: 1, need: 2 }));
    }

    #[test]
    fn test_constant_units_rejected() {
        let result = correlation(&[1.0, 2.0, 3.0], &[10.0, 10.0, 10.0]);
        assert!(matches!(result, Err(RetailError::InvalidInput(_))));
    }

    #[test]
    fn test_inexact_constant_prices_rejected() {
        for price in [0.1, 0.7] {
            let result = correlation(&[price; 3], &[1.0, 2.0, 3.0]);
            assert!(matches!(result, Err(RetailError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_nan_rejected() {
        let result = correlation(&[1.0, f64::NAN], &[2.0, 3.0]);
        assert!(matches!(result, Err(RetailError::InvalidInput(_))));
    }
}
