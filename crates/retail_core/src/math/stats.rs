//! Descriptive statistics over numeric slices.
//!
//! All functions are generic over [`Float`] so they work for `f64` and
//! `f32` alike. Moments are population moments (divided by `n`); the
//! Pearson coefficient is invariant to that choice.

use crate::types::RetailError;
use num_traits::Float;

/// Arithmetic mean, or `None` for an empty slice.
///
/// # Examples
/// ```
/// use retail_core::math::stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean::<f64>(&[]), None);
/// ```
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let n = T::from(values.len())?;
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / n)
}

/// Sum of squared deviations from the mean, `Σ(x − x̄)²`.
pub fn sum_squared_deviations<T: Float>(values: &[T]) -> Option<T> {
    let m = mean(values)?;
    Some(values.iter().fold(T::zero(), |acc, &v| acc + (v - m) * (v - m)))
}

/// Sum of cross deviations, `Σ(x − x̄)(y − ȳ)`.
///
/// Returns `None` when the slices are empty or differ in length.
pub fn sum_cross_deviations<T: Float>(xs: &[T], ys: &[T]) -> Option<T> {
    if xs.len() != ys.len() {
        return None;
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;
    Some(
        xs.iter()
            .zip(ys)
            .fold(T::zero(), |acc, (&x, &y)| acc + (x - mx) * (y - my)),
    )
}

/// Whether every value equals the first one exactly.
///
/// Empty slices count as constant. This is the zero-variance test: the
/// computed `Σ(x − x̄)²` of a constant series need not be exactly zero
/// because `x̄` carries rounding error (`[0.1, 0.1, 0.1]` gives ~1e-33).
///
/// # Examples
/// ```
/// use retail_core::math::stats::is_constant;
///
/// assert!(is_constant(&[0.1, 0.1, 0.1]));
/// assert!(!is_constant(&[0.1, 0.2]));
/// ```
pub fn is_constant<T: Float>(values: &[T]) -> bool {
    values.iter().all(|&v| v == values[0])
}

/// Population variance.
///
/// # Examples
/// ```
/// use retail_core::math::stats::variance;
///
/// assert_eq!(variance(&[1.0, 3.0]), Some(1.0));
/// ```
pub fn variance<T: Float>(values: &[T]) -> Option<T> {
    let ss = sum_squared_deviations(values)?;
    Some(ss / T::from(values.len())?)
}

/// Population covariance.
pub fn covariance<T: Float>(xs: &[T], ys: &[T]) -> Option<T> {
    let sxy = sum_cross_deviations(xs, ys)?;
    Some(sxy / T::from(xs.len())?)
}

/// Pearson correlation coefficient.
///
/// # Errors
///
/// - `InvalidInput` if the slices differ in length or either has zero variance
/// - `InsufficientData` if fewer than two pairs are given
///
/// # Examples
/// ```
/// use retail_core::math::stats::pearson;
///
/// let r: f64 = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn pearson<T: Float>(xs: &[T], ys: &[T]) -> Result<T, RetailError> {
    if xs.len() != ys.len() {
        return Err(RetailError::length_mismatch("x", xs.len(), "y", ys.len()));
    }
    if xs.len() < 2 {
        return Err(RetailError::InsufficientData {
            got: xs.len(),
            need: 2,
        });
    }

    if is_constant(xs) || is_constant(ys) {
        return Err(RetailError::InvalidInput(
            "correlation is undefined for a series with zero variance".to_string(),
        ));
    }

    // Lengths are checked above, so the moments are always defined.
    let undefined = || RetailError::InvalidInput("moments are undefined".to_string());
    let var_x = variance(xs).ok_or_else(undefined)?;
    let var_y = variance(ys).ok_or_else(undefined)?;
    let cov = covariance(xs, ys).ok_or_else(undefined)?;

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    // Clamp rounding drift just outside [-1, 1]
    Ok(r.max(-T::one()).min(T::one()))
}
