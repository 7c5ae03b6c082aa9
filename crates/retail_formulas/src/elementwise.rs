//! Element-wise application of scalar formulas.

use retail_core::types::error::ensure_same_length;
use retail_core::types::RetailError;

/// Apply a two-argument formula pairwise.
pub(crate) fn map2<F>(
    (a_name, a): (&str, &[f64]),
    (b_name, b): (&str, &[f64]),
    f: F,
) -> Result<Vec<f64>, RetailError>
where
    F: Fn(f64, f64) -> f64,
{
    ensure_same_length(a_name, a, b_name, b)?;
    Ok(a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
}

/// Apply a three-argument formula element by element.
pub(crate) fn map3<F>(
    (a_name, a): (&str, &[f64]),
    (b_name, b): (&str, &[f64]),
    (c_name, c): (&str, &[f64]),
    f: F,
) -> Result<Vec<f64>, RetailError>
where
    F: Fn(f64, f64, f64) -> f64,
{
    ensure_same_length(a_name, a, b_name, b)?;
    ensure_same_length(a_name, a, c_name, c)?;
    Ok(a.iter()
        .zip(b)
        .zip(c)
        .map(|((&x, &y), &z)| f(x, y, z))
        .collect())
}

/// Apply a four-argument formula element by element.
pub(crate) fn map4<F>(
    (a_name, a): (&str, &[f64]),
    (b_name, b): (&str, &[f64]),
    (c_name, c): (&str, &[f64]),
    (d_name, d): (&str, &[f64]),
    f: F,
) -> Result<Vec<f64>, RetailError>
where
    F: Fn(f64, f64, f64, f64) -> f64,
{
    ensure_same_length(a_name, a, b_name, b)?;
    ensure_same_length(a_name, a, c_name, c)?;
    ensure_same_length(a_name, a, d_name, d)?;
    Ok((0..a.len()).map(|i| f(a[i], b[i], c[i], d[i])).collect())
}

/// Unit-weighted sum `Σ units_i · values_i`.
pub(crate) fn weighted_sum(values: &[f64], units: &[f64]) -> f64 {
    values.iter().zip(units).map(|(&v, &u)| v * u).sum()
}

/// Reject a zero weighting denominator.
pub(crate) fn nonzero_weight(name: &str, total: f64) -> Result<f64, RetailError> {
    if total == 0.0 {
        return Err(RetailError::InvalidInput(format!(
            "unit-weighted {} total is zero",
            name
        )));
    }
    Ok(total)
}
