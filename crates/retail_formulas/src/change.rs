//! Retail change and price index formulas.

use crate::elementwise::{map2, nonzero_weight, weighted_sum};
use retail_core::types::error::ensure_same_length;
use retail_core::types::RetailError;

/// Fractional change from `old_retail` to `new_retail`.
///
/// # Examples
/// ```
/// use retail_formulas::change::retail_change;
///
/// assert!((retail_change(2.0, 2.5) - 0.25).abs() < 1e-12);
/// ```
pub fn retail_change(old_retail: f64, new_retail: f64) -> f64 {
    (new_retail - old_retail) / old_retail
}

/// Element-wise [`retail_change`].
pub fn retail_change_each(old_retail: &[f64], new_retail: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(
        ("old_retail", old_retail),
        ("new_retail", new_retail),
        retail_change,
    )
}

/// Retail after applying a fractional change.
pub fn retail_after_change(retail: f64, change: f64) -> f64 {
    retail * (1.0 + change)
}

/// Element-wise [`retail_after_change`].
pub fn retail_after_change_each(retail: &[f64], change: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("retail", retail), ("change", change), retail_after_change)
}

/// Price index of `retail` against `base_retail`.
pub fn price_index(base_retail: f64, retail: f64) -> f64 {
    retail / base_retail
}

/// Element-wise [`price_index`].
pub fn price_index_each(base_retail: &[f64], retail: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("base_retail", base_retail), ("retail", retail), price_index)
}

/// Unit-weighted price index `Σu·r / Σu·b`.
///
/// # Errors
/// `InvalidInput` on length mismatch or when the weighted base total is zero.
///
/// # Examples
/// ```
/// use retail_formulas::change::weighted_price_index;
///
/// let index = weighted_price_index(&[2.0, 4.0], &[3.0, 4.0], &[10.0, 5.0]).unwrap();
/// assert!((index - 50.0 / 40.0).abs() < 1e-12);
/// ```
pub fn weighted_price_index(
    base_retail: &[f64],
    retail: &[f64],
    units: &[f64],
) -> Result<f64, RetailError> {
    ensure_same_length("base_retail", base_retail, "retail", retail)?;
    ensure_same_length("base_retail", base_retail, "units", units)?;
    let base = nonzero_weight("base retail", weighted_sum(base_retail, units))?;
    Ok(weighted_sum(retail, units) / base)
}
