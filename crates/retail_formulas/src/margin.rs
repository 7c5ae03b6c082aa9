//! Margin and markup formulas.
//!
//! - Margin: `(retail − cost) / retail`
//! - Markup: `(retail − cost) / cost`
//!
//! Unit-weighted forms aggregate dollar sales before taking the ratio,
//! so high-volume items dominate.

use crate::elementwise::{map2, nonzero_weight, weighted_sum};
use retail_core::types::error::ensure_same_length;
use retail_core::types::RetailError;

/// Margin as a fraction of retail.
///
/// # Examples
/// ```
/// use retail_formulas::margin::margin;
///
/// assert!((margin(7.5, 10.0) - 0.25).abs() < 1e-12);
/// ```
pub fn margin(cost: f64, retail: f64) -> f64 {
    (retail - cost) / retail
}

/// Element-wise [`margin`].
pub fn margin_each(cost: &[f64], retail: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("cost", cost), ("retail", retail), margin)
}

/// Unit-weighted margin `(Σu·r − Σu·c) / Σu·r`.
///
/// # Errors
/// `InvalidInput` on length mismatch or when the weighted retail total is zero.
pub fn weighted_margin(cost: &[f64], retail: &[f64], units: &[f64]) -> Result<f64, RetailError> {
    ensure_same_length("cost", cost, "retail", retail)?;
    ensure_same_length("cost", cost, "units", units)?;
    let sales = nonzero_weight("retail", weighted_sum(retail, units))?;
    Ok((sales - weighted_sum(cost, units)) / sales)
}

/// Markup as a fraction of cost.
///
/// # Examples
/// ```
/// use retail_formulas::margin::markup;
///
/// assert!((markup(8.0, 10.0) - 0.25).abs() < 1e-12);
/// ```
pub fn markup(cost: f64, retail: f64) -> f64 {
    (retail - cost) / cost
}

/// Element-wise [`markup`].
pub fn markup_each(cost: &[f64], retail: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("cost", cost), ("retail", retail), markup)
}

/// Unit-weighted markup `(Σu·r − Σu·c) / Σu·c`.
///
/// # Errors
/// `InvalidInput` on length mismatch or when the weighted cost total is zero.
pub fn weighted_markup(cost: &[f64], retail: &[f64], units: &[f64]) -> Result<f64, RetailError> {
    ensure_same_length("cost", cost, "retail", retail)?;
    ensure_same_length("cost", cost, "units", units)?;
    let total_cost = nonzero_weight("cost", weighted_sum(cost, units))?;
    Ok((weighted_sum(retail, units) - total_cost) / total_cost)
}

/// Retail that achieves a target margin: `cost / (1 − margin)`.
pub fn retail_from_margin(cost: f64, margin: f64) -> f64 {
    cost / (1.0 - margin)
}

/// Element-wise [`retail_from_margin`].
pub fn retail_from_margin_each(cost: &[f64], margin: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("cost", cost), ("margin", margin), retail_from_margin)
}

/// Retail that achieves a target markup: `cost · (1 + markup)`.
pub fn retail_from_markup(cost: f64, markup: f64) -> f64 {
    cost * (1.0 + markup)
}

/// Element-wise [`retail_from_markup`].
pub fn retail_from_markup_each(cost: &[f64], markup: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("cost", cost), ("markup", markup), retail_from_markup)
}

/// Cost implied by a retail and margin: `retail · (1 − margin)`.
pub fn cost_from_margin(retail: f64, margin: f64) -> f64 {
    retail * (1.0 - margin)
}

/// Element-wise [`cost_from_margin`].
pub fn cost_from_margin_each(retail: &[f64], margin: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("retail", retail), ("margin", margin), cost_from_margin)
}

/// Cost implied by a retail and markup: `retail / (1 + markup)`.
pub fn cost_from_markup(retail: f64, markup: f64) -> f64 {
    retail / (1.0 + markup)
}

/// Element-wise [`cost_from_markup`].
pub fn cost_from_markup_each(retail: &[f64], markup: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("retail", retail), ("markup", markup), cost_from_markup)
}
