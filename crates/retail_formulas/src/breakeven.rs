//! Break-even volume uplift under a discount.
//!
//! The cost and margin forms return the fractional increase in unit sales
//! needed for a discounted price to earn the same gross profit as the full
//! price. The markup form returns the volume ratio instead (uplift + 1).

use crate::elementwise::{map2, map3};
use retail_core::types::RetailError;

/// Break-even uplift from cost, retail and discount.
///
/// `(r − c) / (r(1 − d) − c) − 1`
///
/// # Examples
/// ```
/// use retail_formulas::breakeven::breakeven_retail;
///
/// // 10.00 retail, 6.00 cost, 10% off: profit per unit falls from 4 to 3
/// let uplift = breakeven_retail(6.0, 10.0, 0.1);
/// assert!((uplift - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn breakeven_retail(cost: f64, retail: f64, discount: f64) -> f64 {
    (retail - cost) / (retail * (1.0 - discount) - cost) - 1.0
}

/// Element-wise [`breakeven_retail`].
pub fn breakeven_retail_each(
    cost: &[f64],
    retail: &[f64],
    discount: &[f64],
) -> Result<Vec<f64>, RetailError> {
    map3(
        ("cost", cost),
        ("retail", retail),
        ("discount", discount),
        breakeven_retail,
    )
}

/// Break-even volume ratio from markup and discount.
///
/// `k / ((1 + k)(1 − d) − 1)`
///
/// Unlike the other two functions this is the ratio of discounted to
/// full-price units, not the fractional uplift: it equals
/// `1 + breakeven_margin(k / (1 + k), d)`. The missing `− 1` matches the
/// long-standing markup formula, so it is kept as is.
///
/// # Examples
/// ```
/// use retail_formulas::breakeven::{breakeven_margin, breakeven_markup};
///
/// // markup 2/3 is margin 0.4; 10% off needs 4/3 of the units, an uplift of 1/3
/// let ratio = breakeven_markup(2.0 / 3.0, 0.1);
/// assert!((ratio - 4.0 / 3.0).abs() < 1e-12);
/// assert!((ratio - 1.0 - breakeven_margin(0.4, 0.1)).abs() < 1e-12);
/// ```
pub fn breakeven_markup(markup: f64, discount: f64) -> f64 {
    markup / ((1.0 + markup) * (1.0 - discount) - 1.0)
}

/// Element-wise [`breakeven_markup`].
pub fn breakeven_markup_each(markup: &[f64], discount: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("markup", markup), ("discount", discount), breakeven_markup)
}

/// Break-even uplift from margin and discount.
///
/// `1 / (1 − d/m) − 1`
pub fn breakeven_margin(margin: f64, discount: f64) -> f64 {
    1.0 / (1.0 - discount / margin) - 1.0
}

/// Element-wise [`breakeven_margin`].
pub fn breakeven_margin_each(margin: &[f64], discount: &[f64]) -> Result<Vec<f64>, RetailError> {
    map2(("margin", margin), ("discount", discount), breakeven_margin)
}
