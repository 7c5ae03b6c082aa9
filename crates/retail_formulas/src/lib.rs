//! # retail_formulas: Retail Pricing Formulas
//!
//! ## Layer 2 (Formulas) Role
//!
//! Closed-form retail arithmetic built on `retail_core`:
//! - Margin and markup, plain and unit-weighted (`margin`)
//! - Retail change and price index (`change`)
//! - Arc and point price elasticity (`elasticity`)
//! - Break-even volume uplift under a discount (`breakeven`)
//! - Price distribution binning for histogram renderers (`distribution`)
//!
//! Every formula has a scalar form and an element-wise `*_each` form over
//! slices. Scalar forms follow IEEE semantics, so a zero denominator yields
//! an infinity or NaN; element-wise forms reject mismatched lengths with
//! `RetailError::InvalidInput`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use retail_formulas::margin::{margin, weighted_margin};
//! use retail_formulas::change::price_index;
//!
//! assert!((margin(6.0, 10.0) - 0.4).abs() < 1e-12);
//!
//! let cost = [6.0, 3.0];
//! let retail = [10.0, 4.0];
//! let units = [1.0, 5.0];
//! let m = weighted_margin(&cost, &retail, &units).unwrap();
//! assert!((m - 9.0 / 30.0).abs() < 1e-12);
//!
//! assert!((price_index(2.0, 2.5) - 1.25).abs() < 1e-12);
//! ```

#![warn(missing_docs)]

pub mod breakeven;
pub mod change;
pub mod distribution;
pub mod elasticity;
mod elementwise;
pub mod margin;

pub use distribution::{histogram, Histogram};
