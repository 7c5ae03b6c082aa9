//! Revenue-maximising retail search.
//!
//! Each item is optimised independently by scanning a fixed price grid
//! around its current retail under a linear elasticity demand model.
//! This is a deliberately simple discrete search: the grid step (0.01
//! currency units by default) is the precision of the answer.
//!
//! ## Example
//!
//! ```
//! use retail_analytics::optimal_retail;
//!
//! let best = optimal_retail(&[2.5], &[50.0], &[-0.5], 0.1).unwrap();
//! assert!((best[0] - 2.74).abs() < 1e-9);
//! ```

mod config;
mod grid;

pub use config::OptimiserConfig;
pub use grid::{OptimalRetail, RetailOptimiser};

use retail_core::types::RetailError;

/// Optimal retail per item within `±range` of the current retail.
///
/// Uses a one-cent grid. Items whose modelled revenue is never positive
/// report 0.
///
/// # Errors
///
/// `InvalidInput` if `range` is negative or at least 1, the slices differ
/// in length, or an item is invalid.
pub fn optimal_retail(
    prices: &[f64],
    units: &[f64],
    elasticity: &[f64],
    range: f64,
) -> Result<Vec<f64>, RetailError> {
    let optimiser = RetailOptimiser::new(OptimiserConfig::with_range(range)?);
    Ok(optimiser
        .optimise(prices, units, elasticity)?
        .into_iter()
        .map(|best| best.retail)
        .collect())
}
