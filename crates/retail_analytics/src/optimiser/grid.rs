//! Brute-force revenue grid search.

use super::OptimiserConfig;
use retail_core::types::error::{ensure_finite, ensure_same_length};
use retail_core::types::RetailError;
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Best retail found for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalRetail {
    /// Revenue-maximising candidate price, or 0 when no candidate earns
    /// positive revenue.
    pub retail: f64,
    /// Modelled revenue at `retail`.
    pub revenue: f64,
    /// Modelled unit sales at `retail`.
    pub units: f64,
}

impl OptimalRetail {
    /// Whether the search found any candidate with positive revenue.
    pub fn is_found(&self) -> bool {
        self.revenue > 0.0
    }
}

/// Retail optimiser over a linear-elasticity demand model.
///
/// For an item with current retail `p`, unit sales `u` and elasticity `e`,
/// a candidate price `j` is modelled to sell `u + u·e·(j/p − 1)` units.
/// Candidates run from `p(1 − range)` upwards in `step` increments,
/// stopping before `p(1 + range)`; the candidate with the highest
/// `j · units(j)` wins and ties keep the lower price.
///
/// The running maximum starts at zero, so an item whose modelled revenue
/// is never positive reports a retail of 0.
///
/// # Complexity
///
/// `O(n · 2·range·p / step)` model evaluations for `n` items.
///
/// # Example
///
/// ```
/// use retail_analytics::{OptimiserConfig, RetailOptimiser};
///
/// let optimiser = RetailOptimiser::new(OptimiserConfig::with_range(0.2).unwrap());
///
/// // Elastic demand (-3) favours the bottom of the window
/// let best = optimiser.optimise_item(10.0, 100.0, -3.0).unwrap();
/// assert!(best.retail < 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RetailOptimiser {
    config: OptimiserConfig,
}

impl RetailOptimiser {
    /// Create an optimiser with the given configuration.
    pub fn new(config: OptimiserConfig) -> Self {
        Self { config }
    }

    /// Create an optimiser with a ±10% window on a one-cent grid.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimiserConfig {
        &self.config
    }

    /// Search the best retail for a single item.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an invalid configuration, a non-positive or
    /// non-finite price, or non-finite units or elasticity.
    pub fn optimise_item(
        &self,
        price: f64,
        units: f64,
        elasticity: f64,
    ) -> Result<OptimalRetail, RetailError> {
        self.config.validate()?;
        validate_item(price, units, elasticity)?;
        Ok(self.search(price, units, elasticity))
    }

    /// Search the best retail for every item independently.
    ///
    /// Results are in input order.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the three slices differ in length or any item is
    /// invalid (see [`RetailOptimiser::optimise_item`]).
    pub fn optimise(
        &self,
        prices: &[f64],
        units: &[f64],
        elasticity: &[f64],
    ) -> Result<Vec<OptimalRetail>, RetailError> {
        self.config.validate()?;
        ensure_same_length("prices", prices, "units", units)?;
        ensure_same_length("prices", prices, "elasticity", elasticity)?;
        ensure_finite("units", units)?;
        ensure_finite("elasticity", elasticity)?;
        for &price in prices {
            validate_price(price)?;
        }

        debug!(
            items = prices.len(),
            range = self.config.range,
            step = self.config.step,
            "Optimising retails"
        );

        #[cfg(feature = "parallel")]
        let results: Vec<OptimalRetail> = (0..prices.len())
            .into_par_iter()
            .map(|i| self.search(prices[i], units[i], elasticity[i]))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results: Vec<OptimalRetail> = (0..prices.len())
            .map(|i| self.search(prices[i], units[i], elasticity[i]))
            .collect();

        Ok(results)
    }

    /// Grid search for one validated item.
    fn search(&self, price: f64, units: f64, elasticity: f64) -> OptimalRetail {
        let lo = price * (1.0 - self.config.range);
        let hi = price * (1.0 + self.config.range);
        let steps = ((hi - lo) / self.config.step).ceil().max(0.0) as usize;

        let implied_units = |j: f64| units + units * (elasticity * (j / price - 1.0));

        let mut best = OptimalRetail {
            retail: 0.0,
            revenue: 0.0,
            units: 0.0,
        };

        for k in 0..steps {
            let j = lo + k as f64 * self.config.step;
            if j >= hi {
                break;
            }
            let demand = implied_units(j);
            let revenue = j * demand;
            if best.revenue < revenue {
                best = OptimalRetail {
                    retail: j,
                    revenue,
                    units: demand,
                };
            }
        }

        if !best.is_found() {
            warn!(
                price,
                units,
                elasticity,
                "No candidate retail yields positive revenue; reporting 0"
            );
        }
        best
    }
}

fn validate_price(price: f64) -> Result<(), RetailError> {
    if !(price.is_finite() && price > 0.0) {
        return Err(RetailError::InvalidInput(format!(
            "retail must be positive and finite, got {}",
            price
        )));
    }
    Ok(())
}

fn validate_item(price: f64, units: f64, elasticity: f64) -> Result<(), RetailError> {
    validate_price(price)?;
    ensure_finite("units", &[units])?;
    ensure_finite("elasticity", &[elasticity])
}
