//! Price elasticity estimation by ordinary least squares.
//!
//! Regresses unit sales on retail price over an optional price segment:
//!
//! 1. Resolve the segment (unset bounds become the observed min/max price)
//! 2. Keep pairs whose price lies inside the inclusive bounds, in order
//! 3. Fit `units ≈ slope · price + intercept` in closed form
//! 4. Report R², the F-statistic and the Durbin-Watson statistic of the
//!    residuals in filtered order
//!
//! ## Degenerate inputs
//!
//! Fewer than two points in the segment leave the line underdetermined
//! (`InsufficientData`). Constant prices or constant units leave the slope
//! or R² undefined, and vanishing residuals leave the Durbin-Watson ratio
//! undefined; both are `DegenerateFit`. Constancy is tested by exact
//! comparison, not on the computed sums of squares. Two points always fit
//! exactly, so at least three distinct observations are needed in practice.

mod result;

pub use result::ElasticityFit;

use retail_core::math::stats::{is_constant, mean, sum_cross_deviations, sum_squared_deviations};
use retail_core::types::error::{ensure_finite, ensure_same_length};
use retail_core::types::{RetailError, Segment};
use tracing::debug;

/// Number of predictors in the single-variable demand model.
const PREDICTORS: f64 = 1.0;

/// SSR at or below this fraction of SST counts as an exact fit.
const EXACT_FIT_RATIO: f64 = 1e-20;

/// Estimate a linear demand curve over an optional price segment.
///
/// `None` uses every observation.
///
/// # Errors
///
/// - `InvalidInput` on length mismatch, non-finite values or inverted bounds
/// - `InsufficientData` if fewer than two pairs fall inside the segment
/// - `DegenerateFit` if the prices or units in the segment are constant, or the residuals vanish
///
/// # Examples
/// ```
/// use retail_analytics::{estimate_elasticity, Segment};
///
/// let prices = [2.49, 2.99, 3.99];
/// let units = [40.0, 30.0, 20.0];
///
/// let fit = estimate_elasticity(&prices, &units, None).unwrap();
/// assert!((fit.slope - (-12.857142857142856)).abs() < 1e-9);
/// assert!((fit.durbin_watson - 2.9285714285714284).abs() < 1e-9);
///
/// // Restricting to two points leaves an exact, undiagnosable fit
/// let narrow = estimate_elasticity(&prices, &units, Some(Segment::until(3.0)));
/// assert!(narrow.is_err());
/// ```
pub fn estimate_elasticity(
    prices: &[f64],
    units: &[f64],
    segment: Option<Segment>,
) -> Result<ElasticityFit, RetailError> {
    ElasticityEstimator::new(segment.unwrap_or_default()).fit(prices, units)
}

/// Reusable OLS elasticity estimator bound to a price segment.
///
/// # Example
///
/// ```
/// use retail_analytics::{ElasticityEstimator, Segment};
///
/// let estimator = ElasticityEstimator::new(Segment::new(2.0, 4.0));
/// let fit = estimator
///     .fit(&[1.5, 2.49, 2.99, 3.99, 4.5], &[55.0, 40.0, 30.0, 20.0, 5.0])
///     .unwrap();
///
/// // Only the three prices inside [2, 4] enter the regression
/// assert_eq!(fit.observations, 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElasticityEstimator {
    segment: Segment,
}

impl ElasticityEstimator {
    /// Create an estimator restricted to `segment`.
    pub fn new(segment: Segment) -> Self {
        Self { segment }
    }

    /// Create an estimator over the full observed price range.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The configured segment.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Fit the demand line to paired price and unit observations.
    ///
    /// See [`estimate_elasticity`] for the error contract.
    pub fn fit(&self, prices: &[f64], units: &[f64]) -> Result<ElasticityFit, RetailError> {
        ensure_same_length("prices", prices, "units", units)?;
        ensure_finite("prices", prices)?;
        ensure_finite("units", units)?;

        if prices.is_empty() {
            return Err(RetailError::InsufficientData { got: 0, need: 2 });
        }

        let (begin, end) = self.segment.resolve(prices)?;
        let (xs, ys): (Vec<f64>, Vec<f64>) = prices
            .iter()
            .zip(units)
            .filter(|&(&p, _)| p >= begin && p <= end)
            .map(|(&p, &u)| (p, u))
            .unzip();

        let n = xs.len();
        debug!(begin, end, observations = n, "Fitting elasticity segment");
        if n < 2 {
            return Err(RetailError::InsufficientData { got: n, need: 2 });
        }

        // exact comparison: a constant series need not give Sxx == 0 in floating point
        if is_constant(&xs) {
            return Err(RetailError::DegenerateFit(format!(
                "all {} prices in the segment are equal",
                n
            )));
        }
        if is_constant(&ys) {
            return Err(RetailError::DegenerateFit(
                "units are constant in the segment; R² is undefined".to_string(),
            ));
        }

        let underdetermined = || RetailError::InsufficientData { got: n, need: 2 };
        let x_mean = mean(&xs).ok_or_else(underdetermined)?;
        let y_mean = mean(&ys).ok_or_else(underdetermined)?;
        let sxx = sum_squared_deviations(&xs).ok_or_else(underdetermined)?;
        let sxy = sum_cross_deviations(&xs, &ys).ok_or_else(underdetermined)?;
        let sst = sum_squared_deviations(&ys).ok_or_else(underdetermined)?;

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        let residuals: Vec<f64> = xs
            .iter()
            .zip(&ys)
            .map(|(&x, &y)| y - (slope * x + intercept))
            .collect();
        let ssr: f64 = residuals.iter().map(|e| e * e).sum();

        if ssr <= EXACT_FIT_RATIO * sst {
            return Err(RetailError::DegenerateFit(
                "residuals are all zero; Durbin-Watson is undefined".to_string(),
            ));
        }

        let r_squared = 1.0 - ssr / sst;
        let f_statistic = f_statistic(r_squared, n);
        let durbin_watson = durbin_watson(&residuals, ssr);

        debug!(slope, intercept, r_squared, f_statistic, durbin_watson, "Elasticity fit complete");

        Ok(ElasticityFit {
            slope,
            intercept,
            r_squared,
            f_statistic,
            durbin_watson,
            observations: n,
            segment: (begin, end),
        })
    }
}

/// `(R²/(1 − R²)) · ((n − p − 1)/p)`
fn f_statistic(r_squared: f64, observations: usize) -> f64 {
    let n = observations as f64;
    (r_squared / (1.0 - r_squared)) * ((n - PREDICTORS - 1.0) / PREDICTORS)
}

/// `Σ_{i≥2} (e_i − e_{i−1})² / Σ e_i²`
fn durbin_watson(residuals: &[f64], ssr: f64) -> f64 {
    let diff_ss: f64 = residuals
        .windows(2)
        .map(|w| (w[1] - w[0]) * (w[1] - w[0]))
        .sum();
    diff_ss / ssr
}
