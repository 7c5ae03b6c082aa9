//! Elasticity regression results.

/// Linear demand fit `units ≈ slope · price + intercept` with diagnostics.
///
/// # Fields
/// - `slope`: change in units per currency unit of price
/// - `intercept`: implied units at zero price
/// - `r_squared`: coefficient of determination, `1 − SSR/SST`
/// - `f_statistic`: `(R²/(1 − R²)) · (n − 2)` for the single predictor
/// - `durbin_watson`: first-difference autocorrelation statistic of the residuals
/// - `observations`: number of pairs inside the segment
/// - `segment`: resolved inclusive `(begin, end)` price bounds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElasticityFit {
    /// Regression slope.
    pub slope: f64,
    /// Regression intercept.
    pub intercept: f64,
    /// Coefficient of determination.
    pub r_squared: f64,
    /// F-statistic for the single predictor.
    pub f_statistic: f64,
    /// Durbin-Watson statistic.
    pub durbin_watson: f64,
    /// Observations used in the fit.
    pub observations: usize,
    /// Resolved segment bounds.
    pub segment: (f64, f64),
}

impl ElasticityFit {
    /// Units predicted by the fitted line at `price`.
    ///
    /// # Examples
    /// ```
    /// use retail_analytics::estimate_elasticity;
    ///
    /// let fit = estimate_elasticity(&[2.49, 2.99, 3.99], &[40.0, 30.0, 20.0], None).unwrap();
    /// assert!((fit.predict(3.0) - (fit.intercept + 3.0 * fit.slope)).abs() < 1e-12);
    /// ```
    pub fn predict(&self, price: f64) -> f64 {
        self.slope * price + self.intercept
    }

    /// Point elasticity of the fitted demand line at `price`.
    ///
    /// `slope · price / predict(price)`; infinite where the line predicts
    /// zero units.
    pub fn point_elasticity(&self, price: f64) -> f64 {
        self.slope * price / self.predict(price)
    }
}
