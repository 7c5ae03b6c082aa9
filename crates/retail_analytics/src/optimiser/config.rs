//! Optimiser configuration types.

use retail_core::types::RetailError;

/// Search window and grid resolution for the retail optimiser.
///
/// # Example
///
/// ```
/// use retail_analytics::OptimiserConfig;
///
/// // ±10% window on a one-cent grid
/// let config = OptimiserConfig::default();
/// assert_eq!(config.range, 0.1);
/// assert_eq!(config.step, 0.01);
///
/// // Out-of-domain ranges are rejected
/// assert!(OptimiserConfig::new(1.0, 0.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimiserConfig {
    /// Half-width of the search window as a fraction of the current retail.
    ///
    /// Must lie in `[0, 1)`.
    pub range: f64,

    /// Grid spacing between candidate prices in currency units.
    ///
    /// Must be finite and positive.
    pub step: f64,
}

impl Default for OptimiserConfig {
    /// Default values:
    /// - `range`: 0.1
    /// - `step`: 0.01
    fn default() -> Self {
        Self {
            range: 0.1,
            step: 0.01,
        }
    }
}

impl OptimiserConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `RetailError::InvalidInput` if `range` is outside `[0, 1)` or
    /// `step` is not a positive finite number.
    pub fn new(range: f64, step: f64) -> Result<Self, RetailError> {
        let config = Self { range, step };
        config.validate()?;
        Ok(config)
    }

    /// Default one-cent grid with a custom window.
    pub fn with_range(range: f64) -> Result<Self, RetailError> {
        Self::new(range, Self::default().step)
    }

    /// Check the domain of both parameters.
    pub fn validate(&self) -> Result<(), RetailError> {
        if !(self.range >= 0.0 && self.range < 1.0) {
            return Err(RetailError::InvalidInput(format!(
                "range must lie in [0, 1), got {}",
                self.range
            )));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(RetailError::InvalidInput(format!(
                "step must be positive and finite, got {}",
                self.step
            )));
        }
        Ok(())
    }
}
