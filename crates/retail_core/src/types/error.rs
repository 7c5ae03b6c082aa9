//! Error types for structured error handling.
//!
//! This module provides:
//! - `RetailError`: Errors from every analytics and formula operation

use thiserror::Error;

/// Categorised retail analytics errors.
///
/// Every operation either fully succeeds or returns one of these variants;
/// nothing is partially applied.
///
/// # Variants
/// - `InvalidInput`: Mismatched sequence lengths or out-of-domain parameters
/// - `InsufficientData`: Too few points for regression or correlation
/// - `DegenerateFit`: Regression whose diagnostics are undefined
/// - `InvalidTemplate`: Malformed smart rounding template
///
/// # Examples
/// ```
/// use retail_core::types::RetailError;
///
/// let err = RetailError::InsufficientData { got: 1, need: 2 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient data: got 1 points, need at least 2"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RetailError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not enough observations for the requested statistic.
    #[error("Insufficient data: got {got} points, need at least {need}")]
    InsufficientData {
        /// Number of points available
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Regression is numerically degenerate.
    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    /// Rounding template could not be parsed.
    #[error("Invalid template '{template}': {reason}")]
    InvalidTemplate {
        /// The offending template string
        template: String,
        /// Why it was rejected
        reason: String,
    },
}

impl RetailError {
    /// Build an `InvalidInput` error for two sequences of different length.
    ///
    /// # Examples
    /// ```
    /// use retail_core::types::RetailError;
    ///
    /// let err = RetailError::length_mismatch("prices", 3, "units", 2);
    /// assert!(format!("{}", err).contains("prices has 3 elements but units has 2"));
    /// ```
    pub fn length_mismatch(left: &str, left_len: usize, right: &str, right_len: usize) -> Self {
        RetailError::InvalidInput(format!(
            "{} has {} elements but {} has {}",
            left, left_len, right, right_len
        ))
    }

    /// Build an `InvalidTemplate` error.
    pub fn invalid_template(template: &str, reason: impl Into<String>) -> Self {
        RetailError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.into(),
        }
    }
}

/// Check that two sequences have the same length.
///
/// # Errors
/// Returns `RetailError::InvalidInput` naming both sequences on mismatch.
pub fn ensure_same_length(
    left: &str,
    left_values: &[f64],
    right: &str,
    right_values: &[f64],
) -> Result<(), RetailError> {
    if left_values.len() != right_values.len() {
        return Err(RetailError::length_mismatch(
            left,
            left_values.len(),
            right,
            right_values.len(),
        ));
    }
    Ok(())
}

/// Check that every value in a sequence is finite.
///
/// # Errors
/// Returns `RetailError::InvalidInput` with the index of the first NaN or infinity.
pub fn ensure_finite(name: &str, values: &[f64]) -> Result<(), RetailError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(RetailError::InvalidInput(format!(
            "{}[{}] is not finite: {}",
            name, index, values[index]
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = RetailError::InvalidInput("range must be in [0, 1)".to_string());
        assert_eq!(format!("{}", err), "Invalid input: range must be in [0, 1)");
    }

    #[test]
    fn test_degenerate_fit_display() {
        let err = RetailError::DegenerateFit("all residuals are zero".to_string());
        assert_eq!(format!("{}", err), "Degenerate fit: all residuals are zero");
    }

    #[test]
    fn test_invalid_template_display() {
        let err = RetailError::invalid_template("*.(9)", "grouping is not supported");
        assert_eq!(
            format!("{}", err),
            "Invalid template '*.(9)': grouping is not supported"
        );
    }

    #[test]
    fn test_length_mismatch_is_invalid_input() {
        let err = RetailError::length_mismatch("cost", 2, "retail", 3);
        assert!(matches!(err, RetailError::InvalidInput(_)));
    }

    #[test]
    fn test_ensure_same_length() {
        assert!(ensure_same_length("a", &[1.0, 2.0], "b", &[3.0, 4.0]).is_ok());
        assert!(ensure_same_length("a", &[1.0], "b", &[3.0, 4.0]).is_err());
    }

    #[test]
    fn test_ensure_finite_reports_index() {
        let err = ensure_finite("prices", &[1.0, f64::NAN]).unwrap_err();
        assert!(format!("{}", err).contains("prices[1]"));
        assert!(ensure_finite("prices", &[1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = RetailError::InsufficientData { got: 0, need: 2 };
        let _: &dyn std::error::Error = &err;
    }
}
