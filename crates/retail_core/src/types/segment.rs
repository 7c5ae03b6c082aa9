//! Price segment bounds.

use super::error::RetailError;
use super::series::{slice_max, slice_min};

/// Inclusive price range restricting which observations enter a fit.
///
/// Each bound is optional. An unset bound resolves to the observed
/// minimum (for `begin`) or maximum (for `end`) of the price series, so a
/// literal `0.0` lower bound is always honoured as a real bound.
///
/// # Examples
/// ```
/// use retail_core::types::Segment;
///
/// let prices = [1.0, 2.0, 3.0, 4.0];
///
/// assert_eq!(Segment::full().resolve(&prices).unwrap(), (1.0, 4.0));
/// assert_eq!(Segment::from_begin(2.0).resolve(&prices).unwrap(), (2.0, 4.0));
/// assert_eq!(Segment::new(0.0, 3.0).resolve(&prices).unwrap(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Lower inclusive bound; `None` means the observed minimum.
    pub begin: Option<f64>,
    /// Upper inclusive bound; `None` means the observed maximum.
    pub end: Option<f64>,
}

impl Segment {
    /// Segment with both bounds explicitly set.
    pub fn new(begin: f64, end: f64) -> Self {
        Self {
            begin: Some(begin),
            end: Some(end),
        }
    }

    /// Segment covering every observation.
    pub fn full() -> Self {
        Self::default()
    }

    /// Segment with only the lower bound set.
    pub fn from_begin(begin: f64) -> Self {
        Self {
            begin: Some(begin),
            end: None,
        }
    }

    /// Segment with only the upper bound set.
    pub fn until(end: f64) -> Self {
        Self {
            begin: None,
            end: Some(end),
        }
    }

    /// Resolve unset bounds against the observed prices.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if `prices` is empty and a bound is unset
    /// - `InvalidInput` if a bound is NaN or `begin > end` after resolution
    pub fn resolve(&self, prices: &[f64]) -> Result<(f64, f64), RetailError> {
        let begin = match self.begin {
            Some(b) => b,
            None => slice_min(prices).ok_or(RetailError::InsufficientData { got: 0, need: 1 })?,
        };
        let end = match self.end {
            Some(e) => e,
            None => slice_max(prices).ok_or(RetailError::InsufficientData { got: 0, need: 1 })?,
        };

        if begin.is_nan() || end.is_nan() {
            return Err(RetailError::InvalidInput(
                "segment bounds must not be NaN".to_string(),
            ));
        }
        if begin > end {
            return Err(RetailError::InvalidInput(format!(
                "segment begin {} exceeds end {}",
                begin, end
            )));
        }
        Ok((begin, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_segment_uses_observed_range() {
        let prices = [2.99, 2.49, 3.99];
        assert_eq!(Segment::full().resolve(&prices).unwrap(), (2.49, 3.99));
    }

    #[test]
    fn test_zero_is_a_real_lower_bound() {
        let prices = [2.0, 3.0];
        let (begin, _) = Segment::new(0.0, 5.0).resolve(&prices).unwrap();
        assert_eq!(begin, 0.0);
    }

    #[test]
    fn test_until_sets_upper_only() {
        let prices = [2.0, 3.0, 4.0];
        assert_eq!(Segment::until(3.0).resolve(&prices).unwrap(), (2.0, 3.0));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = Segment::new(5.0, 1.0).resolve(&[2.0]);
        assert!(matches!(result, Err(RetailError::InvalidInput(_))));
    }

    #[test]
    fn test_nan_bound_rejected() {
        let result = Segment::from_begin(f64::NAN).resolve(&[2.0]);
        assert!(matches!(result, Err(RetailError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_prices_with_unset_bound() {
        let result = Segment::full().resolve(&[]);
        assert_eq!(result, Err(RetailError::InsufficientData { got: 0, need: 1 }));
    }

    #[test]
    fn test_explicit_bounds_need_no_data() {
        assert_eq!(Segment::new(1.0, 2.0).resolve(&[]).unwrap(), (1.0, 2.0));
    }
}
