//! Template-driven smart price rounding.
//!
//! Two modes, chosen by the template:
//!
//! - **Plain** (`"*.**"`): round half-up to the template's precision
//! - **Ending-digit** (`"*.95"`, `"*.*9"`): snap to a price carrying the
//!   template's trailing digits, in the direction given by [`Align`]
//!
//! Rounding is idempotent: a rounded price rounds to itself under the same
//! template and alignment.

mod align;
mod template;

pub use align::Align;
pub use template::{RoundingTemplate, DEFAULT_TEMPLATE};

use retail_core::types::RetailError;

/// A template paired with an alignment, applied to batches of prices.
///
/// # Example
///
/// ```
/// use retail_analytics::{Align, RoundingTemplate, SmartRounder};
///
/// let rounder = SmartRounder::new("*.*9".parse::<RoundingTemplate>().unwrap(), Align::Fair);
/// let rounded = rounder.round_all(&[12.456]).unwrap();
/// assert!((rounded[0] - 12.49).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmartRounder {
    template: RoundingTemplate,
    align: Align,
}

impl SmartRounder {
    /// Create a rounder.
    pub fn new(template: RoundingTemplate, align: Align) -> Self {
        Self { template, align }
    }

    /// The template in use.
    pub fn template(&self) -> &RoundingTemplate {
        &self.template
    }

    /// The alignment in use.
    pub fn align(&self) -> Align {
        self.align
    }

    /// Round one price.
    pub fn round(&self, price: f64) -> Result<f64, RetailError> {
        self.template.round(price, self.align)
    }

    /// Round every price, preserving order.
    ///
    /// # Errors
    ///
    /// The first error from [`RoundingTemplate::round`].
    pub fn round_all(&self, prices: &[f64]) -> Result<Vec<f64>, RetailError> {
        prices.iter().map(|&p| self.round(p)).collect()
    }
}

/// Round prices with a template string and alignment.
///
/// # Errors
///
/// `InvalidTemplate` if the template does not parse; `InvalidInput` for a
/// non-finite or unscalable price.
///
/// # Examples
/// ```
/// use retail_analytics::{smart_round, Align};
///
/// let plain = smart_round(&[12.567, 3.421], "*.**", Align::Fair).unwrap();
/// assert!((plain[0] - 12.57).abs() < 1e-9);
/// assert!((plain[1] - 3.42).abs() < 1e-9);
///
/// let down = smart_round(&[12.567, 3.421], "*.95", Align::Down).unwrap();
/// assert!((down[0] - 11.95).abs() < 1e-9);
/// assert!((down[1] - 2.95).abs() < 1e-9);
/// ```
pub fn smart_round(prices: &[f64], template: &str, align: Align) -> Result<Vec<f64>, RetailError> {
    SmartRounder::new(RoundingTemplate::parse(template)?, align).round_all(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(*a, *e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_default_rounder() {
        let rounded = SmartRounder::default().round_all(&[12.567, 3.421]).unwrap();
        assert_all_close(&rounded, &[12.57, 3.42]);
    }

    #[test]
    fn test_ending_down_and_up() {
        let prices = [12.567, 3.421];
        let down = smart_round(&prices, "*.95", Align::Down).unwrap();
        let up = smart_round(&prices, "*.95", Align::Up).unwrap();
        assert_all_close(&down, &[11.95, 2.95]);
        assert_all_close(&up, &[12.95, 3.95]);
    }

    #[test]
    fn test_single_digit_ending() {
        let rounded = smart_round(&[12.456], "*.*9", Align::Fair).unwrap();
        assert_all_close(&rounded, &[12.49]);
    }

    #[test]
    fn test_empty_batch() {
        assert!(smart_round(&[], "*.95", Align::Up).unwrap().is_empty());
    }

    #[test]
    fn test_bad_template_fails_before_rounding() {
        let result = smart_round(&[f64::NAN], "*.(9)", Align::Fair);
        assert!(matches!(result, Err(RetailError::InvalidTemplate { .. })));
    }

    #[test]
    fn test_batch_error_propagates() {
        let result = smart_round(&[1.0, f64::NAN], "*.**", Align::Fair);
        assert!(matches!(result, Err(RetailError::InvalidInput(_))));
    }

    fn any_align() -> impl Strategy<Value = Align> {
        prop_oneof![Just(Align::Down), Just(Align::Up), Just(Align::Fair)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_ending_result_carries_ending(price in 0.01f64..10_000.0, align in any_align()) {
            let rounded = smart_round(&[price], "*.95", align).unwrap()[0];
            let cents = (rounded * 100.0).round() as i64;
            prop_assert_eq!(cents.rem_euclid(100), 95);
        }

        #[test]
        fn test_ending_within_one_cycle(price in 1.0f64..10_000.0, align in any_align()) {
            let rounded = smart_round(&[price], "*.95", align).unwrap()[0];
            prop_assert!((rounded - price).abs() <= 1.0 + 1e-9);
        }
    }
}
