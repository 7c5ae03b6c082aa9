//! Rounding template parsing and per-price rounding.

use super::Align;
use retail_core::types::RetailError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder-only template used when none is given.
pub const DEFAULT_TEMPLATE: &str = "*.**";

/// Upper bound on decimals so that `10^d` stays exact in `f64`.
const MAX_DECIMALS: usize = 9;

/// Upper bound on template positions so that the ending fits in `i64`.
const MAX_POSITIONS: usize = 15;

/// Scaled prices must stay within the exactly representable integers.
const MAX_SCALED: f64 = 9_007_199_254_740_992.0;

/// Reasons a template string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum TemplateError {
    #[error("template is empty")]
    Empty,

    #[error("parenthesised groups are not supported")]
    Grouping,

    #[error("whitespace is not allowed")]
    Whitespace,

    #[error("at most one decimal marker is allowed, found {0}")]
    MultipleMarkers(usize),

    #[error("{0} decimals exceed the maximum of 9")]
    TooManyDecimals(usize),

    #[error("{0} positions exceed the maximum of 15")]
    TooLong(usize),
}

/// Ending digits a rounded price must carry, in the scaled integer domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ending {
    target: i64,
    cycle: i64,
}

/// Parsed smart rounding template.
///
/// The characters after the single optional `.` fix the precision. If the
/// template contains any digit, prices are snapped to the nearest value
/// whose trailing digits match it, with every placeholder read as `0`:
/// `"*.95"` targets prices ending in `.95`, `"*.*9"` prices ending in `9`
/// cents, and `"9.99"` prices ending in `9.99`. Without digits the
/// template only rounds half-up to its precision.
///
/// # Example
///
/// ```
/// use retail_analytics::{Align, RoundingTemplate};
///
/// let template: RoundingTemplate = "*.95".parse().unwrap();
/// assert_eq!(template.decimals(), 2);
/// assert!(!template.is_plain());
///
/// let rounded = template.round(12.567, Align::Up).unwrap();
/// assert!((rounded - 12.95).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundingTemplate {
    source: String,
    decimals: u32,
    ending: Option<Ending>,
}

impl RoundingTemplate {
    /// Parse a template string.
    ///
    /// A template without a decimal marker has zero decimals.
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` for empty templates, whitespace, parentheses, more
    /// than one `.`, more than nine decimals or more than fifteen positions.
    pub fn parse(template: &str) -> Result<Self, RetailError> {
        Self::parse_inner(template)
            .map_err(|e| RetailError::invalid_template(template, e.to_string()))
    }

    fn parse_inner(template: &str) -> Result<Self, TemplateError> {
        if template.is_empty() {
            return Err(TemplateError::Empty);
        }
        if template.contains(['(', ')']) {
            return Err(TemplateError::Grouping);
        }
        if template.chars().any(char::is_whitespace) {
            return Err(TemplateError::Whitespace);
        }

        let markers = template.matches('.').count();
        if markers > 1 {
            return Err(TemplateError::MultipleMarkers(markers));
        }
        let decimals = template
            .find('.')
            .map_or(0, |dot| template[dot + 1..].chars().count());
        if decimals > MAX_DECIMALS {
            return Err(TemplateError::TooManyDecimals(decimals));
        }

        let positions: Vec<char> = template.chars().filter(|&c| c != '.').collect();
        if positions.len() > MAX_POSITIONS {
            return Err(TemplateError::TooLong(positions.len()));
        }

        let ending = if positions.iter().any(char::is_ascii_digit) {
            let target = positions.iter().fold(0i64, |acc, c| {
                acc * 10 + c.to_digit(10).map_or(0, i64::from)
            });
            Some(Ending {
                target,
                cycle: 10i64.pow(digit_count(target)),
            })
        } else {
            None
        };

        Ok(Self {
            source: template.to_string(),
            decimals: decimals as u32,
            ending,
        })
    }

    /// Number of decimal places in the output.
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Whether the template only rounds to a precision.
    pub fn is_plain(&self) -> bool {
        self.ending.is_none()
    }

    /// The template string as given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Round a single price.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the price is not finite, or too large to be scaled
    /// exactly in ending-digit mode.
    pub fn round(&self, price: f64, align: Align) -> Result<f64, RetailError> {
        if !price.is_finite() {
            return Err(RetailError::InvalidInput(format!(
                "price is not finite: {}",
                price
            )));
        }

        let scale = 10i64.pow(self.decimals) as f64;
        let scaled = (price * scale + 0.5).floor();

        let Some(ending) = self.ending else {
            return Ok(scaled / scale);
        };

        if scaled.abs() >= MAX_SCALED {
            return Err(RetailError::InvalidInput(format!(
                "price {} is too large for {} decimals",
                price, self.decimals
            )));
        }

        let chosen = ending.snap(scaled as i64, align);
        Ok(chosen as f64 / scale)
    }
}

impl Ending {
    /// Pick the matching scaled value for `scaled` under `align`.
    fn snap(&self, scaled: i64, align: Align) -> i64 {
        let mut lower = scaled - (scaled - self.target).rem_euclid(self.cycle);
        let mut upper = if lower == scaled {
            lower
        } else {
            lower + self.cycle
        };

        // never produce a non-positive price
        if lower <= 0 {
            lower += self.cycle;
            upper = upper.max(lower);
        }

        match align {
            Align::Down => lower,
            Align::Up => upper,
            Align::Fair => {
                if (scaled - lower).abs() > (upper - scaled).abs() {
                    upper
                } else {
                    lower
                }
            }
        }
    }
}

/// Decimal digits in a non-negative integer, counting 0 as one digit.
fn digit_count(mut value: i64) -> u32 {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

impl Default for RoundingTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            decimals: 2,
            ending: None,
        }
    }
}

impl FromStr for RoundingTemplate {
    type Err = RetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RoundingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
