//! Direction policy for ending-digit rounding.

use retail_core::types::RetailError;
use std::fmt;
use std::str::FromStr;

/// Which candidate ending an ending-digit template snaps to.
///
/// Plain templates ignore the alignment.
///
/// # Example
///
/// ```
/// use retail_analytics::Align;
///
/// let align: Align = "UP".parse().unwrap();
/// assert_eq!(align, Align::Up);
/// assert_eq!(Align::default(), Align::Fair);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Largest matching price at or below the input.
    Down,
    /// Smallest matching price at or above the input.
    Up,
    /// Nearer of the two; an exact tie goes down.
    #[default]
    Fair,
}

impl Align {
    /// Lowercase name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Down => "down",
            Align::Up => "up",
            Align::Fair => "fair",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = RetailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" => Ok(Align::Down),
            "up" => Ok(Align::Up),
            "fair" => Ok(Align::Fair),
            other => Err(RetailError::InvalidInput(format!(
                "unknown alignment '{}', expected down, up or fair",
                other
            ))),
        }
    }
}
