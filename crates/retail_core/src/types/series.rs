//! Canonical numeric sequence.
//!
//! Callers hold prices, units and costs in many shapes: vectors, arrays,
//! slices, single scalars, or nested rows read from a table. `Series`
//! adapts all of them into one contiguous `f64` buffer, and every
//! algorithm in the workspace is written once against `&[f64]`.

use std::ops::Deref;

/// Owned, ordered sequence of `f64` values.
///
/// Dereferences to `[f64]`, so a `&Series` can be passed wherever a slice
/// is expected.
///
/// # Examples
/// ```
/// use retail_core::types::Series;
///
/// let from_vec = Series::from(vec![1.0, 2.0]);
/// let from_array = Series::from([1.0, 2.0]);
/// let from_scalar = Series::from(3.5);
///
/// assert_eq!(from_vec, from_array);
/// assert_eq!(from_scalar.len(), 1);
///
/// // Tabular input is flattened row by row
/// let table = vec![vec![1.0, 2.0], vec![3.0]];
/// assert_eq!(&*Series::flatten(&table), &[1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Series(Vec<f64>);

impl Series {
    /// Create an empty series.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Flatten nested rows (e.g. a single-column table) into one series.
    pub fn flatten<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut values = Vec::new();
        for row in rows {
            values.extend_from_slice(row.as_ref());
        }
        Self(values)
    }

    /// Borrow the values as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consume the series and return the underlying vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Smallest value, or `None` for an empty series.
    ///
    /// NaN values are ignored.
    pub fn min(&self) -> Option<f64> {
        slice_min(&self.0)
    }

    /// Largest value, or `None` for an empty series.
    ///
    /// NaN values are ignored.
    pub fn max(&self) -> Option<f64> {
        slice_max(&self.0)
    }
}

/// Smallest non-NaN value of a slice.
pub fn slice_min(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
}

/// Largest non-NaN value of a slice.
pub fn slice_max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}

impl Deref for Series {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for Series {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Series {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl From<f64> for Series {
    fn from(value: f64) -> Self {
        Self(vec![value])
    }
}

impl From<Series> for Vec<f64> {
    fn from(series: Series) -> Self {
        series.0
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Series {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
