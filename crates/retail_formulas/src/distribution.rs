//! Retail price distribution binning.
//!
//! Produces the bucket counts a histogram renderer draws. Bins have a
//! fixed width and start at the largest multiple of the width not above
//! the lowest price, so bin edges land on "round" price points.

use retail_core::types::error::ensure_finite;
use retail_core::types::series::{slice_max, slice_min};
use retail_core::types::RetailError;

/// Fixed-width price histogram.
///
/// Bin `k` covers `[start + k·w, start + (k+1)·w)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Lower edge of the first bin
    pub start: f64,
    /// Width of every bin
    pub bin_width: f64,
    /// Number of prices in each bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin edges, one more than the number of bins.
    pub fn edges(&self) -> Vec<f64> {
        (0..=self.counts.len())
            .map(|k| self.start + k as f64 * self.bin_width)
            .collect()
    }

    /// Iterate over `(lower, upper, count)` for each bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.counts.iter().enumerate().map(move |(k, &count)| {
            let lower = self.start + k as f64 * self.bin_width;
            (lower, lower + self.bin_width, count)
        })
    }

    /// Total number of binned prices.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest single bin count.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bucket prices into bins of `bin_width`.
///
/// The bins span `[min − (min mod w), max + w)`.
///
/// # Errors
///
/// - `InsufficientData` for an empty price series
/// - `InvalidInput` for a non-positive or non-finite width, or non-finite prices
///
/// # Examples
/// ```
/// use retail_formulas::histogram;
///
/// let hist = histogram(&[1.3, 1.9, 2.5, 3.7], 1.0).unwrap();
/// assert_eq!(hist.start, 1.0);
/// assert_eq!(hist.counts, vec![2, 1, 1]);
/// ```
pub fn histogram(prices: &[f64], bin_width: f64) -> Result<Histogram, RetailError> {
    if !(bin_width.is_finite() && bin_width > 0.0) {
        return Err(RetailError::InvalidInput(format!(
            "bin width must be positive and finite, got {}",
            bin_width
        )));
    }
    ensure_finite("prices", prices)?;
    let (min, max) = match (slice_min(prices), slice_max(prices)) {
        (Some(min), Some(max)) => (min, max),
        _ => return Err(RetailError::InsufficientData { got: 0, need: 1 }),
    };

    let start = min - min.rem_euclid(bin_width);
    let n_bins = ((max - start) / bin_width).floor() as usize + 1;

    let mut counts = vec![0usize; n_bins];
    for &price in prices {
        let index = ((price - start) / bin_width).floor().max(0.0) as usize;
        counts[index.min(n_bins - 1)] += 1;
    }

    Ok(Histogram {
        start,
        bin_width,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bins_start_on_width_multiple() {
        let hist = histogram(&[2.49, 2.99, 3.99], 0.5).unwrap();
        assert_eq!(hist.start, 2.0);
        assert_eq!(hist.counts, vec![1, 1, 0, 1]);
    }

    #[test]
    fn test_max_on_edge_gets_its_own_bin() {
        let hist = histogram(&[1.0, 2.0], 1.0).unwrap();
        assert_eq!(hist.counts, vec![1, 1]);
        assert_eq!(hist.edges(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_single_price() {
        let hist = histogram(&[5.0], 1.0).unwrap();
        assert_eq!(hist.counts, vec![1]);
        assert_eq!(hist.total(), 1);
    }

    #[test]
    fn test_bins_iterator() {
        let hist = histogram(&[1.5, 1.6, 2.5], 1.0).unwrap();
        let bins: Vec<_> = hist.bins().collect();
        assert_eq!(bins, vec![(1.0, 2.0, 2), (2.0, 3.0, 1)]);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn test_invalid_width() {
        assert!(matches!(
            histogram(&[1.0], 0.0),
            Err(RetailError::InvalidInput(_))
        ));
        assert!(matches!(
            histogram(&[1.0], f64::NAN),
            Err(RetailError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_prices() {
        assert_eq!(
            histogram(&[], 1.0),
            Err(RetailError::InsufficientData { got: 0, need: 1 })
        );
    }

    #[test]
    fn test_non_finite_price() {
        assert!(histogram(&[1.0, f64::INFINITY], 1.0).is_err());
    }
}
