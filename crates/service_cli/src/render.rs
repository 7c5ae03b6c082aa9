//! Terminal chart renderers.
//!
//! The analytics crates only compute what a chart shows (histogram bins,
//! price/units pairs); drawing is delegated to a [`ChartRenderer`].

use retail_formulas::Histogram;
use std::io::{self, Write};

/// Draws the two sales charts to a text sink.
pub trait ChartRenderer {
    /// Draw a retail price distribution.
    fn render_distribution(&self, histogram: &Histogram, out: &mut dyn Write) -> io::Result<()>;

    /// Draw units against retail price.
    fn render_scatter(&self, prices: &[f64], units: &[f64], out: &mut dyn Write)
        -> io::Result<()>;
}

/// Plain-text renderer using block characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    /// Plot width in characters
    pub width: usize,
    /// Scatter plot height in rows
    pub height: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            width: 50,
            height: 16,
        }
    }
}

impl ChartRenderer for TextRenderer {
    fn render_distribution(&self, histogram: &Histogram, out: &mut dyn Write) -> io::Result<()> {
        let max = histogram.max_count().max(1);
        writeln!(out, "Retail distribution ({} prices)", histogram.total())?;
        for (lower, upper, count) in histogram.bins() {
            let bar = (count * self.width).div_ceil(max);
            writeln!(
                out,
                "{:>10.2} - {:<10.2} |{:<width$}| {}",
                lower,
                upper,
                "█".repeat(bar),
                count,
                width = self.width
            )?;
        }
        Ok(())
    }

    fn render_scatter(
        &self,
        prices: &[f64],
        units: &[f64],
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let width = self.width.max(2);
        let height = self.height.max(2);

        let (x_min, x_max) = bounds(prices);
        let (y_min, y_max) = bounds(units);
        let mut grid = vec![vec![' '; width]; height];

        for (&x, &y) in prices.iter().zip(units) {
            let col = cell(x, x_min, x_max, width);
            let row = height - 1 - cell(y, y_min, y_max, height);
            grid[row][col] = '*';
        }

        writeln!(out, "Units vs retail ({} points)", prices.len().min(units.len()))?;
        for (i, row) in grid.iter().enumerate() {
            let label = match i {
                0 => format!("{:>10.2}", y_max),
                r if r == height - 1 => format!("{:>10.2}", y_min),
                _ => " ".repeat(10),
            };
            writeln!(out, "{} |{}", label, row.iter().collect::<String>())?;
        }
        writeln!(out, "{} +{}", " ".repeat(10), "-".repeat(width))?;
        writeln!(
            out,
            "{}  {:<w$.2}{:>10.2}",
            " ".repeat(10),
            x_min,
            x_max,
            w = width.saturating_sub(10)
        )?;
        Ok(())
    }
}

/// Finite min and max, widened when all values coincide.
fn bounds(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        (0.0, 1.0)
    } else if hi - lo <= 0.0 {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

/// Grid cell index of `value` on an axis of `cells` cells.
fn cell(value: f64, lo: f64, hi: f64, cells: usize) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let t = ((value - lo) / (hi - lo)).clamp(0.0, 1.0);
    ((t * (cells - 1) as f64).round() as usize).min(cells - 1)
}
