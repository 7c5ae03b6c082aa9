//! Distribution command implementation
//!
//! Bins retail prices and hands the histogram to a chart renderer, or
//! writes the bins as JSON.

use retail_formulas::histogram;
use std::io::Write;
use tracing::info;

use crate::input::SalesData;
use crate::output::{write_json, OutputFormat};
use crate::render::ChartRenderer;
use crate::Result;

/// Run the distribution command
pub fn run(
    data: &SalesData,
    bin_width: f64,
    renderer: &dyn ChartRenderer,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let hist = histogram(&data.prices(), bin_width)?;
    info!(bins = hist.counts.len(), bin_width, "Retail distribution computed");

    match format {
        OutputFormat::Json => write_json(out, &hist),
        OutputFormat::Table => Ok(renderer.render_distribution(&hist, out)?),
    }
}
