//! Scatter command implementation

use retail_core::types::error::{ensure_finite, ensure_same_length};
use std::io::Write;
use tracing::info;

use crate::input::SalesData;
use crate::render::ChartRenderer;
use crate::Result;

/// Run the scatter command
pub fn run(data: &SalesData, renderer: &dyn ChartRenderer, out: &mut dyn Write) -> Result<()> {
    let prices = data.prices();
    let units = data.units();
    ensure_same_length("prices", &prices, "units", &units)?;
    ensure_finite("prices", &prices)?;
    ensure_finite("units", &units)?;

    info!(points = prices.len(), "Rendering units against retail");
    renderer.render_scatter(&prices, &units, out)?;
    Ok(())
}
