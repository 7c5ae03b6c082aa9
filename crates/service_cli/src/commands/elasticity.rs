//! Elasticity command implementation
//!
//! Fits the OLS demand line, optionally over a price segment.

use retail_analytics::{estimate_elasticity, Segment};
use std::io::Write;
use tracing::info;

use crate::input::SalesData;
use crate::output::{fmt4, write_json, write_table, OutputFormat};
use crate::Result;

/// Run the elasticity command
pub fn run(
    data: &SalesData,
    begin: Option<f64>,
    end: Option<f64>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let segment = Segment { begin, end };
    let fit = estimate_elasticity(&data.prices(), &data.units(), Some(segment))?;
    info!(
        observations = fit.observations,
        slope = fit.slope,
        "Elasticity fit complete"
    );

    match format {
        OutputFormat::Json => write_json(out, &fit),
        OutputFormat::Table => {
            let segment = format!("{} - {}", fmt4(fit.segment.0), fmt4(fit.segment.1));
            let rows: Vec<Vec<String>> = [
                ("segment", segment),
                ("observations", fit.observations.to_string()),
                ("slope", fmt4(fit.slope)),
                ("intercept", fmt4(fit.intercept)),
                ("r_squared", fmt4(fit.r_squared)),
                ("f_statistic", fmt4(fit.f_statistic)),
                ("durbin_watson", fmt4(fit.durbin_watson)),
            ]
            .into_iter()
            .map(|(name, value)| vec![name.to_string(), value])
            .collect();
            write_table(out, &["statistic", "value"], &rows)
        }
    }
}
