//! Round command implementation

use retail_analytics::SmartRounder;
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::input::SalesData;
use crate::output::{fmt4, write_json, write_table, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct RoundedPrice {
    retail: f64,
    rounded: f64,
}

/// Run the round command
pub fn run(
    data: &SalesData,
    rounder: &SmartRounder,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let prices = data.prices();
    info!(
        template = %rounder.template(),
        align = %rounder.align(),
        prices = prices.len(),
        "Rounding retails"
    );
    let rounded = rounder.round_all(&prices)?;

    let pairs: Vec<RoundedPrice> = prices
        .iter()
        .zip(&rounded)
        .map(|(&retail, &rounded)| RoundedPrice { retail, rounded })
        .collect();

    match format {
        OutputFormat::Json => write_json(out, &pairs),
        OutputFormat::Table => {
            let decimals = rounder.template().decimals() as usize;
            let rows: Vec<Vec<String>> = pairs
                .iter()
                .map(|p| vec![fmt4(p.retail), format!("{:.*}", decimals, p.rounded)])
                .collect();
            write_table(out, &["retail", "rounded"], &rows)
        }
    }
}
