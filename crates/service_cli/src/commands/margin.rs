//! Margin command implementation
//!
//! Per-item margin and markup plus unit-weighted totals. Requires a
//! `cost` column.

use retail_formulas::margin::{margin_each, markup_each, weighted_margin, weighted_markup};
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::input::SalesData;
use crate::output::{fmt4, write_json, write_table, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct ItemMargin {
    cost: f64,
    retail: f64,
    margin: f64,
    markup: f64,
}

#[derive(Debug, Serialize)]
struct MarginReport {
    items: Vec<ItemMargin>,
    weighted_margin: f64,
    weighted_markup: f64,
}

/// Run the margin command
pub fn run(data: &SalesData, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let cost = data.costs()?;
    let retail = data.prices();
    let units = data.units();

    let margins = margin_each(&cost, &retail)?;
    let markups = markup_each(&cost, &retail)?;
    let report = MarginReport {
        items: cost
            .iter()
            .zip(&retail)
            .zip(margins.iter().zip(&markups))
            .map(|((&cost, &retail), (&margin, &markup))| ItemMargin {
                cost,
                retail,
                margin,
                markup,
            })
            .collect(),
        weighted_margin: weighted_margin(&cost, &retail, &units)?,
        weighted_markup: weighted_markup(&cost, &retail, &units)?,
    };
    info!(
        items = report.items.len(),
        weighted_margin = report.weighted_margin,
        "Margins computed"
    );

    match format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = report
                .items
                .iter()
                .map(|i| vec![fmt4(i.cost), fmt4(i.retail), fmt4(i.margin), fmt4(i.markup)])
                .collect();
            write_table(out, &["cost", "retail", "margin", "markup"], &rows)?;
            writeln!(out)?;
            writeln!(out, "Weighted margin: {}", fmt4(report.weighted_margin))?;
            writeln!(out, "Weighted markup: {}", fmt4(report.weighted_markup))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use approx::assert_relative_eq;

    #[test]
    fn test_weighted_totals() {
        let csv = "retail,units,cost\n10,1,6\n4,5,3\n";
        let data = SalesData::from_reader("m.csv", csv.as_bytes()).unwrap();
        let mut buf = Vec::new();
        run(&data, OutputFormat::Json, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_relative_eq!(value["weighted_margin"].as_f64().unwrap(), 9.0 / 30.0, epsilon = 1e-12);
        assert_relative_eq!(value["weighted_markup"].as_f64().unwrap(), 9.0 / 21.0, epsilon = 1e-12);
        assert_relative_eq!(value["items"][0]["margin"].as_f64().unwrap(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_requires_cost_column() {
        let data = SalesData::from_reader("m.csv", "retail,units\n10,1\n".as_bytes()).unwrap();
        let mut buf = Vec::new();
        assert!(matches!(
            run(&data, OutputFormat::Table, &mut buf),
            Err(CliError::MissingColumn { column: "cost", .. })
        ));
    }
}
