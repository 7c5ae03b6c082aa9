//! Optimise command implementation
//!
//! Uses the `elasticity` column when every row has one. Otherwise the
//! demand line is fitted to the file itself and each item is priced
//! against the fitted point elasticity at its current retail.

use retail_analytics::{estimate_elasticity, OptimalRetail, OptimiserConfig, RetailOptimiser};
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::input::SalesData;
use crate::output::{fmt4, write_json, write_table, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct OptimisedItem {
    current_retail: f64,
    elasticity: f64,
    optimal_retail: f64,
    units: f64,
    revenue: f64,
}

impl OptimisedItem {
    fn new(current_retail: f64, elasticity: f64, optimal: OptimalRetail) -> Self {
        Self {
            current_retail,
            elasticity,
            optimal_retail: optimal.retail,
            units: optimal.units,
            revenue: optimal.revenue,
        }
    }
}

/// Run the optimise command
pub fn run(
    data: &SalesData,
    config: OptimiserConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let prices = data.prices();
    let units = data.units();

    let elasticity = match data.elasticities() {
        Some(elasticity) => elasticity,
        None => {
            let fit = estimate_elasticity(&prices, &units, None)?;
            info!(slope = fit.slope, "No elasticity column; using fitted point elasticities");
            prices.iter().map(|&p| fit.point_elasticity(p)).collect()
        }
    };

    info!(
        items = prices.len(),
        range = config.range,
        step = config.step,
        "Optimising retails"
    );
    let results = RetailOptimiser::new(config).optimise(&prices, &units, &elasticity)?;

    let items: Vec<OptimisedItem> = prices
        .iter()
        .zip(&elasticity)
        .zip(results)
        .map(|((&retail, &elasticity), optimal)| OptimisedItem::new(retail, elasticity, optimal))
        .collect();

    match format {
        OutputFormat::Json => write_json(out, &items),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = items
                .iter()
                .map(|item| {
                    vec![
                        fmt4(item.current_retail),
                        fmt4(item.elasticity),
                        fmt4(item.optimal_retail),
                        fmt4(item.units),
                        fmt4(item.revenue),
                    ]
                })
                .collect();
            write_table(
                out,
                &["retail", "elasticity", "optimal", "units", "revenue"],
                &rows,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_elasticity_column() {
        let csv = "retail,units,elasticity\n2.5,50,-0.5\n";
        let data = SalesData::from_reader("items.csv", csv.as_bytes()).unwrap();
        let mut buf = Vec::new();
        run(&data, OptimiserConfig::default(), OutputFormat::Json, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["current_retail"].as_f64().unwrap(), 2.5);
        let optimal = value[0]["optimal_retail"].as_f64().unwrap();
        assert!((optimal - 2.74).abs() < 1e-9);
        let revenue = value[0]["revenue"].as_f64().unwrap();
        assert!((revenue - 2.74 * 47.6).abs() < 1e-9);
    }

    #[test]
    fn test_falls_back_to_fitted_elasticity() {
        let csv = "retail,units\n2.49,41\n2.99,30\n3.49,26\n3.99,19\n";
        let data = SalesData::from_reader("sales.csv", csv.as_bytes()).unwrap();
        let mut buf = Vec::new();
        run(&data, OptimiserConfig::default(), OutputFormat::Table, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        // header, rule and one row per item
        assert_eq!(text.lines().count(), 6);
    }
}
