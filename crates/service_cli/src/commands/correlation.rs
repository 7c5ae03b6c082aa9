//! Correlation command implementation

use retail_analytics::correlation;
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::input::SalesData;
use crate::output::{write_json, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct CorrelationReport {
    observations: usize,
    correlation: f64,
}

/// Run the correlation command
pub fn run(data: &SalesData, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let r = correlation(&data.prices(), &data.units())?;
    info!(observations = data.len(), correlation = r, "Correlation computed");

    match format {
        OutputFormat::Json => write_json(
            out,
            &CorrelationReport {
                observations: data.len(),
                correlation: r,
            },
        ),
        OutputFormat::Table => {
            writeln!(out, "Observations: {}", data.len())?;
            writeln!(out, "Correlation:  {:.6}", r)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_report() {
        let csv = "retail,units\n1.99,50\n2.49,40\n2.99,30\n3.99,20\n";
        let data = SalesData::from_reader("sales.csv", csv.as_bytes()).unwrap();
        let mut buf = Vec::new();
        run(&data, OutputFormat::Json, &mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let r = value["correlation"].as_f64().unwrap();
        assert!((r - (-0.9827076298239906)).abs() < 1e-12);
        assert_eq!(value["observations"], 4);
    }
}
