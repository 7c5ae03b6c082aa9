//! CSV sales input.
//!
//! One row per item or observation with headers
//! `retail,units[,cost][,elasticity]`. Optional columns may be omitted
//! entirely or left empty per row.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::{CliError, Result};

/// One CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SalesRecord {
    /// Current retail price
    pub retail: f64,
    /// Units sold at `retail`
    pub units: f64,
    /// Unit cost
    #[serde(default)]
    pub cost: Option<f64>,
    /// Price elasticity of demand
    #[serde(default)]
    pub elasticity: Option<f64>,
}

/// Sales rows loaded from one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesData {
    source: String,
    records: Vec<SalesRecord>,
}

impl SalesData {
    /// Read a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        Self::from_reader(&path.display().to_string(), file)
    }

    /// Read CSV from any reader; `source` names it in error messages.
    pub fn from_reader<R: Read>(source: &str, reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize()
            .collect::<std::result::Result<Vec<SalesRecord>, _>>()?;

        debug!(source, rows = records.len(), "Loaded sales data");
        Ok(Self {
            source: source.to_string(),
            records,
        })
    }

    /// Rows in file order.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the file had no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `retail` column.
    pub fn prices(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.retail).collect()
    }

    /// The `units` column.
    pub fn units(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.units).collect()
    }

    /// The `cost` column, required on every row.
    pub fn costs(&self) -> Result<Vec<f64>> {
        self.required("cost", |r| r.cost)
    }

    /// The `elasticity` column if every row carries one.
    pub fn elasticities(&self) -> Option<Vec<f64>> {
        self.records.iter().map(|r| r.elasticity).collect()
    }

    fn required(
        &self,
        column: &'static str,
        field: impl Fn(&SalesRecord) -> Option<f64>,
    ) -> Result<Vec<f64>> {
        self.records
            .iter()
            .map(|r| {
                field(r).ok_or_else(|| CliError::MissingColumn {
                    path: self.source.clone(),
                    column,
                })
            })
            .collect()
    }
}
