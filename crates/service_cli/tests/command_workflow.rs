//! File-based workflows through the command layer.
//!
//! Each test writes a sales CSV (and optionally a `retail.toml`) to a
//! temporary directory and runs commands as the binary would.

use retail_analytics::Align;
use service_cli::commands;
use service_cli::config::CliConfig;
use service_cli::input::SalesData;
use service_cli::output::OutputFormat;
use service_cli::render::TextRenderer;
use service_cli::CliError;
use std::fs;
use tempfile::TempDir;

const SALES: &str = "\
retail,units,cost
2.49,40,1.50
2.99,30,1.60
3.99,20,1.75
";

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("sales.csv"), SALES).unwrap();
    dir
}

fn run_to_string(f: impl FnOnce(&mut Vec<u8>) -> service_cli::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_config_file_drives_rounding() {
    let dir = workspace();
    let config_path = dir.path().join("retail.toml");
    fs::write(&config_path, "[rounding]\ntemplate = \"*.95\"\nalign = \"up\"\n").unwrap();

    let config = CliConfig::load(&config_path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.rounding.align, Align::Up);

    let data = SalesData::load(&dir.path().join("sales.csv")).unwrap();
    let rounder = config.rounder().unwrap();
    let text = run_to_string(|out| commands::round::run(&data, &rounder, OutputFormat::Json, out));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let rounded: Vec<f64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["rounded"].as_f64().unwrap())
        .collect();
    for (r, expected) in rounded.iter().zip([2.95, 3.95, 4.95]) {
        assert!((r - expected).abs() < 1e-9, "{} != {}", r, expected);
    }
}

#[test]
fn test_every_table_command_succeeds_on_one_file() {
    let dir = workspace();
    let data = SalesData::load(&dir.path().join("sales.csv")).unwrap();
    let config = CliConfig::default();
    let renderer = TextRenderer::default();

    let outputs = [
        run_to_string(|out| commands::correlation::run(&data, OutputFormat::Table, out)),
        run_to_string(|out| commands::elasticity::run(&data, None, None, OutputFormat::Table, out)),
        run_to_string(|out| {
            commands::optimise::run(
                &data,
                config.optimiser_config().unwrap(),
                OutputFormat::Table,
                out,
            )
        }),
        run_to_string(|out| {
            commands::round::run(&data, &config.rounder().unwrap(), OutputFormat::Table, out)
        }),
        run_to_string(|out| {
            commands::distribution::run(
                &data,
                config.distribution.bin_width,
                &renderer,
                OutputFormat::Table,
                out,
            )
        }),
        run_to_string(|out| commands::scatter::run(&data, &renderer, out)),
        run_to_string(|out| commands::margin::run(&data, OutputFormat::Table, out)),
    ];

    for output in &outputs {
        assert!(!output.is_empty());
    }
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SalesData::load(&dir.path().join("absent.csv"));
    assert!(matches!(result, Err(CliError::FileNotFound(_))));
}
