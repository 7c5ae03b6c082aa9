//! # service_cli: Retail Pricing Command Line
//!
//! ## Service Layer Role
//!
//! Wires the analytics layers to the outside world for the `retail`
//! binary:
//! - TOML configuration with `RETAIL_*` environment overrides (`config`)
//! - CSV sales input (`input`)
//! - Table and JSON output (`output`)
//! - Terminal chart renderers (`render`)
//! - One module per subcommand (`commands`)

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod render;

pub use error::{CliError, Result};
