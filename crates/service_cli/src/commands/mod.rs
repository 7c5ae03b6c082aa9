//! CLI command implementations
//!
//! Each submodule implements one `retail` subcommand. Commands take loaded
//! sales data and write to a caller-supplied sink.

pub mod correlation;
pub mod distribution;
pub mod elasticity;
pub mod margin;
pub mod optimise;
pub mod round;
pub mod scatter;
