//! Mathematical building blocks.
//!
//! - [`stats`]: generic descriptive statistics used by correlation and regression

pub mod stats;

/// Generic floating-point trait for numeric computations.
///
/// Re-exported so downstream crates can write generic code without a
/// direct num-traits dependency.
pub use num_traits::Float;
