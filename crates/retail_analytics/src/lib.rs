//! # retail_analytics: Retail Pricing Analytics Kernel
//!
//! ## Layer 3 (Analytics) Role
//!
//! The numerically non-trivial operations of the toolkit, built on `retail_core`:
//! - Pearson correlation between price and units (`correlation`)
//! - OLS price elasticity with R², F-statistic and Durbin-Watson (`elasticity`)
//! - Grid-search revenue-maximising retail (`optimiser`)
//! - Template-driven smart price rounding (`rounding`)
//!
//! Every operation is a pure, synchronous function of borrowed slices.
//! Nothing is cached and inputs are never mutated, so all entry points may
//! be called concurrently.
//!
//! ## Usage Examples
//!
//! ```rust
//! use retail_analytics::{estimate_elasticity, optimal_retail, smart_round, Align};
//!
//! let prices = [2.49, 2.99, 3.99];
//! let units = [40.0, 30.0, 20.0];
//!
//! let fit = estimate_elasticity(&prices, &units, None).unwrap();
//! assert!(fit.slope < 0.0);
//!
//! let best = optimal_retail(&[2.5], &[50.0], &[-0.5], 0.1).unwrap();
//! assert!((best[0] - 2.74).abs() < 1e-9);
//!
//! let rounded = smart_round(&[12.567, 3.40], "*.95", Align::Down).unwrap();
//! assert!((rounded[0] - 11.95).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Distribute optimiser items across a rayon thread pool
//! - `serde`: Enable serialisation for result types and `Align`

#![warn(missing_docs)]

pub mod correlation;
pub mod elasticity;
pub mod optimiser;
pub mod rounding;

pub use correlation::{correlation, correlation_flat};
pub use elasticity::{estimate_elasticity, ElasticityEstimator, ElasticityFit};
pub use optimiser::{optimal_retail, OptimalRetail, OptimiserConfig, RetailOptimiser};
pub use retail_core::types::{RetailError, Segment, Series};
pub use rounding::{smart_round, Align, RoundingTemplate, SmartRounder};
