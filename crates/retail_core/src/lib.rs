//! # retail_core: Numeric Foundation for Retail Pricing Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! retail_core is the bottom layer of the workspace, providing:
//! - The canonical numeric sequence type `Series` and its adapters (`types::series`)
//! - Optional price segment bounds `Segment` (`types::segment`)
//! - The shared error type `RetailError` (`types::error`)
//! - Generic descriptive statistics: mean, variance, covariance, Pearson (`math::stats`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other retail_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use retail_core::math::stats::pearson;
//! use retail_core::types::{Segment, Series};
//!
//! // Adapt any container into the canonical series
//! let prices = Series::from(vec![1.99, 2.49, 2.99, 3.99]);
//! let units: Series = [50.0, 40.0, 30.0, 20.0].into();
//!
//! let r = pearson(&prices, &units).unwrap();
//! assert!(r < -0.98);
//!
//! // Unset bounds resolve to the observed range
//! let (begin, end) = Segment::full().resolve(&prices).unwrap();
//! assert_eq!((begin, end), (1.99, 3.99));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Series`, `Segment` and `RetailError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
