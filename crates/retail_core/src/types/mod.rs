//! Value types shared by every retail analytics layer.
//!
//! This module provides:
//! - `Series`: canonical numeric sequence with container adapters
//! - `Segment`: optional inclusive price bounds
//! - `RetailError`: categorised failures for all operations

pub mod error;
pub mod segment;
pub mod series;

pub use error::RetailError;
pub use segment::Segment;
pub use series::Series;
