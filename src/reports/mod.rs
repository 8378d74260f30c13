//! Reports for the expense tracker
//!
//! Date-bucketed expense and income trends over a time range.

pub mod trend;

pub use trend::{aggregate, DateBucket, TrendReport};
