//! Core data models for the expense tracker
//!
//! This module contains the data structures of the tracking domain:
//! transactions, categories, amounts and graph time ranges.

pub mod category;
pub mod ids;
pub mod money;
pub mod time_range;
pub mod transaction;

pub use category::Category;
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use time_range::TimeRange;
pub use transaction::{LedgerEntry, Transaction, TransactionKind};
