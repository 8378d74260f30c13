//! Service layer for the expense tracker
//!
//! Business rules sit here, between the interactive shell and storage.

pub mod category;
pub mod transaction;

pub use category::{CategoryDirectory, CategoryService};
pub use transaction::{NewTransaction, TransactionService, TransactionUpdate};
