//! Expense Tracker - terminal-based personal expense and income tracker
//!
//! This library holds the data model, flat-file storage and the trend
//! engine behind the `tracker` binary: transactions are bucketed by date
//! inside a time range and rendered as proportional bars.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, time ranges)
//! - `storage`: Flat-file storage layer
//! - `services`: Business rules for categories and transactions
//! - `reports`: Date-bucketed trend aggregation
//! - `display`: Tables, graph bars and colored messages
//! - `cli`: Interactive menus and prompts
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
