//! Storage layer for the expense tracker
//!
//! Provides flat-file storage with atomic writes and automatic directory
//! creation. `Storage` owns every in-memory collection for the lifetime of
//! the process; services borrow it.

pub mod categories;
pub mod file_io;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_records, write_records_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::TransactionKind;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub categories: CategoryRepository,
    pub expenses: TransactionRepository,
    pub incomes: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.categories_file()),
            expenses: TransactionRepository::new(TransactionKind::Expense, paths.expenses_file()),
            incomes: TransactionRepository::new(TransactionKind::Income, paths.incomes_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// Best-effort: a repository that fails to load stays empty and its error
    /// is returned to the caller for reporting, while the others still load.
    pub fn load_all(&mut self) -> Vec<TrackerError> {
        let mut failures = Vec::new();

        if let Err(e) = self.categories.load() {
            log::error!("Failed to load categories: {}", e);
            failures.push(e);
        }
        if let Err(e) = self.expenses.load() {
            log::error!("Failed to load expenses: {}", e);
            failures.push(e);
        }
        if let Err(e) = self.incomes.load() {
            log::error!("Failed to load incomes: {}", e);
            failures.push(e);
        }

        failures
    }

    /// Save all data to disk
    ///
    /// Every repository is attempted even if an earlier one fails; the
    /// failures are returned for reporting.
    pub fn save_all(&self) -> Vec<TrackerError> {
        let mut failures = Vec::new();

        if let Err(e) = self.categories.save() {
            log::error!("Failed to save categories: {}", e);
            failures.push(e);
        }
        if let Err(e) = self.expenses.save() {
            log::error!("Failed to save expenses: {}", e);
            failures.push(e);
        }
        if let Err(e) = self.incomes.save() {
            log::error!("Failed to save incomes: {}", e);
            failures.push(e);
        }

        failures
    }

    /// Repository holding transactions of `kind`
    pub fn transactions(&self, kind: TransactionKind) -> &TransactionRepository {
        match kind {
            TransactionKind::Expense => &self.expenses,
            TransactionKind::Income => &self.incomes,
        }
    }

    /// Mutable repository holding transactions of `kind`
    pub fn transactions_mut(&mut self, kind: TransactionKind) -> &mut TransactionRepository {
        match kind {
            TransactionKind::Expense => &mut self.expenses,
            TransactionKind::Income => &mut self.incomes,
        }
    }

    /// True when neither store holds a single transaction
    pub fn has_no_transactions(&self) -> bool {
        self.expenses.is_empty() && self.incomes.is_empty()
    }
}
