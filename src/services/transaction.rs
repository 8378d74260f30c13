//! Transaction service
//!
//! Business rules shared by the expense and income stores: validation on add
//! and edit, `max + 1` id assignment, and lookups by id.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, Money, Transaction, TransactionId, TransactionKind};
use crate::services::category::CategoryDirectory;
use crate::storage::Storage;

/// Fields for a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub category_id: CategoryId,
}

/// Partial update; `None` keeps the existing value
#[derive(Debug, Clone, Default)]
pub struct TransactionUpdate {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub date: Option<NaiveDate>,
    pub category_id: Option<CategoryId>,
}

/// Service for one kind of transaction
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
    kind: TransactionKind,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a mut Storage, kind: TransactionKind) -> Self {
        Self { storage, kind }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Add a transaction; `today` bounds the date
    pub fn add(&mut self, new: NewTransaction, today: NaiveDate) -> TrackerResult<Transaction> {
        let id = self.storage.transactions(self.kind).next_id();
        if !id.is_assignable() {
            return Err(TrackerError::Validation(format!(
                "No {} ids left",
                self.kind.label().to_lowercase()
            )));
        }
        let txn = Transaction::new(
            id,
            self.kind,
            new.description.trim(),
            new.amount,
            new.category_id,
            new.date,
        );

        self.validate(&txn, today)?;

        self.storage.transactions_mut(self.kind).insert(txn.clone());
        log::debug!("Added {}", txn);
        Ok(txn)
    }

    /// Apply a partial update to an existing transaction
    pub fn edit(
        &mut self,
        id: TransactionId,
        update: TransactionUpdate,
        today: NaiveDate,
    ) -> TrackerResult<Transaction> {
        let mut txn = self.get(id).cloned().ok_or_else(|| self.not_found(id))?;

        if let Some(description) = update.description {
            txn.description = description.trim().to_string();
        }
        if let Some(amount) = update.amount {
            txn.amount = amount;
        }
        if let Some(date) = update.date {
            txn.created_date = date;
        }
        if let Some(category_id) = update.category_id {
            txn.category_id = category_id;
        }

        self.validate(&txn, today)?;

        self.storage.transactions_mut(self.kind).update(txn.clone())?;
        log::debug!("Updated {}", txn);
        Ok(txn)
    }

    /// Delete a transaction by id
    pub fn delete(&mut self, id: TransactionId) -> TrackerResult<Transaction> {
        let txn = self
            .storage
            .transactions_mut(self.kind)
            .delete(id)
            .ok_or_else(|| self.not_found(id))?;
        log::debug!("Deleted {}", txn);
        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.storage.transactions(self.kind).get(id)
    }

    /// List transactions in load/append order
    pub fn list(&self) -> &[Transaction] {
        self.storage.transactions(self.kind).get_all()
    }

    fn validate(&self, txn: &Transaction, today: NaiveDate) -> TrackerResult<()> {
        txn.validate(today)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        if !self.storage.categories.is_valid(txn.category_id) {
            return Err(TrackerError::category_not_found(txn.category_id));
        }

        Ok(())
    }

    fn not_found(&self, id: TransactionId) -> TrackerError {
        match self.kind {
            TransactionKind::Expense => TrackerError::expense_not_found(id),
            TransactionKind::Income => TrackerError::income_not_found(id),
        }
    }
}
