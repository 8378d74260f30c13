//! Transaction model
//!
//! Expenses and incomes share one record shape. Which store holds a record
//! decides its kind; the `kind` tag travels with it so display and error
//! messages can name it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Whether a transaction is money going out or coming in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    /// Label used in menus, messages and graph bars
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    /// Plural lowercase form ("expenses", "incomes")
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Expense => "expenses",
            Self::Income => "incomes",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Anything that can be bucketed by date: an amount, a date and a category
pub trait LedgerEntry {
    fn amount(&self) -> Money;
    fn date(&self) -> NaiveDate;
    fn category_id(&self) -> CategoryId;
}

/// A single expense or income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier within its store
    pub id: TransactionId,

    pub kind: TransactionKind,

    pub description: String,

    /// Always positive; the kind carries the direction
    pub amount: Money,

    pub category_id: CategoryId,

    /// Date the transaction happened
    pub created_date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        kind: TransactionKind,
        description: impl Into<String>,
        amount: Money,
        category_id: CategoryId,
        created_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            description: description.into(),
            amount,
            category_id,
            created_date,
        }
    }

    /// Validate the field-level rules; `today` bounds the date
    pub fn validate(&self, today: NaiveDate) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount.exceeds_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.created_date > today {
            return Err(TransactionValidationError::FutureDate(self.created_date));
        }

        Ok(())
    }
}

impl LedgerEntry for Transaction {
    fn amount(&self) -> Money {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.created_date
    }

    fn category_id(&self) -> CategoryId {
        self.category_id
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} {} {} ({})",
            self.kind, self.id, self.created_date, self.description, self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    FutureDate(NaiveDate),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be a positive number, got {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the limit of {}", amount, Money::MAX_AMOUNT)
            }
            Self::FutureDate(date) => write!(f, "Date {} is in the future", date),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
