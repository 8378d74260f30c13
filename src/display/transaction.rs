//! Transaction display formatting
//!
//! Expense and income listings share one table layout. The category column
//! resolves ids through a [`CategoryDirectory`] so deleted or unknown ids
//! still render.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Transaction, TransactionKind};
use crate::services::CategoryDirectory;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Format a list of transactions as a table
pub fn format_transaction_list(
    kind: TransactionKind,
    transactions: &[Transaction],
    categories: &dyn CategoryDirectory,
) -> String {
    if transactions.is_empty() {
        return format!("No {} found.", kind.plural());
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.value(),
        date: txn.created_date.format("%Y-%m-%d").to_string(),
        description: truncate(&txn.description, 40),
        amount: txn.amount.to_string(),
        category: categories.name_of(txn.category_id),
    });

    Table::new(rows)
        .with(Style::sharp())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()))
        .to_string()
}

/// Truncate a string to a maximum length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
