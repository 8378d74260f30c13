//! Expense and income management menus
//!
//! Both kinds share one menu; only labels and the backing store differ.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::cli::prompt::{format_entry_date, Prompter};
use crate::display::category::format_category_list;
use crate::display::transaction::format_transaction_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{TransactionId, TransactionKind};
use crate::services::{NewTransaction, TransactionService, TransactionUpdate};
use crate::storage::Storage;

/// Shown when adding a transaction before any category exists
pub const NO_CATEGORIES_MESSAGE: &str = "Please add a category first.";

/// Run the submenu for one kind; that store is saved on the way out
pub fn run_transaction_menu<R: BufRead, W: Write>(
    storage: &mut Storage,
    kind: TransactionKind,
    today: NaiveDate,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    let label = kind.label();

    loop {
        prompter.say("")?;
        prompter.heading(&format!("{} Management", label))?;
        prompter.say(&format!("1. Add {}", label))?;
        prompter.say(&format!("2. Edit {}", label))?;
        prompter.say(&format!("3. Delete {}", label))?;
        prompter.say(&format!("4. View {}", title_plural(kind)))?;
        prompter.say("5. Back")?;

        match prompter.read_menu_choice("Enter your choice: ", 5)? {
            1 => {
                if storage.categories.is_empty() {
                    prompter.warn(NO_CATEGORIES_MESSAGE)?;
                    save_store(storage, kind, prompter)?;
                    return Ok(());
                }
                add_transaction(storage, kind, today, prompter)?;
            }
            2 => edit_transaction(storage, kind, today, prompter)?,
            3 => delete_transaction(storage, kind, prompter)?,
            4 => show_list(storage, kind, prompter)?,
            _ => {
                save_store(storage, kind, prompter)?;
                return Ok(());
            }
        }
    }
}

fn add_transaction<R: BufRead, W: Write>(
    storage: &mut Storage,
    kind: TransactionKind,
    today: NaiveDate,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    let description = prompter.read_description("Enter description: ", None)?;
    let amount = prompter.read_amount("Enter amount: ", None)?;
    let date_prompt = format!(
        "Enter date (e.g. {}, blank for today): ",
        format_entry_date(today, prompter.date_format())
    );
    let date = prompter.read_date(&date_prompt, Some(today), today)?;
    prompter.say(&format_category_list(storage.categories.get_all()))?;
    let category_id = prompter.read_category_id("Enter category ID: ", None, &storage.categories)?;

    let new = NewTransaction {
        description,
        amount,
        date,
        category_id,
    };

    match TransactionService::new(storage, kind).add(new, today) {
        Ok(txn) => prompter.success(&format!("{} added with ID {}.", kind.label(), txn.id)),
        Err(e) => prompter.error(&e.to_string()),
    }
}

fn edit_transaction<R: BufRead, W: Write>(
    storage: &mut Storage,
    kind: TransactionKind,
    today: NaiveDate,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    if storage.transactions(kind).is_empty() {
        return prompter.warn(&format!("No {} found.", kind.plural()));
    }

    show_list(storage, kind, prompter)?;
    let id: TransactionId = prompter.read_id(&format!("Enter {} ID to edit: ", kind.plural()))?;
    let Some(current) = storage.transactions(kind).get(id).cloned() else {
        return prompter.error(&not_found(kind, id).to_string());
    };

    let description = prompter.read_description(
        &format!("Enter description (blank keeps '{}'): ", current.description),
        Some(current.description.as_str()),
    )?;
    let amount = prompter.read_amount(
        &format!("Enter amount (blank keeps {}): ", current.amount),
        Some(current.amount),
    )?;
    let date_prompt = format!(
        "Enter date (blank keeps {}): ",
        format_entry_date(current.created_date, prompter.date_format())
    );
    let date = prompter.read_date(&date_prompt, Some(current.created_date), today)?;
    prompter.say(&format_category_list(storage.categories.get_all()))?;
    let category_id = prompter.read_category_id(
        &format!("Enter category ID (blank keeps {}): ", current.category_id),
        Some(current.category_id),
        &storage.categories,
    )?;

    let update = TransactionUpdate {
        description: Some(description),
        amount: Some(amount),
        date: Some(date),
        category_id: Some(category_id),
    };

    match TransactionService::new(storage, kind).edit(id, update, today) {
        Ok(txn) => prompter.success(&format!("{} {} updated.", kind.label(), txn.id)),
        Err(e) => prompter.error(&e.to_string()),
    }
}

fn delete_transaction<R: BufRead, W: Write>(
    storage: &mut Storage,
    kind: TransactionKind,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    if storage.transactions(kind).is_empty() {
        return prompter.warn(&format!("No {} found.", kind.plural()));
    }

    show_list(storage, kind, prompter)?;
    let id: TransactionId = prompter.read_id(&format!("Enter {} ID to delete: ", kind.plural()))?;

    match TransactionService::new(storage, kind).delete(id) {
        Ok(txn) => prompter.success(&format!("{} {} deleted.", kind.label(), txn.id)),
        Err(e) => prompter.error(&e.to_string()),
    }
}

fn show_list<R: BufRead, W: Write>(
    storage: &Storage,
    kind: TransactionKind,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    let table = format_transaction_list(
        kind,
        storage.transactions(kind).get_all(),
        &storage.categories,
    );
    prompter.say(&table)
}

fn save_store<R: BufRead, W: Write>(
    storage: &Storage,
    kind: TransactionKind,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    if let Err(e) = storage.transactions(kind).save() {
        log::error!("Failed to save {}: {}", kind.plural(), e);
        prompter.error(&format!("Failed to save {}: {}", kind.plural(), e))?;
    }
    Ok(())
}

fn title_plural(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Expense => "Expenses",
        TransactionKind::Income => "Incomes",
    }
}

fn not_found(kind: TransactionKind, id: TransactionId) -> TrackerError {
    match kind {
        TransactionKind::Expense => TrackerError::expense_not_found(id),
        TransactionKind::Income => TrackerError::income_not_found(id),
    }
}
