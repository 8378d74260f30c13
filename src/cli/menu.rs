//! Home menu of the interactive shell

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::cli::category::run_category_menu;
use crate::cli::graph::GraphController;
use crate::cli::prompt::Prompter;
use crate::cli::transaction::run_transaction_menu;
use crate::error::{TrackerError, TrackerResult};
use crate::models::TransactionKind;
use crate::storage::Storage;

/// Run the shell until Exit or end of input, then save every store
pub fn run_shell<R: BufRead, W: Write>(
    storage: &mut Storage,
    today: NaiveDate,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    let outcome = home_loop(storage, today, prompter);

    let failures = storage.save_all();
    for e in &failures {
        prompter.error(&format!("Failed to save data: {}", e))?;
    }

    match outcome {
        Ok(()) | Err(TrackerError::InputClosed) if failures.is_empty() => Ok(()),
        Ok(()) | Err(TrackerError::InputClosed) => Err(TrackerError::Storage(format!(
            "{} data file(s) could not be saved",
            failures.len()
        ))),
        Err(e) => Err(e),
    }
}

fn home_loop<R: BufRead, W: Write>(
    storage: &mut Storage,
    today: NaiveDate,
    prompter: &mut Prompter<R, W>,
) -> TrackerResult<()> {
    loop {
        prompter.say("")?;
        prompter.heading("Expense Tracker")?;
        prompter.say("1. Category Management")?;
        prompter.say("2. Income Management")?;
        prompter.say("3. Expense Management")?;
        prompter.say("4. Generate Graphs")?;
        prompter.say("5. Exit")?;

        match prompter.read_menu_choice("Enter your choice: ", 5)? {
            1 => run_category_menu(storage, prompter)?,
            2 => run_transaction_menu(storage, TransactionKind::Income, today, prompter)?,
            3 => run_transaction_menu(storage, TransactionKind::Expense, today, prompter)?,
            4 => GraphController::new(storage, today).run_graph_menu(prompter)?,
            _ => {
                prompter.say("Goodbye!")?;
                return Ok(());
            }
        }
    }
}
