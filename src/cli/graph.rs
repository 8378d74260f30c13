//! Graph menu
//!
//! Drives range selection and the optional category filter, then prints the
//! rendered trend for the current data.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::cli::prompt::Prompter;
use crate::display::category::format_category_list;
use crate::display::graph;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, TimeRange};
use crate::reports::TrendReport;
use crate::services::CategoryDirectory;
use crate::storage::Storage;

/// Shown when there is nothing to graph
pub const NO_DATA_MESSAGE: &str = "Couldn't find any income or expense yet.";

const BACK_CHOICE: u32 = 5;

/// Builds graphs from the loaded stores
pub struct GraphController<'a> {
    storage: &'a Storage,
    today: NaiveDate,
}

impl<'a> GraphController<'a> {
    pub fn new(storage: &'a Storage, today: NaiveDate) -> Self {
        Self { storage, today }
    }

    pub fn has_data(&self) -> bool {
        !self.storage.has_no_transactions()
    }

    /// Run the graph menu until the user goes back
    pub fn run_graph_menu<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> TrackerResult<()> {
        if !self.has_data() {
            return prompter.warn(NO_DATA_MESSAGE);
        }

        loop {
            prompter.say("")?;
            prompter.heading("Generate Graphs")?;
            for (index, range) in TimeRange::all().iter().enumerate() {
                prompter.say(&format!("{}. {}", index + 1, range))?;
            }
            prompter.say(&format!("{}. Back", BACK_CHOICE))?;

            let choice = prompter.read_menu_choice("Enter your choice: ", BACK_CHOICE)?;
            let Some(range) = TimeRange::from_menu_choice(choice) else {
                return Ok(());
            };

            let filter = if prompter.read_yes_no("Filter by Category? (Yes/No): ")? {
                prompter.say(&format_category_list(self.storage.categories.get_all()))?;
                Some(prompter.read_category_id(
                    "Enter category ID: ",
                    None,
                    &self.storage.categories,
                )?)
            } else {
                None
            };

            prompter.say("")?;
            for line in self.graph_lines(range, filter) {
                prompter.say(&line)?;
            }
        }
    }

    /// Render one graph, rejecting an unknown category filter
    pub fn graph(&self, range: TimeRange, filter: Option<CategoryId>) -> TrackerResult<Vec<String>> {
        if let Some(id) = filter {
            if !self.storage.categories.is_valid(id) {
                return Err(TrackerError::category_not_found(id));
            }
        }
        Ok(self.graph_lines(range, filter))
    }

    fn graph_lines(&self, range: TimeRange, filter: Option<CategoryId>) -> Vec<String> {
        let report = TrendReport::generate(
            self.storage.expenses.get_all(),
            self.storage.incomes.get_all(),
            range,
            filter,
            self.today,
        );
        let label = filter.map(|id| self.storage.categories.name_of(id));
        graph::render(&report.rows, label.as_deref())
    }
}
