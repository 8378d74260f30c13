//! Console input for the interactive shell
//!
//! [`Prompter`] owns the input and output streams so menus can be driven
//! from a script in tests. Field parsers are plain functions returning the
//! user-facing message on failure; the `read_*` methods loop on them until
//! the input is accepted or the input stream ends.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use crate::display::Palette;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CategoryId, Money};
use crate::services::CategoryDirectory;

/// ISO date, always accepted alongside the configured entry format
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default date format for typed input
pub const DEFAULT_ENTRY_DATE_FORMAT: &str = "%Y/%m/%d";

/// Line-oriented console I/O
pub struct Prompter<R, W> {
    input: R,
    output: W,
    palette: Palette,
    date_format: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
            date_format: DEFAULT_ENTRY_DATE_FORMAT.to_string(),
        }
    }

    /// Use a different strftime format for typed dates
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line as-is
    pub fn say(&mut self, line: &str) -> TrackerResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn success(&mut self, message: &str) -> TrackerResult<()> {
        let line = self.palette.success(message);
        self.say(&line)
    }

    pub fn warn(&mut self, message: &str) -> TrackerResult<()> {
        let line = self.palette.warning(message);
        self.say(&line)
    }

    pub fn error(&mut self, message: &str) -> TrackerResult<()> {
        let line = self.palette.error(message);
        self.say(&line)
    }

    pub fn heading(&mut self, title: &str) -> TrackerResult<()> {
        let line = self.palette.heading(title);
        self.say(&line)
    }

    /// Show a prompt and read one trimmed line
    ///
    /// Returns [`TrackerError::InputClosed`] at end of input.
    pub fn read_line(&mut self, prompt: &str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(TrackerError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Prompt until `parse` accepts the input, reporting each rejection
    pub fn ask<T, F>(&mut self, prompt: &str, mut parse: F) -> TrackerResult<T>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(message) => self.error(&message)?,
            }
        }
    }

    pub fn read_menu_choice(&mut self, prompt: &str, max: u32) -> TrackerResult<u32> {
        self.ask(prompt, |input| parse_menu_choice(input, max))
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> TrackerResult<bool> {
        self.ask(prompt, parse_yes_no)
    }

    pub fn read_id<T: FromStr>(&mut self, prompt: &str) -> TrackerResult<T> {
        self.ask(prompt, parse_id::<T>)
    }

    pub fn read_description(&mut self, prompt: &str, default: Option<&str>) -> TrackerResult<String> {
        self.ask(prompt, |input| parse_description(input, default))
    }

    pub fn read_amount(&mut self, prompt: &str, default: Option<Money>) -> TrackerResult<Money> {
        self.ask(prompt, |input| parse_amount(input, default))
    }

    pub fn read_date(
        &mut self,
        prompt: &str,
        default: Option<NaiveDate>,
        today: NaiveDate,
    ) -> TrackerResult<NaiveDate> {
        let format = self.date_format.clone();
        self.ask(prompt, |input| parse_date(input, default, today, &format))
    }

    pub fn read_category_id(
        &mut self,
        prompt: &str,
        default: Option<CategoryId>,
        directory: &dyn CategoryDirectory,
    ) -> TrackerResult<CategoryId> {
        self.ask(prompt, |input| parse_category_id(input, default, directory))
    }
}

/// A menu number in `1..=max`
pub fn parse_menu_choice(input: &str, max: u32) -> Result<u32, String> {
    match input.trim().parse::<u32>() {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice),
        _ => Err(format!("Please enter a number between 1 and {}.", max)),
    }
}

/// "yes" or "no", any case
pub fn parse_yes_no(input: &str) -> Result<bool, String> {
    match input.trim().to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err("Please answer Yes or No.".to_string()),
    }
}

pub fn parse_id<T: FromStr>(input: &str) -> Result<T, String> {
    input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid ID: '{}'", input.trim()))
}

pub fn parse_description(input: &str, default: Option<&str>) -> Result<String, String> {
    let input = input.trim();
    match (input.is_empty(), default) {
        (false, _) => Ok(input.to_string()),
        (true, Some(current)) => Ok(current.to_string()),
        (true, None) => Err("Description cannot be empty.".to_string()),
    }
}

/// A positive amount such as "12", "12.5" or "12.50"
pub fn parse_amount(input: &str, default: Option<Money>) -> Result<Money, String> {
    let input = input.trim();
    if input.is_empty() {
        return default.ok_or_else(|| "Amount cannot be empty.".to_string());
    }

    let amount = Money::parse(input).map_err(|e| e.to_string())?;
    if !amount.is_positive() {
        return Err("Amount must be greater than zero.".to_string());
    }
    if amount.exceeds_limit() {
        return Err(format!("Amount cannot exceed {}.", Money::MAX_AMOUNT));
    }
    Ok(amount)
}

/// A date in `entry_format` or ISO form, no later than `today`
pub fn parse_date(
    input: &str,
    default: Option<NaiveDate>,
    today: NaiveDate,
    entry_format: &str,
) -> Result<NaiveDate, String> {
    let input = input.trim();
    if input.is_empty() {
        return default.ok_or_else(|| "Date cannot be empty.".to_string());
    }

    let date = NaiveDate::parse_from_str(input, entry_format)
        .or_else(|_| NaiveDate::parse_from_str(input, ISO_DATE_FORMAT))
        .map_err(|_| {
            format!(
                "Invalid date '{}'. Enter a date like {}.",
                input,
                format_entry_date(today, entry_format)
            )
        })?;

    if date > today {
        return Err("Date cannot be in the future.".to_string());
    }
    Ok(date)
}

/// Format `date` for display in prompts, falling back to ISO for a bad format
pub fn format_entry_date(date: NaiveDate, entry_format: &str) -> String {
    let mut text = String::new();
    match write!(text, "{}", date.format(entry_format)) {
        Ok(()) => text,
        Err(_) => date.format(ISO_DATE_FORMAT).to_string(),
    }
}

/// An id the directory recognizes
pub fn parse_category_id(
    input: &str,
    default: Option<CategoryId>,
    directory: &dyn CategoryDirectory,
) -> Result<CategoryId, String> {
    let id = if input.trim().is_empty() {
        default.ok_or_else(|| "Category ID cannot be empty.".to_string())?
    } else {
        parse_id::<CategoryId>(input)?
    };

    if directory.is_valid(id) {
        Ok(id)
    } else {
        Err(format!("Category not found: {}", id))
    }
}
