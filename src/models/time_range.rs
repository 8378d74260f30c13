//! Time windows for trend graphs
//!
//! A `TimeRange` is evaluated against a caller-supplied `today`, never the
//! wall clock, so classification is a pure function of its inputs.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named date window relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Today only
    Daily,
    /// The ISO week (Monday through Sunday) containing today
    Weekly,
    /// The calendar month containing today
    Monthly,
    /// Every date
    Total,
}

impl TimeRange {
    /// All ranges in menu order
    pub fn all() -> &'static [Self] {
        &[Self::Daily, Self::Weekly, Self::Monthly, Self::Total]
    }

    /// Map a graph menu selection (1-4) to a range
    pub fn from_menu_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Daily),
            2 => Some(Self::Weekly),
            3 => Some(Self::Monthly),
            4 => Some(Self::Total),
            _ => None,
        }
    }

    /// Parse a label case-insensitively ("daily", "Weekly", ...)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "total" => Some(Self::Total),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Total => "Total",
        }
    }

    /// Inclusive bounds of the window, or `None` for `Total`
    pub fn window(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::Daily => Some((today, today)),
            Self::Weekly => {
                let start = start_of_week(today);
                Some((start, start + Duration::days(6)))
            }
            Self::Monthly => {
                let start = today.with_day(1).unwrap_or(today);
                Some((start, end_of_month(today)))
            }
            Self::Total => None,
        }
    }

    /// Check if `date` falls inside this window as seen from `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.window(today) {
            Some((start, end)) => date >= start && date <= end,
            None => true,
        }
    }
}

/// Classify by text label; an unrecognized label is never in range
pub fn in_range_label(date: NaiveDate, label: &str, today: NaiveDate) -> bool {
    TimeRange::from_label(label)
        .map(|range| range.contains(date, today))
        .unwrap_or(false)
}

/// Monday of the ISO week containing `date`
fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn end_of_month(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    match next_month {
        Some(first) => first - Duration::days(1),
        None => date,
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TimeRange {
    type Err = TimeRangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| TimeRangeParseError(s.to_string()))
    }
}

/// Error type for range label parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRangeParseError(pub String);

impl fmt::Display for TimeRangeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid time range '{}' (expected daily, weekly, monthly or total)",
            self.0
        )
    }
}

impl std::error::Error for TimeRangeParseError {}
