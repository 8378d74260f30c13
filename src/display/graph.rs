//! Trend graph rendering
//!
//! Turns aggregated date buckets into proportional bar lines. All bars in
//! one graph share a scale: the largest single-date total of either kind
//! fills the full width.

use crate::models::{Money, TransactionKind};
use crate::reports::trend::DateBucket;

/// Bar length of the largest value in a graph
pub const BAR_RESOLUTION: i64 = 30;

const EXPENSE_GLYPH: &str = "\u{1F7E5}";
const INCOME_GLYPH: &str = "\u{1F7E9}";

/// Render rows into printable lines
///
/// Each date gets a header line (with ` - <category>` appended when
/// `category_label` is set), one bar line per kind whose bar is at least one
/// unit long, and a trailing blank line. When every total is zero only the
/// headers are rendered.
pub fn render(rows: &[DateBucket], category_label: Option<&str>) -> Vec<String> {
    let scale = graph_scale(rows);
    let mut lines = Vec::new();

    for row in rows {
        match category_label {
            Some(name) => lines.push(format!("{} - {}", row.date, name)),
            None => lines.push(row.date.to_string()),
        }

        if !scale.is_zero() {
            for (kind, amount) in [
                (TransactionKind::Expense, row.expense),
                (TransactionKind::Income, row.income),
            ] {
                let length = bar_length(amount, scale);
                if length > 0 {
                    lines.push(bar_line(kind, amount, length));
                }
            }
        }

        lines.push(String::new());
    }

    lines
}

/// Largest absolute per-date total across both kinds
pub fn graph_scale(rows: &[DateBucket]) -> Money {
    let max_expense = rows.iter().map(|r| r.expense.abs()).max().unwrap_or_default();
    let max_income = rows.iter().map(|r| r.income.abs()).max().unwrap_or_default();
    max_expense.max(max_income)
}

/// floor(|amount| / scale * BAR_RESOLUTION), computed in whole cents
pub fn bar_length(amount: Money, scale: Money) -> usize {
    if !scale.is_positive() {
        return 0;
    }
    let units = i128::from(amount.abs().cents()) * i128::from(BAR_RESOLUTION)
        / i128::from(scale.cents());
    usize::try_from(units).unwrap_or(0)
}

fn bar_line(kind: TransactionKind, amount: Money, length: usize) -> String {
    let glyph = match kind {
        TransactionKind::Expense => EXPENSE_GLYPH,
        TransactionKind::Income => INCOME_GLYPH,
    };
    let label = format!("{} : {}", kind.label(), amount);
    format!("{:<20} | {}", label, glyph.repeat(length))
}
