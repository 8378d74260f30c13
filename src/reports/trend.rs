//! Trend aggregation
//!
//! Buckets expenses and incomes by date inside a time window, optionally
//! restricted to one category. Expense and income totals are kept apart and
//! never netted.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::models::{CategoryId, LedgerEntry, Money, TimeRange};

/// Expense and income totals for one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBucket {
    pub date: NaiveDate,
    pub expense: Money,
    pub income: Money,
}

/// Sum amounts per date per kind
///
/// A record counts when it matches `category_filter` (if any) and its date
/// falls in `range` as seen from `today`. Every date that received at least
/// one record of either kind gets a bucket; the missing side is zero. Buckets
/// come back in ascending date order.
pub fn aggregate<E, I>(
    expenses: &[E],
    incomes: &[I],
    range: TimeRange,
    category_filter: Option<CategoryId>,
    today: NaiveDate,
) -> Vec<DateBucket>
where
    E: LedgerEntry,
    I: LedgerEntry,
{
    let expense_sums = sum_by_date(expenses, range, category_filter, today);
    let income_sums = sum_by_date(incomes, range, category_filter, today);

    let all_dates: BTreeSet<NaiveDate> = expense_sums
        .keys()
        .chain(income_sums.keys())
        .copied()
        .collect();

    let buckets: Vec<DateBucket> = all_dates
        .into_iter()
        .map(|date| DateBucket {
            date,
            expense: expense_sums.get(&date).copied().unwrap_or_default(),
            income: income_sums.get(&date).copied().unwrap_or_default(),
        })
        .collect();

    log::debug!(
        "Aggregated {} expenses and {} incomes into {} dates (range: {}, category: {:?})",
        expenses.len(),
        incomes.len(),
        buckets.len(),
        range,
        category_filter.map(|c| c.value())
    );

    buckets
}

fn sum_by_date<T: LedgerEntry>(
    entries: &[T],
    range: TimeRange,
    category_filter: Option<CategoryId>,
    today: NaiveDate,
) -> BTreeMap<NaiveDate, Money> {
    let mut sums = BTreeMap::new();

    for entry in entries {
        let in_filter = category_filter.map_or(true, |id| entry.category_id() == id);
        if in_filter && range.contains(entry.date(), today) {
            *sums.entry(entry.date()).or_insert_with(Money::zero) += entry.amount();
        }
    }

    sums
}

/// Aggregated rows for one graph request, with the request that produced them
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub range: TimeRange,
    pub category_filter: Option<CategoryId>,
    pub today: NaiveDate,
    pub rows: Vec<DateBucket>,
}

impl TrendReport {
    /// Aggregate a report
    pub fn generate<E, I>(
        expenses: &[E],
        incomes: &[I],
        range: TimeRange,
        category_filter: Option<CategoryId>,
        today: NaiveDate,
    ) -> Self
    where
        E: LedgerEntry,
        I: LedgerEntry,
    {
        Self {
            range,
            category_filter,
            today,
            rows: aggregate(expenses, incomes, range, category_filter, today),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_expense(&self) -> Money {
        self.rows.iter().map(|r| r.expense).sum()
    }

    pub fn total_income(&self) -> Money {
        self.rows.iter().map(|r| r.income).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionId, TransactionKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(kind: TransactionKind, id: u32, cents: i64, category: u32, on: NaiveDate) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            kind,
            "entry",
            Money::from_cents(cents),
            CategoryId::new(category),
            on,
        )
    }

    fn expense(id: u32, cents: i64, category: u32, on: NaiveDate) -> Transaction {
        txn(TransactionKind::Expense, id, cents, category, on)
    }

    fn income(id: u32, cents: i64, category: u32, on: NaiveDate) -> Transaction {
        txn(TransactionKind::Income, id, cents, category, on)
    }

    #[test]
    fn test_huge_same_day_amounts_saturate() {
        let today = date(2024, 4, 15);
        let on = date(2024, 4, 10);
        let expenses = vec![expense(1, i64::MAX - 10, 1, on), expense(2, i64::MAX - 10, 1, on)];
        let incomes: Vec<Transaction> = Vec::new();

        let rows = aggregate(&expenses, &incomes, TimeRange::Total, None, today);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].expense.cents(), i64::MAX);
    }

    #[test]
    fn test_single_expense_total() {
        let today = date(2024, 4, 15);
        let expenses = vec![expense(1, 500, 1, date(2024, 4, 10))];
        let incomes: Vec<Transaction> = Vec::new();

        let rows = aggregate(&expenses, &incomes, TimeRange::Total, None, today);

        assert_eq!(
            rows,
            vec![DateBucket {
                date: date(2024, 4, 10),
                expense: Money::from_cents(500),
                income: Money::zero(),
            }]
        );
    }

    #[test]
    fn test_same_date_expenses_are_summed() {
        let today = date(2024, 4, 15);
        let day = date(2024, 4, 12);
        let expenses = vec![expense(1, 1000, 1, day), expense(2, 2000, 1, day)];

        let rows = aggregate(&expenses, &[] as &[Transaction], TimeRange::Total, None, today);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].expense, Money::from_cents(3000));
    }

    #[test]
    fn test_dates_are_union_sorted_and_unique() {
        let today = date(2024, 4, 15);
        let expenses = vec![
            expense(1, 100, 1, date(2024, 4, 12)),
            expense(2, 200, 1, date(2024, 4, 1)),
            expense(3, 300, 1, date(2024, 4, 12)),
        ];
        let incomes = vec![
            income(1, 5000, 2, date(2024, 4, 5)),
            income(2, 700, 2, date(2024, 4, 12)),
        ];

        let rows = aggregate(&expenses, &incomes, TimeRange::Total, None, today);
        let dates: Vec<_> = rows.iter().map(|r| r.date).collect();

        assert_eq!(
            dates,
            vec![date(2024, 4, 1), date(2024, 4, 5), date(2024, 4, 12)]
        );
        assert!(dates.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(rows[1].expense, Money::zero());
        assert_eq!(rows[1].income, Money::from_cents(5000));
        assert_eq!(rows[2].expense, Money::from_cents(400));
        assert_eq!(rows[2].income, Money::from_cents(700));
    }

    #[test]
    fn test_range_filter() {
        // Monday
        let today = date(2024, 4, 15);
        let expenses = vec![
            expense(1, 100, 1, date(2024, 4, 14)),
            expense(2, 200, 1, date(2024, 4, 15)),
            expense(3, 300, 1, date(2024, 4, 21)),
            expense(4, 400, 1, date(2024, 3, 31)),
        ];
        let none: &[Transaction] = &[];

        let daily = aggregate(&expenses, none, TimeRange::Daily, None, today);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].date, today);

        let weekly = aggregate(&expenses, none, TimeRange::Weekly, None, today);
        let weekly_dates: Vec<_> = weekly.iter().map(|r| r.date).collect();
        assert_eq!(weekly_dates, vec![date(2024, 4, 15), date(2024, 4, 21)]);

        let monthly = aggregate(&expenses, none, TimeRange::Monthly, None, today);
        assert_eq!(monthly.len(), 3);

        let total = aggregate(&expenses, none, TimeRange::Total, None, today);
        assert_eq!(total.len(), 4);
    }

    #[test]
    fn test_category_filter() {
        let today = date(2024, 4, 15);
        let day = date(2024, 4, 10);
        let expenses = vec![expense(1, 100, 1, day), expense(2, 250, 2, day)];
        let incomes = vec![income(1, 900, 2, date(2024, 4, 11))];

        let rows = aggregate(
            &expenses,
            &incomes,
            TimeRange::Total,
            Some(CategoryId::new(2)),
            today,
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].expense, Money::from_cents(250));
        assert_eq!(rows[1].income, Money::from_cents(900));
        assert_eq!(rows[1].expense, Money::zero());
    }

    #[test]
    fn test_unknown_category_filter_is_empty() {
        let today = date(2024, 4, 15);
        let expenses = vec![expense(1, 100, 1, date(2024, 4, 10))];
        let incomes = vec![income(1, 100, 1, date(2024, 4, 10))];

        let rows = aggregate(
            &expenses,
            &incomes,
            TimeRange::Total,
            Some(CategoryId::new(2)),
            today,
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let none: &[Transaction] = &[];
        let rows = aggregate(none, none, TimeRange::Total, None, date(2024, 4, 15));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_sums_match_filtered_sources() {
        let today = date(2024, 4, 20);
        let mut expenses = Vec::new();
        for i in 0..40u32 {
            let on = date(2024, 4, 1 + (i * 7) % 28);
            expenses.push(expense(i + 1, i64::from(i) * 37 + 1, i % 3, on));
        }
        let none: &[Transaction] = &[];
        let filter = Some(CategoryId::new(1));

        let rows = aggregate(&expenses, none, TimeRange::Monthly, filter, today);
        for row in &rows {
            let expected: Money = expenses
                .iter()
                .filter(|e| e.category_id == CategoryId::new(1) && e.created_date == row.date)
                .map(|e| e.amount)
                .sum();
            assert_eq!(row.expense, expected);
        }

        // Re-aggregating only the filtered sources gives the same rows
        let filtered: Vec<Transaction> = expenses
            .iter()
            .filter(|e| e.category_id == CategoryId::new(1))
            .cloned()
            .collect();
        let again = aggregate(&filtered, none, TimeRange::Monthly, filter, today);
        assert_eq!(rows, again);
    }

    #[test]
    fn test_report_totals() {
        let today = date(2024, 4, 15);
        let expenses = vec![
            expense(1, 100, 1, date(2024, 4, 10)),
            expense(2, 250, 1, date(2024, 4, 11)),
        ];
        let incomes = vec![income(1, 900, 1, date(2024, 4, 11))];

        let report = TrendReport::generate(&expenses, &incomes, TimeRange::Total, None, today);
        assert!(!report.is_empty());
        assert_eq!(report.total_expense(), Money::from_cents(350));
        assert_eq!(report.total_income(), Money::from_cents(900));
    }
}
