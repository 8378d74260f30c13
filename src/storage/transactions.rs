//! Transaction repository for flat-file storage
//!
//! One repository per kind: expenses.txt and incomes.txt share the line
//! format `id,description,amount,categoryId,date` with ISO dates.

use std::path::PathBuf;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::TrackerError;
use crate::models::{CategoryId, Money, Transaction, TransactionId, TransactionKind};

use super::file_io::{field, read_records, write_records_atomic, STORAGE_DATE_FORMAT};

/// Repository for one kind of transaction, kept in load/append order
pub struct TransactionRepository {
    kind: TransactionKind,
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionRepository {
    /// Create a new, empty repository for `kind`
    pub fn new(kind: TransactionKind, path: PathBuf) -> Self {
        Self {
            kind,
            path,
            transactions: Vec::new(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Load transactions from disk, replacing what is in memory
    pub fn load(&mut self) -> Result<usize, TrackerError> {
        let kind = self.kind;
        let loaded = read_records(&self.path, |record| parse_transaction(record, kind))?;

        self.transactions.clear();
        for txn in loaded {
            if self.get(txn.id).is_some() {
                log::warn!(
                    "{}: skipping duplicate {} id {}",
                    self.path.display(),
                    kind,
                    txn.id
                );
                continue;
            }
            self.transactions.push(txn);
        }

        log::info!(
            "Loaded {} {} from {}",
            self.transactions.len(),
            kind.plural(),
            self.path.display()
        );
        Ok(self.transactions.len())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        write_records_atomic(&self.path, self.transactions.iter().map(to_record))?;
        log::info!(
            "Saved {} {} to {}",
            self.transactions.len(),
            self.kind.plural(),
            self.path.display()
        );
        Ok(())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Get all transactions in load/append order
    pub fn get_all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Id the next added transaction will receive
    pub fn next_id(&self) -> TransactionId {
        TransactionId::next_after(self.transactions.iter().map(|t| t.id))
    }

    /// Append a new transaction
    pub fn insert(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Replace the transaction with the same id, keeping its position
    pub fn update(&mut self, txn: Transaction) -> Result<(), TrackerError> {
        let index = self
            .transactions
            .iter()
            .position(|t| t.id == txn.id)
            .ok_or_else(|| self.not_found(txn.id))?;
        self.transactions[index] = txn;
        Ok(())
    }

    /// Delete a transaction, returning it if it existed
    pub fn delete(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Check whether any transaction references the category
    pub fn references_category(&self, category_id: CategoryId) -> bool {
        self.transactions
            .iter()
            .any(|t| t.category_id == category_id)
    }

    pub fn count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn not_found(&self, id: TransactionId) -> TrackerError {
        match self.kind {
            TransactionKind::Expense => TrackerError::expense_not_found(id),
            TransactionKind::Income => TrackerError::income_not_found(id),
        }
    }
}

fn to_record(txn: &Transaction) -> Vec<String> {
    vec![
        txn.id.to_string(),
        txn.description.clone(),
        txn.amount.to_string(),
        txn.category_id.to_string(),
        txn.created_date.format(STORAGE_DATE_FORMAT).to_string(),
    ]
}

fn parse_transaction(record: &StringRecord, kind: TransactionKind) -> Result<Transaction, String> {
    if record.len() != 5 {
        return Err(format!("expected 5 fields, got {}", record.len()));
    }

    let id: TransactionId = field(record, 0)?
        .parse()
        .map_err(|e| format!("invalid id: {}", e))?;
    if !id.is_assignable() {
        return Err(format!("id out of range: {}", id));
    }
    let description = field(record, 1)?;
    let amount = Money::parse(field(record, 2)?).map_err(|e| e.to_string())?;
    if !amount.is_positive() {
        return Err(format!("amount must be positive, got {}", amount));
    }
    if amount.exceeds_limit() {
        return Err(format!("amount exceeds limit: {}", amount));
    }
    let category_id: CategoryId = field(record, 3)?
        .parse()
        .map_err(|e| format!("invalid category id: {}", e))?;
    let date = NaiveDate::parse_from_str(field(record, 4)?, STORAGE_DATE_FORMAT)
        .map_err(|e| format!("invalid date: {}", e))?;

    Ok(Transaction::new(
        id,
        kind,
        description,
        amount,
        category_id,
        date,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: u32, description: &str, cents: i64, category: u32) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            TransactionKind::Expense,
            description,
            Money::from_cents(cents),
            CategoryId::new(category),
            date(2024, 4, 10),
        )
    }

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        let repo = TransactionRepository::new(TransactionKind::Expense, path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, mut repo) = create_test_repo();
        assert_eq!(repo.load().unwrap(), 0);
        assert!(repo.is_empty());
        assert_eq!(repo.next_id(), TransactionId::new(1));
    }

    #[test]
    fn test_insert_update_delete() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.insert(expense(1, "Coffee", 500, 1));
        repo.insert(expense(2, "Lunch", 1250, 2));

        let mut edited = repo.get(TransactionId::new(1)).unwrap().clone();
        edited.description = "Espresso".into();
        repo.update(edited).unwrap();
        assert_eq!(repo.get_all()[0].description, "Espresso");

        let missing = expense(9, "Ghost", 100, 1);
        assert!(repo.update(missing).unwrap_err().is_not_found());

        assert!(repo.delete(TransactionId::new(1)).is_some());
        assert_eq!(repo.count(), 1);
        assert_eq!(repo.next_id(), TransactionId::new(3));
    }

    #[test]
    fn test_references_category() {
        let (_temp_dir, mut repo) = create_test_repo();
        repo.insert(expense(1, "Coffee", 500, 1));

        assert!(repo.references_category(CategoryId::new(1)));
        assert!(!repo.references_category(CategoryId::new(2)));
    }

    #[test]
    fn test_save_format_and_reload() {
        let (temp_dir, mut repo) = create_test_repo();
        repo.insert(expense(1, "Coffee", 500, 1));
        repo.insert(expense(2, "Books, pens", 1999, 2));
        repo.save().unwrap();

        let path = temp_dir.path().join("expenses.txt");
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("1,Coffee,5.00,1,2024-04-10\n"));
        assert!(contents.contains("\"Books, pens\""));

        let mut repo2 = TransactionRepository::new(TransactionKind::Expense, path);
        assert_eq!(repo2.load().unwrap(), 2);
        assert_eq!(repo2.get_all(), repo.get_all());
    }

    #[test]
    fn test_load_accepts_legacy_amounts_and_skips_bad_lines() {
        let (temp_dir, mut repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("expenses.txt"),
            "1,Coffee,5.0,1,2024-04-10\n\
             2,Broken,abc,1,2024-04-10\n\
             3,Slash date,4.0,1,2024/04/10\n\
             4,Too,many,fields,1,2024-04-10\n\
             5,Rent,800.5,2,2024-04-01\n",
        )
        .unwrap();

        assert_eq!(repo.load().unwrap(), 2);
        assert_eq!(repo.get_all()[0].amount, Money::from_cents(500));
        assert_eq!(repo.get_all()[1].amount, Money::from_cents(80050));
        assert_eq!(repo.get_all()[1].kind, TransactionKind::Expense);
    }

    #[test]
    fn test_load_skips_non_positive_amounts() {
        let (temp_dir, mut repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("expenses.txt"),
            "1,Refund,-5.00,1,2024-04-10
             2,Zero,0,1,2024-04-10
             3,Coffee,5.00,1,2024-04-10
",
        )
        .unwrap();

        assert_eq!(repo.load().unwrap(), 1);
        assert_eq!(repo.get_all()[0].id, TransactionId::new(3));
        assert!(repo.get(TransactionId::new(1)).is_none());
        assert!(repo.get(TransactionId::new(2)).is_none());
    }

    #[test]
    fn test_load_skips_out_of_range_ids_and_amounts() {
        let (temp_dir, mut repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("expenses.txt"),
            "4294967295,Last,5.00,1,2024-04-10
             0,Zero id,5.00,1,2024-04-10
             2,Huge,92233720368547758,1,2024-04-10
             3,Coffee,5.00,1,2024-04-10
",
        )
        .unwrap();

        assert_eq!(repo.load().unwrap(), 1);
        assert_eq!(repo.next_id(), TransactionId::new(4));
    }
}
