//! Transaction store
//!
//! Persists the ledger to `budget_data.csv` with the header
//! `Type,Category,Amount,Date,Description`. File order is ledger order.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::BudgetError;
use crate::models::{Money, Transaction, TransactionKind};

use super::csv_io::{read_csv_records, write_csv_atomic};

/// Header of the transaction store
pub const TRANSACTION_HEADER: &[&str] = &["Type", "Category", "Amount", "Date", "Description"];

/// Date format used on disk
pub const STORE_DATE_FORMAT: &str = "%Y-%m-%d";

/// File-backed store for the ledger
#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// Create a new transaction store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load transactions from disk in file order
    ///
    /// `Ok(None)` means the file is absent or empty. Descriptions are read
    /// verbatim, including empty ones. Income or expense totals too large for
    /// `Money` make the file corrupt.
    pub fn load(&self) -> Result<Option<Vec<Transaction>>, BudgetError> {
        let Some(records) = read_csv_records(&self.path, TRANSACTION_HEADER)? else {
            return Ok(None);
        };

        let mut transactions = Vec::with_capacity(records.len());
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            let corrupt = |reason: String| {
                BudgetError::corrupt(&self.path, format!("row {}: {}", row, reason))
            };

            let kind: TransactionKind = record[0].parse().map_err(corrupt)?;

            let amount = Money::parse(&record[2]).map_err(|e| corrupt(e.to_string()))?;
            if !amount.is_positive() {
                return Err(corrupt(format!("amount must be positive, found {}", amount)));
            }

            let total = match kind {
                TransactionKind::Income => &mut income,
                TransactionKind::Expense => &mut expense,
            };
            *total = total
                .checked_add(amount)
                .ok_or_else(|| corrupt(format!("{} total overflows at {}", kind, amount)))?;

            let date = NaiveDate::parse_from_str(record[3].trim(), STORE_DATE_FORMAT)
                .map_err(|e| corrupt(format!("invalid date {:?}: {}", &record[3], e)))?;

            transactions.push(Transaction {
                kind,
                category: record[1].to_string(),
                amount,
                date,
                description: record[4].to_string(),
            });
        }

        debug!(path = %self.path.display(), count = transactions.len(), "loaded transactions");
        Ok(Some(transactions))
    }

    /// Save transactions to disk, replacing the whole file
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), BudgetError> {
        let rows = transactions.iter().map(|t| {
            [
                t.kind.as_str().to_string(),
                t.category.clone(),
                t.amount.to_string(),
                t.date.format(STORE_DATE_FORMAT).to_string(),
                t.description.clone(),
            ]
        });

        write_csv_atomic(&self.path, TRANSACTION_HEADER, rows)?;
        debug!(path = %self.path.display(), count = transactions.len(), "saved transactions");
        Ok(())
    }
}
