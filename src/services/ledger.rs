//! Ledger service
//!
//! Append-only, ordered transaction log with aggregate queries. Each recorded
//! transaction is validated against the category registry at call time and
//! the whole log is rewritten before the call returns.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::{quarantine, LoadOutcome, TransactionStore};

use super::category::CategoryRegistry;

/// The transaction log
#[derive(Debug)]
pub struct Ledger {
    store: TransactionStore,
    transactions: Vec<Transaction>,
    load_outcome: LoadOutcome,
}

impl Ledger {
    /// Open the ledger from its store
    ///
    /// A missing or empty store yields an empty ledger and a freshly written
    /// file. A corrupt store is copied aside and replaced by an empty ledger;
    /// check [`Ledger::load_outcome`] to report it.
    pub fn open(store: TransactionStore) -> BudgetResult<Self> {
        let (transactions, load_outcome) = match store.load() {
            Ok(Some(transactions)) => (transactions, LoadOutcome::Loaded),
            Ok(None) => (Vec::new(), LoadOutcome::Created),
            Err(BudgetError::StorageCorruption { path, reason }) => {
                let quarantined = quarantine(&path)?;
                warn!(
                    path = %path.display(),
                    %reason,
                    "transaction store is corrupt; starting with an empty ledger"
                );
                (
                    Vec::new(),
                    LoadOutcome::Recovered {
                        reason,
                        quarantined,
                    },
                )
            }
            Err(e) => return Err(e),
        };

        if load_outcome != LoadOutcome::Loaded {
            store.save(&transactions)?;
        }

        Ok(Self {
            store,
            transactions,
            load_outcome,
        })
    }

    /// How the store came up when the ledger was opened
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Record a transaction
    ///
    /// Fails with `UnknownCategory` if `category` is not currently registered
    /// and with `MalformedInput` if `amount` is not strictly positive or would
    /// push the income or expense total past what `Money` can hold. A blank
    /// description is stored as [`crate::models::NO_DESCRIPTION`].
    pub fn add_transaction(
        &mut self,
        registry: &CategoryRegistry,
        kind: TransactionKind,
        category: &str,
        amount: Money,
        date: NaiveDate,
        description: &str,
    ) -> BudgetResult<&Transaction> {
        if !registry.contains(category) {
            return Err(BudgetError::UnknownCategory(category.to_string()));
        }

        if !amount.is_positive() {
            return Err(BudgetError::MalformedInput(format!(
                "amount must be a positive number, got {}",
                amount
            )));
        }

        // Every amount is positive, so bounded totals bound every running balance
        if self.total_of(kind).checked_add(amount).is_none() {
            return Err(BudgetError::MalformedInput(format!(
                "amount {} is too large: total {} would overflow",
                amount, kind
            )));
        }

        self.transactions
            .push(Transaction::new(kind, category, amount, date, description));

        if let Err(e) = self.store.save(&self.transactions) {
            self.transactions.pop();
            return Err(e);
        }

        info!(%kind, category, amount = %amount, %date, "recorded transaction");
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// All transactions in ledger order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Count transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> Money {
        self.total_of(TransactionKind::Income)
    }

    /// Sum of all expense amounts
    pub fn total_expense(&self) -> Money {
        self.total_of(TransactionKind::Expense)
    }

    /// Total income minus total expense
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expense()
    }

    /// Expense totals keyed by category name
    ///
    /// Only categories with at least one expense appear.
    pub fn expenses_by_category(&self) -> BTreeMap<String, Money> {
        let mut totals: BTreeMap<String, Money> = BTreeMap::new();
        for txn in self.transactions.iter().filter(|t| t.is_expense()) {
            *totals.entry(txn.category.clone()).or_default() += txn.amount;
        }
        totals
    }

    /// Total expense recorded against one category
    pub fn expense_for(&self, category: &str) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_expense() && t.category == category)
            .map(|t| t.amount)
            .sum()
    }

    fn total_of(&self, kind: TransactionKind) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }
}
