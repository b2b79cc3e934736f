//! Top-level handle owning the registry and the ledger
//!
//! Built once at process start and passed by reference to whatever presents
//! the data.

use chrono::NaiveDate;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetResult;
use crate::models::{Money, Transaction, TransactionKind};
use crate::reports::{LimitWarning, ReportEngine};
use crate::services::{CategoryRegistry, Ledger};
use crate::storage::{CategoryStore, LoadOutcome, TransactionStore};

/// The category registry and ledger of one data directory
#[derive(Debug)]
pub struct Tracker {
    paths: BudgetPaths,
    pub registry: CategoryRegistry,
    pub ledger: Ledger,
}

impl Tracker {
    /// Open both stores, registry first
    pub fn open(paths: BudgetPaths) -> BudgetResult<Self> {
        paths.ensure_directories()?;

        let registry = CategoryRegistry::open(CategoryStore::new(paths.categories_file()))?;
        let ledger = Ledger::open(TransactionStore::new(paths.transactions_file()))?;

        Ok(Self {
            paths,
            registry,
            ledger,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Stores that had to be rebuilt from corruption when opened
    pub fn recoveries(&self) -> Vec<(&'static str, &LoadOutcome)> {
        [
            ("categories", self.registry.load_outcome()),
            ("transactions", self.ledger.load_outcome()),
        ]
        .into_iter()
        .filter(|(_, outcome)| outcome.is_recovered())
        .collect()
    }

    /// Record a transaction, validated against the current registry
    ///
    /// Returns an over-limit warning for expenses that take a monitored
    /// category past its limit. The transaction is recorded either way.
    pub fn record(
        &mut self,
        kind: TransactionKind,
        category: &str,
        amount: Money,
        date: NaiveDate,
        description: &str,
    ) -> BudgetResult<(Transaction, Option<LimitWarning>)> {
        let txn = self
            .ledger
            .add_transaction(&self.registry, kind, category, amount, date, description)?
            .clone();

        let warning = if txn.is_expense() {
            self.reports().limit_warning(category)
        } else {
            None
        };

        Ok((txn, warning))
    }

    /// Read-only reports over the current state
    pub fn reports(&self) -> ReportEngine<'_> {
        ReportEngine::new(&self.ledger, &self.registry)
    }
}
