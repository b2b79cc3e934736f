//! Reports module for the budget tracker
//!
//! [`ReportEngine`] derives read-only views from the ledger and the category
//! registry: expense breakdown per category, spending against limits, and the
//! running balance. The report types wrap those views for terminal display
//! and CSV export.

pub mod balance;
pub mod breakdown;
pub mod limits;
pub mod summary;

pub use balance::{BalancePoint, BalanceSeriesReport};
pub use breakdown::{BreakdownReport, BreakdownRow};
pub use limits::{LimitComparison, LimitReport};
pub use summary::{LimitWarning, Summary};

use std::collections::BTreeMap;

use crate::models::Money;
use crate::services::{CategoryRegistry, Ledger};

/// Read-only view over a ledger and its registry
#[derive(Debug, Clone, Copy)]
pub struct ReportEngine<'a> {
    ledger: &'a Ledger,
    registry: &'a CategoryRegistry,
}

impl<'a> ReportEngine<'a> {
    /// Create a report engine
    pub fn new(ledger: &'a Ledger, registry: &'a CategoryRegistry) -> Self {
        Self { ledger, registry }
    }

    /// The ledger reported on
    pub fn ledger(&self) -> &'a Ledger {
        self.ledger
    }

    /// Expense totals per category; empty when nothing has been spent
    pub fn category_breakdown(&self) -> BTreeMap<String, Money> {
        self.ledger.expenses_by_category()
    }

    /// Spending against limits for every category with at least one expense
    ///
    /// Categories no longer in the registry report a zero limit.
    pub fn limit_comparison(&self) -> Vec<LimitComparison> {
        self.category_breakdown()
            .into_iter()
            .map(|(category, spent)| {
                let limit = self.registry.get_limit(&category).unwrap_or_default();
                LimitComparison {
                    category,
                    spent,
                    limit,
                }
            })
            .collect()
    }

    /// Running balance after each transaction, in ledger order
    pub fn balance_series(&self) -> Vec<Money> {
        self.ledger
            .transactions()
            .iter()
            .scan(Money::zero(), |balance, txn| {
                *balance += txn.signed_amount();
                Some(*balance)
            })
            .collect()
    }

    /// Totals for the status line
    pub fn summary(&self) -> Summary {
        Summary {
            income: self.ledger.total_income(),
            expense: self.ledger.total_expense(),
            balance: self.ledger.balance(),
        }
    }

    /// Warning for a monitored category whose expenses exceed its limit
    ///
    /// Categories with a zero limit, or missing from the registry, are not
    /// monitored and never warn.
    pub fn limit_warning(&self, category: &str) -> Option<LimitWarning> {
        let limit = self.registry.get_limit(category)?;
        if !limit.is_positive() {
            return None;
        }

        let spent = self.ledger.expense_for(category);
        self.registry
            .is_limit_reached(category, spent)
            .then(|| LimitWarning {
                category: category.to_string(),
                spent,
                limit,
            })
    }
}
