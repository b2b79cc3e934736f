//! Status line totals and over-limit warnings

use std::fmt;

use crate::models::Money;

/// Income, expense and balance across the whole ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl Summary {
    /// One-line summary, e.g. `Income: 10.00 zł | Expenses: 4.00 zł | Balance: 6.00 zł`
    pub fn status_line(&self, currency_symbol: &str) -> String {
        format!(
            "Income: {} | Expenses: {} | Balance: {}",
            self.income.format_with_symbol(currency_symbol),
            self.expense.format_with_symbol(currency_symbol),
            self.balance.format_with_symbol(currency_symbol)
        )
    }
}

/// A monitored category whose expenses exceed its limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitWarning {
    pub category: String,
    pub spent: Money,
    pub limit: Money,
}

impl LimitWarning {
    /// Amount spent beyond the limit
    pub fn overspend(&self) -> Money {
        self.spent - self.limit
    }
}

impl fmt::Display for LimitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Limit exceeded for '{}': spent {} of {} (over by {})",
            self.category,
            self.spent,
            self.limit,
            self.overspend()
        )
    }
}
