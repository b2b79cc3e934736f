//! Transaction model
//!
//! Represents a single recorded income or expense. Transactions are immutable
//! once recorded and refer to their category by name.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// Description stored when the caller leaves it blank
pub const NO_DESCRIPTION: &str = "No description";

/// Whether a transaction adds to or takes from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The literal used in the transaction store
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type {:?}", other)),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,

    /// Name of the category (looked up in the registry, not owned)
    pub category: String,

    /// Amount, always positive; `kind` carries the direction
    pub amount: Money,

    pub date: NaiveDate,

    /// Free text; `NO_DESCRIPTION` when left blank at recording time
    pub description: String,
}

impl Transaction {
    /// Create a new transaction, substituting the sentinel for a blank description
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        let description = description.into();
        let description = if description.trim().is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            description
        };

        Self {
            kind,
            category: category.into(),
            amount,
            date,
            description,
        }
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        !self.kind.is_expense()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.kind, self.category, self.amount
        )
    }
}
