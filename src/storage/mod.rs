//! Storage layer for the budget tracker
//!
//! Two independent CSV stores (categories and transactions), each rewritten
//! in full on every save.

pub mod categories;
pub mod csv_io;
pub mod transactions;

pub use categories::{CategoryStore, CATEGORY_HEADER};
pub use csv_io::{quarantine, read_csv_records, write_csv_atomic};
pub use transactions::{TransactionStore, STORE_DATE_FORMAT, TRANSACTION_HEADER};

use std::fmt;
use std::path::PathBuf;

/// How a store came up when it was opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Existing data was read
    Loaded,
    /// The file was missing or empty and a fresh one was written
    Created,
    /// The file could not be parsed; its contents were replaced with a fresh
    /// store after being copied to `quarantined`
    Recovered {
        reason: String,
        quarantined: PathBuf,
    },
}

impl LoadOutcome {
    /// Check if existing data was discarded
    pub fn is_recovered(&self) -> bool {
        matches!(self, Self::Recovered { .. })
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded => write!(f, "loaded"),
            Self::Created => write!(f, "created"),
            Self::Recovered {
                reason,
                quarantined,
            } => write!(
                f,
                "recovered from corruption ({}); previous contents saved to {}",
                reason,
                quarantined.display()
            ),
        }
    }
}
