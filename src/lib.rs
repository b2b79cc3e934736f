//! Budget Tracker - personal income and expense ledger
//!
//! This library keeps a ledger of income and expense transactions, a registry
//! of spending categories with optional limits, and derives reports from the
//! two: expenses per category, spending against limits, and the running
//! balance. Both are persisted as CSV files in a per-user data directory.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, transactions)
//! - `storage`: CSV file storage layer
//! - `services`: Category registry and ledger
//! - `reports`: Read-only report engine
//! - `tracker`: Top-level handle tying the above together
//! - `cli` / `display`: Command-line front end
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::BudgetPaths;
//! use budget_tracker::Tracker;
//!
//! let mut tracker = Tracker::open(BudgetPaths::new()?)?;
//! let summary = tracker.reports().summary();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tracker;

pub use error::{BudgetError, BudgetResult};
pub use tracker::Tracker;
