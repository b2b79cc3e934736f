//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// A category with this name is already registered
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// The category is not present in the registry
    #[error("Category not found: {0}")]
    UnknownCategory(String),

    /// Invalid user-supplied value (amount, limit, name, date)
    #[error("Invalid input: {0}")]
    MalformedInput(String),

    /// A backing store exists but could not be parsed
    #[error("Corrupt store {}: {reason}", path.display())]
    StorageCorruption { path: PathBuf, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV encoding/decoding errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a corruption error for a store file
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::StorageCorruption {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a duplicate category error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateCategory(_))
    }

    /// Check if this is an unknown category error
    pub fn is_unknown_category(&self) -> bool {
        matches!(self, Self::UnknownCategory(_))
    }

    /// Check if this is a malformed input error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }

    /// Check if this is a storage corruption error
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::StorageCorruption { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
