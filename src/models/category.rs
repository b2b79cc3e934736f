//! Category model
//!
//! A category is a named spending/income bucket with a spending limit.
//! Transactions refer to categories by name only.

use std::fmt;

use super::money::Money;

/// A spending/income category with its limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category name (ASCII letters only, unique within the registry)
    pub name: String,

    /// Spending limit; zero means the category is not monitored
    pub limit: Money,
}

impl Category {
    /// Create a new category with no limit
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit: Money::zero(),
        }
    }

    /// Create a new category with a limit
    pub fn with_limit(name: impl Into<String>, limit: Money) -> Self {
        Self {
            name: name.into(),
            limit,
        }
    }

    /// Whether the limit is set to a positive value
    pub fn is_monitored(&self) -> bool {
        self.limit.is_positive()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_name(&self.name)?;

        if self.limit.is_negative() {
            return Err(CategoryValidationError::NegativeLimit);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Check a category name: non-empty and ASCII letters only
pub fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CategoryValidationError::InvalidCharacters(name.to_string()));
    }

    Ok(())
}

/// Categories created on first run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Food,
    Transport,
    Entertainment,
    Other,
}

impl DefaultCategory {
    /// Get all default categories in seeding order
    pub fn all() -> &'static [Self] {
        &[Self::Food, Self::Transport, Self::Entertainment, Self::Other]
    }

    /// Get the name for this default category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Get the seeded limit for this default category
    pub fn limit(&self) -> Money {
        match self {
            Self::Food => Money::from_units(500),
            Self::Transport => Money::from_units(300),
            Self::Entertainment => Money::from_units(200),
            Self::Other => Money::from_units(200),
        }
    }

    /// Create a Category from this default
    pub fn to_category(&self) -> Category {
        Category::with_limit(self.name(), self.limit())
    }

    /// All default categories as ready-to-insert values
    pub fn seed() -> Vec<Category> {
        Self::all().iter().map(Self::to_category).collect()
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    InvalidCharacters(String),
    NegativeLimit,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::InvalidCharacters(name) => write!(
                f,
                "Category name must contain only letters (A-Za-z): {:?}",
                name
            ),
            Self::NegativeLimit => write!(f, "Category limit cannot be negative"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
