//! Configuration module for the budget tracker
//!
//! This module provides configuration management including:
//! - data directory resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
