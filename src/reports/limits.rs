//! Expenses vs limits comparison

use std::io::Write;

use super::ReportEngine;
use crate::error::BudgetResult;
use crate::models::Money;

/// Spending and limit for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitComparison {
    pub category: String,
    pub spent: Money,
    /// Zero when the category has no limit or is no longer registered
    pub limit: Money,
}

impl LimitComparison {
    /// Whether spending is above a positive limit
    pub fn is_over(&self) -> bool {
        self.limit.is_positive() && self.spent > self.limit
    }

    /// Limit left before it is exceeded (negative once over)
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }
}

/// Limit comparison for every category with expenses
#[derive(Debug, Clone)]
pub struct LimitReport {
    pub rows: Vec<LimitComparison>,
}

impl LimitReport {
    /// Generate the comparison from the current ledger and registry
    pub fn generate(engine: &ReportEngine<'_>) -> Self {
        Self {
            rows: engine.limit_comparison(),
        }
    }

    /// Whether there is nothing to compare
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Categories currently over their limit
    pub fn over_limit(&self) -> impl Iterator<Item = &LimitComparison> {
        self.rows.iter().filter(|r| r.is_over())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses to compare against limits.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Expenses vs Limits\n");
        output.push_str(&"=".repeat(66));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14} {:>14} {:>14}\n",
            "Category", "Spent", "Limit", "Remaining"
        ));
        output.push_str(&"-".repeat(66));
        output.push('\n');

        for row in &self.rows {
            let limit = if row.limit.is_positive() {
                row.limit.format_with_symbol(currency_symbol)
            } else {
                "-".to_string()
            };
            let remaining = if row.limit.is_positive() {
                row.remaining().format_with_symbol(currency_symbol)
            } else {
                "-".to_string()
            };
            let marker = if row.is_over() { "  OVER" } else { "" };

            output.push_str(&format!(
                "{:<20} {:>14} {:>14} {:>14}{}\n",
                row.category,
                row.spent.format_with_symbol(currency_symbol),
                limit,
                remaining,
                marker
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Category", "Spent", "Limit", "Over"])?;

        for row in &self.rows {
            csv_writer.write_record([
                row.category.clone(),
                row.spent.to_string(),
                row.limit.to_string(),
                row.is_over().to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
