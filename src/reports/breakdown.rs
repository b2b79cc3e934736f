//! Expense breakdown
//!
//! Expense totals per category with each category's share of total expense.

use std::io::Write;

use super::ReportEngine;
use crate::error::BudgetResult;
use crate::models::Money;

/// One category's share of expenses
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub category: String,
    pub spent: Money,
    /// Percentage of total expense
    pub percentage: f64,
}

/// Expense breakdown by category, ordered by category name
#[derive(Debug, Clone)]
pub struct BreakdownReport {
    pub rows: Vec<BreakdownRow>,
    pub total: Money,
}

impl BreakdownReport {
    /// Generate the breakdown from the current ledger
    pub fn generate(engine: &ReportEngine<'_>) -> Self {
        let totals = engine.category_breakdown();
        let total: Money = totals.values().sum();

        let rows = totals
            .into_iter()
            .map(|(category, spent)| BreakdownRow {
                percentage: spent.percent_of(total),
                category,
                spent,
            })
            .collect();

        Self { rows, total }
    }

    /// Whether there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses recorded yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Expenses by Category\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>15} {:>8}\n", "Category", "Spent", "%"));
        output.push_str(&"-".repeat(50));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>15} {:>7.1}%\n",
                row.category,
                row.spent.format_with_symbol(currency_symbol),
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>15}\n",
            "TOTAL",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Category", "Spent", "Percentage"])?;

        for row in &self.rows {
            csv_writer.write_record([
                row.category.clone(),
                row.spent.to_string(),
                format!("{:.2}", row.percentage),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind::{Expense, Income};
    use crate::reports::test_support::{open_books, record};

    #[test]
    fn test_generate_breakdown() {
        let (_temp_dir, registry, mut ledger) = open_books();
        record(&mut ledger, &registry, Income, "Other", 5000, 1);
        record(&mut ledger, &registry, Expense, "Transport", 150, 2);
        record(&mut ledger, &registry, Expense, "Food", 300, 3);
        record(&mut ledger, &registry, Expense, "Food", 150, 4);

        let engine = ReportEngine::new(&ledger, &registry);
        let report = BreakdownReport::generate(&engine);

        assert_eq!(report.total, Money::from_units(600));
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].category, "Food");
        assert_eq!(report.rows[0].spent, Money::from_units(450));
        assert!((report.rows[0].percentage - 75.0).abs() < 1e-9);
        assert_eq!(report.rows[1].category, "Transport");
        assert!((report.rows[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_breakdown() {
        let (_temp_dir, registry, mut ledger) = open_books();
        record(&mut ledger, &registry, Income, "Other", 10, 1);

        let engine = ReportEngine::new(&ledger, &registry);
        let report = BreakdownReport::generate(&engine);

        assert!(report.is_empty());
        assert_eq!(report.format_terminal("zł"), "No expenses recorded yet.\n");
    }

    #[test]
    fn test_export_csv() {
        let (_temp_dir, registry, mut ledger) = open_books();
        record(&mut ledger, &registry, Expense, "Food", 30, 1);
        record(&mut ledger, &registry, Expense, "Other", 10, 1);

        let engine = ReportEngine::new(&ledger, &registry);
        let mut out = Vec::new();
        BreakdownReport::generate(&engine).export_csv(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Category,Spent,Percentage\nFood,30.00,75.00\nOther,10.00,25.00\n"
        );
    }
}
