//! Balance evolution by transaction index

use std::io::Write;

use chrono::NaiveDate;

use super::ReportEngine;
use crate::error::BudgetResult;
use crate::models::{Money, TransactionKind};

/// Balance after one transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePoint {
    /// 1-based transaction number
    pub index: usize,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub category: String,
    /// Signed change applied by this transaction
    pub change: Money,
    /// Running balance after this transaction
    pub balance: Money,
}

/// Running balance over the whole ledger
#[derive(Debug, Clone)]
pub struct BalanceSeriesReport {
    pub points: Vec<BalancePoint>,
}

impl BalanceSeriesReport {
    /// Generate the series in ledger order
    pub fn generate(engine: &ReportEngine<'_>) -> Self {
        let series = engine.balance_series();
        let points = engine
            .ledger()
            .transactions()
            .iter()
            .zip(series)
            .enumerate()
            .map(|(i, (txn, balance))| BalancePoint {
                index: i + 1,
                date: txn.date,
                kind: txn.kind,
                category: txn.category.clone(),
                change: txn.signed_amount(),
                balance,
            })
            .collect();

        Self { points }
    }

    /// Whether there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest balance reached, if any transaction exists
    pub fn lowest(&self) -> Option<&BalancePoint> {
        self.points.iter().min_by_key(|p| p.balance)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No transactions recorded yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Balance by Transaction\n");
        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "{:>4}  {:<10}  {:<8} {:<16} {:>12} {:>14}\n",
            "#", "Date", "Type", "Category", "Change", "Balance"
        ));
        output.push_str(&"-".repeat(70));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:>4}  {:<10}  {:<8} {:<16} {:>12} {:>14}\n",
                point.index,
                point.date.to_string(),
                point.kind,
                point.category,
                point.change,
                point.balance.format_with_symbol(currency_symbol)
            ));
        }

        if let Some(low) = self.lowest() {
            output.push_str(&"-".repeat(70));
            output.push('\n');
            output.push_str(&format!(
                "Lowest balance: {} after transaction #{}\n",
                low.balance.format_with_symbol(currency_symbol),
                low.index
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> BudgetResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Index", "Date", "Type", "Category", "Change", "Balance"])?;

        for point in &self.points {
            csv_writer.write_record([
                point.index.to_string(),
                point.date.to_string(),
                point.kind.to_string(),
                point.category.clone(),
                point.change.to_string(),
                point.balance.to_string(),
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
    fn test_generate_series() {
        let (_temp_dir, registry, mut ledger) = open_books();
        record(&mut ledger, &registry, Income, "Other", 100, 1);
        record(&mut ledger, &registry, Expense, "Food", 150, 2);
        record(&mut ledger, &registry, Income, "Other", 80, 3);

        let engine = ReportEngine::new(&ledger, &registry);
        let report = BalanceSeriesReport::generate(&engine);

        let balances: Vec<_> = report.points.iter().map(|p| p.balance).collect();
        assert_eq!(balances, engine.balance_series());
        assert_eq!(report.points[1].index, 2);
        assert_eq!(report.points[1].change, Money::from_units(-150));

        let low = report.lowest().unwrap();
        assert_eq!(low.index, 2);
        assert_eq!(low.balance, Money::from_units(-50));
    }

    #[test]
    fn test_empty_series() {
        let (_temp_dir, registry, ledger) = open_books();
        let engine = ReportEngine::new(&ledger, &registry);
        let report = BalanceSeriesReport::generate(&engine);

        assert!(report.is_empty());
        assert!(report.lowest().is_none());
        assert_eq!(report.format_terminal(""), "No transactions recorded yet.\n");
    }

    #[test]
    fn test_export_csv() {
        let (_temp_dir, registry, mut ledger) = open_books();
        record(&mut ledger, &registry, Income, "Other", 10, 1);
        record(&mut ledger, &registry, Expense, "Food", 4, 2);

        let engine = ReportEngine::new(&ledger, &registry);
        let mut out = Vec::new();
        BalanceSeriesReport::generate(&engine).export_csv(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Index,Date,Type,Category,Change,Balance\n\
             1,2025-01-01,income,Other,10.00,10.00\n\
             2,2025-01-02,expense,Food,-4.00,6.00\n"
        );
    }
}
