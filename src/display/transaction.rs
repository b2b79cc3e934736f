//! Transaction display formatting
//!
//! Formats the ledger as a numbered table for terminal display.

use crate::config::Settings;
use crate::models::Transaction;

/// Format a single transaction as a table row; `number` is 1-based
pub fn format_transaction_row(number: usize, txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{:>4}  {:<8} {:<16} {:>14}  {:<10}  {}",
        number,
        txn.kind,
        truncate(&txn.category, 16),
        txn.amount.format_with_symbol(&settings.currency_symbol),
        txn.date.format(&settings.date_format).to_string(),
        txn.description
    )
}

/// Format transactions as a table, numbering from `first_number`
pub fn format_transaction_table(
    transactions: &[Transaction],
    first_number: usize,
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No records found!\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<8} {:<16} {:>14}  {:<10}  {}\n",
        "#", "Type", "Category", "Amount", "Date", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for (offset, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(first_number + offset, txn, settings));
        output.push('\n');
    }

    output
}

/// Format a recorded transaction as a confirmation message
pub fn format_recorded(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "Recorded {} of {} in '{}' on {}",
        txn.kind,
        txn.amount.format_with_symbol(&settings.currency_symbol),
        txn.category,
        txn.date.format(&settings.date_format)
    )
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
