//! Transaction CLI commands

use chrono::Local;
use clap::Subcommand;
use tracing::debug;

use super::{parse_amount, parse_date};
use crate::config::Settings;
use crate::display::transaction::{format_recorded, format_transaction_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::TransactionKind;
use crate::tracker::Tracker;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// "income" or "expense"
        kind: String,
        /// Category name
        category: String,
        /// Amount (e.g., "25.50"), always positive
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List recorded transactions, most recent last
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Show every transaction
        #[arg(short, long)]
        all: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    tracker: &mut Tracker,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    match cmd {
        TransactionCommands::Add {
            kind,
            category,
            amount,
            date,
            description,
        } => {
            let kind: TransactionKind = kind
                .trim()
                .to_lowercase()
                .parse()
                .map_err(BudgetError::MalformedInput)?;
            let amount = parse_amount("amount", &amount)?;
            let date = match date {
                Some(value) => parse_date(&value)?,
                None => Local::now().date_naive(),
            };
            debug!(%kind, %category, "recording from command line");

            let (txn, warning) = tracker.record(
                kind,
                &category,
                amount,
                date,
                description.as_deref().unwrap_or(""),
            )?;

            println!("{}", format_recorded(&txn, settings));
            if let Some(warning) = warning {
                if settings.warn_on_limit {
                    eprintln!("Warning: {}", warning);
                }
            }
            println!(
                "{}",
                tracker
                    .reports()
                    .summary()
                    .status_line(&settings.currency_symbol)
            );
        }

        TransactionCommands::List { limit, all } => {
            let transactions = tracker.ledger.transactions();
            let skip = if all {
                0
            } else {
                transactions.len().saturating_sub(limit)
            };

            print!(
                "{}",
                format_transaction_table(&transactions[skip..], skip + 1, settings)
            );
        }
    }

    Ok(())
}
