//! CLI commands for reports
//!
//! Prints a report to the terminal or exports it as CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::reports::{BalanceSeriesReport, BreakdownReport, LimitReport};
use crate::tracker::Tracker;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Expenses per category with their share of total spending
    #[command(alias = "spending")]
    Breakdown {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending compared against each category's limit
    Limits {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Running balance after each transaction
    Balance {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    tracker: &Tracker,
    settings: &Settings,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let engine = tracker.reports();
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Breakdown { output } => {
            let report = BreakdownReport::generate(&engine);
            match output {
                Some(path) => {
                    report.export_csv(create_export(&path)?)?;
                    println!("Breakdown report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(symbol)),
            }
        }

        ReportCommands::Limits { output } => {
            let report = LimitReport::generate(&engine);
            match output {
                Some(path) => {
                    report.export_csv(create_export(&path)?)?;
                    println!("Limits report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(symbol)),
            }
        }

        ReportCommands::Balance { output } => {
            let report = BalanceSeriesReport::generate(&engine);
            match output {
                Some(path) => {
                    report.export_csv(create_export(&path)?)?;
                    println!("Balance report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(symbol)),
            }
        }
    }

    Ok(())
}

fn create_export(path: &Path) -> BudgetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Io(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
