//! Category CLI commands
//!
//! Implements CLI commands for the category registry and its limits.

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::category::{format_category_details, format_category_table};
use crate::error::{BudgetError, BudgetResult};
use crate::tracker::Tracker;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their limits
    List,

    /// Add a new category
    Add {
        /// Category name (letters only)
        name: String,
        /// Spending limit (e.g., "500" or "500.00"); omit for no limit
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Remove a category (recorded transactions are kept)
    #[command(alias = "delete")]
    Remove {
        /// Category name
        name: String,
    },

    /// Change a category's spending limit; 0 disables monitoring
    #[command(name = "set-limit")]
    SetLimit {
        /// Category name
        name: String,
        /// New limit
        amount: String,
    },

    /// Show category details
    Show {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    tracker: &mut Tracker,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::List => {
            let spent = tracker.ledger.expenses_by_category();
            print!(
                "{}",
                format_category_table(tracker.registry.categories(), &spent, symbol)
            );
        }

        CategoryCommands::Add { name, limit } => {
            let limit = limit
                .map(|value| parse_amount("limit", &value))
                .transpose()?;

            let category = tracker.registry.add_category(&name, limit)?;
            println!("Added category: {}", category.name);
            if category.is_monitored() {
                println!("  Limit: {}", category.limit.format_with_symbol(symbol));
            }
        }

        CategoryCommands::Remove { name } => {
            let removed = tracker.registry.remove_category(&name)?;
            println!("Removed category: {}", removed.name);

            let orphaned = tracker
                .ledger
                .transactions()
                .iter()
                .filter(|t| t.category == removed.name)
                .count();
            if orphaned > 0 {
                println!("  {} recorded transaction(s) still reference it", orphaned);
            }
        }

        CategoryCommands::SetLimit { name, amount } => {
            let amount = parse_amount("limit", &amount)?;
            tracker.registry.set_limit(&name, amount)?;

            if amount.is_zero() {
                println!("Cleared limit for '{}'", name);
            } else {
                println!(
                    "Set limit for '{}' to {}",
                    name,
                    amount.format_with_symbol(symbol)
                );
            }
        }

        CategoryCommands::Show { name } => {
            let category = tracker
                .registry
                .get(&name)
                .ok_or_else(|| BudgetError::UnknownCategory(name.clone()))?;

            let expense_count = tracker
                .ledger
                .transactions()
                .iter()
                .filter(|t| t.is_expense() && t.category == category.name)
                .count();
            let spent = tracker.ledger.expense_for(&category.name);

            print!(
                "{}",
                format_category_details(category, spent, expense_count, symbol)
            );
        }
    }

    Ok(())
}
