use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_category_command, handle_report_command, handle_transaction_command, CategoryCommands,
    ReportCommands, TransactionCommands,
};
use budget_tracker::config::{paths::BudgetPaths, settings::Settings};
use budget_tracker::logging::init_tracing;
use budget_tracker::Tracker;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal income and expense tracker with category limits",
    long_about = "Budget Tracker records income and expenses against spending \
                  categories, warns when a category goes over its limit, and \
                  reports where the money went. Data is kept in plain CSV files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show total income, expenses and balance
    Summary,

    /// Report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut tracker = Tracker::open(paths.clone())?;
    for (store, outcome) in tracker.recoveries() {
        eprintln!("Warning: {} store {}", store, outcome);
    }

    match cli.command {
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut tracker, &settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut tracker, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            println!(
                "{}",
                tracker.reports().summary().status_line(&settings.currency_symbol)
            );
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&tracker, &settings, cmd)?;
        }
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
                println!("Settings saved to: {}", paths.settings_file().display());
                println!();
            }
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Data directory:    {}", paths.base_dir().display());
            println!("Categories file:   {}", paths.categories_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Warn on limit:   {}", settings.warn_on_limit);
        }
        None => {
            println!("Budget Tracker - income and expenses with category limits");
            println!();
            println!(
                "{}",
                tracker.reports().summary().status_line(&settings.currency_symbol)
            );
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
