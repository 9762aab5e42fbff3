use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use qbudget::cli::{
    handle_budget_command, handle_export_command, handle_login, handle_logout, handle_register,
    handle_scenario_command, handle_suggest_command, handle_whoami,
};
use qbudget::config::{paths::QbudgetPaths, settings::Settings};
use qbudget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "qbudget",
    version,
    about = "Terminal-based personal budgeting with what-if scenario simulation",
    long_about = "Quantum Budget is a terminal-based personal budgeting tool. \
                  Track a monthly budget, simulate scenarios like rent hikes or \
                  new expenses against it, and get AI suggestions for surplus funds."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// Email address
        email: String,
    },

    /// Log in as an existing user
    Login {
        /// Email address
        email: String,
    },

    /// Log out the current user
    Logout,

    /// Show the currently logged-in user
    Whoami,

    /// Budget management commands
    #[command(subcommand)]
    Budget(qbudget::cli::BudgetCommands),

    /// Simulate a what-if scenario against the budget
    Scenario {
        /// Scenario goal: rent-increase, savings, or new-expense
        goal: String,
        /// Percentage for rent-increase, rupee amount otherwise
        amount: String,
        /// Persist the optimized budget instead of just simulating
        #[arg(long)]
        apply: bool,
    },

    /// Get AI spending suggestions for your surplus
    Suggest {
        /// Free-text interests to tailor suggestions (e.g., "travel, books")
        #[arg(short, long, default_value = "")]
        interests: String,
    },

    /// Export the budget
    Export {
        /// Output format: json, csv, or yaml
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Dashboard,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = QbudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Register { email }) => {
            handle_register(&storage, &email)?;
        }
        Some(Commands::Login { email }) => {
            handle_login(&storage, &email)?;
        }
        Some(Commands::Logout) => {
            handle_logout(&storage)?;
        }
        Some(Commands::Whoami) => {
            handle_whoami(&storage)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, cmd)?;
        }
        Some(Commands::Scenario {
            goal,
            amount,
            apply,
        }) => {
            handle_scenario_command(&storage, &settings, &goal, &amount, apply)?;
        }
        Some(Commands::Suggest { interests }) => {
            handle_suggest_command(&storage, &settings, &interests)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&storage, &format, output)?;
        }
        Some(Commands::Dashboard) => {
            qbudget::tui::run_dashboard(&storage)?;
        }
        Some(Commands::Config) => {
            println!("Quantum Budget Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!(
                "  Flexible categories: {}",
                settings.flexible_categories.join(", ")
            );
            println!("  Gemini model:        {}", settings.gemini_model);
        }
        None => {
            println!("Quantum Budget - terminal-based personal budgeting");
            println!();
            println!("Run 'qbudget --help' for usage information.");
            println!("Run 'qbudget register <email>' to create an account.");
        }
    }

    Ok(())
}
