// CLI module for running the service and its maintenance commands

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::BootstrapSettings;

/// Employee ledger CLI
#[derive(Parser, Debug)]
#[command(name = "employee-ledger")]
#[command(about = "Employee records service with an append-only audit log", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run migrations, then serve the HTTP API (default)
    Serve,

    /// Run pending primary database migrations and exit
    Migrate,
}

/// Execute CLI command
///
/// Routes the parsed CLI command to the appropriate handler function.
/// No subcommand means `serve`.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `bootstrap_settings` - Settings loaded at startup
///
/// # Returns
/// * `Ok(())` - Command executed successfully
/// * `Err(...)` - Command execution failed
pub async fn execute_command(
    cli: Cli,
    bootstrap_settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_server(bootstrap_settings).await?,
        Commands::Migrate => migrate::run_migrations(bootstrap_settings).await?,
    }

    Ok(())
}
