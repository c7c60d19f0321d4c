use clap::Parser;

use employee_ledger::cli::{execute_command, Cli};
use employee_ledger::config::{init_logging, BootstrapSettings, SystemEnvironment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging(&SystemEnvironment)?;

    let cli = Cli::parse();

    let bootstrap_settings = BootstrapSettings::from_env()?;
    tracing::debug!("Bootstrap settings: {:?}", bootstrap_settings);

    execute_command(cli, &bootstrap_settings).await
}
