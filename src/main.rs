use anyhow::Context;
use clap::Parser;
use etf_divergence::cli::{Cli, Commands, ABOUT};
use etf_divergence::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Could not load config from {}", path.display()))?,
        None => Config::default(),
    };

    // Initialize telemetry
    etf_divergence::telemetry::init_telemetry(&config.telemetry)?;
    tracing::debug!(config = ?cli.config, "Configuration loaded");

    match cli.command {
        Commands::Calc(args) => {
            args.execute(&config)?;
        }
        Commands::Interactive(args) => {
            tracing::info!("Starting interactive session");
            args.execute(&config)?;
        }
        Commands::About => {
            print!("{}", ABOUT);
        }
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
