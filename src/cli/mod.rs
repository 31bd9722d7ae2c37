//! CLI interface for etf-divergence
//!
//! Provides subcommands for:
//! - `calc`: One-shot divergence calculation
//! - `interactive`: Form session that re-renders on every input
//! - `about`: Explain the arbitrage logic
//! - `config`: Show configuration

mod about;
mod calc;
mod interactive;

pub use about::ABOUT;
pub use calc::{CalcArgs, OutputFormat};
pub use interactive::{InteractiveArgs, Session};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "etf-divergence")]
#[command(about = "Divergence calculator for precious-metal ETFs against futures-implied value")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate divergence from command-line inputs
    Calc(CalcArgs),
    /// Interactive calculator form
    Interactive(InteractiveArgs),
    /// Explain the arbitrage logic
    About,
    /// Show configuration
    Config,
}
