//! Configuration types for etf-divergence

use crate::telemetry::LogFormat;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Result panel configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Suffix printed after the theoretical value
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// When to apply the divergence color cue
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal, unless NO_COLOR or CLICOLOR=0 is set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => auto_color(
                std::env::var("NO_COLOR").ok().as_deref(),
                std::env::var("CLICOLOR").ok().as_deref(),
                std::env::var("CLICOLOR_FORCE").ok().as_deref(),
                std::io::stdout().is_terminal(),
            ),
        }
    }
}

/// Auto color decision from NO_COLOR, CLICOLOR and CLICOLOR_FORCE
///
/// CLICOLOR_FORCE=1 wins; otherwise NO_COLOR (any value) or CLICOLOR=0
/// disable color, and a terminal enables it.
fn auto_color(
    no_color: Option<&str>,
    clicolor: Option<&str>,
    clicolor_force: Option<&str>,
    is_terminal: bool,
) -> bool {
    if clicolor_force == Some("1") {
        return true;
    }
    if no_color.is_some() || clicolor == Some("0") {
        return false;
    }
    is_terminal
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_currency_suffix() -> String {
    "JPY".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_suffix: default_currency_suffix(),
            color: ColorMode::Auto,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Render as TOML for the `config` command
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
