//! Calc command implementation

use crate::config::Config;
use crate::display::{render_json, Renderer};
use crate::form::{parse_amount, InputState};
use crate::model::{self, ForwardDiscountModel};
use clap::{Args, ValueEnum};

/// Output format for the calc command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// OSE futures price
    #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
    pub futures_price: Option<f64>,

    /// Forward rate to the contract month, in percent
    #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
    pub forward_rate: Option<f64>,

    /// Grams of metal per ETF unit
    #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
    pub grams_per_unit: Option<f64>,

    /// Current ETF market price
    #[arg(long, allow_negative_numbers = true, value_parser = parse_amount)]
    pub etf_price: Option<f64>,

    /// Output format: table or json
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Also show the theoretical underlying price
    #[arg(short, long)]
    pub verbose: bool,
}

impl CalcArgs {
    /// Form state built from the flags
    pub fn state(&self) -> InputState {
        InputState {
            futures_price: self.futures_price,
            forward_rate: self.forward_rate,
            grams_per_unit: self.grams_per_unit,
            etf_price: self.etf_price,
        }
    }

    /// Render the output for the given configuration
    ///
    /// Empty for table output while any input is missing.
    pub fn render(&self, config: &Config) -> anyhow::Result<String> {
        let state = self.state();
        let result = model::calculate(&state);

        if result.is_none() {
            let missing: Vec<&str> = state.missing_fields().iter().map(|f| f.name()).collect();
            tracing::info!(?missing, "Inputs incomplete, result hidden");
        }

        match self.format {
            OutputFormat::Json => {
                let value = render_json(&state, result.as_ref());
                Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
            }
            OutputFormat::Table => {
                let Some(result) = result else {
                    return Ok(String::new());
                };
                let renderer = Renderer::new(config.display.clone());
                let mut out = String::new();
                if let Some(params) = state.params().filter(|_| self.verbose) {
                    let underlying = ForwardDiscountModel::new()
                        .theoretical_underlying_price(params.futures_price, params.forward_rate);
                    out.push_str(&renderer.render_underlying(underlying));
                }
                out.push_str(&renderer.render_panel(&result));
                Ok(out)
            }
        }
    }

    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        print!("{}", self.render(config)?);
        Ok(())
    }
}
