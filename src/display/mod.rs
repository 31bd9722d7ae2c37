//! Result display module
//!
//! Renders the form, the conditional result panel and its JSON form.

mod format;

pub use format::{format_divergence, format_fixed, format_value};

use crate::config::DisplayConfig;
use crate::form::{Field, FieldUnit, InputState};
use crate::model::Divergence;
use colored::Colorize;
use serde_json::{json, Value};

const RULE: &str = "───────────────────────────────────────";

/// Color cue for a divergence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Market above theoretical value (red)
    Positive,
    /// Zero, negative or undefined divergence (blue)
    NonPositive,
}

impl Tone {
    pub fn of(divergence: f64) -> Self {
        if divergence > 0.0 {
            Tone::Positive
        } else {
            Tone::NonPositive
        }
    }
}

/// Text renderer for the calculator
pub struct Renderer {
    config: DisplayConfig,
    use_color: bool,
}

impl Renderer {
    /// Create a renderer, resolving the color mode once
    pub fn new(config: DisplayConfig) -> Self {
        let use_color = config.color.should_use_color();
        if use_color {
            colored::control::set_override(true);
        }
        Self { config, use_color }
    }

    /// The result panel shown once every input is present
    pub fn render_panel(&self, result: &Divergence) -> String {
        format!(
            "{}\nTheoretical ETF value: {}\nDivergence:            {}\n",
            RULE,
            format_value(result.theoretical_etf_value, &self.config.currency_suffix),
            self.paint_divergence(result.divergence),
        )
    }

    /// Theoretical underlying price line for verbose output
    pub fn render_underlying(&self, underlying: f64) -> String {
        format!(
            "Theoretical underlying: {}\n",
            format_value(underlying, &self.config.currency_suffix)
        )
    }

    /// All fields, then the panel when a result exists
    pub fn render_form(&self, state: &InputState, result: Option<&Divergence>) -> String {
        let mut out = String::new();
        for field in Field::ALL {
            let label = format!("{} ({}):", field.label(), self.unit_label(field.unit()));
            let value = match state.get(field) {
                Some(v) => v.to_string(),
                None => format!("[{}]", field.placeholder()),
            };
            out.push_str(&format!("  {:<30} {}\n", label, value));
        }
        if let Some(result) = result {
            out.push_str(&self.render_panel(result));
        }
        out
    }

    fn unit_label(&self, unit: FieldUnit) -> &str {
        match unit {
            FieldUnit::Currency => &self.config.currency_suffix,
            FieldUnit::Percent => "%",
            FieldUnit::Grams => "g",
        }
    }

    fn paint_divergence(&self, divergence: f64) -> String {
        let text = format_divergence(divergence);
        if !self.use_color {
            return text;
        }
        match Tone::of(divergence) {
            Tone::Positive => text.red().bold().to_string(),
            Tone::NonPositive => text.blue().bold().to_string(),
        }
    }
}

/// JSON view of the inputs and result
///
/// Unset inputs, a missing result and non-finite numbers all serialize as `null`.
pub fn render_json(state: &InputState, result: Option<&Divergence>) -> Value {
    json!({
        "inputs": {
            "futures_price": state.futures_price,
            "forward_rate": state.forward_rate,
            "grams_per_unit": state.grams_per_unit,
            "etf_price": state.etf_price,
        },
        "result": result.map(|r| json!({
            "theoretical_etf_value": r.theoretical_etf_value,
            "divergence": r.divergence,
        })),
    })
}
