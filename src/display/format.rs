//! Number formatting for the result panel

use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitude from which fixed notation gives way to exponent notation
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Format with a fixed number of decimals
///
/// Midpoints round away from zero. Magnitudes of 1e21 and above use
/// exponent notation (`1e+21`). Non-finite values come out as `NaN`,
/// `Infinity` or `-Infinity` so a degenerate input is visible instead of
/// silently rounded away.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    // -0.0 prints unsigned
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude.is_infinite() {
        return format!("{}Infinity", sign);
    }
    if magnitude >= EXPONENT_THRESHOLD {
        let exponent = format!("{:e}", magnitude).replacen('e', "e+", 1);
        return format!("{}{}", sign, exponent);
    }

    match Decimal::from_f64_retain(magnitude) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
            format!("{}{:.*}", sign, decimals, rounded)
        }
        None => format!("{}{:.*}", sign, decimals, magnitude),
    }
}

/// Theoretical value: 2 decimals plus currency suffix
pub fn format_value(value: f64, currency_suffix: &str) -> String {
    format!("{} {}", format_fixed(value, 2), currency_suffix)
}

/// Divergence: 3 decimals, leading `+` when positive, percent suffix
pub fn format_divergence(divergence: f64) -> String {
    let sign = if divergence > 0.0 { "+" } else { "" };
    format!("{}{} %", sign, format_fixed(divergence, 3))
}
