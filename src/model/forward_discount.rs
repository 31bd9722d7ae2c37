//! Forward-discount fair value model
//!
//! Discounts the futures price back to the present with the forward rate:
//! S = F / (1 + r / 100), ETF value = S * grams per unit.

use super::{Divergence, DivergenceParams, TheoreticalValueModel};

/// Futures-discounting fair value model
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardDiscountModel;

impl ForwardDiscountModel {
    /// Create a new forward-discount model
    pub fn new() -> Self {
        Self
    }

    /// Futures price discounted by the forward rate (percent)
    pub fn theoretical_underlying_price(&self, futures_price: f64, forward_rate: f64) -> f64 {
        let rate_decimal = forward_rate / 100.0;
        futures_price / (1.0 + rate_decimal)
    }
}

impl TheoreticalValueModel for ForwardDiscountModel {
    fn calculate(&self, params: &DivergenceParams) -> Divergence {
        let underlying =
            self.theoretical_underlying_price(params.futures_price, params.forward_rate);
        let theoretical_etf_value = underlying * params.grams_per_unit;

        // Zero theoretical value yields +/-inf or NaN, passed through as-is
        let divergence =
            ((params.etf_price - theoretical_etf_value) / theoretical_etf_value) * 100.0;

        Divergence {
            theoretical_etf_value,
            divergence,
        }
    }
}
