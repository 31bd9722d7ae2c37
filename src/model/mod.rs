//! Fair value model module
//!
//! Derives a theoretical ETF value from the futures price and forward rate,
//! then measures how far the market price sits from it.

mod forward_discount;

pub use forward_discount::ForwardDiscountModel;

use crate::form::InputState;
use serde::{Deserialize, Serialize};

/// Complete set of calculator inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceParams {
    /// Futures price (currency per futures unit)
    pub futures_price: f64,
    /// Forward rate in percent, already scoped to the contract month
    pub forward_rate: f64,
    /// Grams of metal backing one ETF unit
    pub grams_per_unit: f64,
    /// Current ETF market price
    pub etf_price: f64,
}

/// Calculated divergence of the ETF price from its theoretical value
///
/// Both fields may be infinite or NaN when the inputs produce a zero
/// denominator. Nothing here checks for that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Divergence {
    /// Theoretical ETF value (currency units)
    pub theoretical_etf_value: f64,
    /// Signed divergence in percent
    pub divergence: f64,
}

impl Divergence {
    /// Market price trades above the theoretical value
    pub fn is_premium(&self) -> bool {
        self.divergence > 0.0
    }
}

/// Trait for theoretical value model implementations
pub trait TheoreticalValueModel: Send + Sync {
    /// Calculate the theoretical value and divergence for a complete input set
    fn calculate(&self, params: &DivergenceParams) -> Divergence;
}

/// Calculate the divergence for the current form state
///
/// Returns `None` while any of the four inputs is unset.
pub fn calculate(state: &InputState) -> Option<Divergence> {
    let params = state.params()?;
    let result = ForwardDiscountModel::new().calculate(&params);

    tracing::debug!(
        futures_price = params.futures_price,
        forward_rate = params.forward_rate,
        grams_per_unit = params.grams_per_unit,
        etf_price = params.etf_price,
        theoretical_etf_value = result.theoretical_etf_value,
        divergence = result.divergence,
        "Recomputed divergence"
    );

    Some(result)
}
