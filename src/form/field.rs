//! Calculator form fields

use super::InputError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

/// Unit shown after a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUnit {
    /// Configured currency suffix
    Currency,
    /// Percent
    Percent,
    /// Grams
    Grams,
}

/// One of the four calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// OSE futures price
    FuturesPrice,
    /// Forward rate to the contract month (percent)
    ForwardRate,
    /// Grams of metal per ETF unit
    GramsPerUnit,
    /// Current ETF market price
    EtfPrice,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 4] = [
        Field::FuturesPrice,
        Field::ForwardRate,
        Field::GramsPerUnit,
        Field::EtfPrice,
    ];

    /// Canonical name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Field::FuturesPrice => "futures-price",
            Field::ForwardRate => "forward-rate",
            Field::GramsPerUnit => "grams-per-unit",
            Field::EtfPrice => "etf-price",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::FuturesPrice => "OSE futures price",
            Field::ForwardRate => "Forward rate",
            Field::GramsPerUnit => "Grams per ETF unit",
            Field::EtfPrice => "ETF market price",
        }
    }

    /// Example value shown while the field is unset
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FuturesPrice => "e.g. 9800",
            Field::ForwardRate => "e.g. 0.1",
            Field::GramsPerUnit => "e.g. 1.0",
            Field::EtfPrice => "e.g. 9750",
        }
    }

    pub fn unit(&self) -> FieldUnit {
        match self {
            Field::FuturesPrice | Field::EtfPrice => FieldUnit::Currency,
            Field::ForwardRate => FieldUnit::Percent,
            Field::GramsPerUnit => FieldUnit::Grams,
        }
    }

    /// Step granularity for increment/decrement
    ///
    /// Fields without an explicit step use the number-widget default of 1.
    pub fn step(&self) -> Decimal {
        match self {
            Field::ForwardRate => dec!(0.01),
            Field::GramsPerUnit => dec!(0.0001),
            Field::FuturesPrice | Field::EtfPrice => Decimal::ONE,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "futures-price" | "futures" => Ok(Field::FuturesPrice),
            "forward-rate" | "rate" => Ok(Field::ForwardRate),
            "grams-per-unit" | "grams" => Ok(Field::GramsPerUnit),
            "etf-price" | "etf" => Ok(Field::EtfPrice),
            _ => Err(InputError::UnknownField(s.to_string())),
        }
    }
}
