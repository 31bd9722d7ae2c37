//! Calculator form module
//!
//! Holds the four optional inputs and the widget behaviour around them:
//! labels, placeholders, parsing and step up/down.

mod field;
mod input;
mod types;

pub use field::{Field, FieldUnit};
pub use input::{parse_amount, parse_field_value, step_value};
pub use types::{InputError, StepDirection};

use crate::model::DivergenceParams;

/// Current form values, each unset until the user supplies one
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub futures_price: Option<f64>,
    pub forward_rate: Option<f64>,
    pub grams_per_unit: Option<f64>,
    pub etf_price: Option<f64>,
}

impl InputState {
    /// Create an empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::FuturesPrice => self.futures_price,
            Field::ForwardRate => self.forward_rate,
            Field::GramsPerUnit => self.grams_per_unit,
            Field::EtfPrice => self.etf_price,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::FuturesPrice => &mut self.futures_price,
            Field::ForwardRate => &mut self.forward_rate,
            Field::GramsPerUnit => &mut self.grams_per_unit,
            Field::EtfPrice => &mut self.etf_price,
        };
        *slot = value;
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, None);
    }

    /// Unset every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Parse raw text into a field
    ///
    /// On error the field keeps its previous value.
    pub fn set_text(&mut self, field: Field, text: &str) -> Result<(), InputError> {
        let value = parse_field_value(text)?;
        self.set(field, value);
        Ok(())
    }

    /// Step a field up or down by its granularity
    pub fn step(&mut self, field: Field, direction: StepDirection) -> Result<f64, InputError> {
        let value = step_value(self.get(field), field.step(), direction)?;
        self.set(field, Some(value));
        Ok(value)
    }

    /// Fields that still need a value
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.params().is_some()
    }

    /// Complete input tuple, or `None` while any field is unset
    pub fn params(&self) -> Option<DivergenceParams> {
        Some(DivergenceParams {
            futures_price: self.futures_price?,
            forward_rate: self.forward_rate?,
            grams_per_unit: self.grams_per_unit?,
            etf_price: self.etf_price?,
        })
    }
}
