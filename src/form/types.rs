//! Form input types

use thiserror::Error;

/// Errors from user-supplied form input
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    /// Text is not a finite decimal number
    #[error("Not a number: {0:?}")]
    NotANumber(String),
    /// Field name not recognised
    #[error("Unknown field: {0:?}")]
    UnknownField(String),
    /// Value cannot be stepped
    #[error("Cannot step value {0}")]
    NotSteppable(f64),
}

/// Direction of a step on a number field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Increment by one step
    Up,
    /// Decrement by one step
    Down,
}
