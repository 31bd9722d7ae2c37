//! Field value parsing and stepping

use super::{InputError, StepDirection};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Parse raw field text
///
/// Empty text means the field is unset. Only finite numbers are accepted;
/// `inf` and `NaN` spellings are rejected like any other non-number.
pub fn parse_field_value(text: &str) -> Result<Option<f64>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(InputError::NotANumber(trimmed.to_string())),
    }
}

/// Parse a value that must be present, for command-line flags
pub fn parse_amount(text: &str) -> Result<f64, InputError> {
    parse_field_value(text)?.ok_or_else(|| InputError::NotANumber(text.to_string()))
}

/// Step a field value the way a number input's up/down arrows do
///
/// An unset value starts from zero. Values on the step grid move by one
/// step; values off the grid snap to the next grid point in the stepping
/// direction.
pub fn step_value(
    value: Option<f64>,
    step: Decimal,
    direction: StepDirection,
) -> Result<f64, InputError> {
    let current = value.unwrap_or(0.0);
    // Shortest round-trip text keeps 0.1 as 0.1 rather than its binary expansion
    let current_dec = current
        .to_string()
        .parse::<Decimal>()
        .map_err(|_| InputError::NotSteppable(current))?;

    let overflow = InputError::NotSteppable(current);
    let ticks = current_dec.checked_div(step).ok_or(overflow.clone())?;
    let aligned = ticks.fract().is_zero();

    let next_ticks = match (direction, aligned) {
        (StepDirection::Up, true) => ticks.checked_add(Decimal::ONE),
        (StepDirection::Down, true) => ticks.checked_sub(Decimal::ONE),
        (StepDirection::Up, false) => Some(ticks.ceil()),
        (StepDirection::Down, false) => Some(ticks.floor()),
    };

    next_ticks
        .and_then(|ticks| ticks.checked_mul(step))
        .and_then(|value| value.normalize().to_f64())
        .ok_or(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_empty_is_unset() {
        assert_eq!(parse_field_value(""), Ok(None));
        assert_eq!(parse_field_value("   "), Ok(None));
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_field_value("9800"), Ok(Some(9800.0)));
        assert_eq!(parse_field_value(" 0.1 "), Ok(Some(0.1)));
        assert_eq!(parse_field_value("-100"), Ok(Some(-100.0)));
        assert_eq!(parse_field_value(".5"), Ok(Some(0.5)));
        assert_eq!(parse_field_value("1e3"), Ok(Some(1000.0)));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        for text in ["abc", "1,000", "inf", "NaN", "-infinity", "12円"] {
            assert_eq!(
                parse_field_value(text),
                Err(InputError::NotANumber(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("9800"), Ok(9800.0));
        assert_eq!(parse_amount("-100"), Ok(-100.0));
        assert_eq!(parse_amount(""), Err(InputError::NotANumber(String::new())));
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_step_from_unset() {
        assert_eq!(step_value(None, dec!(0.01), StepDirection::Up), Ok(0.01));
        assert_eq!(step_value(None, dec!(1), StepDirection::Down), Ok(-1.0));
    }

    #[test]
    fn test_step_aligned_value() {
        assert_eq!(step_value(Some(0.1), dec!(0.01), StepDirection::Up), Ok(0.11));
        assert_eq!(step_value(Some(0.1), dec!(0.01), StepDirection::Down), Ok(0.09));
        assert_eq!(step_value(Some(9800.0), dec!(1), StepDirection::Up), Ok(9801.0));
        assert_eq!(
            step_value(Some(1.0), dec!(0.0001), StepDirection::Down),
            Ok(0.9999)
        );
    }

    #[test]
    fn test_step_snaps_off_grid_value() {
        assert_eq!(step_value(Some(9800.5), dec!(1), StepDirection::Up), Ok(9801.0));
        assert_eq!(step_value(Some(9800.5), dec!(1), StepDirection::Down), Ok(9800.0));
        assert_eq!(step_value(Some(0.105), dec!(0.01), StepDirection::Up), Ok(0.11));
        assert_eq!(step_value(Some(-0.105), dec!(0.01), StepDirection::Down), Ok(-0.11));
    }

    #[test]
    fn test_step_out_of_range() {
        assert_eq!(
            step_value(Some(1e27), dec!(0.0001), StepDirection::Up),
            Err(InputError::NotSteppable(1e27))
        );
        assert_eq!(
            step_value(Some(f64::MAX), dec!(1), StepDirection::Up),
            Err(InputError::NotSteppable(f64::MAX))
        );
    }

    #[test]
    fn test_step_crosses_zero() {
        assert_eq!(step_value(Some(0.0), dec!(0.01), StepDirection::Down), Ok(-0.01));
        assert_eq!(step_value(Some(-0.01), dec!(0.01), StepDirection::Up), Ok(0.0));
    }
}
