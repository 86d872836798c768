//! Parsing and validation of raw request fields.

use crate::{model::api::NumberInput, server::error::validation::ValidationError};

/// Parses an optional numeric input.
///
/// Text is trimmed and accepts a decimal comma (`"12,50"`). Empty text counts as absent.
///
/// # Returns
/// - `Ok(Some(f64))` - Parsed finite number
/// - `Ok(None)` - Field absent or empty
/// - `Err(ValidationError::InvalidNumber)` - Text is not a number or the value is not finite
pub fn parse_number(
    field: &'static str,
    input: Option<&NumberInput>,
) -> Result<Option<f64>, ValidationError> {
    let value = match input {
        None => return Ok(None),
        Some(NumberInput::Number(value)) => *value,
        Some(NumberInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }

            text.replace(',', ".")
                .parse::<f64>()
                .map_err(|_| ValidationError::InvalidNumber {
                    field,
                    value: text.to_string(),
                })?
        }
    };

    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }

    Ok(Some(value))
}

/// Parses a cost field: absent means 0, negative values are rejected.
pub fn parse_cost(field: &'static str, input: Option<&NumberInput>) -> Result<f64, ValidationError> {
    let value = parse_number(field, input)?.unwrap_or(0.0);
    ensure_non_negative(field, value)
}

/// Parses an optional non-negative amount such as a repair cost.
pub fn parse_optional_cost(
    field: &'static str,
    input: Option<&NumberInput>,
) -> Result<Option<f64>, ValidationError> {
    parse_number(field, input)?
        .map(|value| ensure_non_negative(field, value))
        .transpose()
}

/// Parses a required strictly positive amount such as liters.
pub fn parse_positive(field: &'static str, input: Option<&NumberInput>) -> Result<f64, ValidationError> {
    let value = parse_number(field, input)?.ok_or(ValidationError::MissingField(field))?;

    if value <= 0.0 {
        return Err(ValidationError::NonPositiveAmount { field, value });
    }

    Ok(value)
}

/// Parses an optional non-negative whole number such as an odometer reading.
pub fn parse_whole_number(
    field: &'static str,
    input: Option<&NumberInput>,
) -> Result<Option<i32>, ValidationError> {
    let Some(value) = parse_number(field, input)? else {
        return Ok(None);
    };

    let value = ensure_non_negative(field, value)?;
    if value.fract() != 0.0 || value > i32::MAX as f64 {
        return Err(ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }

    Ok(Some(value as i32))
}

/// Parses an optional fuel level percentage in 0..=100.
pub fn parse_percentage(
    field: &'static str,
    input: Option<&NumberInput>,
) -> Result<Option<i32>, ValidationError> {
    let Some(value) = parse_whole_number(field, input)? else {
        return Ok(None);
    };

    if value > 100 {
        return Err(ValidationError::OutOfRange {
            field,
            value: value as f64,
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(Some(value))
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    Ok(value)
}

/// Requires a non-blank text field, returning it trimmed.
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    non_blank(field, value)
}

/// Rejects a blank text field that is being updated, returning it trimmed.
pub fn non_blank(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Trims optional text, mapping blank values to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
