//! Raw quantity input and its parse into a stock count.

use super::error::ValidationError;

/// A quantity as supplied by a caller, before validation.
///
/// Callers may hand over an integer, a float or free text; anything that does
/// not parse to a whole, non-negative number that fits in a `u32` is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RawQuantity {
    Missing,
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl RawQuantity {
    /// Parse into a stock count.
    pub fn parse(&self) -> Result<u32, ValidationError> {
        match self {
            RawQuantity::Missing => Err(ValidationError::MissingQuantity),
            RawQuantity::Integer(value) => parse_integer(*value),
            RawQuantity::Decimal(value) => parse_decimal(*value),
            RawQuantity::Text(text) => parse_text(text),
        }
    }
}

fn parse_integer(value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NegativeQuantity(value.to_string()));
    }
    u32::try_from(value).map_err(|_| ValidationError::QuantityOutOfRange(value.to_string()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_decimal(value: f64) -> Result<u32, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber(value.to_string()));
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeQuantity(value.to_string()));
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::FractionalQuantity(value.to_string()));
    }
    if value > f64::from(u32::MAX) {
        return Err(ValidationError::QuantityOutOfRange(value.to_string()));
    }
    // Range and fraction checked above.
    Ok(value as u32)
}

fn parse_text(text: &str) -> Result<u32, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingQuantity);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return parse_integer(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) => parse_decimal(value),
        Err(_) => Err(ValidationError::NotANumber(trimmed.to_string())),
    }
}

impl From<i64> for RawQuantity {
    fn from(value: i64) -> Self {
        RawQuantity::Integer(value)
    }
}

impl From<i32> for RawQuantity {
    fn from(value: i32) -> Self {
        RawQuantity::Integer(i64::from(value))
    }
}

impl From<u32> for RawQuantity {
    fn from(value: u32) -> Self {
        RawQuantity::Integer(i64::from(value))
    }
}

impl From<f64> for RawQuantity {
    fn from(value: f64) -> Self {
        RawQuantity::Decimal(value)
    }
}

impl From<&str> for RawQuantity {
    fn from(value: &str) -> Self {
        RawQuantity::Text(value.to_string())
    }
}

impl From<String> for RawQuantity {
    fn from(value: String) -> Self {
        RawQuantity::Text(value)
    }
}

impl<T: Into<RawQuantity>> From<Option<T>> for RawQuantity {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawQuantity::Missing, Into::into)
    }
}
