//! Validation failures raised while building an item.

use thiserror::Error;

/// Why an item could not be created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name must contain at least {required} letters, found {found}")]
    NameTooShort { found: usize, required: usize },

    #[error("Category must contain at least {required} letters, found {found}")]
    CategoryTooShort { found: usize, required: usize },

    #[error("Category must be a single word: '{0}'")]
    CategoryNotOneWord(String),

    #[error("Quantity is required")]
    MissingQuantity,

    #[error("Quantity is not a number: '{0}'")]
    NotANumber(String),

    #[error("Quantity cannot be negative: {0}")]
    NegativeQuantity(String),

    #[error("Quantity must be a whole number: {0}")]
    FractionalQuantity(String),

    #[error("Quantity {0} exceeds the maximum of 4294967295")]
    QuantityOutOfRange(String),
}

impl ValidationError {
    /// Whether the failure concerns the quantity field.
    #[must_use]
    pub fn is_quantity_error(&self) -> bool {
        matches!(
            self,
            ValidationError::MissingQuantity
                | ValidationError::NotANumber(_)
                | ValidationError::NegativeQuantity(_)
                | ValidationError::FractionalQuantity(_)
                | ValidationError::QuantityOutOfRange(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::NameTooShort {
            found: 2,
            required: 5,
        };
        assert_eq!(err.to_string(), "Name must contain at least 5 letters, found 2");

        let err = ValidationError::CategoryNotOneWord("two words".to_string());
        assert_eq!(err.to_string(), "Category must be a single word: 'two words'");

        let err = ValidationError::QuantityOutOfRange("5000000000".to_string());
        assert!(err.to_string().contains("4294967295"));
    }

    #[test]
    fn test_is_quantity_error() {
        assert!(ValidationError::MissingQuantity.is_quantity_error());
        assert!(ValidationError::NegativeQuantity("-1".to_string()).is_quantity_error());
        assert!(!ValidationError::CategoryNotOneWord("a b".to_string()).is_quantity_error());
    }
}
