//! Item construction and validation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ValidationError;
use super::quantity::RawQuantity;
use super::sku::{count_letters, derive_sku};
use super::Item;

/// Default minimum number of letters in a name or category.
pub const DEFAULT_MIN_LETTERS: usize = 5;

/// Default number of name letters in a SKU.
pub const DEFAULT_NAME_PREFIX_LEN: usize = 3;

/// Default number of category letters in a SKU.
pub const DEFAULT_CATEGORY_PREFIX_LEN: usize = 2;

/// Thresholds applied when building items (`[validation]` in the config file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationRules {
    /// Minimum letters required in both name and category.
    pub min_letters: usize,
    pub name_prefix_len: usize,
    pub category_prefix_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_letters: DEFAULT_MIN_LETTERS,
            name_prefix_len: DEFAULT_NAME_PREFIX_LEN,
            category_prefix_len: DEFAULT_CATEGORY_PREFIX_LEN,
        }
    }
}

/// Validates raw input and builds [`Item`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemCreator {
    rules: ValidationRules,
}

impl ItemCreator {
    #[must_use]
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> ValidationRules {
        self.rules
    }

    /// Validate the inputs and build an item with its derived SKU.
    ///
    /// Rules are checked in order (name, category, quantity) and the first
    /// failure is returned.
    pub fn create(
        &self,
        name: &str,
        category: &str,
        quantity: impl Into<RawQuantity>,
    ) -> Result<Item, ValidationError> {
        self.validate_name(name)?;
        self.validate_category(category)?;
        let quantity = quantity.into().parse()?;

        let sku = self.sku_for(name, category);
        debug!(%sku, item_name = name, category, quantity, "Validated new item");
        Ok(Item::new(sku, name, category, quantity))
    }

    /// The SKU an item with this name and category would receive.
    #[must_use]
    pub fn sku_for(&self, name: &str, category: &str) -> String {
        derive_sku(
            name,
            category,
            self.rules.name_prefix_len,
            self.rules.category_prefix_len,
        )
    }

    pub fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        let found = count_letters(name);
        if found < self.rules.min_letters {
            return Err(ValidationError::NameTooShort {
                found,
                required: self.rules.min_letters,
            });
        }
        Ok(())
    }

    pub fn validate_category(&self, category: &str) -> Result<(), ValidationError> {
        let found = count_letters(category);
        if found < self.rules.min_letters {
            return Err(ValidationError::CategoryTooShort {
                found,
                required: self.rules.min_letters,
            });
        }
        if category.chars().any(char::is_whitespace) {
            return Err(ValidationError::CategoryNotOneWord(category.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "creator_tests.rs"]
mod creator_tests;
