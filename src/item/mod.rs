//! Inventory item domain.
//!
//! Items are built by [`ItemCreator`] (validation plus SKU derivation) and
//! owned by [`ItemManager`], which keeps them in a shared [`Inventory`] that
//! report views read from.

pub mod creator;
pub mod error;
pub mod inventory;
pub mod manager;
pub mod patch;
pub mod quantity;
pub mod sku;

pub use creator::{ItemCreator, ValidationRules};
pub use error::ValidationError;
pub use inventory::Inventory;
pub use manager::ItemManager;
pub use patch::ItemPatch;
pub use quantity::RawQuantity;
pub use sku::derive_sku;

use serde::Serialize;
use std::fmt;

/// A single catalog entry.
///
/// The SKU is derived once at creation and never rewritten. It is not unique:
/// two unrelated items can share the same code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub(crate) sku: String,
    pub(crate) name: String,
    pub(crate) category: String,
    pub(crate) quantity: u32,
}

impl Item {
    pub(crate) fn new(sku: String, name: &str, category: &str, quantity: u32) -> Self {
        Self {
            sku,
            name: name.to_string(),
            category: category.to_string(),
            quantity,
        }
    }

    #[must_use]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Whether at least one unit is on hand.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Render a single field as text.
    #[must_use]
    pub fn field_value(&self, field: ItemField) -> String {
        match field {
            ItemField::Sku => self.sku.clone(),
            ItemField::Name => self.name.clone(),
            ItemField::Category => self.category.clone(),
            ItemField::Quantity => self.quantity.to_string(),
        }
    }

    /// All fields with their values, in [`ItemField::ALL`] order.
    #[must_use]
    pub fn fields(&self) -> Vec<(ItemField, String)> {
        ItemField::ALL
            .iter()
            .map(|&field| (field, self.field_value(field)))
            .collect()
    }
}

/// Named item fields in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Sku,
    Name,
    Category,
    Quantity,
}

impl ItemField {
    pub const ALL: [ItemField; 4] = [
        ItemField::Sku,
        ItemField::Name,
        ItemField::Category,
        ItemField::Quantity,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::Sku => "sku",
            ItemField::Name => "name",
            ItemField::Category => "category",
            ItemField::Quantity => "quantity",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item::new("KITCO".to_string(), "kitchen pot", "cooking", 3)
    }

    #[test]
    fn test_fields_follow_declared_order() {
        let fields = sample().fields();
        let names: Vec<&str> = fields.iter().map(|(field, _)| field.as_str()).collect();
        assert_eq!(names, vec!["sku", "name", "category", "quantity"]);
        assert_eq!(fields[3].1, "3");
    }

    #[test]
    fn test_in_stock_requires_positive_quantity() {
        let mut item = sample();
        assert!(item.in_stock());
        item.quantity = 0;
        assert!(!item.in_stock());
    }

    #[test]
    fn test_item_serializes_all_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sku": "KITCO",
                "name": "kitchen pot",
                "category": "cooking",
                "quantity": 3
            })
        );
    }

    #[test]
    fn test_item_field_display() {
        assert_eq!(ItemField::Quantity.to_string(), "quantity");
        assert_eq!(format!("{}", ItemField::Sku), "sku");
    }
}
