//! Create, update, delete and query operations over the live collection.

use tracing::debug;

use super::creator::{ItemCreator, ValidationRules};
use super::error::ValidationError;
use super::inventory::Inventory;
use super::patch::ItemPatch;
use super::quantity::RawQuantity;
use super::Item;

/// Owns the item collection.
///
/// SKUs are not unique, so `update` and `delete` act on every match rather
/// than the first one.
#[derive(Debug, Default)]
pub struct ItemManager {
    creator: ItemCreator,
    inventory: Inventory,
}

impl ItemManager {
    #[must_use]
    pub fn new(creator: ItemCreator) -> Self {
        Self {
            creator,
            inventory: Inventory::new(),
        }
    }

    #[must_use]
    pub fn with_rules(rules: ValidationRules) -> Self {
        Self::new(ItemCreator::new(rules))
    }

    #[must_use]
    pub fn creator(&self) -> &ItemCreator {
        &self.creator
    }

    /// Validate and append a new item.
    ///
    /// On failure the collection is left unchanged.
    pub fn create(
        &self,
        name: &str,
        category: &str,
        quantity: impl Into<RawQuantity>,
    ) -> Result<Item, ValidationError> {
        let item = match self.creator.create(name, category, quantity) {
            Ok(item) => item,
            Err(err) => {
                debug!(item_name = name, category, error = %err, "Rejected item");
                return Err(err);
            }
        };
        self.inventory.write().push(item.clone());
        debug!(sku = %item.sku, "Created item");
        Ok(item)
    }

    /// Apply `patch` to every item with this SKU.
    ///
    /// Returns the updated items in collection order; empty when nothing matched.
    pub fn update(&self, sku: &str, patch: &ItemPatch) -> Vec<Item> {
        let mut items = self.inventory.write();
        let updated: Vec<Item> = items
            .iter_mut()
            .filter(|item| item.sku == sku)
            .map(|item| {
                patch.apply_to(item);
                item.clone()
            })
            .collect();
        debug!(sku, matched = updated.len(), "Updated items");
        updated
    }

    /// Remove every item with this SKU, keeping the rest in order.
    ///
    /// Returns how many items were removed.
    pub fn delete(&self, sku: &str) -> usize {
        let mut items = self.inventory.write();
        let before = items.len();
        items.retain(|item| item.sku != sku);
        let removed = before.saturating_sub(items.len());
        debug!(sku, removed, "Deleted items");
        removed
    }

    /// Snapshot of every item.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.inventory.snapshot()
    }

    /// Items with at least one unit on hand.
    #[must_use]
    pub fn in_stock(&self) -> Vec<Item> {
        self.inventory.filter(Item::in_stock)
    }

    /// Items in exactly this category (case-sensitive).
    #[must_use]
    pub fn in_category(&self, category: &str) -> Vec<Item> {
        self.inventory.filter(|item| item.category == category)
    }

    /// The live collection handle, shared rather than copied.
    #[must_use]
    pub fn inventory(&self) -> Inventory {
        self.inventory.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod manager_tests;
