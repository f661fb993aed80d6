//! The shared, live item collection.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Item;

/// Handle to the live item collection.
///
/// Clones share the same underlying collection, so a report holding a clone
/// always sees the manager's current state. Only [`ItemManager`] writes.
///
/// [`ItemManager`]: super::ItemManager
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Arc<RwLock<Vec<Item>>>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock leaves the Vec intact, so poisoning is ignored.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Vec<Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of every item in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Item> {
        self.read().clone()
    }

    /// Items matching `predicate`, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<Item>
    where
        P: Fn(&Item) -> bool,
    {
        self.read()
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    /// Items whose SKU equals `sku`.
    #[must_use]
    pub fn with_sku(&self, sku: &str) -> Vec<Item> {
        self.filter(|item| item.sku == sku)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Whether both handles point at the same collection.
    #[must_use]
    pub fn shares_with(&self, other: &Inventory) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}
