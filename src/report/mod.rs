//! Read-only report views over an [`ItemManager`]'s live collection.
//!
//! Reports never cache: every call reads the collection as it is right now.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::item::{Inventory, Item, ItemField, ItemManager};

/// Separator used by [`ReportManager::report_in_stock`].
pub const STOCK_SEPARATOR: &str = ",";

/// Report facade bound to one manager's collection.
#[derive(Debug, Clone)]
pub struct ReportManager {
    inventory: Inventory,
}

impl ReportManager {
    /// Bind to `manager`'s live collection. Later changes to the manager are
    /// visible in every report.
    #[must_use]
    pub fn init(manager: &ItemManager) -> Self {
        Self {
            inventory: manager.inventory(),
        }
    }

    /// A reporter for every item carrying `sku`, re-resolved on each call.
    #[must_use]
    pub fn create_reporter(&self, sku: impl Into<String>) -> ItemReporter {
        ItemReporter {
            sku: sku.into(),
            inventory: self.inventory.clone(),
        }
    }

    /// Names of all in-stock items, comma separated, in collection order.
    #[must_use]
    pub fn report_in_stock(&self) -> String {
        self.inventory
            .read()
            .iter()
            .filter(|item| item.in_stock())
            .map(Item::name)
            .collect::<Vec<_>>()
            .join(STOCK_SEPARATOR)
    }
}

/// Per-SKU inspection handle.
#[derive(Debug, Clone)]
pub struct ItemReporter {
    sku: String,
    inventory: Inventory,
}

impl ItemReporter {
    #[must_use]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Field listings for every item currently carrying this SKU.
    #[must_use]
    pub fn item_info(&self) -> Vec<ItemInfo> {
        self.inventory
            .read()
            .iter()
            .filter(|item| item.sku == self.sku)
            .map(ItemInfo::from)
            .collect()
    }

    /// Write each field as a `field: value` line to `out`.
    ///
    /// Returns the number of items written; nothing is written when no item matches.
    pub fn write_item_info<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        let infos = self.item_info();
        for info in &infos {
            write!(out, "{info}")?;
        }
        Ok(infos.len())
    }
}

/// Ordered field/value listing for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemInfo {
    entries: Vec<(ItemField, String)>,
}

impl ItemInfo {
    #[must_use]
    pub fn entries(&self) -> &[(ItemField, String)] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, field: ItemField) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }
}

impl From<&Item> for ItemInfo {
    fn from(item: &Item) -> Self {
        Self {
            entries: item.fields(),
        }
    }
}

impl fmt::Display for ItemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, value) in &self.entries {
            writeln!(f, "{field}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../report_tests.rs"]
mod report_tests;
