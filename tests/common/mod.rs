//! Common test utilities

use stockroom::{Item, ItemManager};

/// Build a manager seeded with the catalog used across integration tests:
/// basket ball (0), soccer ball (5), football (3), kitchen pot (3).
pub fn seeded_manager() -> ItemManager {
    let manager = ItemManager::default();
    manager.create("basket ball", "sports", 0).expect("valid seed item");
    manager.create("soccer ball", "sports", 5).expect("valid seed item");
    manager.create("football", "sports", 3).expect("valid seed item");
    manager.create("kitchen pot", "cooking", 3).expect("valid seed item");
    manager
}

/// Names of `items`, in order
#[allow(dead_code)] // Not every test binary uses this helper
pub fn names(items: &[Item]) -> Vec<String> {
    items.iter().map(|item| item.name().to_string()).collect()
}
