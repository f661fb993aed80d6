use super::*;

fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(Item::name).collect()
}

#[test]
fn test_create_appends_valid_item() {
    let manager = ItemManager::default();
    let item = manager.create("football", "sports", 3).unwrap();
    assert_eq!(item.sku(), "FOOSP");
    assert_eq!(manager.items(), vec![item]);
}

#[test]
fn test_create_invalid_leaves_collection_unchanged() {
    let manager = ItemManager::default();
    manager.create("football", "sports", 3).unwrap();

    assert!(manager.create("asd", "sports", 0).is_err());
    assert!(manager.create("football", "sports", None::<i64>).is_err());
    assert!(manager.create("kitchen pot", "cooking items", 0).is_err());

    assert_eq!(manager.len(), 1);
}

#[test]
fn test_update_without_match_returns_empty() {
    let manager = ItemManager::default();
    manager.create("football", "sports", 3).unwrap();
    let before = manager.items();

    let updated = manager.update("NOPE", &ItemPatch::new().with_quantity(9));

    assert!(updated.is_empty());
    assert_eq!(manager.items(), before);
}

#[test]
fn test_update_touches_every_match() {
    let manager = ItemManager::default();
    manager.create("football", "sports", 3).unwrap();
    manager.create("food processor", "kitchen", 2).unwrap();
    // Same SKU as the first item
    manager.create("foosball table", "sporting", 1).unwrap();

    let updated = manager.update("FOOSP", &ItemPatch::new().with_quantity(0));

    assert_eq!(names(&updated), vec!["football", "foosball table"]);
    let quantities: Vec<u32> = manager.items().iter().map(Item::quantity).collect();
    assert_eq!(quantities, vec![0, 2, 0]);
}

#[test]
fn test_delete_removes_every_match_in_order() {
    let manager = ItemManager::default();
    manager.create("football", "sports", 3).unwrap();
    manager.create("food processor", "kitchen", 2).unwrap();
    manager.create("foosball table", "sporting", 1).unwrap();
    manager.create("tennis racket", "sports", 4).unwrap();

    let removed = manager.delete("FOOSP");

    assert_eq!(removed, 2);
    assert_eq!(
        names(&manager.items()),
        vec!["food processor", "tennis racket"]
    );
}

#[test]
fn test_delete_adjacent_matches() {
    let manager = ItemManager::default();
    manager.create("football", "sports", 3).unwrap();
    manager.create("football", "sports", 4).unwrap();
    manager.create("football", "sports", 5).unwrap();

    assert_eq!(manager.delete("FOOSP"), 3);
    assert!(manager.is_empty());
}

#[test]
fn test_delete_without_match_is_silent() {
    let manager = ItemManager::default();
    manager.create("football", "sports", 3).unwrap();
    assert_eq!(manager.delete("ZZZZZ"), 0);
    assert_eq!(manager.len(), 1);
}

#[test]
fn test_in_stock_and_in_category() {
    let manager = ItemManager::default();
    manager.create("basket ball", "sports", 0).unwrap();
    manager.create("soccer ball", "sports", 5).unwrap();
    manager.create("kitchen pot", "cooking", 3).unwrap();

    assert_eq!(names(&manager.in_stock()), vec!["soccer ball", "kitchen pot"]);
    assert_eq!(
        names(&manager.in_category("sports")),
        vec!["basket ball", "soccer ball"]
    );
    assert!(manager.in_category("Sports").is_empty());
}

#[test]
fn test_inventory_handle_is_live() {
    let manager = ItemManager::default();
    let inventory = manager.inventory();
    manager.create("football", "sports", 3).unwrap();
    assert_eq!(inventory.len(), 1);
    manager.delete("FOOSP");
    assert!(inventory.is_empty());
}

#[test]
fn test_with_rules_uses_custom_thresholds() {
    let manager = ItemManager::with_rules(ValidationRules {
        min_letters: 3,
        ..ValidationRules::default()
    });
    let item = manager.create("mug", "cup", 1).unwrap();
    assert_eq!(item.sku(), "MUGCU");
    assert_eq!(manager.creator().rules().min_letters, 3);
}
