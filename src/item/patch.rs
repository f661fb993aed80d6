//! Partial updates to existing items.

use serde::{Deserialize, Serialize};

use super::Item;

/// Fields to overwrite on matching items. Absent fields are left untouched.
///
/// The SKU is not patchable; it stays as derived at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl ItemPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// True when applying the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.quantity.is_none()
    }

    pub(crate) fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name.clone_from(name);
        }
        if let Some(category) = &self.category {
            item.category.clone_from(category);
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
    }
}
