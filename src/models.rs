//! Frontend Models
//!
//! Data structures for list entries.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque item identifier, unique for the lifetime of the list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Fresh random identifier (UUID v4)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned at creation, never changes
    pub id: ItemId,
    /// Display text
    pub title: String,
}

impl Item {
    /// Create an item with a freshly generated id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Buy milk");
        assert_eq!(item.title, "Buy milk");
        assert!(!item.id.as_str().is_empty());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: HashSet<ItemId> = (0..1000).map(|_| ItemId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let item = Item { id: ItemId::from("abc"), title: "x".to_string() };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"abc","title":"x"}"#);
    }
}
