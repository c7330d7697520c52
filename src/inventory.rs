//! Read-only view of a user's pantry

use std::collections::HashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use log::debug;

/// One on-hand pantry item. Only `name` feeds the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem
{   pub name: String
  , #[serde(default)]
    pub quantity: String
}

impl InventoryItem
{   pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self
    {   InventoryItem
        {   name: name.into()
          , quantity: quantity.into()
        }
    }
}

/// Pantry collaborator queried once per live generation
#[async_trait]
pub trait InventorySource: Send + Sync
{   /// Items owned by `user`, in the source's own order
    async fn list(&self, user: &Uuid)
      -> Result<Vec<InventoryItem>, crate::error::Error>;
}

/// Source for callers that have no pantry
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyInventory;

#[async_trait]
impl InventorySource for EmptyInventory
{   async fn list(&self, _user: &Uuid)
      -> Result<Vec<InventoryItem>, crate::error::Error>
    {   Ok(vec![])
    }
}

/// Fixed in-memory snapshot keyed by user
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory
{   items: HashMap<Uuid, Vec<InventoryItem>>
}

impl MemoryInventory
{   pub fn new() -> Self
    {   Self::default()
    }

    pub fn with_items(
      mut self
    , user: Uuid
    , items: Vec<InventoryItem>
    ) -> Self
    {   self.items.entry(user).or_default().extend(items);
        self
    }
}

#[async_trait]
impl InventorySource for MemoryInventory
{   async fn list(&self, user: &Uuid)
      -> Result<Vec<InventoryItem>, crate::error::Error>
    {   let items = self.items
          .get(user)
          .cloned()
          .unwrap_or_default();
        debug!("Inventory for {}: {} items", user, items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[tokio::test]
    async fn memory_inventory_keeps_insertion_order()
    {   let user = Uuid::new_v4();
        let source = MemoryInventory::new().with_items(user, vec![
          InventoryItem::new("rice", "1kg"),
          InventoryItem::new("beans", "500g"),
        ]);
        let names: Vec<String> = source.list(&user).await
          .unwrap()
          .into_iter()
          .map(|i| i.name)
          .collect();
        assert_eq!(names, vec!["rice", "beans"]);
    }

    #[tokio::test]
    async fn unknown_user_has_empty_pantry()
    {   let source = MemoryInventory::new();
        assert!(source.list(&Uuid::new_v4()).await.unwrap().is_empty());
        assert!(EmptyInventory.list(&Uuid::new_v4()).await.unwrap().is_empty());
    }
}
