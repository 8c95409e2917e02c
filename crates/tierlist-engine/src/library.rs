//! Library: the pool of items not yet placed in a tier

use crate::config::StorageKeys;
use crate::persist::{read_json, write_json};
use crate::Result;
use std::collections::HashSet;
use std::fmt::Display;
use tierlist_domain::{Item, KeyValueStore};

/// Ordered pool of unplaced items, unique by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    items: Vec<Item>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn load<S>(store: &S, keys: &StorageKeys) -> Result<Self>
    where
        S: KeyValueStore,
        S::Error: Display,
    {
        let items: Vec<Item> = read_json(store, &keys.library())?.unwrap_or_default();
        Ok(Self::from_items(items))
    }

    pub(crate) fn save<S>(&self, store: &mut S, keys: &StorageKeys) -> Result<()>
    where
        S: KeyValueStore,
        S::Error: Display,
    {
        write_json(store, &keys.library(), &self.items)
    }

    /// Build a library, keeping the first item of each id
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        Self { items }
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Check whether an item is in the library
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item; an id already present is rejected
    pub(crate) fn insert(&mut self, item: Item) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove an item by id
    pub(crate) fn remove(&mut self, id: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}
