//! Tier module - labeled buckets of ranked items

use crate::Item;
use serde::{Deserialize, Serialize};

/// Shape of a tier: identity, label and color, without items
///
/// Tier definitions belong to a [`crate::Template`] and are never
/// duplicated (by id) within one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDefinition {
    /// Tier identifier, unique within its tier list
    pub id: String,

    /// Display name
    pub name: String,

    /// Display color (CSS color string, e.g. `#ff9933`)
    pub color: String,
}

impl TierDefinition {
    /// Create a tier definition
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A tier: a definition plus its ordered items
///
/// Item order is insertion order and is preserved by every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Tier identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Display color
    pub color: String,

    /// Items ranked in this tier, in order
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Tier {
    /// Create an empty tier from its definition
    pub fn empty(definition: &TierDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            name: definition.name.clone(),
            color: definition.color.clone(),
            items: Vec::new(),
        }
    }

    /// Get the shape of this tier without its items
    pub fn definition(&self) -> TierDefinition {
        TierDefinition::new(&self.id, &self.name, &self.color)
    }

    /// Position of an item within this tier
    pub fn position(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == item_id)
    }

    /// Check whether this tier holds the item
    pub fn contains(&self, item_id: &str) -> bool {
        self.position(item_id).is_some()
    }

    /// Remove every occurrence of an item, returning the first one removed
    pub fn take(&mut self, item_id: &str) -> Option<Item> {
        let index = self.position(item_id)?;
        let item = self.items.remove(index);
        self.items.retain(|other| other.id != item_id);
        Some(item)
    }

    /// Apply a partial update to the name and color
    pub fn apply(&mut self, update: &TierUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(color) = &update.color {
            self.color = color.clone();
        }
    }
}

/// Partial update of a tier's display fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierUpdate {
    /// New display name, if changing
    pub name: Option<String>,

    /// New display color, if changing
    pub color: Option<String>,
}

impl TierUpdate {
    /// Check whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none()
    }
}

/// Find the index of the tier holding an item
pub fn tier_holding(tiers: &[Tier], item_id: &str) -> Option<usize> {
    tiers.iter().position(|tier| tier.contains(item_id))
}

/// Find the index of a tier by id
pub fn tier_index(tiers: &[Tier], tier_id: &str) -> Option<usize> {
    tiers.iter().position(|tier| tier.id == tier_id)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: take leaves no copy of the id and keeps the others in order
        #[test]
        fn test_take_removes_all_and_keeps_order(
            ids in prop::collection::vec(0..5u8, 0..12),
            target in 0..5u8,
        ) {
            let mut tier = Tier::empty(&TierDefinition::new("t", "T", "#fff"));
            tier.items = ids
                .iter()
                .map(|id| Item::new(format!("i{}", id), format!("Item {}", id)))
                .collect();
            let target_id = format!("i{}", target);
            let expected: Vec<Item> = tier
                .items
                .iter()
                .filter(|item| item.id != target_id)
                .cloned()
                .collect();

            let taken = tier.take(&target_id);

            prop_assert_eq!(taken.is_some(), ids.contains(&target));
            if let Some(item) = taken {
                prop_assert_eq!(item.id, target_id.clone());
            }
            prop_assert!(!tier.contains(&target_id));
            prop_assert_eq!(tier.items, expected);
        }
    }
}
