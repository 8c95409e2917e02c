//! Template registry: built-in templates plus user-created ones
//!
//! Built-ins are compiled in and never persisted. User templates are stored
//! as one JSON array and every change rewrites the whole array.

use crate::config::StorageKeys;
use crate::persist::{read_json, write_json};
use crate::Result;
use std::fmt::Display;
use tierlist_domain::{ActiveSelection, KeyValueStore, Template, TierDefinition};

/// The templates shipped with Tierlist
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "entertainment",
            "Entertainment Cups",
            vec![
                TierDefinition::new("super-large", "Super Large", "#ff4d4d"),
                TierDefinition::new("large", "Large", "#ff9933"),
                TierDefinition::new("medium", "Medium", "#ffeb3b"),
                TierDefinition::new("small", "Small", "#4caf50"),
            ],
        ),
        Template::new(
            "serious",
            "Serious Cups",
            vec![
                TierDefinition::new("super-large-top", "Super Large (High)", "#d32f2f"),
                TierDefinition::new("super-large-mid", "Super Large (Mid)", "#f57c00"),
                TierDefinition::new("super-large-bottom", "Super Large (Low)", "#fbc02d"),
                TierDefinition::new("large-top", "Large (High)", "#689f38"),
                TierDefinition::new("large-mid", "Large (Mid)", "#388e3c"),
                TierDefinition::new("large-bottom", "Large (Low)", "#00796b"),
                TierDefinition::new("medium-top", "Medium (High)", "#0288d1"),
                TierDefinition::new("medium-mid", "Medium (Mid)", "#303f9f"),
                TierDefinition::new("medium-bottom", "Medium (Low)", "#7b1fa2"),
            ],
        ),
        Template::new(
            "meme",
            "From Peak to Washed",
            vec![
                TierDefinition::new("hang", "Peak", "#ff4d4d"),
                TierDefinition::new("top", "Top Tier", "#ff9933"),
                TierDefinition::new("elite", "Elite", "#ffeb3b"),
                TierDefinition::new("npc", "NPC", "#ffe0b2"),
                TierDefinition::new("trash", "Washed Up", "#f0f0f0"),
            ],
        ),
    ]
}

/// Registry of every selectable template
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    builtins: Vec<Template>,
    user: Vec<Template>,
}

impl TemplateRegistry {
    /// Create a registry holding only the built-in templates
    pub fn new() -> Self {
        Self {
            builtins: builtin_templates(),
            user: Vec::new(),
        }
    }

    /// Load user templates from storage
    pub(crate) fn load<S>(store: &S, keys: &StorageKeys) -> Result<Self>
    where
        S: KeyValueStore,
        S::Error: Display,
    {
        let mut registry = Self::new();
        let stored: Vec<Template> = read_json(store, &keys.custom_templates())?.unwrap_or_default();

        // A stored entry must not shadow a built-in, an earlier entry or a fixed key
        for template in stored {
            if StorageKeys::is_reserved(&template.id) {
                tracing::warn!(id = %template.id, "Skipping stored template with reserved id");
                continue;
            }
            if registry.contains(&template.id) {
                tracing::warn!(id = %template.id, "Skipping duplicate stored template");
                continue;
            }
            registry.user.push(template);
        }

        Ok(registry)
    }

    /// Persist the user templates
    pub(crate) fn save<S>(&self, store: &mut S, keys: &StorageKeys) -> Result<()>
    where
        S: KeyValueStore,
        S::Error: Display,
    {
        write_json(store, &keys.custom_templates(), &self.user)
    }

    /// Built-in templates, in display order
    pub fn builtins(&self) -> &[Template] {
        &self.builtins
    }

    /// User-created templates, in creation order
    pub fn user_templates(&self) -> &[Template] {
        &self.user
    }

    /// Every template: built-ins first, then user templates
    pub fn all(&self) -> impl Iterator<Item = &Template> {
        self.builtins.iter().chain(self.user.iter())
    }

    /// Get a template by id
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.all().find(|template| template.id == id)
    }

    /// Check whether a template id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Check whether a selection can be made active
    pub fn is_selectable(&self, selection: &ActiveSelection) -> bool {
        match selection {
            ActiveSelection::Custom => true,
            ActiveSelection::Template(id) => self.contains(id),
        }
    }

    /// Add a user template; ids already registered are rejected
    pub(crate) fn insert(&mut self, template: Template) -> bool {
        if self.contains(&template.id) {
            return false;
        }
        self.user.push(template);
        true
    }

    /// Remove a user template; built-ins cannot be removed
    pub(crate) fn remove(&mut self, id: &str) -> Option<Template> {
        let index = self.user.iter().position(|template| template.id == id)?;
        Some(self.user.remove(index))
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
