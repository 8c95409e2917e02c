//! The ranking engine: active selection, working set, and every mutation
//!
//! Mutations never touch a previously returned view. Each one works on a
//! fresh copy of the working set, persists it, and installs it as the new
//! cached view in the same step.

use crate::config::{EngineConfig, StorageKeys};
use crate::library::Library;
use crate::persist::{erase, read_json, write_json, StoredRanking};
use crate::registry::TemplateRegistry;
use crate::settings::Settings;
use crate::Result;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt::Display;
use tierlist_domain::tier::{tier_holding, tier_index};
use tierlist_domain::{
    ActiveSelection, Item, KeyValueStore, Template, Tier, TierDefinition, TierUpdate,
};
use tracing::{debug, info, warn};

/// Derived view of a non-custom template, valid for one revision
#[derive(Debug, Clone)]
struct CachedView {
    template_id: String,
    revision: u64,
    tiers: Vec<Tier>,
}

/// Orchestrates templates, tiers, the library and settings over one store
///
/// The engine is the only writer to its store. Construct it once and hand
/// `&mut` access to whatever drives it.
///
/// Operations addressed at an unknown tier, item or template, or attempted
/// while the wrong selection is active, are silent no-ops: they return
/// `Ok(false)` and write nothing. `Err` is reserved for storage failures.
///
/// # Examples
///
/// ```
/// use tierlist_domain::Item;
/// use tierlist_engine::RankingEngine;
/// use tierlist_store::MemoryStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut engine = RankingEngine::load(MemoryStore::new())?;
/// assert!(engine.add_item_to_tier("large", Item::new("a1", "Apple"))?);
///
/// let tiers = engine.current_tiers()?;
/// let large = tiers.iter().find(|t| t.id == "large").unwrap();
/// assert_eq!(large.items[0].name, "Apple");
/// # Ok(())
/// # }
/// ```
pub struct RankingEngine<S> {
    store: S,
    config: EngineConfig,
    keys: StorageKeys,
    registry: TemplateRegistry,
    library: Library,
    settings: Settings,
    custom_tiers: Vec<Tier>,
    /// Incremented on every ranking write or erase
    revision: u64,
    view_cache: RefCell<Option<CachedView>>,
}

impl<S> RankingEngine<S>
where
    S: KeyValueStore,
    S::Error: Display,
{
    /// Load an engine with the default configuration
    pub fn load(store: S) -> Result<Self> {
        Self::with_config(store, EngineConfig::default())
    }

    /// Load settings, templates, library and the custom tier set from storage
    pub fn with_config(store: S, config: EngineConfig) -> Result<Self> {
        let keys = StorageKeys::new(&config.key_prefix);
        let registry = TemplateRegistry::load(&store, &keys)?;
        let library = Library::load(&store, &keys)?;
        let mut settings = Settings::load(&store, &keys, &config)?;

        if !registry.is_selectable(&settings.current_template) {
            warn!(
                template = %settings.current_template,
                fallback = %config.default_template,
                "Stored template is not registered, falling back"
            );
            settings.current_template = ActiveSelection::from(config.default_template.as_str());
        }

        let custom_tiers = read_json::<_, StoredRanking>(&store, &keys.custom_ranking())?
            .map(|ranking| ranking.tiers)
            .unwrap_or_default();

        info!(
            template = %settings.current_template,
            user_templates = registry.user_templates().len(),
            library_items = library.len(),
            "Ranking engine loaded"
        );

        Ok(Self {
            store,
            config,
            keys,
            registry,
            library,
            settings,
            custom_tiers,
            revision: 0,
            view_cache: RefCell::new(None),
        })
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine, returning its store
    pub fn into_store(self) -> S {
        self.store
    }

    /// The configuration the engine was loaded with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The template registry
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Every selectable template: built-ins first, then user templates
    pub fn templates(&self) -> Vec<&Template> {
        self.registry.all().collect()
    }

    /// The library of unplaced items
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Current settings (the active selection included)
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The active selection
    pub fn active_selection(&self) -> &ActiveSelection {
        &self.settings.current_template
    }

    // ------------------------------------------------------------------
    // Selection and derived view
    // ------------------------------------------------------------------

    /// Switch the active selection
    ///
    /// Nothing is written; the view is recomputed on the next read.
    /// Returns `false` (and changes nothing) for an unregistered id.
    pub fn set_active_template(&mut self, id: &str) -> bool {
        let selection = ActiveSelection::from(id);
        if !self.registry.is_selectable(&selection) {
            debug!(template = id, "Ignoring switch to unknown template");
            return false;
        }
        self.settings.current_template = selection;
        true
    }

    /// The working set of the active selection
    ///
    /// For `custom` this is the in-memory tier set. For a template it is the
    /// persisted ranking if one exists and parses, else the template's empty
    /// tiers. The persisted read is skipped when nothing has been written
    /// since the cached computation for the same template.
    pub fn current_tiers(&self) -> Result<Vec<Tier>> {
        let template_id = match &self.settings.current_template {
            ActiveSelection::Custom => return Ok(self.custom_tiers.clone()),
            ActiveSelection::Template(id) => id,
        };

        if let Some(cached) = self.view_cache.borrow().as_ref() {
            if cached.template_id == *template_id && cached.revision == self.revision {
                return Ok(cached.tiers.clone());
            }
        }

        let tiers = self.derive_view(template_id)?;
        *self.view_cache.borrow_mut() = Some(CachedView {
            template_id: template_id.clone(),
            revision: self.revision,
            tiers: tiers.clone(),
        });
        Ok(tiers)
    }

    fn derive_view(&self, template_id: &str) -> Result<Vec<Tier>> {
        let Some(template) = self.registry.get(template_id) else {
            return Ok(Vec::new());
        };

        let stored = read_json::<_, StoredRanking>(&self.store, &self.keys.ranking(template_id))?;
        Ok(match stored {
            Some(ranking) => ranking.tiers,
            None => template.empty_tiers(),
        })
    }

    /// Persist a new working set for the active selection and make it current
    fn commit(&mut self, tiers: Vec<Tier>) -> Result<()> {
        let key = self.keys.ranking(self.settings.current_template.as_str());
        let ranking = StoredRanking::now(tiers);
        write_json(&mut self.store, &key, &ranking)?;
        self.revision += 1;

        match &self.settings.current_template {
            ActiveSelection::Custom => self.custom_tiers = ranking.tiers,
            ActiveSelection::Template(id) => {
                *self.view_cache.get_mut() = Some(CachedView {
                    template_id: id.clone(),
                    revision: self.revision,
                    tiers: ranking.tiers,
                });
            }
        }
        Ok(())
    }

    /// Apply `edit` to a copy of the working set; commit only if it reports a change
    fn mutate_tiers<F>(&mut self, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut Vec<Tier>) -> bool,
    {
        let mut tiers = self.current_tiers()?;
        if !edit(&mut tiers) {
            return Ok(false);
        }
        self.commit(tiers)?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Items in tiers
    // ------------------------------------------------------------------

    /// Append an item to a tier
    ///
    /// No-op if the tier is unknown or the item is already placed in any
    /// tier of the working set.
    pub fn add_item_to_tier(&mut self, tier_id: &str, item: Item) -> Result<bool> {
        let changed = self.mutate_tiers(|tiers| {
            let Some(index) = tier_index(tiers, tier_id) else {
                return false;
            };
            if tier_holding(tiers, &item.id).is_some() {
                return false;
            }
            tiers[index].items.push(item);
            true
        })?;

        if !changed {
            debug!(tier = tier_id, "add_item_to_tier was a no-op");
        }
        Ok(changed)
    }

    /// Remove an item from one tier
    pub fn remove_item_from_tier(&mut self, tier_id: &str, item_id: &str) -> Result<bool> {
        self.mutate_tiers(|tiers| {
            tier_index(tiers, tier_id)
                .and_then(|index| tiers[index].take(item_id))
                .is_some()
        })
    }

    /// Move an item to the end of another tier
    ///
    /// Equivalent to removing it from `from_tier_id` and appending it to
    /// `to_tier_id`. No-op unless both tiers exist and the item is in the
    /// source tier.
    pub fn move_item(&mut self, from_tier_id: &str, to_tier_id: &str, item_id: &str) -> Result<bool> {
        self.mutate_tiers(|tiers| {
            let (Some(from), Some(to)) = (tier_index(tiers, from_tier_id), tier_index(tiers, to_tier_id))
            else {
                return false;
            };
            let Some(item) = tiers[from].take(item_id) else {
                return false;
            };
            tiers[to].items.push(item);
            true
        })
    }

    /// Remove an item from every tier of the working set
    ///
    /// Returns whether anything was removed; persists once if so.
    pub fn remove_item_from_all_tiers(&mut self, item_id: &str) -> Result<bool> {
        self.mutate_tiers(|tiers| strip_item(tiers, item_id) > 0)
    }

    /// Replace a tier's items wholesale (used for reordering)
    ///
    /// Repeated ids keep their first position, and ids in the new list are
    /// removed from every other tier so an item stays in one tier only.
    pub fn update_tier_items(&mut self, tier_id: &str, items: Vec<Item>) -> Result<bool> {
        self.mutate_tiers(|tiers| {
            let Some(index) = tier_index(tiers, tier_id) else {
                return false;
            };

            let mut seen = HashSet::new();
            let items: Vec<Item> = items
                .into_iter()
                .filter(|item| seen.insert(item.id.clone()))
                .collect();

            for (other, tier) in tiers.iter_mut().enumerate() {
                if other != index {
                    tier.items.retain(|item| !seen.contains(&item.id));
                }
            }
            tiers[index].items = items;
            true
        })
    }

    /// Merge new name and/or color into a tier of the working set
    pub fn update_tier(&mut self, tier_id: &str, update: &TierUpdate) -> Result<bool> {
        if update.is_empty() {
            return Ok(false);
        }
        self.mutate_tiers(|tiers| match tier_index(tiers, tier_id) {
            Some(index) => {
                tiers[index].apply(update);
                true
            }
            None => false,
        })
    }

    // ------------------------------------------------------------------
    // Library
    // ------------------------------------------------------------------

    /// Add an item to the library; an id already there is a no-op
    pub fn add_to_library(&mut self, item: Item) -> Result<bool> {
        if !self.library.insert(item) {
            return Ok(false);
        }
        self.library.save(&mut self.store, &self.keys)?;
        Ok(true)
    }

    /// Remove an item from the library; an absent id is a no-op
    pub fn remove_from_library(&mut self, item_id: &str) -> Result<bool> {
        if self.library.remove(item_id).is_none() {
            debug!(item = item_id, "Item not in library");
            return Ok(false);
        }
        self.library.save(&mut self.store, &self.keys)?;
        Ok(true)
    }

    /// Move a library item into a tier in one step
    ///
    /// Adds the item to the tier, then removes it from the library. No-op if
    /// the item is not in the library, the tier is unknown, or the id is
    /// already placed.
    pub fn place_from_library(&mut self, tier_id: &str, item_id: &str) -> Result<bool> {
        let Some(item) = self.library.get(item_id).cloned() else {
            return Ok(false);
        };
        if !self.add_item_to_tier(tier_id, item)? {
            return Ok(false);
        }
        self.remove_from_library(item_id)
    }

    /// Take an item out of a tier and return it to the library
    pub fn unplace_item(&mut self, tier_id: &str, item_id: &str) -> Result<bool> {
        let mut taken = None;
        let changed = self.mutate_tiers(|tiers| {
            taken = tier_index(tiers, tier_id).and_then(|index| tiers[index].take(item_id));
            taken.is_some()
        })?;

        if let Some(item) = taken {
            self.add_to_library(item)?;
        }
        Ok(changed)
    }

    /// Delete an item from the library and from every ranking
    ///
    /// Sweeps the library, the active working set, and the persisted
    /// rankings of every other known template and of the custom set.
    /// Returns the number of tier entries removed.
    pub fn delete_item_completely(&mut self, item_id: &str) -> Result<usize> {
        self.remove_from_library(item_id)?;

        let mut removed = 0;
        self.mutate_tiers(|tiers| {
            removed += strip_item(tiers, item_id);
            removed > 0
        })?;

        let active = self.settings.current_template.clone();
        let mut others: Vec<ActiveSelection> = self
            .registry
            .all()
            .map(|template| ActiveSelection::Template(template.id.clone()))
            .collect();
        others.push(ActiveSelection::Custom);

        for selection in others.into_iter().filter(|selection| *selection != active) {
            removed += self.strip_stored_ranking(&selection, item_id)?;
        }

        info!(item = item_id, removed, "Deleted item");
        Ok(removed)
    }

    /// Remove an item from a non-active selection's persisted ranking
    fn strip_stored_ranking(&mut self, selection: &ActiveSelection, item_id: &str) -> Result<usize> {
        let key = self.keys.ranking(selection.as_str());
        let Some(mut ranking) = read_json::<_, StoredRanking>(&self.store, &key)? else {
            return Ok(0);
        };

        let removed = strip_item(&mut ranking.tiers, item_id);
        if removed == 0 {
            return Ok(0);
        }

        let ranking = StoredRanking::now(ranking.tiers);
        write_json(&mut self.store, &key, &ranking)?;
        self.revision += 1;
        if selection.is_custom() {
            self.custom_tiers = ranking.tiers;
        }
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Custom tiers and templates
    // ------------------------------------------------------------------

    /// Append an empty tier to the custom set
    ///
    /// No-op unless `custom` is active, or if the tier id is already used.
    pub fn add_custom_tier(&mut self, definition: TierDefinition) -> Result<bool> {
        if !self.settings.current_template.is_custom() {
            debug!(tier = %definition.id, "Tiers can only be added to the custom set");
            return Ok(false);
        }
        self.mutate_tiers(|tiers| {
            if tier_index(tiers, &definition.id).is_some() {
                return false;
            }
            tiers.push(Tier::empty(&definition));
            true
        })
    }

    /// Remove a tier from the custom set; its items are discarded
    pub fn remove_custom_tier(&mut self, tier_id: &str) -> Result<bool> {
        if !self.settings.current_template.is_custom() {
            debug!(tier = tier_id, "Tiers can only be removed from the custom set");
            return Ok(false);
        }
        self.mutate_tiers(|tiers| match tier_index(tiers, tier_id) {
            Some(index) => {
                tiers.remove(index);
                true
            }
            None => false,
        })
    }

    /// Erase the active selection's persisted ranking
    ///
    /// For `custom` the in-memory set is cleared too. The next read falls
    /// back to the template's empty tiers.
    pub fn reset_current_ranking(&mut self) -> Result<()> {
        let key = self.keys.ranking(self.settings.current_template.as_str());
        erase(&mut self.store, &key)?;
        self.revision += 1;
        *self.view_cache.get_mut() = None;

        if self.settings.current_template.is_custom() {
            self.custom_tiers.clear();
        }
        info!(template = %self.settings.current_template, "Ranking reset");
        Ok(())
    }

    /// Snapshot the custom tier shapes into a new user template
    ///
    /// Returns `None` unless `custom` is active and has at least one tier.
    pub fn save_as_template(&mut self, name: &str) -> Result<Option<Template>> {
        if !self.settings.current_template.is_custom() || self.custom_tiers.is_empty() {
            debug!(name, "Nothing to save as a template");
            return Ok(None);
        }

        let template = Template::snapshot(name, &self.custom_tiers);
        if !self.registry.insert(template.clone()) {
            return Ok(None);
        }
        self.registry.save(&mut self.store, &self.keys)?;

        info!(id = %template.id, name, "Saved template");
        Ok(Some(template))
    }

    /// Delete a user template
    ///
    /// Built-ins and unknown ids are a no-op. Deleting the active template
    /// switches to an emptied `custom` set and persists that selection. The
    /// template's stored ranking is removed with it.
    pub fn delete_custom_template(&mut self, id: &str) -> Result<bool> {
        if self.registry.remove(id).is_none() {
            return Ok(false);
        }
        self.registry.save(&mut self.store, &self.keys)?;
        erase(&mut self.store, &self.keys.ranking(id))?;
        self.revision += 1;

        if self.settings.current_template.as_str() == id {
            self.settings.current_template = ActiveSelection::Custom;
            self.reset_current_ranking()?;
            self.save_settings()?;
        }

        info!(id, "Deleted template");
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Persist the settings record, including the active selection
    pub fn save_settings(&mut self) -> Result<()> {
        self.settings.save(&mut self.store, &self.keys)
    }

    /// Toggle item name display and persist settings
    pub fn set_show_item_names(&mut self, show: bool) -> Result<()> {
        self.settings.show_item_names = show;
        self.save_settings()
    }

    /// Change the page title and persist settings
    pub fn set_page_title(&mut self, title: &str) -> Result<()> {
        self.settings.page_title = title.to_string();
        self.save_settings()
    }

    // ------------------------------------------------------------------
    // Crate-internal access for import
    // ------------------------------------------------------------------

    pub(crate) fn replace_library(&mut self, library: Library) -> Result<()> {
        self.library = library;
        self.library.save(&mut self.store, &self.keys)
    }

    pub(crate) fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Replace the custom tier set (when active) and persist the working set
    pub(crate) fn commit_imported_tiers(&mut self, tiers: Vec<Tier>) -> Result<()> {
        let tiers = if self.settings.current_template.is_custom() {
            tiers
        } else {
            self.current_tiers()?
        };
        self.commit(tiers)
    }
}

/// Remove every occurrence of an item from a tier list
fn strip_item(tiers: &mut [Tier], item_id: &str) -> usize {
    tiers
        .iter_mut()
        .map(|tier| {
            let before = tier.items.len();
            tier.items.retain(|item| item.id != item_id);
            before - tier.items.len()
        })
        .sum()
}
