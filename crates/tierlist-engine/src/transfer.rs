//! Export and import of the working state as one JSON document
//!
//! The document carries the active selection, its tiers, the library and
//! the display settings. User templates are not included.

use crate::engine::RankingEngine;
use crate::library::Library;
use crate::persist::now_millis;
use crate::settings::Settings;
use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt::Display;
use tierlist_domain::{ActiveSelection, Item, KeyValueStore, Tier};
use tracing::{info, warn};

/// Exported snapshot of the working state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Active selection at export time
    pub template: ActiveSelection,

    /// Tiers of the active selection
    pub tiers: Vec<Tier>,

    /// Library items
    pub library: Vec<Item>,

    /// Display settings
    pub settings: ExportedSettings,

    /// Milliseconds since the Unix epoch at export time
    pub timestamp: u64,
}

/// Settings carried by an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSettings {
    /// Show item names under their images
    pub show_item_names: bool,

    /// Title shown above the board
    pub page_title: String,
}

/// Decode one field of an import, treating a malformed value as absent
fn field<T: DeserializeOwned>(document: &Value, name: &str) -> Option<T> {
    let value = document.get(name)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            warn!(field = name, error = %e, "Ignoring malformed import field");
            None
        }
    }
}

/// Drop repeated tier ids, and repeated item ids across the whole tier list
fn sanitize_tiers(tiers: Vec<Tier>) -> Vec<Tier> {
    let mut tier_ids = HashSet::new();
    let mut item_ids = HashSet::new();

    tiers
        .into_iter()
        .filter(|tier| tier_ids.insert(tier.id.clone()))
        .map(|mut tier| {
            tier.items.retain(|item| item_ids.insert(item.id.clone()));
            tier
        })
        .collect()
}

impl<S> RankingEngine<S>
where
    S: KeyValueStore,
    S::Error: Display,
{
    /// Build an export snapshot of the current state
    pub fn export_document(&self) -> Result<ExportDocument> {
        let settings = self.settings();
        Ok(ExportDocument {
            template: self.active_selection().clone(),
            tiers: self.current_tiers()?,
            library: self.library().items().to_vec(),
            settings: ExportedSettings {
                show_item_names: settings.show_item_names,
                page_title: settings.page_title.clone(),
            },
            timestamp: now_millis(),
        })
    }

    /// Export the current state as pretty-printed JSON
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_document()?)?)
    }

    /// Apply an exported document
    ///
    /// Each field is applied on its own: a missing or malformed field keeps
    /// the current value (settings fields fall back to defaults). Tiers are
    /// applied to the custom set only; for a template selection the existing
    /// ranking is kept and re-persisted. Returns `Ok(false)` if the input is
    /// not a JSON object, in which case nothing is changed.
    pub fn import_json(&mut self, json: &str) -> Result<bool> {
        let document: Value = match serde_json::from_str(json) {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "Import is not valid JSON");
                return Ok(false);
            }
        };
        if !document.is_object() {
            warn!("Import document is not an object");
            return Ok(false);
        }

        if let Some(template) = field::<String>(&document, "template") {
            if !self.set_active_template(&template) {
                warn!(template = %template, "Import names an unknown template, keeping current");
            }
        }

        if let Some(items) = field::<Vec<Item>>(&document, "library") {
            self.replace_library(Library::from_items(items))?;
        }

        if let Some(settings) = document.get("settings").filter(|value| value.is_object()) {
            let defaults = Settings::defaults(self.config());
            let show = field::<bool>(settings, "showItemNames").unwrap_or(defaults.show_item_names);
            let title = field::<String>(settings, "pageTitle").unwrap_or(defaults.page_title);
            let current = self.settings_mut();
            current.show_item_names = show;
            current.page_title = title;
        }

        if let Some(tiers) = field::<Vec<Tier>>(&document, "tiers") {
            self.commit_imported_tiers(sanitize_tiers(tiers))?;
        }

        self.save_settings()?;
        info!(template = %self.active_selection(), "Imported ranking");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierlist_domain::TierDefinition;
    use tierlist_store::MemoryStore;

    #[test]
    fn test_sanitize_drops_duplicates() {
        let mut a = Tier::empty(&TierDefinition::new("a", "A", "#f00"));
        a.items = vec![Item::new("x", "X"), Item::new("x", "X again")];
        let mut b = Tier::empty(&TierDefinition::new("b", "B", "#0f0"));
        b.items = vec![Item::new("x", "X"), Item::new("y", "Y")];
        let dup = Tier::empty(&TierDefinition::new("a", "Dup", "#00f"));

        let tiers = sanitize_tiers(vec![a, b, dup]);
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[0].items.len(), 1);
        assert_eq!(tiers[1].items, vec![Item::new("y", "Y")]);
    }

    #[test]
    fn test_export_shape() {
        let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
        engine.add_to_library(Item::new("a1", "Apple")).unwrap();

        let json = engine.export_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["template"], "entertainment");
        assert_eq!(value["tiers"].as_array().unwrap().len(), 4);
        assert_eq!(value["library"][0]["id"], "a1");
        assert_eq!(value["settings"]["showItemNames"], true);
        assert!(value["settings"].get("currentTemplate").is_none());
        assert!(value["timestamp"].as_u64().unwrap() > 0);
        assert!(json.contains('\n'), "export should be pretty-printed");
    }

    #[test]
    fn test_invalid_json_changes_nothing() {
        let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
        assert!(!engine.import_json("not json").unwrap());
        assert!(!engine.import_json("[1, 2]").unwrap());
        assert!(engine.store().is_empty());
    }

    #[test]
    fn test_malformed_fields_are_skipped() {
        let mut engine = RankingEngine::load(MemoryStore::new()).unwrap();
        engine.add_to_library(Item::new("a1", "Apple")).unwrap();

        let imported = engine
            .import_json(r#"{"template": 42, "library": "oops", "settings": {"pageTitle": "Hi"}}"#)
            .unwrap();
        assert!(imported);
        assert_eq!(engine.active_selection().as_str(), "entertainment");
        assert!(engine.library().contains("a1"));
        assert_eq!(engine.settings().page_title, "Hi");
        assert!(engine.settings().show_item_names);
    }
}
