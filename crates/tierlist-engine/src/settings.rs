//! Persisted display settings and the last-active template

use crate::config::{EngineConfig, StorageKeys};
use crate::persist::{read_json, write_json};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tierlist_domain::{ActiveSelection, KeyValueStore};

/// User settings, stored as one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Show item names under their images
    pub show_item_names: bool,

    /// Title shown above the board
    pub page_title: String,

    /// Selection that was active when settings were last saved
    pub current_template: ActiveSelection,
}

/// On-disk shape; every field is optional so a partial record still loads
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    show_item_names: Option<bool>,
    page_title: Option<String>,
    current_template: Option<String>,
}

impl Settings {
    /// Settings used before anything is persisted
    pub fn defaults(config: &EngineConfig) -> Self {
        Self {
            show_item_names: true,
            page_title: config.default_page_title.clone(),
            current_template: ActiveSelection::from(config.default_template.as_str()),
        }
    }

    pub(crate) fn load<S>(store: &S, keys: &StorageKeys, config: &EngineConfig) -> Result<Self>
    where
        S: KeyValueStore,
        S::Error: Display,
    {
        let defaults = Self::defaults(config);
        let Some(stored) = read_json::<_, StoredSettings>(store, &keys.settings())? else {
            return Ok(defaults);
        };

        Ok(Self {
            show_item_names: stored.show_item_names.unwrap_or(defaults.show_item_names),
            page_title: stored.page_title.unwrap_or(defaults.page_title),
            current_template: stored
                .current_template
                .map(ActiveSelection::from)
                .unwrap_or(defaults.current_template),
        })
    }

    pub(crate) fn save<S>(&self, store: &mut S, keys: &StorageKeys) -> Result<()>
    where
        S: KeyValueStore,
        S::Error: Display,
    {
        write_json(store, &keys.settings(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierlist_store::MemoryStore;

    fn keys() -> StorageKeys {
        StorageKeys::new("tier-rank-")
    }

    #[test]
    fn test_defaults_when_absent() {
        let config = EngineConfig::default();
        let settings = Settings::load(&MemoryStore::new(), &keys(), &config).unwrap();
        assert_eq!(settings, Settings::defaults(&config));
        assert!(settings.show_item_names);
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let mut store = MemoryStore::new();
        store
            .set("tier-rank-settings", r#"{"showItemNames": false}"#)
            .unwrap();

        let settings = Settings::load(&store, &keys(), &EngineConfig::default()).unwrap();
        assert!(!settings.show_item_names);
        assert_eq!(settings.page_title, "From Super Large to Small");
        assert_eq!(settings.current_template.as_str(), "entertainment");
    }

    #[test]
    fn test_wire_format() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            show_item_names: false,
            page_title: "Snacks".to_string(),
            current_template: ActiveSelection::Custom,
        };
        settings.save(&mut store, &keys()).unwrap();

        let raw = store.get("tier-rank-settings").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["showItemNames"], false);
        assert_eq!(json["pageTitle"], "Snacks");
        assert_eq!(json["currentTemplate"], "custom");
    }
}
