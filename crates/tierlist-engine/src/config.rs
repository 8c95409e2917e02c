//! Configuration for the ranking engine
//!
//! Controls the storage key namespace and the defaults used when nothing
//! has been persisted yet.

use serde::{Deserialize, Serialize};
use tierlist_domain::CUSTOM_SELECTION;

/// Configuration for the ranking engine
///
/// # Examples
///
/// ```
/// use tierlist_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.key_prefix, "tier-rank-");
/// assert_eq!(config.default_template, "entertainment");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Prefix of every storage key
    /// Default: `tier-rank-`
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Template selected when settings are missing or name an unknown template
    /// Default: `entertainment`
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Page title used when settings are missing
    #[serde(default = "default_page_title")]
    pub default_page_title: String,
}

fn default_key_prefix() -> String {
    "tier-rank-".to_string()
}

fn default_template() -> String {
    "entertainment".to_string()
}

fn default_page_title() -> String {
    "From Super Large to Small".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            default_template: default_template(),
            default_page_title: default_page_title(),
        }
    }
}

const LIBRARY_KEY: &str = "library";
const SETTINGS_KEY: &str = "settings";
const TEMPLATES_KEY: &str = "custom-templates";

/// Storage key layout derived from the configured prefix
#[derive(Debug, Clone)]
pub(crate) struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub(crate) fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Per-template ranking blob (`{tiers, timestamp}`)
    pub(crate) fn ranking(&self, template_id: &str) -> String {
        format!("{}{}", self.prefix, template_id)
    }

    /// Ranking blob of the custom tier set
    pub(crate) fn custom_ranking(&self) -> String {
        self.ranking(CUSTOM_SELECTION)
    }

    pub(crate) fn library(&self) -> String {
        format!("{}{}", self.prefix, LIBRARY_KEY)
    }

    pub(crate) fn settings(&self) -> String {
        format!("{}{}", self.prefix, SETTINGS_KEY)
    }

    pub(crate) fn custom_templates(&self) -> String {
        format!("{}{}", self.prefix, TEMPLATES_KEY)
    }

    /// Whether a template id would map onto one of the fixed keys
    pub(crate) fn is_reserved(template_id: &str) -> bool {
        [CUSTOM_SELECTION, LIBRARY_KEY, SETTINGS_KEY, TEMPLATES_KEY].contains(&template_id)
    }
}
