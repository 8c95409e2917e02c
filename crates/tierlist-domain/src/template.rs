//! Template module - named tier shapes

use crate::{Tier, TierDefinition};
use serde::{Deserialize, Serialize};

/// Prefix of every user template id
pub const USER_TEMPLATE_PREFIX: &str = "custom-";

/// A named, ordered set of tier shapes
///
/// Templates never carry items. Rankings made with a template are stored
/// separately, keyed by the template id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Template identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Tier shapes, in display order
    #[serde(rename = "tiers", alias = "tierDefinitions", default)]
    pub tier_definitions: Vec<TierDefinition>,
}

impl Template {
    /// Create a template with a fixed id
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tier_definitions: Vec<TierDefinition>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier_definitions,
        }
    }

    /// Create a user template with a fresh time-ordered id
    ///
    /// # Examples
    ///
    /// ```
    /// use tierlist_domain::{Template, TierDefinition};
    ///
    /// let template = Template::user("Mine", vec![TierDefinition::new("s", "S", "#f00")]);
    /// assert!(template.id.starts_with("custom-"));
    /// assert!(template.is_user_template());
    /// ```
    pub fn user(name: impl Into<String>, tier_definitions: Vec<TierDefinition>) -> Self {
        let id = format!("{}{}", USER_TEMPLATE_PREFIX, uuid::Uuid::now_v7());
        Self::new(id, name, tier_definitions)
    }

    /// Snapshot the shapes of a tier list into a user template
    pub fn snapshot(name: impl Into<String>, tiers: &[Tier]) -> Self {
        Self::user(name, tiers.iter().map(Tier::definition).collect())
    }

    /// Check whether this template was created by a user
    pub fn is_user_template(&self) -> bool {
        self.id.starts_with(USER_TEMPLATE_PREFIX)
    }

    /// Synthesize the default (empty) tiers of this template
    pub fn empty_tiers(&self) -> Vec<Tier> {
        self.tier_definitions.iter().map(Tier::empty).collect()
    }
}
