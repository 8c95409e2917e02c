//! Active selection - which tier set is being edited

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel id of the in-memory custom tier set
pub const CUSTOM_SELECTION: &str = "custom";

/// The tier set currently being edited
///
/// Serialized as a plain string: either a template id or `"custom"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActiveSelection {
    /// The in-memory custom tier set
    Custom,

    /// A registered (built-in or user) template
    Template(String),
}

impl ActiveSelection {
    /// Get the selection as its storage id
    pub fn as_str(&self) -> &str {
        match self {
            ActiveSelection::Custom => CUSTOM_SELECTION,
            ActiveSelection::Template(id) => id,
        }
    }

    /// Check whether the custom tier set is selected
    pub fn is_custom(&self) -> bool {
        matches!(self, ActiveSelection::Custom)
    }
}

impl From<&str> for ActiveSelection {
    fn from(id: &str) -> Self {
        if id == CUSTOM_SELECTION {
            ActiveSelection::Custom
        } else {
            ActiveSelection::Template(id.to_string())
        }
    }
}

impl From<String> for ActiveSelection {
    fn from(id: String) -> Self {
        if id == CUSTOM_SELECTION {
            ActiveSelection::Custom
        } else {
            ActiveSelection::Template(id)
        }
    }
}

impl From<ActiveSelection> for String {
    fn from(selection: ActiveSelection) -> Self {
        match selection {
            ActiveSelection::Custom => CUSTOM_SELECTION.to_string(),
            ActiveSelection::Template(id) => id,
        }
    }
}

impl fmt::Display for ActiveSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_parsing() {
        assert_eq!(ActiveSelection::from("custom"), ActiveSelection::Custom);
        assert_eq!(
            ActiveSelection::from("meme"),
            ActiveSelection::Template("meme".to_string())
        );
        assert!(ActiveSelection::Custom.is_custom());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&ActiveSelection::Custom).unwrap();
        assert_eq!(json, r#""custom""#);

        let parsed: ActiveSelection = serde_json::from_str(r#""serious""#).unwrap();
        assert_eq!(parsed.as_str(), "serious");
    }
}
