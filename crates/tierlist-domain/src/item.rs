//! Item module - the things being ranked

use serde::{Deserialize, Serialize};

/// A rankable item
///
/// The `id` is supplied by the caller and must be unique within the library
/// at insertion time. Nothing in Tierlist generates item ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-supplied identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional image reference (URL or data URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Item {
    /// Create an item without an image
    ///
    /// # Examples
    ///
    /// ```
    /// use tierlist_domain::Item;
    ///
    /// let item = Item::new("a1", "Apple");
    /// assert_eq!(item.id, "a1");
    /// assert!(item.image.is_none());
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
        }
    }

    /// Attach an image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_omitted_when_absent() {
        let json = serde_json::to_string(&Item::new("a1", "Apple")).unwrap();
        assert_eq!(json, r#"{"id":"a1","name":"Apple"}"#);
    }

    #[test]
    fn test_missing_image_deserializes() {
        let item: Item = serde_json::from_str(r#"{"id":"b2","name":"Banana"}"#).unwrap();
        assert_eq!(item, Item::new("b2", "Banana"));

        let item: Item =
            serde_json::from_str(r#"{"id":"c3","name":"Cherry","image":"c.png"}"#).unwrap();
        assert_eq!(item.image.as_deref(), Some("c.png"));
    }
}
