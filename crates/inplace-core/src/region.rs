//! Editable region definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a region.
pub type RegionId = Uuid;

/// A document zone made editable.
///
/// The caller-assigned `key` is opaque to the core and is passed back
/// through the save callback unchanged. `value` holds the serialized
/// displayed content: plain text or markup, depending on the edit mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub(crate) id: RegionId,
    /// Caller-assigned key, stable for the region's lifetime.
    pub key: String,
    /// Serialized display content.
    value: String,
    /// Whether the edit affordance is currently shown.
    ///
    /// Hidden exactly while an edit session is open on this region.
    affordance_visible: bool,
}

impl Region {
    /// Create a new region with its affordance shown.
    pub fn new(key: String, value: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            key,
            value,
            affordance_visible: true,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Get the serialized display content.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Whether the edit affordance is currently shown.
    pub fn affordance_visible(&self) -> bool {
        self.affordance_visible
    }

    pub(crate) fn set_affordance_visible(&mut self, visible: bool) {
        self.affordance_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_creation() {
        let region = Region::new("title".to_string(), "Hello".to_string());
        assert_eq!(region.key, "title");
        assert_eq!(region.value(), "Hello");
        assert!(region.affordance_visible());
    }

    #[test]
    fn test_serde_round_trip() {
        let region = Region::new("k".to_string(), "<li>a</li>".to_string());
        let json = serde_json::to_string(&region).expect("serialize");
        let back: Region = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.id(), region.id());
        assert_eq!(back.key, region.key);
        assert_eq!(back.value(), region.value());
    }
}
