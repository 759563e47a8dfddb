use serde::{Deserialize, Serialize};

/// A single control: an identifier and the descriptive keywords used for
/// coverage matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlDef {
    /// Control identifier, e.g. "A.5".
    pub id: String,
    /// Human-readable description; its individual words are the match
    /// keywords.
    pub description: String,
}

/// A control taxonomy: an ordered list of controls.
///
/// Order matters: the primary control assigned to a document is the first
/// matching entry in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyDef {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub controls: Vec<ControlDef>,
}

impl TaxonomyDef {
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
