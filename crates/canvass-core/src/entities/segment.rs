use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One target-market segment embedded in a research entry.
///
/// Segments have no identity of their own — they exist only at a position
/// inside the enclosing entry's `target_segments` sequence, and the whole
/// sequence persists atomically with the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Segment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub characteristics: String,
}

impl Segment {
    /// Whether every field is empty (a freshly added blank segment).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.size.is_empty()
            && self.characteristics.is_empty()
    }
}
