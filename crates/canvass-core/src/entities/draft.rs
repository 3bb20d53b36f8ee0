use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{ResearchEntry, Segment};

/// The editable subset of a research entry plus its project scope.
///
/// A draft is the single write payload: `insert` creates an entry from it
/// (the store assigns `id` and `created_at`), `update` replaces the editable
/// columns of an existing entry with it. A draft never carries an `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchDraft {
    pub project_id: String,
    pub title: String,
    pub market_size_analysis: Option<String>,
    pub market_trends_tracking: Option<String>,
    pub competitor_identification: Option<String>,
    pub positioning_strategy: Option<String>,
    #[serde(default)]
    pub target_segments: Vec<Segment>,
}

impl ResearchDraft {
    /// The editable fields of an existing entry, as a draft.
    #[must_use]
    pub fn from_entry(entry: &ResearchEntry) -> Self {
        Self {
            project_id: entry.project_id.clone(),
            title: entry.title.clone(),
            market_size_analysis: entry.market_size_analysis.clone(),
            market_trends_tracking: entry.market_trends_tracking.clone(),
            competitor_identification: entry.competitor_identification.clone(),
            positioning_strategy: entry.positioning_strategy.clone(),
            target_segments: entry.target_segments.clone(),
        }
    }
}
