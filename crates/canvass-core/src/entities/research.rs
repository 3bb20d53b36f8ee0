use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Segment;

/// A persisted market-research entry, scoped to exactly one project.
///
/// The four long-text fields are independently optional. `target_segments`
/// order is meaningful (segment N renders as "Segment N") and survives edits.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchEntry {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub market_size_analysis: Option<String>,
    pub market_trends_tracking: Option<String>,
    pub competitor_identification: Option<String>,
    pub positioning_strategy: Option<String>,
    #[serde(default)]
    pub target_segments: Vec<Segment>,
    pub created_at: DateTime<Utc>,
}
