//! Read-only card summary of one research entry.

use chrono::{DateTime, Datelike, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use canvass_core::entities::ResearchEntry;

const PREVIEW_CHARS: usize = 100;

/// Pure view model for a research card: no state, no store access.
///
/// Edit and delete actions are the caller's — a card only carries the data
/// needed to render a summary and forward the entry's id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchCard {
    pub id: String,
    pub title: String,
    /// Creation date formatted like `"Jan 5, 2024"`.
    pub created: String,
    pub market_size_preview: Option<String>,
    pub positioning_preview: Option<String>,
    pub segment_count: usize,
    /// Pluralized segment count, e.g. `"1 segment"` / `"3 segments"`.
    pub segment_label: String,
    pub has_market_trends: bool,
    pub has_competitor_analysis: bool,
    pub has_segments: bool,
}

impl ResearchCard {
    #[must_use]
    pub fn summarize(entry: &ResearchEntry) -> Self {
        let segment_count = entry.target_segments.len();
        Self {
            id: entry.id.clone(),
            title: entry.title.clone(),
            created: format_created(entry.created_at),
            market_size_preview: entry.market_size_analysis.as_deref().map(preview),
            positioning_preview: entry.positioning_strategy.as_deref().map(preview),
            segment_count,
            segment_label: segment_label(segment_count),
            has_market_trends: entry.market_trends_tracking.is_some(),
            has_competitor_analysis: entry.competitor_identification.is_some(),
            has_segments: segment_count > 0,
        }
    }
}

/// `"Jan 5, 2024"` — no zero-padded day.
fn format_created(created_at: DateTime<Utc>) -> String {
    format!(
        "{} {}, {}",
        created_at.format("%b"),
        created_at.day(),
        created_at.year()
    )
}

/// First 100 characters, with `...` only when something was cut.
fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}

fn segment_label(count: usize) -> String {
    if count == 1 {
        "1 segment".to_string()
    } else {
        format!("{count} segments")
    }
}
