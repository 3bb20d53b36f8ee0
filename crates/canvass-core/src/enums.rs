//! View tabs and field identifiers for the research workspace.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ViewTab
// ---------------------------------------------------------------------------

/// The workspace's view tab. Tab selection is independent of whether the
/// research form is open — an open form takes precedence over the tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewTab {
    #[default]
    Dashboard,
    List,
    Insights,
}

impl ViewTab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::List => "list",
            Self::Insights => "insights",
        }
    }
}

impl fmt::Display for ViewTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExampleField
// ---------------------------------------------------------------------------

/// The four long-text fields that carry an independent "show example" toggle.
///
/// A fixed enum instead of open-ended keys: toggling one field's example
/// never affects the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExampleField {
    MarketSize,
    MarketTrends,
    Competitors,
    Positioning,
}

impl ExampleField {
    pub const ALL: [Self; 4] = [
        Self::MarketSize,
        Self::MarketTrends,
        Self::Competitors,
        Self::Positioning,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketSize => "market_size",
            Self::MarketTrends => "market_trends",
            Self::Competitors => "competitors",
            Self::Positioning => "positioning",
        }
    }
}

impl fmt::Display for ExampleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SegmentField
// ---------------------------------------------------------------------------

/// One field of a target segment, addressed by the segment editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SegmentField {
    Name,
    Description,
    Size,
    Characteristics,
}

impl SegmentField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Size => "size",
            Self::Characteristics => "characteristics",
        }
    }
}

impl fmt::Display for SegmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_serde() {
        assert_eq!(
            serde_json::to_string(&ExampleField::MarketSize).unwrap(),
            "\"market_size\""
        );
        assert_eq!(
            serde_json::from_str::<ViewTab>("\"insights\"").unwrap(),
            ViewTab::Insights
        );
    }

    #[test]
    fn display_matches_as_str() {
        for field in ExampleField::ALL {
            assert_eq!(field.to_string(), field.as_str());
        }
        assert_eq!(ViewTab::List.to_string(), "list");
        assert_eq!(SegmentField::Characteristics.to_string(), "characteristics");
    }
}
