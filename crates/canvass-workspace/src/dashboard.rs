//! Fixed sample content for the dashboard and insights tabs.
//!
//! These tabs share the workspace's view-state machine but carry no
//! persistence contract — the content below is illustrative and static.

use schemars::JsonSchema;
use serde::Serialize;

/// One metric tile on the dashboard tab.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// Kind of an insight card, for styling only.
#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Opportunity,
    Trend,
    Risk,
}

/// One AI-style insight card on the insights tab.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct InsightCard {
    pub kind: InsightKind,
    pub title: &'static str,
    pub body: &'static str,
}

#[must_use]
pub fn sample_metrics() -> Vec<MetricTile> {
    vec![
        MetricTile {
            label: "Total Addressable Market",
            value: "$2.4B",
            change: "+12% YoY",
        },
        MetricTile {
            label: "Serviceable Market",
            value: "$480M",
            change: "+8% YoY",
        },
        MetricTile {
            label: "Market Growth Rate",
            value: "14%",
            change: "+2.1pts",
        },
        MetricTile {
            label: "Tracked Competitors",
            value: "7",
            change: "2 new this quarter",
        },
    ]
}

#[must_use]
pub fn sample_insights() -> Vec<InsightCard> {
    vec![
        InsightCard {
            kind: InsightKind::Opportunity,
            title: "Mid-market is underserved",
            body: "Incumbents cluster at the enterprise tier; mid-market buyers \
                   report long sales cycles and poor onboarding as their top pains.",
        },
        InsightCard {
            kind: InsightKind::Trend,
            title: "Buying committees are growing",
            body: "Average committee size moved from 4 to 6 stakeholders in two \
                   years; positioning needs a champion-enablement angle.",
        },
        InsightCard {
            kind: InsightKind::Risk,
            title: "Price compression at the low end",
            body: "Two venture-funded entrants are discounting aggressively; a \
                   low-cost positioning would land in their crossfire.",
        },
    ]
}
