//! The research list: loading / empty / cards, decided in that order.

use canvass_core::entities::ResearchEntry;

use crate::card::ResearchCard;

/// Render state for the research list.
///
/// `Loading` suppresses everything else — even a non-empty collection renders
/// only the loading indicator while a fetch is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Empty,
    Cards(Vec<ResearchCard>),
}

impl ListState {
    #[must_use]
    pub fn of(entries: &[ResearchEntry], loading: bool) -> Self {
        if loading {
            Self::Loading
        } else if entries.is_empty() {
            Self::Empty
        } else {
            // Input order is the display order; the list never re-sorts.
            Self::Cards(entries.iter().map(ResearchCard::summarize).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn entry(id: &str, title: &str) -> ResearchEntry {
        ResearchEntry {
            id: id.into(),
            project_id: "prj-1".into(),
            title: title.into(),
            market_size_analysis: None,
            market_trends_tracking: None,
            competitor_identification: None,
            positioning_strategy: None,
            target_segments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn loading_wins_even_with_entries() {
        let entries = vec![entry("mr-1", "A")];
        assert_eq!(ListState::of(&entries, true), ListState::Loading);
    }

    #[test]
    fn empty_only_when_not_loading() {
        assert_eq!(ListState::of(&[], false), ListState::Empty);
        assert_eq!(ListState::of(&[], true), ListState::Loading);
    }

    #[test]
    fn cards_keep_input_order() {
        let entries = vec![entry("mr-2", "Second"), entry("mr-1", "First")];
        let ListState::Cards(cards) = ListState::of(&entries, false) else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "mr-2");
        assert_eq!(cards[1].id, "mr-1");
    }
}
