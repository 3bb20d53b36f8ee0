//! The research form: create-or-edit state for one research entry.
//!
//! All edits — scalar fields, segments, example toggles — live in local form
//! state until submit. Submit issues exactly one store call: `insert` in
//! create mode, `update` keyed by the existing entry's id in edit mode. On
//! store failure every field survives untouched so the user can retry.

use thiserror::Error;

use canvass_core::entities::{Project, ResearchDraft, ResearchEntry};
use canvass_core::enums::{ExampleField, SegmentField};
use canvass_store::{ResearchStore, StoreError};

use crate::segments::SegmentList;

/// Per-field visibility of the illustrative example blocks.
///
/// One boolean per [`ExampleField`]; toggling one never affects the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExampleToggles {
    market_size: bool,
    market_trends: bool,
    competitors: bool,
    positioning: bool,
}

impl ExampleToggles {
    pub fn toggle(&mut self, field: ExampleField) {
        let slot = self.slot_mut(field);
        *slot = !*slot;
    }

    #[must_use]
    pub const fn is_visible(self, field: ExampleField) -> bool {
        match field {
            ExampleField::MarketSize => self.market_size,
            ExampleField::MarketTrends => self.market_trends,
            ExampleField::Competitors => self.competitors,
            ExampleField::Positioning => self.positioning,
        }
    }

    fn slot_mut(&mut self, field: ExampleField) -> &mut bool {
        match field {
            ExampleField::MarketSize => &mut self.market_size,
            ExampleField::MarketTrends => &mut self.market_trends,
            ExampleField::Competitors => &mut self.competitors,
            ExampleField::Positioning => &mut self.positioning,
        }
    }
}

/// Why a submit did not save.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The form failed validation; no store call was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The store rejected the write; form state is preserved for retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a successful `submit` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The write landed against the project captured when the form opened.
    Saved { project_id: String },
    /// A submission is already in flight; this call was ignored.
    InFlight,
}

/// Local edit state for one research entry.
///
/// The project is captured at construction — a later switch of the active
/// project does not re-target an open form.
#[derive(Debug, Clone)]
pub struct ResearchForm {
    project_id: String,
    entry_id: Option<String>,
    pub title: String,
    pub market_size_analysis: String,
    pub market_trends_tracking: String,
    pub competitor_identification: String,
    pub positioning_strategy: String,
    segments: SegmentList,
    examples: ExampleToggles,
    submitting: bool,
}

impl ResearchForm {
    /// A blank form in create mode.
    #[must_use]
    pub fn create(project: &Project) -> Self {
        Self {
            project_id: project.id.clone(),
            entry_id: None,
            title: String::new(),
            market_size_analysis: String::new(),
            market_trends_tracking: String::new(),
            competitor_identification: String::new(),
            positioning_strategy: String::new(),
            segments: SegmentList::new(),
            examples: ExampleToggles::default(),
            submitting: false,
        }
    }

    /// A form pre-populated from an existing entry (edit mode).
    ///
    /// Missing optional text becomes `""`; a missing segment list becomes an
    /// empty sequence in the original order.
    #[must_use]
    pub fn edit(project: &Project, entry: &ResearchEntry) -> Self {
        let opt = |field: &Option<String>| field.clone().unwrap_or_default();
        Self {
            project_id: project.id.clone(),
            entry_id: Some(entry.id.clone()),
            title: entry.title.clone(),
            market_size_analysis: opt(&entry.market_size_analysis),
            market_trends_tracking: opt(&entry.market_trends_tracking),
            competitor_identification: opt(&entry.competitor_identification),
            positioning_strategy: opt(&entry.positioning_strategy),
            segments: SegmentList::from_segments(entry.target_segments.clone()),
            examples: ExampleToggles::default(),
            submitting: false,
        }
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.entry_id.is_some()
    }

    #[must_use]
    pub fn entry_id(&self) -> Option<&str> {
        self.entry_id.as_deref()
    }

    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    // --- segment editor -----------------------------------------------------

    #[must_use]
    pub const fn segments(&self) -> &SegmentList {
        &self.segments
    }

    pub fn add_segment(&mut self) {
        self.segments.add();
    }

    pub fn set_segment(&mut self, index: usize, field: SegmentField, value: impl Into<String>) {
        self.segments.set(index, field, value);
    }

    pub fn remove_segment(&mut self, index: usize) {
        self.segments.remove(index);
    }

    // --- example toggles ----------------------------------------------------

    pub fn toggle_example(&mut self, field: ExampleField) {
        self.examples.toggle(field);
    }

    #[must_use]
    pub const fn example_visible(&self, field: ExampleField) -> bool {
        self.examples.is_visible(field)
    }

    // --- submission ---------------------------------------------------------

    /// Title must be non-empty before a submission is accepted.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Validation` for a blank title.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.title.trim().is_empty() {
            return Err(SubmitError::Validation("Title is required".to_string()));
        }
        Ok(())
    }

    /// The current form contents as a write payload.
    ///
    /// Empty optional text maps back to `None`, so an unchanged edit
    /// round-trips deep-equal to the original entry's editable fields.
    #[must_use]
    pub fn draft(&self) -> ResearchDraft {
        let opt = |s: &String| {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        };
        ResearchDraft {
            project_id: self.project_id.clone(),
            title: self.title.clone(),
            market_size_analysis: opt(&self.market_size_analysis),
            market_trends_tracking: opt(&self.market_trends_tracking),
            competitor_identification: opt(&self.competitor_identification),
            positioning_strategy: opt(&self.positioning_strategy),
            target_segments: self.segments.to_vec(),
        }
    }

    /// Submit the form: one `update` in edit mode, one `insert` otherwise.
    ///
    /// Re-entrant submits are rejected with [`SubmitOutcome::InFlight`] while
    /// a write is running. Validation failures make no store call.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Validation` for a blank title and
    /// `SubmitError::Store` when the write fails; in both cases the form
    /// state is preserved unchanged.
    pub async fn submit(&mut self, store: &dyn ResearchStore) -> Result<SubmitOutcome, SubmitError> {
        if self.submitting {
            return Ok(SubmitOutcome::InFlight);
        }
        self.validate()?;

        self.submitting = true;
        let draft = self.draft();
        let result = match &self.entry_id {
            Some(id) => store.update(id, &draft).await,
            None => store.insert(&draft).await.map(|_| ()),
        };
        self.submitting = false;
        result?;

        Ok(SubmitOutcome::Saved {
            project_id: draft.project_id,
        })
    }
}
