//! # canvass-workspace
//!
//! The market-research workspace: a state machine over view tabs, an open
//! research form, and the fetch lifecycle for a project's research entries.
//!
//! Nothing in this crate draws anything. The workspace exposes view models
//! ([`card::ResearchCard`], [`list::ListState`], [`dashboard`] sample
//! content) and a derived [`workspace::WorkspaceView`]; rendering them is the
//! consumer's concern. The store and the delete-confirmation prompt are
//! injected, so every state transition is testable against substitutes.

pub mod card;
pub mod confirm;
pub mod dashboard;
pub mod form;
pub mod list;
pub mod segments;
pub mod workspace;

pub use confirm::ConfirmPrompt;
pub use form::{ResearchForm, SubmitError, SubmitOutcome};
pub use segments::SegmentList;
pub use workspace::{FetchTicket, Workspace, WorkspaceView};
