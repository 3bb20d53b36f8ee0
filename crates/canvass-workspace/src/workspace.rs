//! The workspace orchestrator: fetch lifecycle, view tabs, and the open form.
//!
//! One workspace instance owns the research list for the active project. All
//! store traffic flows through here or through the form it opens; cards and
//! the list are pure view models. Fetches are ticketed so a completion that
//! arrives after a project switch (or after a newer fetch) is discarded
//! instead of overwriting fresher state.

use std::sync::Arc;

use canvass_core::entities::{Project, ResearchEntry};
use canvass_core::enums::ViewTab;
use canvass_store::{ResearchStore, StoreError};

use crate::confirm::ConfirmPrompt;
use crate::dashboard::{self, InsightCard, MetricTile};
use crate::form::{ResearchForm, SubmitOutcome};
use crate::list::ListState;

const DELETE_PROMPT: &str = "Are you sure you want to delete this research entry?";

/// Handle for one in-flight fetch. Only the newest ticket, for the still
/// active project, may apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    project_id: String,
}

impl FetchTicket {
    /// The project this fetch was issued for.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// What the workspace currently shows. An open form takes precedence over
/// the selected tab; no project is terminal until one is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceView {
    SelectProject,
    Form,
    Dashboard(Vec<MetricTile>),
    List(ListState),
    Insights(Vec<InsightCard>),
}

/// The market-research workspace for at most one active project.
pub struct Workspace {
    store: Arc<dyn ResearchStore>,
    confirm: Arc<dyn ConfirmPrompt>,
    project: Option<Project>,
    tab: ViewTab,
    form: Option<ResearchForm>,
    entries: Vec<ResearchEntry>,
    loading: bool,
    fetch_seq: u64,
    notice: Option<String>,
}

impl Workspace {
    #[must_use]
    pub fn new(store: Arc<dyn ResearchStore>, confirm: Arc<dyn ConfirmPrompt>) -> Self {
        Self {
            store,
            confirm,
            project: None,
            tab: ViewTab::default(),
            form: None,
            entries: Vec::new(),
            loading: false,
            fetch_seq: 0,
            notice: None,
        }
    }

    // --- accessors ----------------------------------------------------------

    #[must_use]
    pub const fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    #[must_use]
    pub const fn tab(&self) -> ViewTab {
        self.tab
    }

    #[must_use]
    pub fn entries(&self) -> &[ResearchEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn form(&self) -> Option<&ResearchForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ResearchForm> {
        self.form.as_mut()
    }

    /// The entry being edited, when the form is open in edit mode.
    #[must_use]
    pub fn selected_entry_id(&self) -> Option<&str> {
        self.form.as_ref().and_then(ResearchForm::entry_id)
    }

    /// The pending save-failure notification, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Derived render state.
    #[must_use]
    pub fn view(&self) -> WorkspaceView {
        if self.project.is_none() {
            return WorkspaceView::SelectProject;
        }
        if self.form.is_some() {
            return WorkspaceView::Form;
        }
        match self.tab {
            ViewTab::Dashboard => WorkspaceView::Dashboard(dashboard::sample_metrics()),
            ViewTab::List => WorkspaceView::List(ListState::of(&self.entries, self.loading)),
            ViewTab::Insights => WorkspaceView::Insights(dashboard::sample_insights()),
        }
    }

    // --- project selection & fetch lifecycle --------------------------------

    /// Change the active project. A new identity starts a fetch (ticket
    /// returned); the same identity is a no-op; `None` clears everything
    /// reachable only with a project.
    pub fn set_project(&mut self, project: Option<Project>) -> Option<FetchTicket> {
        self.notice = None;
        match project {
            None => {
                self.project = None;
                self.form = None;
                self.entries.clear();
                self.loading = false;
                None
            }
            Some(project) => {
                let changed = self.project.as_ref().is_none_or(|p| p.id != project.id);
                self.project = Some(project);
                if changed { self.start_fetch() } else { None }
            }
        }
    }

    /// Begin a fetch for the active project. `None` without a project.
    ///
    /// The previous ticket (if any) is superseded: its completion will be
    /// discarded when it eventually arrives.
    pub fn start_fetch(&mut self) -> Option<FetchTicket> {
        let project_id = self.project.as_ref()?.id.clone();
        self.fetch_seq += 1;
        self.loading = true;
        Some(FetchTicket {
            seq: self.fetch_seq,
            project_id,
        })
    }

    /// Apply a fetch completion. Stale completions — superseded by a newer
    /// fetch, or keyed to a project that is no longer active — are discarded.
    ///
    /// A failed fetch is logged and leaves the previous entries in place;
    /// the user sees an unchanged (or empty) list with no message.
    pub fn apply_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Vec<ResearchEntry>, StoreError>,
    ) {
        if ticket.seq != self.fetch_seq {
            return;
        }
        self.loading = false;

        if self.project.as_ref().is_none_or(|p| p.id != ticket.project_id) {
            return;
        }
        match result {
            Ok(entries) => self.entries = entries,
            Err(error) => {
                tracing::warn!(%error, project_id = %ticket.project_id, "failed to fetch research entries");
            }
        }
    }

    /// Fetch the active project's entries and apply the result inline.
    pub async fn refresh(&mut self) {
        let Some(ticket) = self.start_fetch() else {
            return;
        };
        let store = Arc::clone(&self.store);
        let result = store.list(ticket.project_id()).await;
        self.apply_fetch(&ticket, result);
    }

    /// [`Self::set_project`] plus an inline fetch when one was started.
    pub async fn select_project(&mut self, project: Option<Project>) {
        if let Some(ticket) = self.set_project(project) {
            let store = Arc::clone(&self.store);
            let result = store.list(ticket.project_id()).await;
            self.apply_fetch(&ticket, result);
        }
    }

    // --- form orchestration -------------------------------------------------

    /// Open the form in create mode, regardless of the current tab.
    /// No-op without an active project.
    pub fn open_create(&mut self) {
        self.notice = None;
        if let Some(project) = &self.project {
            self.form = Some(ResearchForm::create(project));
        }
    }

    /// Open the form pre-populated from an existing entry.
    pub fn open_edit(&mut self, entry: &ResearchEntry) {
        self.notice = None;
        if let Some(project) = &self.project {
            self.form = Some(ResearchForm::edit(project, entry));
        }
    }

    /// Discard in-progress edits. No re-fetch.
    pub fn cancel_form(&mut self) {
        self.notice = None;
        self.form = None;
    }

    /// Submit the open form. On save the form closes and the list refreshes
    /// for the *currently* active project; on failure the form stays open
    /// with all entered data intact and [`Self::notice`] carries the alert.
    pub async fn submit_form(&mut self) {
        self.notice = None;
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let store = Arc::clone(&self.store);
        match form.submit(store.as_ref()).await {
            Ok(SubmitOutcome::Saved { .. }) => {
                self.form = None;
                self.refresh().await;
            }
            Ok(SubmitOutcome::InFlight) => {}
            Err(error) => {
                self.notice = Some(format!("Failed to save research: {error}"));
            }
        }
    }

    // --- deletion -----------------------------------------------------------

    /// Delete an entry after a fresh confirmation. Declining makes no store
    /// call. A failed delete is logged only — the list keeps the row until a
    /// later fetch confirms anything (no optimistic removal).
    pub async fn delete(&mut self, id: &str) {
        self.notice = None;
        if !self.confirm.confirm(DELETE_PROMPT).await {
            return;
        }
        let store = Arc::clone(&self.store);
        match store.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(error) => {
                tracing::warn!(%error, id, "failed to delete research entry");
            }
        }
    }

    // --- tabs ---------------------------------------------------------------

    /// Switch tabs. Independent of the form: an open form keeps precedence.
    pub fn select_tab(&mut self, tab: ViewTab) {
        self.notice = None;
        self.tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass_core::entities::{ResearchDraft, Segment};
    use canvass_core::enums::SegmentField;
    use canvass_store::memory::MemoryStore;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use crate::confirm::ScriptedConfirm;

    fn project(id: &str) -> Project {
        Project {
            id: id.into(),
            name: format!("Project {id}"),
            description: None,
            created_at: Utc::now(),
        }
    }

    fn entry(id: &str, project_id: &str, title: &str) -> ResearchEntry {
        ResearchEntry {
            id: id.into(),
            project_id: project_id.into(),
            title: title.into(),
            market_size_analysis: None,
            market_trends_tracking: None,
            competitor_identification: None,
            positioning_strategy: None,
            target_segments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn workspace(store: Arc<MemoryStore>) -> Workspace {
        Workspace::new(store, Arc::new(ScriptedConfirm::default()))
    }

    fn workspace_confirming(
        store: Arc<MemoryStore>,
        confirm: Arc<ScriptedConfirm>,
    ) -> Workspace {
        Workspace::new(store, confirm)
    }

    #[tokio::test]
    async fn no_project_is_terminal() {
        let store = Arc::new(MemoryStore::new());
        let mut ws = workspace(Arc::clone(&store));

        assert_eq!(ws.view(), WorkspaceView::SelectProject);
        assert!(ws.start_fetch().is_none());

        ws.open_create();
        assert!(ws.form().is_none());
        assert_eq!(ws.view(), WorkspaceView::SelectProject);
        assert!(store.list_calls().is_empty());
    }

    #[tokio::test]
    async fn selecting_a_project_fetches_its_entries() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-1", "prj-a", "Mine"));
        store.seed(entry("mr-2", "prj-b", "Not mine"));

        let mut ws = workspace(Arc::clone(&store));
        ws.select_project(Some(project("prj-a"))).await;

        assert!(!ws.is_loading());
        assert_eq!(ws.entries().len(), 1);
        assert_eq!(ws.entries()[0].id, "mr-1");
        assert_eq!(store.list_calls(), vec!["prj-a".to_string()]);
    }

    #[tokio::test]
    async fn same_project_identity_does_not_refetch() {
        let store = Arc::new(MemoryStore::new());
        let mut ws = workspace(Arc::clone(&store));

        ws.select_project(Some(project("prj-a"))).await;
        ws.select_project(Some(project("prj-a"))).await;
        assert_eq!(store.list_calls().len(), 1);

        ws.select_project(Some(project("prj-b"))).await;
        assert_eq!(store.list_calls().len(), 2);
    }

    #[tokio::test]
    async fn clearing_the_project_resets_everything() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-1", "prj-a", "Mine"));
        let mut ws = workspace(store);

        ws.select_project(Some(project("prj-a"))).await;
        ws.open_create();
        ws.select_project(None).await;

        assert_eq!(ws.view(), WorkspaceView::SelectProject);
        assert!(ws.form().is_none());
        assert!(ws.entries().is_empty());
    }

    #[tokio::test]
    async fn loading_suppresses_the_list_even_when_populated() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-1", "prj-a", "Mine"));
        let mut ws = workspace(store);
        ws.select_project(Some(project("prj-a"))).await;
        ws.select_tab(ViewTab::List);
        assert!(!ws.entries().is_empty());

        let _ticket = ws.start_fetch().unwrap();
        assert_eq!(ws.view(), WorkspaceView::List(ListState::Loading));
    }

    #[tokio::test]
    async fn open_form_takes_precedence_over_every_tab() {
        let store = Arc::new(MemoryStore::new());
        let mut ws = workspace(store);
        ws.select_project(Some(project("prj-a"))).await;
        ws.select_tab(ViewTab::Insights);

        ws.open_create();
        assert_eq!(ws.view(), WorkspaceView::Form);
        assert!(!ws.form().unwrap().is_edit());

        ws.select_tab(ViewTab::Dashboard);
        assert_eq!(ws.view(), WorkspaceView::Form);

        ws.cancel_form();
        assert!(matches!(ws.view(), WorkspaceView::Dashboard(_)));
    }

    #[tokio::test]
    async fn create_flow_end_to_end() {
        let store = Arc::new(MemoryStore::new());
        let mut ws = workspace(Arc::clone(&store));
        ws.select_project(Some(project("prj-p"))).await;
        assert!(ws.entries().is_empty());

        ws.open_create();
        {
            let form = ws.form_mut().unwrap();
            form.title = "Q1 Analysis".into();
            form.add_segment();
            form.set_segment(0, SegmentField::Name, "SMBs");
        }
        ws.submit_form().await;

        let inserts = store.insert_calls();
        assert_eq!(inserts.len(), 1);
        assert_eq!(
            inserts[0],
            ResearchDraft {
                project_id: "prj-p".into(),
                title: "Q1 Analysis".into(),
                target_segments: vec![Segment {
                    name: "SMBs".into(),
                    ..Segment::default()
                }],
                ..ResearchDraft::default()
            }
        );

        // Form closed, list re-fetched for the same project.
        assert!(ws.form().is_none());
        assert_eq!(store.list_calls(), vec!["prj-p".to_string(), "prj-p".to_string()]);
        assert_eq!(ws.entries().len(), 1);
        assert_eq!(ws.entries()[0].title, "Q1 Analysis");
    }

    #[tokio::test]
    async fn edit_flow_removes_first_segment() {
        let store = Arc::new(MemoryStore::new());
        let mut seeded = entry("mr-e", "prj-p", "Segmented");
        seeded.target_segments = vec![
            Segment {
                name: "SMBs".into(),
                ..Segment::default()
            },
            Segment {
                name: "Enterprise".into(),
                ..Segment::default()
            },
        ];
        store.seed(seeded.clone());

        let mut ws = workspace(Arc::clone(&store));
        ws.select_project(Some(project("prj-p"))).await;

        ws.open_edit(&seeded);
        assert_eq!(ws.selected_entry_id(), Some("mr-e"));
        {
            let form = ws.form_mut().unwrap();
            assert_eq!(form.segments().as_slice()[0].name, "SMBs");
            assert_eq!(form.segments().as_slice()[1].name, "Enterprise");
            form.remove_segment(0);
        }
        ws.submit_form().await;

        assert!(store.insert_calls().is_empty());
        let updates = store.update_calls();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "mr-e");
        assert_eq!(updates[0].1.target_segments, vec![Segment {
            name: "Enterprise".into(),
            ..Segment::default()
        }]);
    }

    #[tokio::test]
    async fn cancel_discards_without_refetch() {
        let store = Arc::new(MemoryStore::new());
        let mut ws = workspace(Arc::clone(&store));
        ws.select_project(Some(project("prj-p"))).await;

        ws.open_create();
        ws.form_mut().unwrap().title = "Unsaved".into();
        ws.cancel_form();

        assert!(ws.form().is_none());
        assert!(ws.selected_entry_id().is_none());
        assert_eq!(store.list_calls().len(), 1);
        assert!(store.insert_calls().is_empty());
    }

    #[tokio::test]
    async fn save_failure_keeps_form_open_with_notice() {
        let store = Arc::new(MemoryStore::new());
        let mut ws = workspace(Arc::clone(&store));
        ws.select_project(Some(project("prj-p"))).await;

        ws.open_create();
        ws.form_mut().unwrap().title = "Doomed".into();
        store.fail_insert(true);
        ws.submit_form().await;

        assert!(ws.notice().unwrap().starts_with("Failed to save"));
        assert_eq!(ws.form().unwrap().title, "Doomed");
        // No refresh on failure.
        assert_eq!(store.list_calls().len(), 1);

        // Manual retry after recovery clears the notice and closes the form.
        store.fail_insert(false);
        ws.submit_form().await;
        assert_eq!(ws.notice(), None);
        assert!(ws.form().is_none());
    }

    #[tokio::test]
    async fn delete_confirmed_deletes_and_refetches() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-1", "prj-p", "Doomed"));
        let confirm = Arc::new(ScriptedConfirm::with_answers([true]));
        let mut ws = workspace_confirming(Arc::clone(&store), Arc::clone(&confirm));
        ws.select_project(Some(project("prj-p"))).await;

        ws.delete("mr-1").await;

        assert_eq!(confirm.prompts().len(), 1);
        assert_eq!(store.delete_calls(), vec!["mr-1".to_string()]);
        assert!(ws.entries().is_empty());
        assert_eq!(store.list_calls().len(), 2);
    }

    #[tokio::test]
    async fn delete_declined_makes_no_store_call() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-1", "prj-p", "Safe"));
        let confirm = Arc::new(ScriptedConfirm::with_answers([false]));
        let mut ws = workspace_confirming(Arc::clone(&store), confirm);
        ws.select_project(Some(project("prj-p"))).await;

        ws.delete("mr-1").await;

        assert!(store.delete_calls().is_empty());
        assert_eq!(ws.entries().len(), 1);
        assert_eq!(store.list_calls().len(), 1);
    }

    #[tokio::test]
    async fn every_delete_prompts_independently() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-1", "prj-p", "One"));
        store.seed(entry("mr-2", "prj-p", "Two"));
        let confirm = Arc::new(ScriptedConfirm::with_answers([true, true]));
        let mut ws = workspace_confirming(Arc::clone(&store), Arc::clone(&confirm));
        ws.select_project(Some(project("prj-p"))).await;

        ws.delete("mr-1").await;
        ws.delete("mr-2").await;
        assert_eq!(confirm.prompts().len(), 2);
        assert_eq!(store.delete_calls().len(), 2);
    }

    #[tokio::test]
    async fn delete_failure_is_logged_only_and_list_stays_stale() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-1", "prj-p", "Sticky"));
        let confirm = Arc::new(ScriptedConfirm::with_answers([true]));
        let mut ws = workspace_confirming(Arc::clone(&store), confirm);
        ws.select_project(Some(project("prj-p"))).await;

        store.fail_delete(true);
        ws.delete("mr-1").await;

        // No user-facing message, no refresh, no optimistic removal.
        assert_eq!(ws.notice(), None);
        assert_eq!(ws.entries().len(), 1);
        assert_eq!(store.list_calls().len(), 1);
    }

    #[tokio::test]
    async fn fetch_failure_keeps_previous_entries() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-1", "prj-p", "Kept"));
        let mut ws = workspace(Arc::clone(&store));
        ws.select_project(Some(project("prj-p"))).await;
        assert_eq!(ws.entries().len(), 1);

        store.fail_list(true);
        ws.refresh().await;

        assert_eq!(ws.entries().len(), 1);
        assert!(!ws.is_loading());
        assert_eq!(ws.notice(), None);
    }

    #[tokio::test]
    async fn superseded_fetch_completion_is_discarded() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-b", "prj-b", "Fresh"));
        let mut ws = workspace(Arc::clone(&store));
        ws.select_project(Some(project("prj-a"))).await;

        // A fetch for prj-a goes out, then the user switches to prj-b before
        // it resolves.
        let stale = ws.start_fetch().unwrap();
        let newer = ws.set_project(Some(project("prj-b"))).unwrap();

        // The stale completion arrives late and is dropped.
        ws.apply_fetch(&stale, Ok(vec![entry("mr-a", "prj-a", "Stale")]));
        assert!(ws.is_loading());
        assert!(ws.entries().is_empty());

        // The newer completion lands normally.
        let result = store.list(newer.project_id()).await;
        ws.apply_fetch(&newer, result);
        assert!(!ws.is_loading());
        assert_eq!(ws.entries().len(), 1);
        assert_eq!(ws.entries()[0].id, "mr-b");
    }

    #[tokio::test]
    async fn completion_after_project_cleared_is_discarded() {
        let store = Arc::new(MemoryStore::new());
        let mut ws = workspace(store);
        ws.select_project(Some(project("prj-a"))).await;

        let ticket = ws.start_fetch().unwrap();
        ws.set_project(None);
        ws.apply_fetch(&ticket, Ok(vec![entry("mr-a", "prj-a", "Late")]));

        assert!(ws.entries().is_empty());
        assert_eq!(ws.view(), WorkspaceView::SelectProject);
    }

    #[tokio::test]
    async fn mid_flight_submission_survives_a_project_switch() {
        let store = Arc::new(MemoryStore::new());
        store.seed(entry("mr-b", "prj-b", "Theirs"));
        let mut ws = workspace(Arc::clone(&store));
        ws.select_project(Some(project("prj-a"))).await;

        ws.open_create();
        ws.form_mut().unwrap().title = "Written under prj-a".into();

        // The active project changes while the form is still open; the form
        // keeps the project captured when it was opened.
        ws.select_project(Some(project("prj-b"))).await;
        assert!(ws.form().is_some());
        assert_eq!(ws.form().unwrap().project_id(), "prj-a");

        ws.submit_form().await;

        // The write targeted prj-a; the ensuing refresh targeted the now
        // active prj-b, so no prj-a rows leak into the list.
        assert_eq!(store.insert_calls()[0].project_id, "prj-a");
        assert_eq!(store.list_calls().last().unwrap(), "prj-b");
        assert_eq!(ws.entries().len(), 1);
        assert_eq!(ws.entries()[0].project_id, "prj-b");
    }
}
