//! In-memory substitute store for tests.
//!
//! Records every call with its payload so tests can assert "insert called
//! exactly once with exactly this draft", and injects failures on demand.
//! Not `#[cfg(test)]` — downstream crates' form and workspace tests inject it
//! where production code injects [`crate::LibsqlStore`].

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use canvass_core::entities::{ResearchDraft, ResearchEntry};

use crate::error::StoreError;
use crate::store::ResearchStore;

#[derive(Default)]
struct Inner {
    entries: Vec<ResearchEntry>,
    next_id: u32,
    list_calls: Vec<String>,
    insert_calls: Vec<ResearchDraft>,
    update_calls: Vec<(String, ResearchDraft)>,
    delete_calls: Vec<String>,
    fail_list: bool,
    fail_insert: bool,
    fail_update: bool,
    fail_delete: bool,
}

/// Recording, fault-injectable [`ResearchStore`] held entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

fn injected() -> StoreError {
    StoreError::Query("injected failure".to_string())
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry directly, bypassing call recording.
    pub fn seed(&self, entry: ResearchEntry) {
        self.inner.lock().unwrap().entries.push(entry);
    }

    /// Make subsequent `list` calls fail until cleared.
    pub fn fail_list(&self, fail: bool) {
        self.inner.lock().unwrap().fail_list = fail;
    }

    /// Make subsequent `insert` calls fail until cleared.
    pub fn fail_insert(&self, fail: bool) {
        self.inner.lock().unwrap().fail_insert = fail;
    }

    /// Make subsequent `update` calls fail until cleared.
    pub fn fail_update(&self, fail: bool) {
        self.inner.lock().unwrap().fail_update = fail;
    }

    /// Make subsequent `delete` calls fail until cleared.
    pub fn fail_delete(&self, fail: bool) {
        self.inner.lock().unwrap().fail_delete = fail;
    }

    /// Project ids passed to `list`, in call order.
    #[must_use]
    pub fn list_calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().list_calls.clone()
    }

    /// Drafts passed to `insert`, in call order.
    #[must_use]
    pub fn insert_calls(&self) -> Vec<ResearchDraft> {
        self.inner.lock().unwrap().insert_calls.clone()
    }

    /// `(id, draft)` pairs passed to `update`, in call order.
    #[must_use]
    pub fn update_calls(&self) -> Vec<(String, ResearchDraft)> {
        self.inner.lock().unwrap().update_calls.clone()
    }

    /// Ids passed to `delete`, in call order.
    #[must_use]
    pub fn delete_calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().delete_calls.clone()
    }

    /// Current entries, unordered.
    #[must_use]
    pub fn entries(&self) -> Vec<ResearchEntry> {
        self.inner.lock().unwrap().entries.clone()
    }
}

#[async_trait]
impl ResearchStore for MemoryStore {
    async fn list(&self, project_id: &str) -> Result<Vec<ResearchEntry>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls.push(project_id.to_string());
        if inner.fail_list {
            return Err(injected());
        }

        // Newest first; ties broken by insertion recency.
        let mut indexed: Vec<(usize, &ResearchEntry)> = inner
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.project_id == project_id)
            .collect();
        indexed.sort_by(|(ia, a), (ib, b)| {
            b.created_at.cmp(&a.created_at).then(ib.cmp(ia))
        });
        Ok(indexed.into_iter().map(|(_, e)| e.clone()).collect())
    }

    async fn insert(&self, draft: &ResearchDraft) -> Result<ResearchEntry, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.insert_calls.push(draft.clone());
        if inner.fail_insert {
            return Err(injected());
        }

        inner.next_id += 1;
        let entry = ResearchEntry {
            id: format!("mr-{:04}", inner.next_id),
            project_id: draft.project_id.clone(),
            title: draft.title.clone(),
            market_size_analysis: draft.market_size_analysis.clone(),
            market_trends_tracking: draft.market_trends_tracking.clone(),
            competitor_identification: draft.competitor_identification.clone(),
            positioning_strategy: draft.positioning_strategy.clone(),
            target_segments: draft.target_segments.clone(),
            created_at: Utc::now(),
        };
        inner.entries.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, id: &str, draft: &ResearchDraft) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.update_calls.push((id.to_string(), draft.clone()));
        if inner.fail_update {
            return Err(injected());
        }

        let entry = inner
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NoResult)?;
        entry.title = draft.title.clone();
        entry.market_size_analysis = draft.market_size_analysis.clone();
        entry.market_trends_tracking = draft.market_trends_tracking.clone();
        entry.competitor_identification = draft.competitor_identification.clone();
        entry.positioning_strategy = draft.positioning_strategy.clone();
        entry.target_segments = draft.target_segments.clone();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.delete_calls.push(id.to_string());
        if inner.fail_delete {
            return Err(injected());
        }
        inner.entries.retain(|e| e.id != id);
        Ok(())
    }
}
