//! Market research repository — project-scoped CRUD.

use async_trait::async_trait;
use chrono::Utc;

use canvass_core::entities::{ResearchDraft, ResearchEntry};
use canvass_core::ids::PREFIX_RESEARCH;

use crate::LibsqlStore;
use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime, parse_segments};
use crate::store::ResearchStore;

fn row_to_research(row: &libsql::Row) -> Result<ResearchEntry, StoreError> {
    Ok(ResearchEntry {
        id: row.get::<String>(0)?,
        project_id: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        market_size_analysis: get_opt_string(row, 3)?,
        market_trends_tracking: get_opt_string(row, 4)?,
        competitor_identification: get_opt_string(row, 5)?,
        positioning_strategy: get_opt_string(row, 6)?,
        target_segments: parse_segments(row.get::<Option<String>>(7)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

fn segments_json(draft: &ResearchDraft) -> Result<String, StoreError> {
    serde_json::to_string(&draft.target_segments)
        .map_err(|e| StoreError::Query(format!("Failed to serialize segments: {e}")))
}

const RESEARCH_COLUMNS: &str = "id, project_id, title, market_size_analysis, \
     market_trends_tracking, competitor_identification, positioning_strategy, \
     target_segments, created_at";

impl LibsqlStore {
    /// Get a research entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoResult` if the entry does not exist.
    pub async fn get_research(&self, id: &str) -> Result<ResearchEntry, StoreError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {RESEARCH_COLUMNS} FROM market_research WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_research(&row)
    }

    /// Create a research entry from a draft. Assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the INSERT fails.
    pub async fn insert_research(
        &self,
        draft: &ResearchDraft,
    ) -> Result<ResearchEntry, StoreError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_RESEARCH).await?;
        let segments = segments_json(draft)?;

        self.conn()
            .execute(
                "INSERT INTO market_research
                 (id, project_id, title, market_size_analysis, market_trends_tracking,
                  competitor_identification, positioning_strategy, target_segments, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params![
                    id.as_str(),
                    draft.project_id.as_str(),
                    draft.title.as_str(),
                    draft.market_size_analysis.as_deref(),
                    draft.market_trends_tracking.as_deref(),
                    draft.competitor_identification.as_deref(),
                    draft.positioning_strategy.as_deref(),
                    segments.as_str(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(id = %id, project_id = %draft.project_id, "inserted research entry");

        Ok(ResearchEntry {
            id,
            project_id: draft.project_id.clone(),
            title: draft.title.clone(),
            market_size_analysis: draft.market_size_analysis.clone(),
            market_trends_tracking: draft.market_trends_tracking.clone(),
            competitor_identification: draft.competitor_identification.clone(),
            positioning_strategy: draft.positioning_strategy.clone(),
            target_segments: draft.target_segments.clone(),
            created_at: now,
        })
    }

    /// Replace the editable fields of an entry with the draft.
    ///
    /// `project_id` and `created_at` are never touched — an entry belongs to
    /// one project for its entire lifecycle.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoResult` if no entry has the given id.
    pub async fn update_research(
        &self,
        id: &str,
        draft: &ResearchDraft,
    ) -> Result<(), StoreError> {
        let segments = segments_json(draft)?;

        let affected = self
            .conn()
            .execute(
                "UPDATE market_research SET
                   title = ?1,
                   market_size_analysis = ?2,
                   market_trends_tracking = ?3,
                   competitor_identification = ?4,
                   positioning_strategy = ?5,
                   target_segments = ?6
                 WHERE id = ?7",
                libsql::params![
                    draft.title.as_str(),
                    draft.market_size_analysis.as_deref(),
                    draft.market_trends_tracking.as_deref(),
                    draft.competitor_identification.as_deref(),
                    draft.positioning_strategy.as_deref(),
                    segments.as_str(),
                    id
                ],
            )
            .await?;

        if affected == 0 {
            return Err(StoreError::NoResult);
        }
        tracing::debug!(id, "updated research entry");
        Ok(())
    }

    /// Delete a research entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the DELETE fails.
    pub async fn delete_research(&self, id: &str) -> Result<(), StoreError> {
        self.conn()
            .execute("DELETE FROM market_research WHERE id = ?1", [id])
            .await?;
        tracing::debug!(id, "deleted research entry");
        Ok(())
    }

    /// List a project's research entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_research(&self, project_id: &str) -> Result<Vec<ResearchEntry>, StoreError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {RESEARCH_COLUMNS} FROM market_research
                     WHERE project_id = ?1 ORDER BY created_at DESC"
                ),
                [project_id],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_research(&row)?);
        }
        Ok(entries)
    }
}

#[async_trait]
impl ResearchStore for LibsqlStore {
    async fn list(&self, project_id: &str) -> Result<Vec<ResearchEntry>, StoreError> {
        self.list_research(project_id).await
    }

    async fn insert(&self, draft: &ResearchDraft) -> Result<ResearchEntry, StoreError> {
        self.insert_research(draft).await
    }

    async fn update(&self, id: &str, draft: &ResearchDraft) -> Result<(), StoreError> {
        self.update_research(id, draft).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.delete_research(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass_core::entities::Segment;
    use pretty_assertions::assert_eq;

    async fn test_store() -> LibsqlStore {
        LibsqlStore::open_local(":memory:").await.unwrap()
    }

    async fn seed_project(store: &LibsqlStore) -> String {
        store.create_project("Test Project", None).await.unwrap().id
    }

    fn draft(project_id: &str, title: &str) -> ResearchDraft {
        ResearchDraft {
            project_id: project_id.to_string(),
            title: title.to_string(),
            ..ResearchDraft::default()
        }
    }

    #[tokio::test]
    async fn insert_research_roundtrip() {
        let store = test_store().await;
        let pid = seed_project(&store).await;

        let mut d = draft(&pid, "Q1 Analysis");
        d.market_size_analysis = Some("TAM around 2B".into());
        d.target_segments = vec![
            Segment {
                name: "SMBs".into(),
                size: "10k companies".into(),
                ..Segment::default()
            },
            Segment {
                name: "Enterprise".into(),
                ..Segment::default()
            },
        ];

        let entry = store.insert_research(&d).await.unwrap();
        assert!(entry.id.starts_with("mr-"));
        assert_eq!(entry.project_id, pid);

        let fetched = store.get_research(&entry.id).await.unwrap();
        assert_eq!(fetched.title, "Q1 Analysis");
        assert_eq!(fetched.market_size_analysis.as_deref(), Some("TAM around 2B"));
        assert_eq!(fetched.market_trends_tracking, None);
        assert_eq!(fetched.target_segments.len(), 2);
        assert_eq!(fetched.target_segments[0].name, "SMBs");
        assert_eq!(fetched.target_segments[1].name, "Enterprise");
    }

    #[tokio::test]
    async fn update_research_replaces_editable_fields() {
        let store = test_store().await;
        let pid = seed_project(&store).await;

        let mut d = draft(&pid, "Original");
        d.positioning_strategy = Some("Low-cost leader".into());
        let entry = store.insert_research(&d).await.unwrap();

        d.title = "Revised".into();
        d.positioning_strategy = None;
        d.target_segments = vec![Segment {
            name: "Mid-market".into(),
            ..Segment::default()
        }];
        store.update_research(&entry.id, &d).await.unwrap();

        let fetched = store.get_research(&entry.id).await.unwrap();
        assert_eq!(fetched.title, "Revised");
        assert_eq!(fetched.positioning_strategy, None);
        assert_eq!(fetched.target_segments.len(), 1);
        // Identity fields never move.
        assert_eq!(fetched.project_id, pid);
        assert_eq!(fetched.created_at, entry.created_at);
    }

    #[tokio::test]
    async fn update_research_missing_id() {
        let store = test_store().await;
        let pid = seed_project(&store).await;
        let result = store.update_research("mr-missing", &draft(&pid, "X")).await;
        assert!(matches!(result, Err(StoreError::NoResult)));
    }

    #[tokio::test]
    async fn delete_research_removes_row() {
        let store = test_store().await;
        let pid = seed_project(&store).await;

        let entry = store.insert_research(&draft(&pid, "Doomed")).await.unwrap();
        store.delete_research(&entry.id).await.unwrap();

        let result = store.get_research(&entry.id).await;
        assert!(matches!(result, Err(StoreError::NoResult)));
    }

    #[tokio::test]
    async fn list_research_newest_first_and_scoped() {
        let store = test_store().await;
        let pid = seed_project(&store).await;
        let other = store.create_project("Other", None).await.unwrap().id;

        // Explicit timestamps keep the ordering assertion deterministic.
        for (id, project, title, ts) in [
            ("mr-a", pid.as_str(), "Oldest", "2024-01-01T00:00:00+00:00"),
            ("mr-b", pid.as_str(), "Middle", "2024-03-01T00:00:00+00:00"),
            ("mr-c", pid.as_str(), "Newest", "2024-06-01T00:00:00+00:00"),
            ("mr-x", other.as_str(), "Elsewhere", "2024-12-01T00:00:00+00:00"),
        ] {
            store
                .conn()
                .execute(
                    "INSERT INTO market_research (id, project_id, title, created_at)
                     VALUES (?1, ?2, ?3, ?4)",
                    libsql::params![id, project, title, ts],
                )
                .await
                .unwrap();
        }

        let entries = store.list_research(&pid).await.unwrap();
        assert_eq!(
            entries.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
            vec!["Newest", "Middle", "Oldest"]
        );
        assert!(entries.iter().all(|e| e.project_id == pid));
    }

    #[tokio::test]
    async fn legacy_rows_without_segments() {
        let store = test_store().await;
        let pid = seed_project(&store).await;

        store
            .conn()
            .execute(
                "INSERT INTO market_research (id, project_id, title, target_segments, created_at)
                 VALUES ('mr-legacy', ?1, 'Legacy', '', '2024-01-05 10:00:00')",
                [pid.as_str()],
            )
            .await
            .unwrap();

        let entry = store.get_research("mr-legacy").await.unwrap();
        assert_eq!(entry.target_segments, Vec::new());
    }
}
