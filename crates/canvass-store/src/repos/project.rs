//! Project repository — the parent scope for research entries.
//!
//! The workspace itself never creates projects; this exists so the CLI has
//! something to scope research under.

use chrono::Utc;

use canvass_core::entities::Project;
use canvass_core::ids::PREFIX_PROJECT;

use crate::LibsqlStore;
use crate::error::StoreError;
use crate::helpers::{get_opt_string, parse_datetime};

fn row_to_project(row: &libsql::Row) -> Result<Project, StoreError> {
    Ok(Project {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        description: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl LibsqlStore {
    /// Create a new project.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the INSERT fails.
    pub async fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Project, StoreError> {
        let now = Utc::now();
        let id = self.generate_id(PREFIX_PROJECT).await?;

        self.conn()
            .execute(
                "INSERT INTO projects (id, name, description, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id.as_str(), name, description, now.to_rfc3339()],
            )
            .await?;

        Ok(Project {
            id,
            name: name.to_string(),
            description: description.map(String::from),
            created_at: now,
        })
    }

    /// Get a project by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoResult` if the project does not exist.
    pub async fn get_project(&self, id: &str) -> Result<Project, StoreError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, name, description, created_at FROM projects WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        row_to_project(&row)
    }

    /// List projects ordered by creation date descending.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, name, description, created_at FROM projects ORDER BY created_at DESC",
                (),
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }
}
