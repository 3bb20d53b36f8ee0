//! # canvass-store
//!
//! libSQL persistence for Canvass plus the injectable store contract.
//!
//! The workspace and form never talk to a concrete database — they receive
//! a [`ResearchStore`] (usually `Arc<dyn ResearchStore>`). [`LibsqlStore`]
//! is the production implementation; [`memory::MemoryStore`] is the
//! recording substitute used by downstream tests.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) — native FTS5 and a
//! stable API.

pub mod error;
pub mod helpers;
pub mod memory;
mod migrations;
pub mod repos;
mod store;

pub use error::StoreError;
pub use store::ResearchStore;

use libsql::Builder;

/// Production store backed by an embedded libSQL database.
///
/// Opens local files or `:memory:`, runs migrations on open, and generates
/// prefixed entity IDs. The CRUD surface lives in [`repos`].
pub struct LibsqlStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LibsqlStore {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let store = Self { db, conn };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g. `"mr-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, StoreError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
