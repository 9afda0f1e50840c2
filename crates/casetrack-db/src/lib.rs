//! # casetrack-db
//!
//! libSQL persistence for casetrack records.
//!
//! Holds interrogations and interviews together with the reference records
//! they point at (satkers, cases, warrants, research items). Repository
//! methods are implemented on [`service::CaseService`]; this module owns the
//! raw connection, migrations, and ID generation.

pub mod error;
pub mod filters;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;
pub mod updates;

use error::DatabaseError;
use libsql::Builder;
use libsql::params::IntoParams;

/// Central database handle.
///
/// Wraps a libSQL database and its single connection.
pub struct CaseDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CaseDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let case_db = Self { db, conn };
        case_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(case_db)
    }

    /// Execute a statement and return the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the statement fails.
    pub async fn execute(&self, sql: &str, params: impl IntoParams) -> Result<u64, DatabaseError> {
        Ok(self.conn.execute(sql, params).await?)
    }

    /// Run a query and return its rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the query fails.
    pub async fn query(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<libsql::Rows, DatabaseError> {
        Ok(self.conn.query(sql, params).await?)
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"itg-3f9a0c4b7d21e588"`.
    ///
    /// Uses `randomblob(8)` in SQL to produce 16-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(8)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use casetrack_core::ids::{ALL_PREFIXES, PREFIX_INTERROGATION, has_prefix};

    use super::*;

    async fn test_db() -> CaseDb {
        CaseDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "satkers",
            "cases",
            "warrants",
            "researches",
            "interrogations",
            "interviews",
        ];
        for table in &tables {
            let mut rows = db
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id(PREFIX_INTERROGATION).await.unwrap();
        assert!(has_prefix(&id, PREFIX_INTERROGATION), "got {id}");
        assert_eq!(id.len(), PREFIX_INTERROGATION.len() + 1 + 16);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(has_prefix(&id, prefix), "{id} should start with {prefix}-");
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            ids.insert(db.generate_id(PREFIX_INTERROGATION).await.unwrap());
        }
        assert_eq!(ids.len(), 100);
    }

    #[tokio::test]
    async fn status_check_constraint_rejects_unknown_codes() {
        let db = test_db().await;
        let result = db
            .execute(
                "INSERT INTO interrogations (id, status, created_at, updated_at)
                 VALUES ('itg-x', 7, '2024-01-01T00:00:00.000000Z', '2024-01-01T00:00:00.000000Z')",
                (),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;
        let result = db
            .execute(
                "INSERT INTO interviews (id, research_id, created_at, updated_at)
                 VALUES ('itv-x', 'rsc-missing', '2024-01-01T00:00:00.000000Z', '2024-01-01T00:00:00.000000Z')",
                (),
            )
            .await;
        assert!(result.is_err());
    }
}
