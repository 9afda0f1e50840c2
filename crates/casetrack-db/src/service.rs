//! Service layer over `CaseDb`.
//!
//! All repo methods are implemented as `impl CaseService`. Shared lookups
//! used by several repos (existence checks, status totals) live here.

use casetrack_core::enums::{EntityType, FollowUpStatus};
use casetrack_core::ids::has_prefix;
use casetrack_core::responses::StatusCounts;

use crate::CaseDb;
use crate::error::DatabaseError;

/// Entry point for every record operation.
pub struct CaseService {
    db: CaseDb,
}

impl CaseService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(CaseDb::open_local(db_path).await?))
    }

    /// Create from an existing `CaseDb`.
    #[must_use]
    pub const fn from_db(db: CaseDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &CaseDb {
        &self.db
    }

    /// Whether a record with `id` exists in the table for `entity`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn record_exists(&self, entity: EntityType, id: &str) -> Result<bool, DatabaseError> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?1", entity.table());
        let mut rows = self.db.query(&sql, [id]).await?;
        Ok(rows.next().await?.is_some())
    }

    /// Fresh id carrying the prefix for `entity`.
    pub(crate) async fn new_id(&self, entity: EntityType) -> Result<String, DatabaseError> {
        self.db.generate_id(entity.id_prefix()).await
    }

    /// Fail with `NotFound` unless the record exists.
    pub(crate) async fn ensure_exists(
        &self,
        entity: EntityType,
        id: &str,
    ) -> Result<(), DatabaseError> {
        if self.record_exists(entity, id).await? {
            Ok(())
        } else {
            Err(DatabaseError::not_found(entity, id))
        }
    }

    /// Fail with `InvalidReference` if `id` is set but names no record.
    /// Ids without the entity's prefix are rejected without a lookup.
    pub(crate) async fn ensure_reference(
        &self,
        entity: EntityType,
        field: &'static str,
        id: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let Some(id) = id else {
            return Ok(());
        };
        if has_prefix(id, entity.id_prefix()) && self.record_exists(entity, id).await? {
            Ok(())
        } else {
            Err(DatabaseError::InvalidReference {
                field,
                id: id.to_string(),
            })
        }
    }

    /// Totals per follow-up status over every record of `entity`.
    ///
    /// Statuses with no records report zero.
    pub(crate) async fn count_by_status(
        &self,
        entity: EntityType,
    ) -> Result<StatusCounts, DatabaseError> {
        let sql = format!(
            "SELECT status, COUNT(*) FROM {} GROUP BY status",
            entity.table()
        );
        let mut rows = self.db.query(&sql, ()).await?;
        let mut counts = StatusCounts::default();
        while let Some(row) = rows.next().await? {
            let status = FollowUpStatus::try_from(row.get::<i64>(0)?)
                .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;
            let count = u64::try_from(row.get::<i64>(1)?)
                .map_err(|e| DatabaseError::InvalidState(e.to_string()))?;
            counts.add(status, count);
        }
        Ok(counts)
    }
}
