//! Warrant repository.

use chrono::Utc;

use casetrack_core::entities::Warrant;
use casetrack_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, get_opt_string, parse_datetime};
use crate::service::CaseService;

const SELECT_COLS: &str = "id, case_id, warrant_number, document, created_at, updated_at";

fn row_to_warrant(row: &libsql::Row) -> Result<Warrant, DatabaseError> {
    Ok(Warrant {
        id: row.get::<String>(0)?,
        case_id: get_opt_string(row, 1)?,
        warrant_number: row.get::<String>(2)?,
        document: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl CaseService {
    /// Create a warrant. `document` is stored as given, usually a path
    /// relative to the file server.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidReference` if `case_id` names no case.
    pub async fn create_warrant(
        &self,
        case_id: Option<&str>,
        warrant_number: &str,
        document: Option<&str>,
    ) -> Result<Warrant, DatabaseError> {
        self.ensure_reference(EntityType::Case, "caseId", case_id)
            .await?;

        let now = Utc::now();
        let id = self.new_id(EntityType::Warrant).await?;

        self.db()
            .execute(
                "INSERT INTO warrants (id, case_id, warrant_number, document, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                libsql::params![
                    id.as_str(),
                    case_id,
                    warrant_number,
                    document,
                    format_timestamp(&now),
                    format_timestamp(&now)
                ],
            )
            .await?;

        self.get_warrant(&id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn find_warrant(&self, id: &str) -> Result<Option<Warrant>, DatabaseError> {
        let mut rows = self
            .db()
            .query(&format!("SELECT {SELECT_COLS} FROM warrants WHERE id = ?1"), [id])
            .await?;
        rows.next().await?.as_ref().map(row_to_warrant).transpose()
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no warrant has this id.
    pub async fn get_warrant(&self, id: &str) -> Result<Warrant, DatabaseError> {
        self.find_warrant(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Warrant, id))
    }

    /// Warrants issued for `case_id`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_warrants_for_case(
        &self,
        case_id: &str,
    ) -> Result<Vec<Warrant>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM warrants WHERE case_id = ?1
                     ORDER BY created_at DESC, rowid DESC"
                ),
                [case_id],
            )
            .await?;
        let mut warrants = Vec::new();
        while let Some(row) = rows.next().await? {
            warrants.push(row_to_warrant(&row)?);
        }
        Ok(warrants)
    }
}
