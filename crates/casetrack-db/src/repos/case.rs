//! Case repository.

use chrono::Utc;

use casetrack_core::entities::{Case, CaseDetail};
use casetrack_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, get_opt_string, parse_datetime};
use crate::service::CaseService;

const SELECT_COLS: &str = "id, name, satker_id, created_at, updated_at";

fn row_to_case(row: &libsql::Row) -> Result<Case, DatabaseError> {
    Ok(Case {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        satker_id: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl CaseService {
    /// Create a case, optionally owned by a satker.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidReference` if `satker_id` names no satker.
    pub async fn create_case(
        &self,
        name: &str,
        satker_id: Option<&str>,
    ) -> Result<Case, DatabaseError> {
        self.ensure_reference(EntityType::Satker, "satkerId", satker_id)
            .await?;

        let now = Utc::now();
        let id = self.new_id(EntityType::Case).await?;

        self.db()
            .execute(
                "INSERT INTO cases (id, name, satker_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    name,
                    satker_id,
                    format_timestamp(&now),
                    format_timestamp(&now)
                ],
            )
            .await?;

        self.get_case(&id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn find_case(&self, id: &str) -> Result<Option<Case>, DatabaseError> {
        let mut rows = self
            .db()
            .query(&format!("SELECT {SELECT_COLS} FROM cases WHERE id = ?1"), [id])
            .await?;
        rows.next().await?.as_ref().map(row_to_case).transpose()
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no case has this id.
    pub async fn get_case(&self, id: &str) -> Result<Case, DatabaseError> {
        self.find_case(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Case, id))
    }

    /// Case with its satker expanded. A dangling satker reference reads as `None`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn find_case_detail(&self, id: &str) -> Result<Option<CaseDetail>, DatabaseError> {
        let Some(case) = self.find_case(id).await? else {
            return Ok(None);
        };
        let satker = match case.satker_id.as_deref() {
            Some(satker_id) => self.find_satker(satker_id).await?,
            None => None,
        };
        Ok(Some(case.with_satker(satker)))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no case has this id.
    pub async fn get_case_detail(&self, id: &str) -> Result<CaseDetail, DatabaseError> {
        self.find_case_detail(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Case, id))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_cases(&self) -> Result<Vec<Case>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {SELECT_COLS} FROM cases ORDER BY created_at DESC, rowid DESC"),
                (),
            )
            .await?;
        let mut cases = Vec::new();
        while let Some(row) = rows.next().await? {
            cases.push(row_to_case(&row)?);
        }
        Ok(cases)
    }
}
