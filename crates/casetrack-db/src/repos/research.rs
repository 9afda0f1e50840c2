//! Research repository.

use chrono::Utc;

use casetrack_core::entities::Research;
use casetrack_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, get_opt_string, parse_datetime};
use crate::service::CaseService;

const SELECT_COLS: &str = "id, name, description, created_at, updated_at";

fn row_to_research(row: &libsql::Row) -> Result<Research, DatabaseError> {
    Ok(Research {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        description: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl CaseService {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn create_research(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Research, DatabaseError> {
        let now = Utc::now();
        let id = self.new_id(EntityType::Research).await?;

        self.db()
            .execute(
                "INSERT INTO researches (id, name, description, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    name,
                    description,
                    format_timestamp(&now),
                    format_timestamp(&now)
                ],
            )
            .await?;

        self.get_research(&id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn find_research(&self, id: &str) -> Result<Option<Research>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {SELECT_COLS} FROM researches WHERE id = ?1"),
                [id],
            )
            .await?;
        rows.next().await?.as_ref().map(row_to_research).transpose()
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no research item has this id.
    pub async fn get_research(&self, id: &str) -> Result<Research, DatabaseError> {
        self.find_research(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Research, id))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_researches(&self) -> Result<Vec<Research>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM researches ORDER BY created_at DESC, rowid DESC"
                ),
                (),
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_research(&row)?);
        }
        Ok(items)
    }
}
