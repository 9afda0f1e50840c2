//! Satker repository.

use chrono::Utc;

use casetrack_core::entities::Satker;
use casetrack_core::enums::EntityType;

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, get_opt_string, parse_datetime};
use crate::service::CaseService;

const SELECT_COLS: &str = "id, name, address, created_at, updated_at";

fn row_to_satker(row: &libsql::Row) -> Result<Satker, DatabaseError> {
    Ok(Satker {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        address: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
        updated_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl CaseService {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn create_satker(
        &self,
        name: &str,
        address: Option<&str>,
    ) -> Result<Satker, DatabaseError> {
        let now = Utc::now();
        let id = self.new_id(EntityType::Satker).await?;

        self.db()
            .execute(
                "INSERT INTO satkers (id, name, address, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    id.as_str(),
                    name,
                    address,
                    format_timestamp(&now),
                    format_timestamp(&now)
                ],
            )
            .await?;

        self.get_satker(&id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn find_satker(&self, id: &str) -> Result<Option<Satker>, DatabaseError> {
        let mut rows = self
            .db()
            .query(&format!("SELECT {SELECT_COLS} FROM satkers WHERE id = ?1"), [id])
            .await?;
        rows.next().await?.as_ref().map(row_to_satker).transpose()
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no satker has this id.
    pub async fn get_satker(&self, id: &str) -> Result<Satker, DatabaseError> {
        self.find_satker(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Satker, id))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_satkers(&self) -> Result<Vec<Satker>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {SELECT_COLS} FROM satkers ORDER BY name"),
                (),
            )
            .await?;
        let mut satkers = Vec::new();
        while let Some(row) = rows.next().await? {
            satkers.push(row_to_satker(&row)?);
        }
        Ok(satkers)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_service;

    use super::*;

    #[tokio::test]
    async fn create_and_get_satker() {
        let svc = test_service().await;
        let satker = svc
            .create_satker("Kejari Bandung", Some("Jl. Jakarta 42"))
            .await
            .unwrap();
        assert!(satker.id.starts_with("stk-"));

        let fetched = svc.get_satker(&satker.id).await.unwrap();
        assert_eq!(fetched, satker);
        assert_eq!(fetched.address.as_deref(), Some("Jl. Jakarta 42"));
    }

    #[tokio::test]
    async fn get_missing_satker_is_not_found() {
        let svc = test_service().await;
        let err = svc.get_satker("stk-missing").await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::NotFound { entity: EntityType::Satker, .. }
        ));
    }

    #[tokio::test]
    async fn list_satkers_sorted_by_name() {
        let svc = test_service().await;
        svc.create_satker("Kejari Surabaya", None).await.unwrap();
        svc.create_satker("Kejari Bandung", None).await.unwrap();

        let names: Vec<_> = svc
            .list_satkers()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Kejari Bandung", "Kejari Surabaya"]);
    }
}
