//! Interview repository. Mirrors the interrogation repository with a single,
//! required research reference.

use chrono::{DateTime, Utc};

use casetrack_core::entities::{Interview, InterviewDetail, InterviewSummary, ResearchName};
use casetrack_core::enums::{EntityType, FollowUpStatus};
use casetrack_core::responses::StatusCounts;

use crate::error::DatabaseError;
use crate::filters::RecordFilter;
use crate::helpers::{
    fold_name, format_timestamp, get_opt_string, get_status, opt_value, parse_datetime,
    parse_optional_datetime,
};
use crate::service::CaseService;
use crate::updates::interview::InterviewUpdate;

const SELECT_COLS: &str =
    "id, research_id, name, schedule, advice, follow_up, result, status, created_at, updated_at";

const LIST_COLS: &str = "v.id, v.research_id, v.name, v.schedule, v.advice, v.follow_up, \
                         v.result, v.status, v.created_at, v.updated_at, r.name";

/// Fields accepted when creating an interview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInterview {
    pub research_id: String,
    pub name: Option<String>,
    pub schedule: Option<DateTime<Utc>>,
    pub advice: Option<String>,
    pub follow_up: Option<String>,
    pub result: Option<String>,
}

fn row_to_interview(row: &libsql::Row) -> Result<Interview, DatabaseError> {
    Ok(Interview {
        id: row.get::<String>(0)?,
        research_id: row.get::<String>(1)?,
        name: get_opt_string(row, 2)?,
        schedule: parse_optional_datetime(get_opt_string(row, 3)?.as_deref())?,
        advice: get_opt_string(row, 4)?,
        follow_up: get_opt_string(row, 5)?,
        result: get_opt_string(row, 6)?,
        status: get_status(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

fn row_to_summary(row: &libsql::Row) -> Result<InterviewSummary, DatabaseError> {
    let base = row_to_interview(row)?;
    let research = ResearchName {
        id: base.research_id.clone(),
        name: row.get::<String>(10)?,
    };
    Ok(base.with_research(research))
}

impl CaseService {
    /// Totals per status over all interviews, regardless of any filter.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the aggregate query fails.
    pub async fn count_interviews_by_status(&self) -> Result<StatusCounts, DatabaseError> {
        self.count_by_status(EntityType::Interview).await
    }

    /// Interviews matching `filter`, newest first, with research name expanded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_interviews(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<InterviewSummary>, DatabaseError> {
        let (where_clause, params) = filter.to_sql("v");
        let sql = format!(
            "SELECT {LIST_COLS} FROM interviews v
             JOIN researches r ON r.id = v.research_id
             {where_clause}
             ORDER BY v.created_at DESC, v.rowid DESC"
        );
        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_summary(&row)?);
        }
        tracing::debug!(
            count = items.len(),
            filtered = !filter.is_empty(),
            "listed interviews"
        );
        Ok(items)
    }

    /// Insert a new interview at [`FollowUpStatus::NotYetFollowedUp`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidReference` if `research_id` names no
    /// research item.
    pub async fn create_interview(&self, new: &NewInterview) -> Result<Interview, DatabaseError> {
        self.ensure_reference(EntityType::Research, "researchId", Some(&new.research_id))
            .await?;

        let now = Utc::now();
        let id = self.new_id(EntityType::Interview).await?;
        let schedule = new.schedule.as_ref().map(format_timestamp);

        self.db()
            .execute(
                "INSERT INTO interviews (id, research_id, name, name_folded, schedule, advice,
                     follow_up, result, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                libsql::params![
                    id.as_str(),
                    new.research_id.as_str(),
                    new.name.as_deref(),
                    fold_name(new.name.as_deref()),
                    schedule.as_deref(),
                    new.advice.as_deref(),
                    new.follow_up.as_deref(),
                    new.result.as_deref(),
                    FollowUpStatus::NotYetFollowedUp.code(),
                    format_timestamp(&now),
                    format_timestamp(&now)
                ],
            )
            .await?;

        tracing::info!(id = %id, "interview created");
        self.get_interview(&id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn find_interview(&self, id: &str) -> Result<Option<Interview>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {SELECT_COLS} FROM interviews WHERE id = ?1"),
                [id],
            )
            .await?;
        rows.next().await?.as_ref().map(row_to_interview).transpose()
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no interview has this id.
    pub async fn get_interview(&self, id: &str) -> Result<Interview, DatabaseError> {
        self.find_interview(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Interview, id))
    }

    /// Interview with its research item expanded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no interview has this id, or
    /// `DatabaseError::InvalidState` if its research item is gone.
    pub async fn get_interview_detail(&self, id: &str) -> Result<InterviewDetail, DatabaseError> {
        let interview = self.get_interview(id).await?;
        let research = self
            .find_research(&interview.research_id)
            .await?
            .ok_or_else(|| {
                DatabaseError::InvalidState(format!(
                    "interview {id} references missing research {}",
                    interview.research_id
                ))
            })?;
        Ok(interview.with_research(research))
    }

    /// Apply `update` and return the stored record. An empty update only
    /// checks that the record exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no interview has this id.
    pub async fn update_interview(
        &self,
        id: &str,
        update: &InterviewUpdate,
    ) -> Result<Interview, DatabaseError> {
        if update.is_empty() {
            return self.get_interview(id).await;
        }
        self.ensure_exists(EntityType::Interview, id).await?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}, name_folded = ?{}", idx + 1));
            params.push(opt_value(name.as_deref()));
            params.push(opt_value(fold_name(name.as_deref()).as_deref()));
            idx += 2;
        }
        if let Some(ref schedule) = update.schedule {
            sets.push(format!("schedule = ?{idx}"));
            params.push(opt_value(
                schedule.as_ref().map(format_timestamp).as_deref(),
            ));
            idx += 1;
        }
        if let Some(ref advice) = update.advice {
            sets.push(format!("advice = ?{idx}"));
            params.push(opt_value(advice.as_deref()));
            idx += 1;
        }
        if let Some(ref follow_up) = update.follow_up {
            sets.push(format!("follow_up = ?{idx}"));
            params.push(opt_value(follow_up.as_deref()));
            idx += 1;
        }
        if let Some(ref result) = update.result {
            sets.push(format!("result = ?{idx}"));
            params.push(opt_value(result.as_deref()));
            idx += 1;
        }
        if let Some(status) = update.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.code().into());
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(format_timestamp(&Utc::now()).into());
        idx += 1;

        params.push(id.into());
        let sql = format!(
            "UPDATE interviews SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        self.db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::info!(id, fields = sets.len() - 1, "interview updated");
        self.get_interview(id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no interview has this id.
    pub async fn delete_interview(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM interviews WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Interview, id));
        }
        tracing::info!(id, "interview deleted");
        Ok(())
    }
}
