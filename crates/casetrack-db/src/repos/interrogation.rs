//! Interrogation repository: status totals, filtered listing, CRUD.

use chrono::{DateTime, Utc};

use casetrack_core::entities::{
    CaseName, Interrogation, InterrogationDetail, InterrogationSummary, WarrantNumber,
};
use casetrack_core::enums::{EntityType, FollowUpStatus};
use casetrack_core::responses::StatusCounts;

use crate::error::DatabaseError;
use crate::filters::RecordFilter;
use crate::helpers::{
    encode_string_list, fold_name, format_timestamp, get_opt_string, get_status, opt_value,
    parse_datetime, parse_optional_datetime, parse_string_list,
};
use crate::service::CaseService;
use crate::updates::interrogation::InterrogationUpdate;

const SELECT_COLS: &str = "id, case_id, warrant_id, name, date, record, location, interrogators, \
                           target_identification, result, status, created_at, updated_at";

const LIST_COLS: &str = "i.id, i.case_id, i.warrant_id, i.name, i.date, i.record, i.location, \
                         i.interrogators, i.target_identification, i.result, i.status, \
                         i.created_at, i.updated_at, c.name, w.warrant_number";

/// Fields accepted when creating an interrogation. Status is not settable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewInterrogation {
    pub case_id: Option<String>,
    pub warrant_id: Option<String>,
    pub name: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub record: Option<String>,
    pub location: Option<String>,
    pub interrogators: Vec<String>,
    pub target_identification: Option<String>,
    pub result: Option<String>,
}

fn row_to_interrogation(row: &libsql::Row) -> Result<Interrogation, DatabaseError> {
    Ok(Interrogation {
        id: row.get::<String>(0)?,
        case_id: get_opt_string(row, 1)?,
        warrant_id: get_opt_string(row, 2)?,
        name: get_opt_string(row, 3)?,
        date: parse_optional_datetime(get_opt_string(row, 4)?.as_deref())?,
        record: get_opt_string(row, 5)?,
        location: get_opt_string(row, 6)?,
        interrogators: parse_string_list(&row.get::<String>(7)?)?,
        target_identification: get_opt_string(row, 8)?,
        result: get_opt_string(row, 9)?,
        status: get_status(row, 10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
        updated_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

/// Decode a `LIST_COLS` row. Relations whose record is gone read as `None`.
fn row_to_summary(row: &libsql::Row) -> Result<InterrogationSummary, DatabaseError> {
    let base = row_to_interrogation(row)?;
    let case = match (base.case_id.clone(), get_opt_string(row, 13)?) {
        (Some(id), Some(name)) => Some(CaseName { id, name }),
        _ => None,
    };
    let warrant = match (base.warrant_id.clone(), get_opt_string(row, 14)?) {
        (Some(id), Some(warrant_number)) => Some(WarrantNumber { id, warrant_number }),
        _ => None,
    };
    Ok(base.with_relations(case, warrant))
}

impl CaseService {
    /// Totals per status over all interrogations, regardless of any filter.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the aggregate query fails.
    pub async fn count_interrogations_by_status(&self) -> Result<StatusCounts, DatabaseError> {
        self.count_by_status(EntityType::Interrogation).await
    }

    /// Interrogations matching `filter`, newest first, with case name and
    /// warrant number expanded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be decoded.
    pub async fn list_interrogations(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<InterrogationSummary>, DatabaseError> {
        let (where_clause, params) = filter.to_sql("i");
        let sql = format!(
            "SELECT {LIST_COLS} FROM interrogations i
             LEFT JOIN cases c ON c.id = i.case_id
             LEFT JOIN warrants w ON w.id = i.warrant_id
             {where_clause}
             ORDER BY i.created_at DESC, i.rowid DESC"
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
            "listed interrogations"
        );
        Ok(items)
    }

    /// Insert a new interrogation. Status always starts at
    /// [`FollowUpStatus::NotYetFollowedUp`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidReference` if `case_id` or `warrant_id`
    /// names no record.
    pub async fn create_interrogation(
        &self,
        new: &NewInterrogation,
    ) -> Result<Interrogation, DatabaseError> {
        self.ensure_reference(EntityType::Case, "caseId", new.case_id.as_deref())
            .await?;
        self.ensure_reference(EntityType::Warrant, "warrantId", new.warrant_id.as_deref())
            .await?;

        let now = Utc::now();
        let id = self.new_id(EntityType::Interrogation).await?;
        let date = new.date.as_ref().map(format_timestamp);

        self.db()
            .execute(
                "INSERT INTO interrogations (id, case_id, warrant_id, name, name_folded, date,
                     record, location, interrogators, target_identification, result, status,
                     created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
                libsql::params![
                    id.as_str(),
                    new.case_id.as_deref(),
                    new.warrant_id.as_deref(),
                    new.name.as_deref(),
                    fold_name(new.name.as_deref()),
                    date.as_deref(),
                    new.record.as_deref(),
                    new.location.as_deref(),
                    encode_string_list(&new.interrogators)?,
                    new.target_identification.as_deref(),
                    new.result.as_deref(),
                    FollowUpStatus::NotYetFollowedUp.code(),
                    format_timestamp(&now),
                    format_timestamp(&now)
                ],
            )
            .await?;

        tracing::info!(id = %id, "interrogation created");
        self.get_interrogation(&id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn find_interrogation(
        &self,
        id: &str,
    ) -> Result<Option<Interrogation>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {SELECT_COLS} FROM interrogations WHERE id = ?1"),
                [id],
            )
            .await?;
        rows.next()
            .await?
            .as_ref()
            .map(row_to_interrogation)
            .transpose()
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no interrogation has this id.
    pub async fn get_interrogation(&self, id: &str) -> Result<Interrogation, DatabaseError> {
        self.find_interrogation(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found(EntityType::Interrogation, id))
    }

    /// Interrogation with its case (and the case's satker) and warrant expanded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no interrogation has this id.
    pub async fn get_interrogation_detail(
        &self,
        id: &str,
    ) -> Result<InterrogationDetail, DatabaseError> {
        let interrogation = self.get_interrogation(id).await?;
        let case = match interrogation.case_id.as_deref() {
            Some(case_id) => self.find_case_detail(case_id).await?,
            None => None,
        };
        let warrant = match interrogation.warrant_id.as_deref() {
            Some(warrant_id) => self.find_warrant(warrant_id).await?,
            None => None,
        };
        Ok(interrogation.with_relations(case, warrant))
    }

    /// Apply `update` and return the stored record. An empty update only
    /// checks that the record exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no interrogation has this id.
    pub async fn update_interrogation(
        &self,
        id: &str,
        update: &InterrogationUpdate,
    ) -> Result<Interrogation, DatabaseError> {
        if update.is_empty() {
            return self.get_interrogation(id).await;
        }
        self.ensure_exists(EntityType::Interrogation, id).await?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}, name_folded = ?{}", idx + 1));
            params.push(opt_value(name.as_deref()));
            params.push(opt_value(fold_name(name.as_deref()).as_deref()));
            idx += 2;
        }
        if let Some(ref date) = update.date {
            sets.push(format!("date = ?{idx}"));
            params.push(opt_value(date.as_ref().map(format_timestamp).as_deref()));
            idx += 1;
        }
        if let Some(ref record) = update.record {
            sets.push(format!("record = ?{idx}"));
            params.push(opt_value(record.as_deref()));
            idx += 1;
        }
        if let Some(ref location) = update.location {
            sets.push(format!("location = ?{idx}"));
            params.push(opt_value(location.as_deref()));
            idx += 1;
        }
        if let Some(ref interrogators) = update.interrogators {
            sets.push(format!("interrogators = ?{idx}"));
            params.push(encode_string_list(interrogators)?.into());
            idx += 1;
        }
        if let Some(ref target) = update.target_identification {
            sets.push(format!("target_identification = ?{idx}"));
            params.push(opt_value(target.as_deref()));
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
            "UPDATE interrogations SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        self.db()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::info!(id, fields = sets.len() - 1, "interrogation updated");
        self.get_interrogation(id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no interrogation has this id.
    pub async fn delete_interrogation(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM interrogations WHERE id = ?1", [id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::not_found(EntityType::Interrogation, id));
        }
        tracing::info!(id, "interrogation deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{
        seed_case_with_warrant, set_created_at, set_status, test_service,
    };
    use crate::updates::interrogation::InterrogationUpdateBuilder;

    use super::*;

    fn named(name: &str) -> NewInterrogation {
        NewInterrogation {
            name: Some(name.to_string()),
            ..NewInterrogation::default()
        }
    }

    #[tokio::test]
    async fn create_forces_initial_status_and_keeps_fields() {
        let svc = test_service().await;
        let created_on = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let created = svc
            .create_interrogation(&NewInterrogation {
                name: Some("A".into()),
                date: Some(created_on),
                record: Some("r".into()),
                location: Some("l".into()),
                interrogators: vec!["x".into()],
                target_identification: Some("t".into()),
                result: Some("res".into()),
                ..NewInterrogation::default()
            })
            .await
            .unwrap();

        assert!(created.id.starts_with("itg-"));
        assert_eq!(created.status, FollowUpStatus::NotYetFollowedUp);
        assert_eq!(created.date, Some(created_on));
        assert_eq!(created.interrogators, vec!["x".to_string()]);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn create_rejects_unknown_references() {
        let svc = test_service().await;
        let err = svc
            .create_interrogation(&NewInterrogation {
                case_id: Some("cas-missing".into()),
                ..NewInterrogation::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidReference { field: "caseId", .. }));

        let err = svc
            .create_interrogation(&NewInterrogation {
                warrant_id: Some("wrt-missing".into()),
                ..NewInterrogation::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidReference { field: "warrantId", .. }));
    }

    #[tokio::test]
    async fn list_expands_case_name_and_warrant_number() {
        let svc = test_service().await;
        let (case, warrant) = seed_case_with_warrant(&svc).await;
        svc.create_interrogation(&NewInterrogation {
            case_id: Some(case.id.clone()),
            warrant_id: Some(warrant.id.clone()),
            ..named("Budi")
        })
        .await
        .unwrap();
        svc.create_interrogation(&named("Tanpa relasi")).await.unwrap();

        let rows = svc.list_interrogations(&RecordFilter::new()).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].case_id.is_none());
        assert_eq!(
            rows[1].case_id,
            Some(CaseName {
                id: case.id,
                name: case.name
            })
        );
        assert_eq!(
            rows[1].warrant_id.as_ref().map(|w| w.warrant_number.as_str()),
            Some(warrant.warrant_number.as_str())
        );
    }

    #[tokio::test]
    async fn list_is_newest_first_and_filters_by_name() {
        let svc = test_service().await;
        for name in ["Budi Santoso", "Siti", "budiman"] {
            svc.create_interrogation(&named(name)).await.unwrap();
        }

        let all: Vec<_> = svc
            .list_interrogations(&RecordFilter::new())
            .await
            .unwrap()
            .into_iter()
            .filter_map(|r| r.name)
            .collect();
        assert_eq!(all, ["budiman", "Siti", "Budi Santoso"]);

        let budi: Vec<_> = svc
            .list_interrogations(&RecordFilter::new().name("BUDI"))
            .await
            .unwrap()
            .into_iter()
            .filter_map(|r| r.name)
            .collect();
        assert_eq!(budi, ["budiman", "Budi Santoso"]);
    }

    #[tokio::test]
    async fn empty_text_fields_read_back_unchanged() {
        let svc = test_service().await;
        let created = svc
            .create_interrogation(&NewInterrogation {
                name: Some("A".into()),
                location: Some(String::new()),
                ..NewInterrogation::default()
            })
            .await
            .unwrap();

        let fetched = svc.get_interrogation(&created.id).await.unwrap();
        assert_eq!(fetched.location.as_deref(), Some(""));
        assert_eq!(fetched.record, None);
    }

    #[tokio::test]
    async fn name_filter_folds_non_ascii_and_follows_renames() {
        let svc = test_service().await;
        let elise = svc.create_interrogation(&named("ÉLISE Çelik")).await.unwrap();
        svc.create_interrogation(&named("Elise")).await.unwrap();

        let by_name = |needle: &str| {
            let filter = RecordFilter::new().name(needle);
            let svc = &svc;
            async move {
                svc.list_interrogations(&filter)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|r| r.id)
                    .collect::<Vec<_>>()
            }
        };
        assert_eq!(by_name("élise çel").await, [elise.id.clone()]);

        let rename = InterrogationUpdateBuilder::new()
            .name(Some("Ömer".into()))
            .build();
        svc.update_interrogation(&elise.id, &rename).await.unwrap();
        assert!(by_name("élise").await.is_empty());
        assert_eq!(by_name("ömer").await, [elise.id.clone()]);
    }

    #[tokio::test]
    async fn status_filter_applies_to_zero() {
        let svc = test_service().await;
        let a = svc.create_interrogation(&named("a")).await.unwrap();
        svc.create_interrogation(&named("b")).await.unwrap();
        set_status(&svc, EntityType::Interrogation, &a.id, 2).await;

        let open = svc
            .list_interrogations(&RecordFilter::new().status(FollowUpStatus::NotYetFollowedUp))
            .await
            .unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].name.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn date_range_covers_whole_end_day() {
        let svc = test_service().await;
        let inside = svc.create_interrogation(&named("inside")).await.unwrap();
        let outside = svc.create_interrogation(&named("outside")).await.unwrap();
        set_created_at(
            &svc,
            EntityType::Interrogation,
            &inside.id,
            "2024-01-31T23:59:59.500000Z",
        )
        .await;
        set_created_at(
            &svc,
            EntityType::Interrogation,
            &outside.id,
            "2024-02-01T00:00:00.000000Z",
        )
        .await;

        let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d);
        let filter = RecordFilter::new().created_within(jan(1), jan(31));
        let rows = svc.list_interrogations(&filter).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, inside.id);

        let start_only = RecordFilter::new().created_within(jan(1), None);
        assert_eq!(svc.list_interrogations(&start_only).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn counts_ignore_filters_and_cover_all_records() {
        let svc = test_service().await;
        let a = svc.create_interrogation(&named("a")).await.unwrap();
        let b = svc.create_interrogation(&named("b")).await.unwrap();
        svc.create_interrogation(&named("c")).await.unwrap();
        set_status(&svc, EntityType::Interrogation, &a.id, 1).await;
        set_status(&svc, EntityType::Interrogation, &b.id, 2).await;

        let counts = svc.count_interrogations_by_status().await.unwrap();
        assert_eq!(
            counts,
            StatusCounts {
                not_yet_followed_up: 1,
                being_followed_up: 1,
                followed_up: 1,
            }
        );
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn detail_expands_case_satker_and_warrant() {
        let svc = test_service().await;
        let (case, warrant) = seed_case_with_warrant(&svc).await;
        let created = svc
            .create_interrogation(&NewInterrogation {
                case_id: Some(case.id.clone()),
                warrant_id: Some(warrant.id.clone()),
                ..named("A")
            })
            .await
            .unwrap();

        let detail = svc.get_interrogation_detail(&created.id).await.unwrap();
        let detail_case = detail.case_id.unwrap();
        assert_eq!(detail_case.id, case.id);
        assert!(detail_case.satker_id.is_some());
        assert_eq!(detail.warrant_id, Some(warrant));
    }

    #[tokio::test]
    async fn update_writes_only_given_fields() {
        let svc = test_service().await;
        let created = svc
            .create_interrogation(&NewInterrogation {
                location: Some("Jakarta".into()),
                ..named("A")
            })
            .await
            .unwrap();

        let update = InterrogationUpdateBuilder::new()
            .name(Some("B".into()))
            .status(FollowUpStatus::BeingFollowedUp)
            .build();
        let updated = svc.update_interrogation(&created.id, &update).await.unwrap();

        assert_eq!(updated.name.as_deref(), Some("B"));
        assert_eq!(updated.location.as_deref(), Some("Jakarta"));
        assert_eq!(updated.status, FollowUpStatus::BeingFollowedUp);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_can_clear_nullable_fields() {
        let svc = test_service().await;
        let created = svc
            .create_interrogation(&NewInterrogation {
                result: Some("res".into()),
                interrogators: vec!["x".into()],
                ..named("A")
            })
            .await
            .unwrap();

        let update = InterrogationUpdateBuilder::new()
            .result(None)
            .interrogators(Vec::new())
            .build();
        let updated = svc.update_interrogation(&created.id, &update).await.unwrap();
        assert!(updated.result.is_none());
        assert!(updated.interrogators.is_empty());
    }

    #[tokio::test]
    async fn empty_update_returns_current_record() {
        let svc = test_service().await;
        let created = svc.create_interrogation(&named("A")).await.unwrap();
        let same = svc
            .update_interrogation(&created.id, &InterrogationUpdate::default())
            .await
            .unwrap();
        assert_eq!(same, created);
    }

    #[tokio::test]
    async fn update_and_delete_missing_are_not_found() {
        let svc = test_service().await;
        let update = InterrogationUpdateBuilder::new().name(Some("x".into())).build();
        let err = svc.update_interrogation("itg-missing", &update).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotFound { .. }));

        let err = svc.delete_interrogation("itg-missing").await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::NotFound { entity: EntityType::Interrogation, .. }
        ));
    }

    #[tokio::test]
    async fn delete_removes_only_target() {
        let svc = test_service().await;
        let a = svc.create_interrogation(&named("a")).await.unwrap();
        let b = svc.create_interrogation(&named("b")).await.unwrap();

        svc.delete_interrogation(&a.id).await.unwrap();

        assert!(svc.find_interrogation(&a.id).await.unwrap().is_none());
        assert_eq!(svc.get_interrogation(&b.id).await.unwrap(), b);
        assert!(svc.delete_interrogation(&a.id).await.is_err());
    }
}
