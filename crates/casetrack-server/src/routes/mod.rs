//! Route table.

pub mod interrogations;
pub mod interviews;
pub mod references;

use axum::Router;
use axum::body::Bytes;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::routing::{get, post};

use casetrack_core::requests::ListQuery;
use casetrack_db::filters::RecordFilter;

use crate::envelope::Message;
use crate::error::ApiError;
use crate::state::AppState;

/// All casetrack routes, unlayered.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/interrogations",
            get(interrogations::list).post(interrogations::create),
        )
        .route(
            "/interrogations/{id}",
            get(interrogations::detail)
                .put(interrogations::update)
                .patch(interrogations::update)
                .delete(interrogations::remove),
        )
        .route(
            "/interviews",
            get(interviews::list).post(interviews::create),
        )
        .route(
            "/interviews/{id}",
            get(interviews::detail)
                .put(interviews::update)
                .patch(interviews::update)
                .delete(interviews::remove),
        )
        .route("/satkers", post(references::create_satker))
        .route("/satkers/{id}", get(references::get_satker))
        .route("/cases", post(references::create_case))
        .route("/cases/{id}", get(references::get_case))
        .route("/warrants", post(references::create_warrant))
        .route("/warrants/{id}", get(references::get_warrant))
        .route("/researches", post(references::create_research))
        .route("/researches/{id}", get(references::get_research))
}

async fn health() -> Message {
    Message::ok("ok")
}

/// List filters from a JSON body when the request carries one, otherwise
/// from the query string.
pub(crate) fn list_query(
    query: Result<Query<ListQuery>, QueryRejection>,
    body: &Bytes,
) -> Result<ListQuery, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        let Query(query) = query?;
        return Ok(query);
    }
    serde_json::from_slice(body).map_err(|e| {
        ApiError::Validation(format!(
            "Failed to deserialize the JSON body into the target type: {e}"
        ))
    })
}

/// Turn list query parameters into a store filter.
///
/// The date range applies only when both `startDate` and `endDate` are set.
pub(crate) fn record_filter(query: &ListQuery) -> Result<RecordFilter, ApiError> {
    let mut filter = RecordFilter::new();
    if let Some(name) = query.name() {
        filter = filter.name(name);
    }
    if let Some(status) = query.status()? {
        filter = filter.status(status);
    }
    let (start, end) = query.days()?;
    Ok(filter.created_within(start, end))
}

#[cfg(test)]
mod tests {
    use casetrack_core::enums::FollowUpStatus;

    use super::*;

    #[test]
    fn record_filter_maps_every_parameter() {
        let query = ListQuery {
            name: Some("budi".into()),
            status: Some("1".into()),
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-01-31".into()),
        };
        let filter = record_filter(&query).unwrap();
        assert_eq!(filter.name.as_deref(), Some("budi"));
        assert_eq!(filter.status, Some(FollowUpStatus::BeingFollowedUp));
        assert!(filter.created.is_some());
    }

    #[test]
    fn body_filters_take_precedence_over_query_string() {
        let from_query = Ok(Query(ListQuery {
            name: Some("siti".into()),
            ..Default::default()
        }));
        let body = Bytes::from_static(br#"{"name":"budi","status":0}"#);
        let query = list_query(from_query, &body).unwrap();
        assert_eq!(query.name(), Some("budi"));
        assert_eq!(query.status().unwrap(), Some(FollowUpStatus::NotYetFollowedUp));
    }

    #[test]
    fn blank_body_falls_back_to_query_string() {
        let from_query = Ok(Query(ListQuery {
            name: Some("siti".into()),
            ..Default::default()
        }));
        let query = list_query(from_query, &Bytes::from_static(b" \n")).unwrap();
        assert_eq!(query.name(), Some("siti"));
    }

    #[test]
    fn malformed_body_is_a_validation_error() {
        let body = Bytes::from_static(b"{name:");
        let err = list_query(Ok(Query(ListQuery::default())), &body).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn record_filter_rejects_bad_dates() {
        let query = ListQuery {
            start_date: Some("kemarin".into()),
            end_date: Some("2024-01-31".into()),
            ..Default::default()
        };
        assert!(matches!(record_filter(&query), Err(ApiError::Validation(_))));
    }
}
