//! JsonSchema checks for the payloads clients exchange with the API.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use serde_json::json;

use casetrack_core::entities::*;
use casetrack_core::enums::FollowUpStatus;
use casetrack_core::requests::*;
use casetrack_core::responses::{InterrogationList, StatusCounts};

fn errors_for(schema: &serde_json::Value, instance: &serde_json::Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn detail_fixture() -> InterrogationDetail {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let satker = Satker {
        id: "stk-0000000000000001".into(),
        name: "Kejari Jakarta Pusat".into(),
        address: None,
        created_at: ts,
        updated_at: ts,
    };
    let case = Case {
        id: "cas-0000000000000001".into(),
        name: "Perkara 12/2024".into(),
        satker_id: Some("stk-0000000000000001".to_string()),
        created_at: ts,
        updated_at: ts,
    }
    .with_satker(Some(satker));
    let warrant = Warrant {
        id: "wrt-0000000000000001".into(),
        case_id: Some(case.id.clone()),
        warrant_number: "PRINT-01/2024".into(),
        document: Some("http://files.local/uploads/print-01.pdf".into()),
        created_at: ts,
        updated_at: ts,
    };
    Interrogation {
        id: "itg-0000000000000001".into(),
        case_id: Some("cas-0000000000000001".to_string()),
        warrant_id: Some("wrt-0000000000000001".to_string()),
        name: Some("A".into()),
        date: Some(ts),
        record: Some("r".into()),
        location: Some("l".into()),
        interrogators: vec!["x".into()],
        target_identification: Some("t".into()),
        result: Some("res".into()),
        status: FollowUpStatus::NotYetFollowedUp,
        created_at: ts,
        updated_at: ts,
    }
    .with_relations(Some(case), Some(warrant))
}

#[test]
fn detail_serializes_with_client_field_names() {
    let value = serde_json::to_value(detail_fixture()).unwrap();

    assert_eq!(value["_id"], "itg-0000000000000001");
    assert_eq!(value["caseId"]["satkerId"]["name"], "Kejari Jakarta Pusat");
    assert_eq!(value["warrantId"]["warrantNumber"], "PRINT-01/2024");
    assert_eq!(value["targetIdentification"], "t");
    assert_eq!(value["status"], 0);
    assert!(value.get("createdAt").is_some());

    let schema = serde_json::to_value(schema_for!(InterrogationDetail)).unwrap();
    let errors = errors_for(&schema, &value);
    assert!(errors.is_empty(), "detail should match its schema: {errors:?}");
}

#[test]
fn status_schema_only_admits_known_codes() {
    let schema = serde_json::to_value(schema_for!(InterrogationDetail)).unwrap();
    let mut value = serde_json::to_value(detail_fixture()).unwrap();
    value["status"] = json!(5);
    assert!(!errors_for(&schema, &value).is_empty());
}

#[test]
fn documented_create_payload_matches_request_schema() {
    let schema = serde_json::to_value(schema_for!(CreateInterrogationRequest)).unwrap();
    let payload = json!({
        "name": "A",
        "date": "2024-01-01",
        "record": "r",
        "location": "l",
        "interrogators": ["x"],
        "targetIdentification": "t",
        "result": "res"
    });
    let errors = errors_for(&schema, &payload);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn list_payload_carries_counts_and_rows() {
    let list = InterrogationList {
        counts: StatusCounts {
            not_yet_followed_up: 1,
            being_followed_up: 0,
            followed_up: 0,
        },
        interrogations: Vec::new(),
    };
    let schema = serde_json::to_value(schema_for!(InterrogationList)).unwrap();
    let value = serde_json::to_value(&list).unwrap();
    let errors = errors_for(&schema, &value);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(value["totalNotYetFollowedUp"], 1);
}

#[test]
fn interview_summary_uses_follow_up_key() {
    let ts = Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap();
    let interview = Interview {
        id: "itv-0000000000000001".into(),
        research_id: "rsc-0000000000000001".to_string(),
        name: Some("Saksi".into()),
        schedule: Some(ts),
        advice: None,
        follow_up: Some("panggil ulang".into()),
        result: None,
        status: FollowUpStatus::BeingFollowedUp,
        created_at: ts,
        updated_at: ts,
    }
    .with_research(ResearchName {
        id: "rsc-0000000000000001".into(),
        name: "Penelitian".into(),
    });

    let value = serde_json::to_value(&interview).unwrap();
    assert_eq!(value["follow_up"], "panggil ulang");
    assert_eq!(value["researchId"]["name"], "Penelitian");
    assert_eq!(value["status"], 1);
}
