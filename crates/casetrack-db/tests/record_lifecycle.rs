//! End-to-end checks of the interrogation store through the public API.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use casetrack_core::enums::FollowUpStatus;
use casetrack_db::error::DatabaseError;
use casetrack_db::filters::RecordFilter;
use casetrack_db::repos::interrogation::NewInterrogation;
use casetrack_db::service::CaseService;
use casetrack_db::updates::interrogation::InterrogationUpdateBuilder;

async fn service() -> CaseService {
    CaseService::new_local(":memory:").await.unwrap()
}

async fn create(svc: &CaseService, name: &str) -> String {
    svc.create_interrogation(&NewInterrogation {
        name: Some(name.to_string()),
        ..NewInterrogation::default()
    })
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn counts_sum_to_record_total_after_mixed_mutations() {
    let svc = service().await;
    let ids = [
        create(&svc, "a").await,
        create(&svc, "b").await,
        create(&svc, "c").await,
        create(&svc, "d").await,
    ];

    let to_done = InterrogationUpdateBuilder::new()
        .status(FollowUpStatus::FollowedUp)
        .build();
    svc.update_interrogation(&ids[0], &to_done).await.unwrap();
    svc.delete_interrogation(&ids[1]).await.unwrap();

    let counts = svc.count_interrogations_by_status().await.unwrap();
    let rows = svc.list_interrogations(&RecordFilter::new()).await.unwrap();
    assert_eq!(counts.total(), 3);
    assert_eq!(rows.len(), 3);
    assert_eq!(counts.followed_up, 1);
}

#[tokio::test]
async fn filtered_list_leaves_counts_unchanged() {
    let svc = service().await;
    create(&svc, "Budi").await;
    create(&svc, "Siti").await;

    let before = svc.count_interrogations_by_status().await.unwrap();
    let rows = svc
        .list_interrogations(&RecordFilter::new().name("budi"))
        .await
        .unwrap();
    let after = svc.count_interrogations_by_status().await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(before, after);
    assert_eq!(after.not_yet_followed_up, 2);
}

#[tokio::test]
async fn start_date_without_end_date_has_no_effect() {
    let svc = service().await;
    create(&svc, "a").await;
    create(&svc, "b").await;

    let far_future = NaiveDate::from_ymd_opt(2999, 1, 1);
    let filter = RecordFilter::new().created_within(far_future, None);
    assert_eq!(svc.list_interrogations(&filter).await.unwrap().len(), 2);

    let filter = RecordFilter::new().created_within(far_future, far_future);
    assert!(svc.list_interrogations(&filter).await.unwrap().is_empty());
}

#[tokio::test]
async fn reads_of_deleted_records_are_not_found() {
    let svc = service().await;
    let keep = create(&svc, "keep").await;
    let gone = create(&svc, "gone").await;

    svc.delete_interrogation(&gone).await.unwrap();

    assert!(matches!(
        svc.get_interrogation_detail(&gone).await,
        Err(DatabaseError::NotFound { .. })
    ));
    assert_eq!(svc.get_interrogation(&keep).await.unwrap().id, keep);
}

#[tokio::test]
async fn file_backed_database_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("casetrack.db");
    let path = path.to_str().unwrap();

    let id = {
        let svc = CaseService::new_local(path).await.unwrap();
        create(&svc, "persisted").await
    };

    let svc = CaseService::new_local(path).await.unwrap();
    let stored = svc.get_interrogation(&id).await.unwrap();
    assert_eq!(stored.name.as_deref(), Some("persisted"));
}
