//! Integration tests for the repository decode layer.

use std::sync::Arc;

use bhub_client::{ApiError, GroupRepository, MemoryGroupApi, RecordedCall};
use bhub_core::ErrorCategory;

fn repository(api: MemoryGroupApi) -> (GroupRepository, Arc<MemoryGroupApi>) {
    let api = Arc::new(api);
    (GroupRepository::new(api.clone()), api)
}

#[tokio::test]
async fn list_groups_preserves_server_order() {
    let body = r#"[
        {"id":"1","name":"Tech Enthusiasts","description":"Tech","memberCount":150},
        {"id":"2","name":"Digital Artists","description":"Art","memberCount":89}
    ]"#;
    let (repo, _) = repository(MemoryGroupApi::new().respond(body));

    let groups = repo.list_groups().await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].id, "1");
    assert_eq!(groups[1].id, "2");
    assert_eq!(groups[0].member_count, 150);
}

#[tokio::test]
async fn decode_tolerates_unknown_fields() {
    let body = r#"{"id":"9","name":"Runners","description":"5k and up","memberCount":40,"ownerId":"u7","tags":["sport"]}"#;
    let (repo, _) = repository(MemoryGroupApi::new().respond(body));

    let group = repo.get_group("9").await.unwrap();
    assert_eq!(group.name, "Runners");
    assert_eq!(group.member_count, 40);
}

#[tokio::test]
async fn malformed_json_surfaces_as_decode_error() {
    let (repo, _) = repository(MemoryGroupApi::new().respond("not json at all"));

    let error = repo.list_groups().await.unwrap_err();
    assert!(matches!(error, ApiError::Decode { endpoint: "list_groups", .. }));
    assert_eq!(error.category(), ErrorCategory::Decode);
}

#[tokio::test]
async fn schema_mismatch_surfaces_as_decode_error() {
    // Well-formed JSON, wrong shape: memberCount is missing.
    let body = r#"{"id":"1","name":"Tech Enthusiasts","description":"Tech"}"#;
    let (repo, _) = repository(MemoryGroupApi::new().respond(body));

    let error = repo.get_group("1").await.unwrap_err();
    assert!(matches!(error, ApiError::Decode { endpoint: "get_group", .. }));
}

#[tokio::test]
async fn missing_group_maps_to_not_found() {
    let (repo, _) = repository(MemoryGroupApi::new().fail_with_status(404));

    let error = repo.get_group("no-such-id").await.unwrap_err();
    assert_eq!(error.status(), Some(404));
    assert_eq!(error.category(), ErrorCategory::NotFound);
}

#[tokio::test]
async fn create_group_passes_fields_through_and_decodes_reply() {
    let body = r#"{"id":"42","name":"Chess Club","description":"Openings","memberCount":1}"#;
    let (repo, api) = repository(MemoryGroupApi::new().respond(body));

    let group = repo.create_group("Chess Club", "Openings").await.unwrap();
    assert_eq!(group.id, "42");
    assert_eq!(
        api.calls(),
        vec![RecordedCall::CreateGroup {
            name: "Chess Club".into(),
            description: "Openings".into(),
        }]
    );
}

#[tokio::test]
async fn join_group_collapses_any_fault_to_false() {
    for status in [400, 404, 409, 500, 503] {
        let (repo, _) = repository(MemoryGroupApi::new().fail_with_status(status));
        assert!(!repo.join_group("1", "user-1").await, "status {status}");
    }
}

#[tokio::test]
async fn join_group_succeeds_regardless_of_payload() {
    // Arbitrary, even non-JSON, reply bodies still count as success.
    for body in ["", "ok", "{\"message\":\"joined\"}", "<html>"] {
        let (repo, api) = repository(MemoryGroupApi::new().respond(body));
        assert!(repo.join_group("3", "user-9").await, "body {body:?}");
        assert_eq!(
            api.calls(),
            vec![RecordedCall::JoinGroup {
                group_id: "3".into(),
                user_id: "user-9".into(),
            }]
        );
    }
}
