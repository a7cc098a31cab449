mod common;

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use serde_json::json;

use game_metadata::error::MetadataError;
use game_metadata::models::Candidate;
use game_metadata::services::OperationOutput;

use common::{mock_igdb, mount_resource, service};

fn params(key: &str, value: &str) -> HashMap<String, String> {
    HashMap::from([(key.to_string(), value.to_string())])
}

#[tokio::test]
async fn options_dispatches_by_name() {
    let server = mock_igdb().await;
    mount_resource(
        &server,
        "games",
        json!([{ "id": 26226, "name": "Celeste", "first_release_date": 1516665600 }]),
    )
    .await;

    let output = service(&server)
        .handle("options", &params("name", "celeste"))
        .await
        .expect("options never fail");

    assert_eq!(
        output,
        OperationOutput::Candidates(vec![Candidate::new(26226, "Celeste", Some(1516665600))])
    );
}

#[tokio::test]
async fn info_dispatches_by_id() {
    let server = mock_igdb().await;
    mount_resource(&server, "games", json!([{ "id": 26226, "name": "Celeste" }])).await;

    let output = service(&server)
        .handle("info", &params("id", "26226"))
        .await
        .expect("info should resolve");

    match output {
        OperationOutput::Detail(record) => assert_eq!(record.id, "26226"),
        other => panic!("expected a detail record, got {other:?}"),
    }
}

#[tokio::test]
async fn info_for_missing_game_is_not_found() {
    let server = mock_igdb().await;
    mount_resource(&server, "games", json!([])).await;

    let result = service(&server).handle("info", &params("id", "1")).await;

    assert!(matches!(result, Err(MetadataError::NotFound(_))));
}

#[tokio::test]
async fn candidate_output_serializes_as_bare_list() {
    let output = OperationOutput::Candidates(vec![Candidate::new(1, "Hades", None)]);

    assert_eq!(
        serde_json::to_value(&output).expect("output should serialize"),
        json!([{ "id": "1", "name": "Hades" }])
    );
}
