use assert_matches::assert_matches;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use assignment_cell::models::{AssignmentError, SaveAssignmentRequest};
use assignment_cell::services::seed::DEPARTMENT_CATALOG;
use assignment_cell::services::{DepartmentService, PreferenceService};
use shared_utils::test_utils::TestConfig;

const TOKEN: &str = "test-token";

fn services_for(server: &MockServer) -> (DepartmentService, PreferenceService) {
    let config = TestConfig::with_store_url(&server.uri()).to_app_config();
    (
        DepartmentService::new(&config),
        PreferenceService::new(&config),
    )
}

fn assignment_row(department: &str, slots: [Option<&str>; 3]) -> serde_json::Value {
    json!({
        "id": Uuid::new_v4(),
        "department_name": department,
        "primary_nurse_id": slots[0],
        "primary_nurse_name": slots[0].map(|id| format!("Nurse {}", id)),
        "secondary_nurse_id": slots[1],
        "secondary_nurse_name": slots[1].map(|id| format!("Nurse {}", id)),
        "tertiary_nurse_id": slots[2],
        "tertiary_nurse_name": slots[2].map(|id| format!("Nurse {}", id)),
        "created_at": Utc::now().to_rfc3339(),
        "updated_at": Utc::now().to_rfc3339(),
    })
}

fn save_request(department: &str) -> SaveAssignmentRequest {
    SaveAssignmentRequest {
        department_name: department.to_string(),
        primary_nurse_id: Some("N001".to_string()),
        primary_nurse_name: Some("Asha Verma".to_string()),
        secondary_nurse_id: Some("N002".to_string()),
        secondary_nurse_name: Some("Priya Nair".to_string()),
        tertiary_nurse_id: None,
        tertiary_nurse_name: None,
    }
}

#[tokio::test]
async fn save_rejects_double_booked_nurse_before_any_store_call() {
    let server = MockServer::start().await;
    let (service, _) = services_for(&server);

    let mut request = save_request("Cardiology");
    request.secondary_nurse_id = Some("N001".to_string());

    let result = service.save(request, TOKEN).await;
    assert_matches!(result, Err(AssignmentError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_stores_empty_slots_as_null() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/department_nurse_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/department_nurse_assignments"))
        .and(body_partial_json(json!({
            "department_name": "Cardiology",
            "tertiary_nurse_id": null,
            "tertiary_nurse_name": null,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([assignment_row(
            "Cardiology",
            [Some("N001"), Some("N002"), None]
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let (service, _) = services_for(&server);

    // Empty string in the tertiary slot must reach the store as null.
    let mut request = save_request("Cardiology");
    request.tertiary_nurse_id = Some("".to_string());

    let saved = service.save(request, TOKEN).await.unwrap();
    assert_eq!(saved.filled_slots(), 2);
    assert_eq!(saved.tertiary_nurse_id, None);
}

#[tokio::test]
async fn save_patches_existing_department() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/department_nurse_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([assignment_row(
            "Cardiology",
            [None, None, None]
        )])))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/department_nurse_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([assignment_row(
            "Cardiology",
            [Some("N001"), Some("N002"), None]
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let (service, _) = services_for(&server);
    let saved = service.save(save_request("Cardiology"), TOKEN).await.unwrap();
    assert_eq!(saved.primary_nurse_id.as_deref(), Some("N001"));
}

#[tokio::test]
async fn initialize_creates_the_full_catalog_on_an_empty_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/department_nurse_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/department_nurse_assignments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([assignment_row(
            "Cardiology",
            [None, None, None]
        )])))
        .expect(24)
        .mount(&server)
        .await;

    let (service, _) = services_for(&server);
    let outcome = service.initialize(TOKEN).await.unwrap();

    assert_eq!(outcome.created, 24);
    assert_eq!(outcome.skipped, 0);
}

#[tokio::test]
async fn initialize_never_overwrites_existing_departments() {
    let server = MockServer::start().await;

    let existing: Vec<_> = DEPARTMENT_CATALOG
        .iter()
        .map(|name| assignment_row(name, [Some("N001"), None, None]))
        .collect();

    Mock::given(method("GET"))
        .and(path("/rest/v1/department_nurse_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(existing)))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/department_nurse_assignments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (service, _) = services_for(&server);
    let outcome = service.initialize(TOKEN).await.unwrap();

    assert_eq!(outcome.created, 0);
    assert_eq!(outcome.skipped, 24);
}

#[tokio::test]
async fn summary_counts_staffing_levels() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/department_nurse_assignments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            assignment_row("Cardiology", [Some("N001"), Some("N002"), Some("N003")]),
            assignment_row("Neurology", [Some("N004"), None, None]),
            assignment_row("Oncology", [None, None, None]),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/nurse_department_preferences"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": Uuid::new_v4(),
                "nurse_id": "N001",
                "nurse_name": "Asha Verma",
                "primary_department": "ICU",
                "secondary_department": "Emergency",
                "tertiary_department": "Cardiology",
                "is_available": true,
                "assigned_room": null,
                "assigned_doctor": null,
                "assigned_position": null,
                "created_at": Utc::now().to_rfc3339(),
                "updated_at": Utc::now().to_rfc3339(),
            },
            {
                "id": Uuid::new_v4(),
                "nurse_id": "N002",
                "nurse_name": "Priya Nair",
                "primary_department": "Cardiology",
                "secondary_department": "ICU",
                "tertiary_department": "General Medicine",
                "is_available": false,
                "assigned_room": null,
                "assigned_doctor": null,
                "assigned_position": null,
                "created_at": Utc::now().to_rfc3339(),
                "updated_at": Utc::now().to_rfc3339(),
            },
        ])))
        .mount(&server)
        .await;

    let (departments, preferences) = services_for(&server);
    let summary = departments.summary(&preferences).await.unwrap();

    assert_eq!(summary.total_departments, 3);
    assert_eq!(summary.fully_staffed, 1);
    assert_eq!(summary.partially_staffed, 1);
    assert_eq!(summary.unstaffed, 1);
    assert_eq!(summary.total_nurses, 2);
    assert_eq!(summary.available_nurses, 1);
}
