mod common;

use std::time::Duration;

use common::mock_backend::{MockBackend, MockResponse};
use taskdeck::api::models::{Priority, TaskStatus, TaskUpdate};
use taskdeck::api::{ApiClient, ApiError, BearerToken};

fn client_for(backend: &MockBackend) -> ApiClient {
    ApiClient::new(&backend.base_url(), Duration::from_secs(5)).expect("client builds")
}

const TASK_JSON: &str = r#"{
    "id": 1,
    "title": "Design new landing page mockups",
    "description": "Create wireframes",
    "priority": "High",
    "due_date": "2024-05-28",
    "status": "In Progress",
    "project": {"id": 1, "name": "Website Redesign"},
    "assignee": {"id": 2, "name": "Sarah Chen"},
    "tags": ["design"],
    "created_at": "2024-05-01T09:00:00Z",
    "updated_at": "2024-05-02T10:30:00Z"
}"#;

// -- authentication -----------------------------------------------------------

#[tokio::test]
async fn login_posts_credentials_and_stores_token() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"access_token": "tok-abc", "token_type": "bearer"}"#,
        ))
        .await;

    let mut client = client_for(&backend);
    let token = client.login("demo@taskdeck.dev", "pw").await.expect("login");
    assert_eq!(token.access_token, "tok-abc");
    assert!(client.is_authenticated());

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/auth/login");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["email"], "demo@taskdeck.dev");
    assert_eq!(body["password"], "pw");
}

#[tokio::test]
async fn requests_carry_the_bearer_token() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&format!("[{}]", TASK_JSON)))
        .await;

    let mut client = client_for(&backend);
    client.set_token(BearerToken::new("tok-xyz".to_string()));
    client.list_tasks().await.expect("list tasks");

    let requests = backend.captured_requests().await;
    assert_eq!(
        requests[0].header("authorization"),
        Some("Bearer tok-xyz")
    );
}

#[tokio::test]
async fn unauthorized_maps_to_its_own_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(401, "not authenticated"))
        .await;

    let client = client_for(&backend);
    let err = client.list_tasks().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn logout_drops_the_token() {
    let backend = MockBackend::start().await;
    let mut client = client_for(&backend);
    client.set_token(BearerToken::new("tok".to_string()));
    client.logout();
    assert!(!client.is_authenticated());
}

// -- collections --------------------------------------------------------------

#[tokio::test]
async fn tasks_deserialize_with_wire_spellings() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&format!("[{}]", TASK_JSON)))
        .await;

    let client = client_for(&backend);
    let tasks = client.list_tasks().await.expect("list tasks");
    assert_eq!(tasks.len(), 1);
    let task = &tasks[0];
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.project.as_ref().unwrap().name, "Website Redesign");
    assert_eq!(task.assignee.as_ref().unwrap().name, "Sarah Chen");
}

#[tokio::test]
async fn update_task_puts_partial_payload() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(TASK_JSON))
        .await;

    let client = client_for(&backend);
    let update = TaskUpdate {
        status: Some(TaskStatus::Completed),
        ..Default::default()
    };
    client.update_task(1, &update).await.expect("update");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/tasks/1");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, serde_json::json!({"status": "Completed"}));
}

#[tokio::test]
async fn delete_task_hits_the_id_route() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse {
            status: 204,
            headers: vec![],
            body: Vec::new(),
        })
        .await;

    let client = client_for(&backend);
    client.delete_task(7).await.expect("delete");

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/tasks/7");
}

// -- failures -----------------------------------------------------------------

#[tokio::test]
async fn server_errors_surface_status_and_body() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(500, "database is down"))
        .await;

    let client = client_for(&backend);
    let err = client.list_projects().await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert!(body.contains("database is down"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json("not json at all"))
        .await;

    let client = client_for(&backend);
    let err = client.list_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Bind-then-drop leaves a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr), Duration::from_secs(1))
        .expect("client builds");
    let err = client.list_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
}
