//! Traversal and aggregation tests against a wiremock GitLab API.

use gitlab_members::{audit_group, AuditError, GitLabClient, GroupId};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn jane() -> Value {
    json!({
        "id": 7,
        "name": "Jane Doe",
        "username": "jdoe",
        "access_level": 30,
        "state": "active",
        "expires_at": null
    })
}

/// Group 1 `org` -> group 2 `org/team` -> project 10 `org/team/proj`.
/// Jane is a member of group 1 and project 10.
async fn org_server() -> MockServer {
    let server = MockServer::start().await;

    mount(&server, "/groups/1", json!({"id": 1, "name": "org", "full_path": "org"})).await;
    mount(&server, "/groups/1/projects", json!([])).await;
    mount(&server, "/groups/1/members", json!([jane()])).await;
    mount(
        &server,
        "/groups/1/descendant_groups",
        json!([{"id": 2, "name": "team", "full_path": "org/team", "parent_id": 1}]),
    )
    .await;
    mount(
        &server,
        "/groups/2/projects",
        json!([{"id": 10, "name": "proj", "path_with_namespace": "org/team/proj"}]),
    )
    .await;
    mount(&server, "/groups/2/members", json!([])).await;
    mount(&server, "/projects/10/members", json!([jane()])).await;

    server
}

fn group(id: u64) -> GroupId {
    GroupId::new(id).unwrap()
}

#[tokio::test]
async fn test_org_scenario() {
    let server = org_server().await;
    let client = GitLabClient::new("test-token", &server.uri()).unwrap();

    let report = audit_group(&client, group(1)).await.unwrap();

    assert_eq!(report.total(), 1);
    let record = report.get(7).unwrap();
    assert_eq!(record.name, "Jane Doe (@jdoe)");
    assert_eq!(record.groups, vec!["org (Developer)"]);
    assert_eq!(record.projects, vec!["org/team/proj (Developer)"]);

    assert_eq!(
        report.to_string(),
        "Jane Doe (@jdoe)\n\
         Groups: [org (Developer)]\n\
         Projects: [org/team/proj (Developer)]\n\
         \n\
         Total members: 1"
    );
}

#[tokio::test]
async fn test_project_members_precede_group_members() {
    let server = MockServer::start().await;
    let bob = json!({"id": 3, "name": "Bob", "username": "bob", "access_level": 40});
    let amy = json!({"id": 4, "name": "Amy", "username": "amy", "access_level": 50});

    mount(&server, "/groups/1", json!({"id": 1, "full_path": "org"})).await;
    mount(
        &server,
        "/groups/1/projects",
        json!([{"id": 20, "path_with_namespace": "org/app"}]),
    )
    .await;
    mount(&server, "/projects/20/members", json!([amy.clone()])).await;
    mount(&server, "/groups/1/members", json!([bob, amy])).await;
    mount(&server, "/groups/1/descendant_groups", json!([])).await;

    let client = GitLabClient::new("test-token", &server.uri()).unwrap();
    let report = audit_group(&client, group(1)).await.unwrap();

    let order: Vec<u64> = report.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![4, 3]);

    let amy = report.get(4).unwrap();
    assert_eq!(amy.projects, vec!["org/app (Owner)"]);
    assert_eq!(amy.groups, vec!["org (Owner)"]);
}

#[tokio::test]
async fn test_unrecognized_items_are_skipped() {
    let server = MockServer::start().await;
    mount(&server, "/groups/1", json!({"id": 1, "full_path": "org"})).await;
    // A project listing item with neither path attribute
    mount(&server, "/groups/1/projects", json!([{"id": 99, "name": "odd"}])).await;
    mount(&server, "/groups/1/members", json!([])).await;
    mount(&server, "/groups/1/descendant_groups", json!([])).await;

    let client = GitLabClient::new("test-token", &server.uri()).unwrap();
    let report = audit_group(&client, group(1)).await.unwrap();

    assert_eq!(report.total(), 0);
    assert_eq!(report.to_string(), "Total members: 0");
}

#[tokio::test]
async fn test_error_status_aborts_audit() {
    let server = MockServer::start().await;
    mount(&server, "/groups/1", json!({"id": 1, "full_path": "org"})).await;
    mount(&server, "/groups/1/projects", json!([])).await;
    mount(&server, "/groups/1/members", json!([jane()])).await;
    Mock::given(method("GET"))
        .and(path("/groups/1/descendant_groups"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "403 Forbidden"})),
        )
        .mount(&server)
        .await;

    let client = GitLabClient::new("test-token", &server.uri()).unwrap();
    let err = audit_group(&client, group(1)).await.unwrap_err();

    match err {
        AuditError::ApiError {
            status_code,
            ref message,
        } => {
            assert_eq!(status_code, 403);
            assert!(message.starts_with("403 Forbidden"));
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_group_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/groups/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "404 Group Not Found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = GitLabClient::new("test-token", &server.uri()).unwrap();
    let err = audit_group(&client, group(404)).await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.to_string(), "Error: 404 Not Found (404 Group Not Found)");
}

#[tokio::test]
async fn test_malformed_json_aborts_audit() {
    let server = MockServer::start().await;
    mount(&server, "/groups/1", json!({"id": 1, "full_path": "org"})).await;
    Mock::given(method("GET"))
        .and(path("/groups/1/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = GitLabClient::new("test-token", &server.uri()).unwrap();
    let err = audit_group(&client, group(1)).await.unwrap_err();

    assert!(matches!(err, AuditError::ParseError(_)), "{err:?}");
}

#[tokio::test]
async fn test_transport_failure_aborts_audit() {
    // Reserve a port, then close it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = GitLabClient::new("test-token", &format!("http://127.0.0.1:{port}")).unwrap();
    let err = audit_group(&client, group(1)).await.unwrap_err();

    assert!(matches!(err, AuditError::HttpError(_)), "{err:?}");
}
