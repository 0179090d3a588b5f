//! Mock GitLab API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the GitLab
//! group, project, and member endpoints used by the audit. Unlike wiremock,
//! which mocks at the HTTP level per-test, this server derives every
//! response from one consistent group hierarchy, including descendant
//! resolution and `page`/`per_page` pagination.
//!
//! # Example
//!
//! ```ignore
//! use gitlab_members::mock_server::MockServer;
//! use gitlab_members::{audit_group, GitLabClient, GroupId};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = GitLabClient::new("test-token", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let report = audit_group(&client, GroupId::new(1).unwrap()).await.unwrap();
//!     assert_eq!(report.total(), 1);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
