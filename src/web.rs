//! Web mode: serve audit reports over HTTP.
//!
//! `GET /?id=<group id>` runs a full audit and returns the plain-text
//! report. Each request is an independent audit.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::audit::audit_group;
use crate::client::GitLabClient;
use crate::error::{AuditError, Result};
use crate::models::GroupId;

/// Message for a missing `id` query parameter.
pub const MISSING_ID_QUERY: &str = "Missing query parameter \"id\" of top level group";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Query string of the report endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub id: Option<String>,
}

/// Build the router. The client is shared by all requests.
pub fn router(client: GitLabClient) -> Router {
    Router::new()
        .route("/", get(report))
        .route("/health", get(health_check))
        .with_state(Arc::new(client))
}

/// Bind `addr` and serve until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn serve(client: GitLabClient, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving member reports");
    axum::serve(listener, router(client)).await?;
    Ok(())
}

/// GET /?id={group id}
async fn report(
    State(client): State<Arc<GitLabClient>>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let id = match GroupId::parse(query.id.as_deref(), MISSING_ID_QUERY) {
        Ok(id) => id,
        Err(e) => return text(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match audit_group(&client, id).await {
        Ok(report) => text(StatusCode::OK, report.to_string()),
        Err(e) => {
            tracing::warn!(group = %id, error = %e, "audit failed");
            text(error_status(&e), e.to_string())
        }
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

fn error_status(error: &AuditError) -> StatusCode {
    match error {
        AuditError::MissingArgument(_) | AuditError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    }
}

fn text(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}
