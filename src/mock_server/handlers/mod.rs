//! HTTP request handlers for the mock server.

pub mod groups;
pub mod members;

pub use groups::*;
pub use members::*;

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::mock_server::state::MockState;

/// `page` / `per_page` query parameters, with GitLab's defaults.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageQuery {
    /// Slice one page out of `items`.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let page = self.page.unwrap_or(1).max(1) as usize;
        let per_page = self.per_page.unwrap_or(20) as usize;
        items
            .iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .cloned()
            .collect()
    }
}

/// Log the request and apply token and forced-failure checks.
///
/// Returns the response to send instead of the normal one, if any.
pub(crate) fn precheck(
    state: &mut MockState,
    headers: &HeaderMap,
    path: &str,
    query: &PageQuery,
) -> Option<Response> {
    state.request_log.push(match query.page {
        Some(page) => format!("{path}?page={page}"),
        None => path.to_string(),
    });

    if let Some(required) = &state.required_token {
        let sent = headers.get("PRIVATE-TOKEN").and_then(|v| v.to_str().ok());
        if sent != Some(required.as_str()) {
            return Some(error(StatusCode::UNAUTHORIZED, "401 Unauthorized"));
        }
    }

    if let Some(status) = state.failures.get(path) {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Some(error(status, &status.to_string()));
    }

    None
}

/// GitLab-style error body.
pub(crate) fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}
