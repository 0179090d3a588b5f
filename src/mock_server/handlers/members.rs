//! Member endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{error, precheck, PageQuery};
use crate::mock_server::state::MockState;

/// GET /groups/{id}/members
pub async fn list_group_members(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<u64>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    let path = format!("groups/{id}/members");
    if let Some(response) = precheck(&mut state, &headers, &path, &query) {
        return response;
    }
    if state.get_group(id).is_none() {
        return error(StatusCode::NOT_FOUND, "404 Group Not Found");
    }

    let members = query.apply(state.members_of_group(id));
    (StatusCode::OK, Json(members)).into_response()
}

/// GET /projects/{id}/members
pub async fn list_project_members(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<u64>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    let path = format!("projects/{id}/members");
    if let Some(response) = precheck(&mut state, &headers, &path, &query) {
        return response;
    }
    if !state.has_project(id) {
        return error(StatusCode::NOT_FOUND, "404 Project Not Found");
    }

    let members = query.apply(state.members_of_project(id));
    (StatusCode::OK, Json(members)).into_response()
}
