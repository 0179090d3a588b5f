//! Group endpoint handlers.

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
use crate::{Group, Project};

/// GET /groups/{id}
pub async fn get_group(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    let path = format!("groups/{id}");
    if let Some(response) = precheck(&mut state, &headers, &path, &PageQuery::default()) {
        return response;
    }

    match state.get_group(id) {
        Some(group) => (StatusCode::OK, Json(group.clone())).into_response(),
        None => error(StatusCode::NOT_FOUND, "404 Group Not Found"),
    }
}

/// GET /groups/{id}/descendant_groups
pub async fn list_descendant_groups(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<u64>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    let path = format!("groups/{id}/descendant_groups");
    if let Some(response) = precheck(&mut state, &headers, &path, &query) {
        return response;
    }
    if state.get_group(id).is_none() {
        return error(StatusCode::NOT_FOUND, "404 Group Not Found");
    }

    let groups: Vec<Group> = state.descendant_groups(id).into_iter().cloned().collect();
    (StatusCode::OK, Json(query.apply(&groups))).into_response()
}

/// GET /groups/{id}/projects
pub async fn list_group_projects(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<u64>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    let path = format!("groups/{id}/projects");
    if let Some(response) = precheck(&mut state, &headers, &path, &query) {
        return response;
    }
    if state.get_group(id).is_none() {
        return error(StatusCode::NOT_FOUND, "404 Group Not Found");
    }

    let projects: Vec<Project> = state.group_projects(id).into_iter().cloned().collect();
    (StatusCode::OK, Json(query.apply(&projects))).into_response()
}
