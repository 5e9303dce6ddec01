//! Graph handlers (create, list, read, adjacency views).
//!
//! Path extraction failures are taken as `Result` so they come back in the
//! same `{"detail": ...}` shape as every other error.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use dagstore_storage::GraphId;

use crate::error::ApiError;
use crate::schema::graphs::{
    AdjacencyListResponse, CreateGraphRequest, CreateGraphResponse, GraphListResponse,
    GraphReadResponse,
};
use crate::state::AppState;

/// Validates and stores a new graph.
///
/// `POST /api/graph/`
pub async fn create_graph(
    State(state): State<AppState>,
    Json(req): Json<CreateGraphRequest>,
) -> Result<(StatusCode, Json<CreateGraphResponse>), ApiError> {
    let mut service = state.service.lock().await;
    let id = service.create_graph(&req.nodes, &req.edges)?;
    Ok((StatusCode::CREATED, Json(CreateGraphResponse { id })))
}

/// Lists all graph IDs.
///
/// `GET /api/graph/`
pub async fn list_graphs(
    State(state): State<AppState>,
) -> Result<Json<GraphListResponse>, ApiError> {
    let service = state.service.lock().await;
    let graphs = service.list_graphs()?;
    Ok(Json(GraphListResponse { graphs }))
}

/// `GET /api/graph/{graph_id}/`
pub async fn read_graph(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<GraphReadResponse>, ApiError> {
    let Path(graph_id) = path?;
    let service = state.service.lock().await;
    Ok(Json(service.read_graph(GraphId(graph_id))?))
}

/// `GET /api/graph/{graph_id}/adjacency_list`
pub async fn adjacency_list(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<AdjacencyListResponse>, ApiError> {
    let Path(graph_id) = path?;
    let service = state.service.lock().await;
    Ok(Json(service.adjacency_list(GraphId(graph_id))?))
}

/// `GET /api/graph/{graph_id}/reverse_adjacency_list`
pub async fn reverse_adjacency_list(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<AdjacencyListResponse>, ApiError> {
    let Path(graph_id) = path?;
    let service = state.service.lock().await;
    Ok(Json(service.reverse_adjacency_list(GraphId(graph_id))?))
}
