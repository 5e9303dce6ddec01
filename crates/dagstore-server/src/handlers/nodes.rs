//! Node deletion handler.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use dagstore_storage::GraphId;

use crate::error::ApiError;
use crate::state::AppState;

/// Deletes a node and its incident edges.
///
/// `DELETE /api/graph/{graph_id}/node/{node_name}`
pub async fn delete_node(
    State(state): State<AppState>,
    path: Result<Path<(i64, String)>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path((graph_id, node_name)) = path?;
    let mut service = state.service.lock().await;
    service.delete_node(GraphId(graph_id), &node_name)?;
    Ok(StatusCode::NO_CONTENT)
}
