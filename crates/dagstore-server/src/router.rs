//! Router assembly for the dagstore HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. Read routes answer both with
/// and without a trailing slash.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/graph/",
            get(handlers::graphs::list_graphs).post(handlers::graphs::create_graph),
        )
        .route(
            "/api/graph",
            get(handlers::graphs::list_graphs).post(handlers::graphs::create_graph),
        )
        .route("/api/graph/{graph_id}/", get(handlers::graphs::read_graph))
        .route("/api/graph/{graph_id}", get(handlers::graphs::read_graph))
        .route(
            "/api/graph/{graph_id}/adjacency_list",
            get(handlers::graphs::adjacency_list),
        )
        .route(
            "/api/graph/{graph_id}/adjacency_list/",
            get(handlers::graphs::adjacency_list),
        )
        .route(
            "/api/graph/{graph_id}/reverse_adjacency_list",
            get(handlers::graphs::reverse_adjacency_list),
        )
        .route(
            "/api/graph/{graph_id}/reverse_adjacency_list/",
            get(handlers::graphs::reverse_adjacency_list),
        )
        .route(
            "/api/graph/{graph_id}/node/{node_name}",
            delete(handlers::nodes::delete_node),
        )
        .route(
            "/api/graph/{graph_id}/node/{node_name}/",
            delete(handlers::nodes::delete_node),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
