//! Service and API error types.
//!
//! [`ServiceError`] is what [`GraphService`](crate::service::GraphService)
//! returns: invalid input, a missing graph or node, or a persistence failure.
//! [`ApiError`] maps those onto HTTP status codes and implements
//! `axum::response::IntoResponse` to produce `{"detail": ...}` bodies.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use dagstore_core::{InvalidGraph, ValidationError};
use dagstore_storage::{GraphId, StorageError};

/// Why the store refused or failed a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceErrorKind {
    /// A node name or unordered edge pair already exists.
    DuplicateConstraint,
    /// Anything else the store reported.
    Unknown,
}

/// Errors produced by graph service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The submitted graph broke one or more structural rules.
    #[error(transparent)]
    InvalidGraph(#[from] InvalidGraph),

    /// No graph with this ID.
    #[error("graph not found: {0}")]
    GraphNotFound(GraphId),

    /// The graph exists but has no node with this name.
    #[error("node not found: graph={graph}, name={name}")]
    NodeNotFound { graph: GraphId, name: String },

    /// The store rejected or failed the operation; nothing was applied.
    #[error("persistence error ({kind:?}): {reason}")]
    Persistence {
        kind: PersistenceErrorKind,
        reason: String,
    },
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::GraphNotFound(id) => ServiceError::GraphNotFound(GraphId(id)),
            StorageError::NodeNotFound { graph, name } => ServiceError::NodeNotFound {
                graph: GraphId(graph),
                name,
            },
            StorageError::DuplicateConstraint { reason } => ServiceError::Persistence {
                kind: PersistenceErrorKind::DuplicateConstraint,
                reason,
            },
            other => ServiceError::Persistence {
                kind: PersistenceErrorKind::Unknown,
                reason: other.to_string(),
            },
        }
    }
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request could not be applied (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Graph failed validation (422).
    #[error("validation failed")]
    ValidationFailed(Vec<ValidationError>),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::Value::String(msg)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, serde_json::Value::String(msg)),
            ApiError::ValidationFailed(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::to_value(&errors).unwrap_or_default(),
            ),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::Value::String(msg),
            ),
        };

        let body = serde_json::json!({ "detail": detail });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidGraph(invalid) => ApiError::ValidationFailed(invalid.into_errors()),
            ServiceError::GraphNotFound(_) => ApiError::NotFound("Graph not found".to_string()),
            ServiceError::NodeNotFound { .. } => {
                ApiError::NotFound("Node entity not found".to_string())
            }
            ServiceError::Persistence {
                kind: PersistenceErrorKind::DuplicateConstraint,
                ..
            } => ApiError::BadRequest("Failed to add graph".to_string()),
            ServiceError::Persistence {
                kind: PersistenceErrorKind::Unknown,
                reason,
            } => ApiError::InternalError(reason),
        }
    }
}

/// Unparseable path segments, such as a non-numeric graph ID.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
