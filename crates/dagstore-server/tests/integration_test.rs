//! End-to-end integration tests for the dagstore HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! GraphService -> validator/store -> HTTP response.
//!
//! Each test creates a fresh AppState over an in-memory store and uses
//! `tower::ServiceExt::oneshot` to send requests directly to the router
//! without starting a network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use dagstore_server::router::build_router;
use dagstore_server::service::GraphService;
use dagstore_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::in_memory())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

/// Sends a POST request with a JSON body and returns (status, json).
async fn post_json(
    app: &Router,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Sends a GET request and returns (status, json).
async fn get_json(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(app, request).await
}

/// Sends a DELETE request and returns (status, json).
async fn delete(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Stores the chain A -> B -> C and returns its ID.
async fn create_chain(app: &Router) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/graph/",
        json!({
            "nodes": [{"name": "A"}, {"name": "B"}, {"name": "C"}],
            "edges": [{"source": "A", "target": "B"}, {"source": "B", "target": "C"}],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_i64().unwrap()
}

/// Posts an invalid graph and returns the `msg` of every reported error.
async fn rejection_messages(app: &Router, body: serde_json::Value) -> Vec<String> {
    let (status, body) = post_json(app, "/api/graph/", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    body["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|err| err["msg"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Create and read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_get_graph() {
    let app = test_app();
    let id = create_chain(&app).await;

    for path in [format!("/api/graph/{id}"), format!("/api/graph/{id}/")] {
        let (status, body) = get_json(&app, &path).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": id,
                "nodes": [{"name": "A"}, {"name": "B"}, {"name": "C"}],
                "edges": [{"source": "A", "target": "B"}, {"source": "B", "target": "C"}],
            })
        );
    }
}

#[tokio::test]
async fn ids_are_distinct_and_listed() {
    let app = test_app();
    let first = create_chain(&app).await;
    let second = create_chain(&app).await;
    assert_ne!(first, second);

    let (status, body) = get_json(&app, "/api/graph/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "graphs": [first, second] }));
}

#[tokio::test]
async fn adjacency_list() {
    let app = test_app();
    let id = create_chain(&app).await;

    let (status, body) = get_json(&app, &format!("/api/graph/{id}/adjacency_list")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "adjacency_list": { "A": ["B"], "B": ["C"], "C": [] } })
    );
}

#[tokio::test]
async fn reverse_adjacency_list() {
    let app = test_app();
    let id = create_chain(&app).await;

    let (status, body) = get_json(&app, &format!("/api/graph/{id}/reverse_adjacency_list")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "adjacency_list": { "A": [], "B": ["A"], "C": ["B"] } })
    );
}

#[tokio::test]
async fn adjacency_keeps_isolated_nodes() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/graph/",
        json!({ "nodes": [{"name": "Solo"}, {"name": "Pair"}, {"name": "Mate"}],
                "edges": [{"source": "Pair", "target": "Mate"}] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();

    let (_, forward) = get_json(&app, &format!("/api/graph/{id}/adjacency_list")).await;
    assert_eq!(forward["adjacency_list"]["Solo"], json!([]));
    let (_, reverse) = get_json(&app, &format!("/api/graph/{id}/reverse_adjacency_list")).await;
    assert_eq!(reverse["adjacency_list"]["Solo"], json!([]));
    assert_eq!(reverse["adjacency_list"]["Mate"], json!(["Pair"]));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_node() {
    let app = test_app();
    let messages =
        rejection_messages(&app, json!({ "nodes": [{"name": "A"}, {"name": "A"}], "edges": [] }))
            .await;
    assert_eq!(messages, vec!["There are vertex with the same name!"]);
}

#[tokio::test]
async fn empty_nodes() {
    let app = test_app();
    let messages = rejection_messages(&app, json!({ "nodes": [], "edges": [] })).await;
    assert_eq!(messages, vec!["There aren't any vertex!"]);
}

#[tokio::test]
async fn incorrect_name() {
    let app = test_app();
    let messages =
        rejection_messages(&app, json!({ "nodes": [{"name": "A1"}], "edges": [] })).await;
    assert_eq!(messages, vec!["There are nodes with incorrect names!"]);
}

#[tokio::test]
async fn long_name() {
    let app = test_app();
    let messages = rejection_messages(
        &app,
        json!({ "nodes": [{"name": "A".repeat(256)}], "edges": [] }),
    )
    .await;
    assert_eq!(messages, vec!["There are nodes with too long names!"]);
}

#[tokio::test]
async fn longest_allowed_name_is_stored() {
    let app = test_app();
    let (status, _) = post_json(
        &app,
        "/api/graph/",
        json!({ "nodes": [{"name": "A".repeat(255)}], "edges": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn incorrect_edge() {
    let app = test_app();
    let messages = rejection_messages(
        &app,
        json!({
            "nodes": [{"name": "A"}, {"name": "B"}],
            "edges": [{"source": "A", "target": "B"}, {"source": "B1", "target": "A1"}],
        }),
    )
    .await;
    assert_eq!(messages, vec!["There are incorrect edges!"]);
}

#[tokio::test]
async fn graph_with_cycle() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/api/graph/",
        json!({
            "nodes": [{"name": "A"}, {"name": "B"}, {"name": "C"}],
            "edges": [
                {"source": "A", "target": "B"},
                {"source": "B", "target": "C"},
                {"source": "C", "target": "A"},
            ],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({ "detail": [{
            "loc": ["body", "edges"],
            "msg": "There is a cycle in graph!",
            "type": "edges.cycle",
        }] })
    );
}

#[tokio::test]
async fn reverse_pair_reports_duplicate_and_cycle() {
    let app = test_app();
    let messages = rejection_messages(
        &app,
        json!({
            "nodes": [{"name": "A"}, {"name": "B"}],
            "edges": [{"source": "A", "target": "B"}, {"source": "B", "target": "A"}],
        }),
    )
    .await;
    assert_eq!(
        messages,
        vec!["There are duplicate edges!", "There is a cycle in graph!"]
    );
}

#[tokio::test]
async fn rejected_graph_is_not_stored() {
    let app = test_app();
    rejection_messages(&app, json!({ "nodes": [{"name": "A"}, {"name": "A"}], "edges": [] }))
        .await;
    let (_, body) = get_json(&app, "/api/graph/").await;
    assert_eq!(body, json!({ "graphs": [] }));
}

// ---------------------------------------------------------------------------
// Not found
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reads_of_missing_graph_are_404() {
    let app = test_app();
    for path in [
        "/api/graph/999",
        "/api/graph/999/",
        "/api/graph/999/adjacency_list",
        "/api/graph/999/reverse_adjacency_list",
    ] {
        let (status, body) = get_json(&app, path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(body, json!({ "detail": "Graph not found" }), "{path}");
    }
}

#[tokio::test]
async fn unparseable_graph_id_is_a_json_bad_request() {
    let app = test_app();
    for path in [
        "/api/graph/abc/",
        "/api/graph/abc",
        "/api/graph/abc/adjacency_list",
        "/api/graph/99999999999999999999/reverse_adjacency_list",
    ] {
        let (status, body) = get_json(&app, path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert!(body["detail"].is_string(), "{path}: {body}");
    }

    let (status, body) = delete(&app, "/api/graph/abc/node/A").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("abc"), "{body}");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_node_cascades() {
    let app = test_app();
    let id = create_chain(&app).await;

    let (status, _) = delete(&app, &format!("/api/graph/{id}/node/A")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = get_json(&app, &format!("/api/graph/{id}/")).await;
    assert_eq!(body["nodes"], json!([{"name": "B"}, {"name": "C"}]));
    assert_eq!(body["edges"], json!([{"source": "B", "target": "C"}]));

    let (_, body) = get_json(&app, &format!("/api/graph/{id}/adjacency_list")).await;
    assert_eq!(body, json!({ "adjacency_list": { "B": ["C"], "C": [] } }));
}

#[tokio::test]
async fn delete_missing_node() {
    let app = test_app();
    let id = create_chain(&app).await;

    let (status, body) = delete(&app, &format!("/api/graph/{id}/node/Z")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Node entity not found" }));

    delete(&app, &format!("/api/graph/{id}/node/A")).await;
    let (status, body) = delete(&app, &format!("/api/graph/{id}/node/A")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Node entity not found" }));
}

#[tokio::test]
async fn delete_in_missing_graph() {
    let app = test_app();
    let (status, body) = delete(&app, "/api/graph/999/node/A").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Graph not found" }));
}

// ---------------------------------------------------------------------------
// SQLite backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sqlite_backend_serves_the_same_api() {
    let service = GraphService::new(":memory:").unwrap();
    let app = build_router(AppState::from_service(service));
    let id = create_chain(&app).await;

    let (_, body) = get_json(&app, &format!("/api/graph/{id}/reverse_adjacency_list")).await;
    assert_eq!(
        body,
        json!({ "adjacency_list": { "A": [], "B": ["A"], "C": ["B"] } })
    );

    let (status, _) = delete(&app, &format!("/api/graph/{id}/node/B")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = get_json(&app, &format!("/api/graph/{id}")).await;
    assert_eq!(body["edges"], json!([]));
}

#[tokio::test]
async fn state_hands_back_service_for_close() {
    let state = AppState::in_memory();
    let app = build_router(state.clone());
    create_chain(&app).await;
    drop(app);

    let service = state.into_service().unwrap();
    assert_eq!(service.list_graphs().unwrap().len(), 1);
    service.close().unwrap();
}
