//! HTTP/JSON service storing validated directed acyclic graphs.
//!
//! Clients submit named nodes and directed edges; the service checks them,
//! persists them, and serves node/edge lists plus forward and reverse
//! adjacency views. This crate contains the service orchestrator, API schema
//! types, error handling, configuration, and route definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
