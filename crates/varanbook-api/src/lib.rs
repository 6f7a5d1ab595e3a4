//! # varanbook-api
//!
//! HTTP API layer for Varanbook built on Axum.
//!
//! Provides the REST endpoints, middleware (tenant resolution, logging,
//! CORS), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
