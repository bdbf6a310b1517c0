//! HTTP API server for the Menagerie query service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **The `animals` query** (`GET /api/animals`) returning the fixed
//!   union-typed record list, each element carrying its discriminator tag
//! - **Static bundle serving** for the prebuilt frontend (HTML, JS,
//!   source maps) with caching disabled
//! - **Root redirect** (`GET /`) to the bundle's entry HTML file
//!
//! # Architecture
//!
//! Handlers read from an immutable [`AppState`] assembled once at startup:
//! the query service, the validated discriminator registry, and the asset
//! locations. Nothing is mutated after construction, so requests need no
//! coordination.
//!
//! [`AppState`]: state::AppState

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
