//! Axum router construction for the API server.
//!
//! Assembles the query route, the root redirect, and the static bundle
//! fallback into a single [`Router`] with CORS middleware enabled for
//! cross-origin access during frontend development.

use std::sync::Arc;

use axum::http::header::{self, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the API server.
///
/// The router includes:
/// - `GET /` -- temporary redirect to the bundle entry page
/// - `GET /api/animals` -- the animals query
/// - everything else -- static files from the bundle directory, served
///   with `Cache-Control: max-age=0` (cache lifetime zero; clients
///   revalidate on every load)
///
/// CORS is configured to allow any origin for development. In production
/// this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let bundle = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("max-age=0"),
        ))
        .service(ServeDir::new(&state.assets.dist_dir));

    Router::new()
        // Root redirect
        .route("/", get(handlers::index_redirect))
        // Query API
        .route("/api/animals", get(handlers::list_animals))
        // Static bundle
        .fallback_service(bundle)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
