//! API endpoint handlers.
//!
//! All handlers read from the immutable [`AppState`]. The query has no
//! parameters and no failure modes of its own; the only error path is a
//! discriminator gap, which a validated registry rules out.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Redirect to the bundle entry page |
//! | `GET` | `/api/animals` | The full animal list, discriminator-tagged |

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- redirect to the bundle entry page
// ---------------------------------------------------------------------------

/// Redirect the root path to the frontend bundle's entry HTML file.
pub async fn index_redirect(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::temporary(&format!("/{}", state.assets.entry))
}

// ---------------------------------------------------------------------------
// GET /api/animals -- the animals query
// ---------------------------------------------------------------------------

/// Return every animal record, in query order, with the discriminator
/// tag attached to each element.
///
/// The registry is consulted per element so the tag always reflects the
/// actual variant; a variant the registry does not cover fails the whole
/// request with a 500 naming the variant.
pub async fn list_animals(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let animals = state.query.list_animals();

    let encoded: Vec<Value> = animals
        .iter()
        .map(|animal| state.registry.encode(animal))
        .collect::<Result<_, _>>()?;

    Ok(Json(serde_json::json!({
        "count": encoded.len(),
        "animals": encoded,
    })))
}
