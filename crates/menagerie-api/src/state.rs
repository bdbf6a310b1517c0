//! Shared application state for the API server.
//!
//! [`AppState`] bundles the components the startup function constructs:
//! the query service, the discriminator registry, and the asset locations.
//! Everything here is immutable after construction; the state is wrapped
//! in an [`Arc`](std::sync::Arc) and injected via Axum's `State`
//! extractor, and concurrent requests share it without locking.

use menagerie_core::config::AssetsSection;
use menagerie_core::{AnimalQueryService, DiscriminatorRegistry};

/// Immutable state shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The resolver backing the `animals` query.
    pub query: AnimalQueryService,
    /// Variant-to-tag mapping, validated at startup.
    pub registry: DiscriminatorRegistry,
    /// Where the frontend bundle lives and which file is its entry point.
    pub assets: AssetsSection,
}

impl AppState {
    /// Assemble the application state from its explicitly constructed
    /// parts.
    pub const fn new(
        query: AnimalQueryService,
        registry: DiscriminatorRegistry,
        assets: AssetsSection,
    ) -> Self {
        Self {
            query,
            registry,
            assets,
        }
    }
}
