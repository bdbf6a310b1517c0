//! Core logic for the Menagerie query service.
//!
//! Two components live here, both pure request/response operations over
//! fixed data:
//!
//! - [`query`] -- the resolver backing the `animals` query: a fixed,
//!   ordered list mixing both variants of the [`Animal`] union
//! - [`discriminator`] -- the registry mapping each concrete variant to
//!   its wire tag, validated for completeness at startup and consulted
//!   whenever a union value is serialized or deserialized
//!
//! Plus [`config`], the typed loader for the optional YAML configuration
//! file the server binary reads at startup.
//!
//! [`Animal`]: menagerie_types::Animal

pub mod config;
pub mod discriminator;
pub mod query;

// Re-export primary types for convenience.
pub use config::{ConfigError, ServiceConfig};
pub use discriminator::{DiscriminatorError, DiscriminatorRegistry, DISCRIMINATOR_FIELD};
pub use query::AnimalQueryService;
