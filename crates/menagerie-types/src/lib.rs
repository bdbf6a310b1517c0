//! Shared type definitions for the Menagerie query service.
//!
//! This crate is the single source of truth for the domain types used
//! across the Menagerie workspace: the [`Animal`] union, its two concrete
//! variants, and the [`AnimalKind`] marker set that keeps the union closed.
//!
//! # Modules
//!
//! - [`animal`] -- The `Animal` union, its variant payloads, and `Size`

pub mod animal;

// Re-export all public types at crate root for convenience.
pub use animal::{Animal, AnimalKind, Cat, Dog, Size};
