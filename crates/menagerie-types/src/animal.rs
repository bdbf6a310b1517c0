//! The `Animal` union and its concrete variant payloads.
//!
//! The union is deliberately closed: [`Animal`] is a Rust enum with exactly
//! two variants, so every consumer is forced by exhaustive `match` to handle
//! both. [`AnimalKind`] mirrors the variant set as a field-less marker enum
//! used wherever a variant must be named without carrying its payload
//! (discriminator registration, completeness checks, error messages).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Physical dimensions of an animal.
///
/// A value object with no identity. Both fields are plain `u32`s; beyond
/// non-negativity (guaranteed by the type) no validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Height in abstract units.
    pub height: u32,
    /// Weight in abstract units.
    pub weight: u32,
}

impl Size {
    /// Create a new size value.
    pub const fn new(height: u32, weight: u32) -> Self {
        Self { height, weight }
    }
}

// ---------------------------------------------------------------------------
// Variant payloads
// ---------------------------------------------------------------------------

/// A cat record.
///
/// Structurally identical to [`Dog`]; the two are distinct variants of the
/// [`Animal`] union and must never be conflated on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat {
    /// Identifier, unique within a single query result.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Physical dimensions.
    pub size: Size,
}

/// A dog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Identifier, unique within a single query result.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Physical dimensions.
    pub size: Size,
}

// ---------------------------------------------------------------------------
// The union
// ---------------------------------------------------------------------------

/// The closed union of animal record shapes.
///
/// Exactly one of [`Cat`] or [`Dog`], never anything else. The enum carries
/// no serde derives of its own: union values cross the wire through the
/// discriminator registry, which attaches the variant tag explicitly rather
/// than relying on an implicit enum representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Animal {
    /// A cat record.
    Cat(Cat),
    /// A dog record.
    Dog(Dog),
}

impl Animal {
    /// The marker for this value's concrete variant.
    pub const fn kind(&self) -> AnimalKind {
        match self {
            Self::Cat(_) => AnimalKind::Cat,
            Self::Dog(_) => AnimalKind::Dog,
        }
    }
}

// ---------------------------------------------------------------------------
// Variant markers
// ---------------------------------------------------------------------------

/// Field-less marker naming one variant of the [`Animal`] union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    /// The [`Cat`] variant.
    Cat,
    /// The [`Dog`] variant.
    Dog,
}

impl AnimalKind {
    /// Every member of the closed variant set.
    ///
    /// Completeness checks iterate this constant; extending the union means
    /// extending this list, and the compiler's exhaustiveness check on
    /// [`Animal::kind`] keeps the two in lockstep.
    pub const ALL: [Self; 2] = [Self::Cat, Self::Dog];
}
