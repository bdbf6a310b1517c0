//! The type discriminator registry for the `Animal` union.
//!
//! A union value crosses the wire as a plain JSON object carrying a
//! discriminator field alongside the variant's own fields. The registry owns
//! that mapping in both directions: variant marker to tag string when
//! encoding, tag string to decode factory when decoding.
//!
//! The registry is an explicit mapping literal built once at process start
//! (see [`DiscriminatorRegistry::standard`]) and read-only thereafter.
//! A variant without a registered tag is a configuration error, not a
//! runtime condition: [`DiscriminatorRegistry::validate`] surfaces it at
//! startup with a message naming the variant, and a gap that nonetheless
//! reaches a request fails that request loudly rather than silently
//! omitting the discriminator.

use menagerie_types::{Animal, AnimalKind, Cat, Dog};
use serde_json::Value;

/// Name of the discriminator field attached to every encoded union value.
pub const DISCRIMINATOR_FIELD: &str = "kind";

/// Errors raised by the discriminator registry.
#[derive(Debug, thiserror::Error)]
pub enum DiscriminatorError {
    /// A variant of the closed union has no registered tag.
    #[error("no discriminator tag registered for variant {kind:?}")]
    UnregisteredVariant {
        /// The variant missing from the registry.
        kind: AnimalKind,
    },

    /// A variant was registered more than once.
    #[error("variant {kind:?} registered more than once")]
    DuplicateVariant {
        /// The variant registered twice.
        kind: AnimalKind,
    },

    /// Two registrations share the same tag, making decoding ambiguous.
    #[error("discriminator tag {tag:?} registered more than once")]
    DuplicateTag {
        /// The ambiguous tag.
        tag: String,
    },

    /// An incoming value has no discriminator field.
    #[error("value has no {DISCRIMINATOR_FIELD:?} discriminator field")]
    MissingDiscriminator,

    /// An incoming value carries a tag no registration covers.
    #[error("unknown discriminator tag {tag:?}")]
    UnknownTag {
        /// The unrecognized tag.
        tag: String,
    },

    /// A variant payload failed to serialize or deserialize.
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// A variant payload serialized to something other than a JSON object,
    /// leaving nowhere to attach the discriminator.
    #[error("payload for tag {tag:?} is not a JSON object")]
    NonObjectPayload {
        /// The tag whose payload was malformed.
        tag: String,
    },
}

/// Factory reconstructing a concrete variant from its encoded JSON form.
pub type DecodeFn = fn(&Value) -> Result<Animal, DiscriminatorError>;

/// One entry of the registry: a variant, its wire tag, and its decode
/// factory.
#[derive(Debug, Clone)]
pub struct Registration {
    kind: AnimalKind,
    tag: &'static str,
    decode: DecodeFn,
}

impl Registration {
    /// Create a registration binding `kind` to `tag` and `decode`.
    pub const fn new(kind: AnimalKind, tag: &'static str, decode: DecodeFn) -> Self {
        Self { kind, tag, decode }
    }
}

/// Read-only mapping between union variants and their wire tags.
#[derive(Debug, Clone)]
pub struct DiscriminatorRegistry {
    entries: Vec<Registration>,
}

impl DiscriminatorRegistry {
    /// Build a registry from an explicit list of registrations.
    ///
    /// The result is not checked; call [`validate`](Self::validate) before
    /// serving traffic so gaps surface at startup rather than per request.
    pub const fn new(entries: Vec<Registration>) -> Self {
        Self { entries }
    }

    /// The canonical registry covering the full closed variant set.
    ///
    /// This is the mapping literal the server builds at startup:
    /// `Cat -> "Cat"`, `Dog -> "Dog"`.
    pub fn standard() -> Self {
        Self::new(vec![
            Registration::new(AnimalKind::Cat, "Cat", decode_cat),
            Registration::new(AnimalKind::Dog, "Dog", decode_dog),
        ])
    }

    /// Check the registry for completeness against the closed variant set.
    ///
    /// # Errors
    ///
    /// - [`DiscriminatorError::UnregisteredVariant`] if any member of
    ///   [`AnimalKind::ALL`] has no entry
    /// - [`DiscriminatorError::DuplicateVariant`] if a variant is
    ///   registered twice
    /// - [`DiscriminatorError::DuplicateTag`] if two entries share a tag
    pub fn validate(&self) -> Result<(), DiscriminatorError> {
        for kind in AnimalKind::ALL {
            match self.entries.iter().filter(|e| e.kind == kind).count() {
                0 => return Err(DiscriminatorError::UnregisteredVariant { kind }),
                1 => {}
                _ => return Err(DiscriminatorError::DuplicateVariant { kind }),
            }
        }
        for (index, entry) in self.entries.iter().enumerate() {
            let mut rest = self.entries.iter().skip(index.saturating_add(1));
            if rest.any(|other| other.tag == entry.tag) {
                return Err(DiscriminatorError::DuplicateTag {
                    tag: entry.tag.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Resolve the wire tag for a concrete union value.
    ///
    /// # Errors
    ///
    /// [`DiscriminatorError::UnregisteredVariant`] if the value's variant
    /// has no entry. With a validated registry this cannot happen.
    pub fn resolve_tag(&self, animal: &Animal) -> Result<&'static str, DiscriminatorError> {
        self.tag_for(animal.kind())
    }

    /// Resolve the wire tag for a variant marker.
    ///
    /// # Errors
    ///
    /// [`DiscriminatorError::UnregisteredVariant`] if the marker has no
    /// entry.
    pub fn tag_for(&self, kind: AnimalKind) -> Result<&'static str, DiscriminatorError> {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.tag)
            .ok_or(DiscriminatorError::UnregisteredVariant { kind })
    }

    /// Encode a union value as a JSON object carrying the discriminator.
    ///
    /// The variant payload serializes to its own fields; the resolved tag
    /// is attached under [`DISCRIMINATOR_FIELD`].
    ///
    /// # Errors
    ///
    /// Fails if the variant is unregistered or the payload does not
    /// serialize to a JSON object.
    pub fn encode(&self, animal: &Animal) -> Result<Value, DiscriminatorError> {
        let tag = self.resolve_tag(animal)?;
        let payload = match animal {
            Animal::Cat(cat) => serde_json::to_value(cat)?,
            Animal::Dog(dog) => serde_json::to_value(dog)?,
        };
        let Value::Object(mut fields) = payload else {
            return Err(DiscriminatorError::NonObjectPayload {
                tag: tag.to_owned(),
            });
        };
        fields.insert(
            String::from(DISCRIMINATOR_FIELD),
            Value::String(tag.to_owned()),
        );
        Ok(Value::Object(fields))
    }

    /// Decode a JSON object back into the concrete variant named by its
    /// discriminator field.
    ///
    /// # Errors
    ///
    /// Fails if the discriminator field is missing or not a string, the tag
    /// is unknown, or the payload does not match the variant's shape.
    pub fn decode(&self, value: &Value) -> Result<Animal, DiscriminatorError> {
        let tag = value
            .get(DISCRIMINATOR_FIELD)
            .and_then(Value::as_str)
            .ok_or(DiscriminatorError::MissingDiscriminator)?;
        let entry = self
            .entries
            .iter()
            .find(|e| e.tag == tag)
            .ok_or_else(|| DiscriminatorError::UnknownTag {
                tag: tag.to_owned(),
            })?;
        (entry.decode)(value)
    }
}

// Decode factories for the standard registry. Extra fields (notably the
// discriminator itself) are ignored when deserializing the payload.

fn decode_cat(value: &Value) -> Result<Animal, DiscriminatorError> {
    Ok(Animal::Cat(serde_json::from_value::<Cat>(value.clone())?))
}

fn decode_dog(value: &Value) -> Result<Animal, DiscriminatorError> {
    Ok(Animal::Dog(serde_json::from_value::<Dog>(value.clone())?))
}
