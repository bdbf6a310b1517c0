//! The resolver backing the `animals` query.
//!
//! [`AnimalQueryService`] answers the single read-only query in the system:
//! the full, ordered list of animal records. The data is a hardcoded
//! two-element list mixing both variants of the union; there is no storage
//! behind it and no state retained between calls.

use menagerie_types::{Animal, Cat, Dog, Size};

/// The query service holding the fixed collection of polymorphic records.
///
/// The collection is built once at construction and never mutated; every
/// call to [`list_animals`](Self::list_animals) returns an independent
/// clone, so any number of concurrent callers may invoke it without
/// coordination.
#[derive(Debug, Clone)]
pub struct AnimalQueryService {
    animals: Vec<Animal>,
}

impl AnimalQueryService {
    /// Create the query service with its fixed record collection.
    pub fn new() -> Self {
        Self {
            animals: vec![
                Animal::Cat(Cat {
                    id: String::from("T"),
                    name: String::from("Tom"),
                    size: Size::new(10, 5),
                }),
                Animal::Dog(Dog {
                    id: String::from("S"),
                    name: String::from("Spike"),
                    size: Size::new(30, 20),
                }),
            ],
        }
    }

    /// Return every animal record, in fixed order.
    ///
    /// Always succeeds. The result is exactly two elements: the cat "Tom"
    /// followed by the dog "Spike".
    pub fn list_animals(&self) -> Vec<Animal> {
        self.animals.clone()
    }
}

impl Default for AnimalQueryService {
    fn default() -> Self {
        Self::new()
    }
}
