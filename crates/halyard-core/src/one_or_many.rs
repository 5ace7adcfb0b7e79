//! The one-value-or-ordered-sequence union used by link and embed tables.
//!
//! HAL collapses a relation holding a single item to a bare object and a
//! relation holding several to an array. `OneOrMany` carries that distinction
//! through the data model so the merge policy is a total match instead of
//! runtime type inspection.

use serde::{Deserialize, Serialize};

/// Either exactly one `T` or an ordered sequence of `T`.
///
/// Serializes untagged: `One(x)` as `x` itself, `Many(v)` as a JSON array.
/// Within `Many`, order is significant — the first item added under a
/// relation stays first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Add an item, switching `One` to `Many` on the second addition.
    ///
    /// `One(a)` becomes `Many([a, b])`; `Many` appends to the end. Mutation
    /// through this method never produces a one-element `Many`.
    pub fn push(&mut self, item: T) {
        match std::mem::replace(self, OneOrMany::Many(Vec::new())) {
            OneOrMany::One(first) => *self = OneOrMany::Many(vec![first, item]),
            OneOrMany::Many(mut items) => {
                items.push(item);
                *self = OneOrMany::Many(items);
            }
        }
    }

    /// Shape-preserving projection: `One` maps to `One`, `Many` to `Many`
    /// with item order kept.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> OneOrMany<U> {
        match self {
            OneOrMany::One(item) => OneOrMany::One(f(item)),
            OneOrMany::Many(items) => OneOrMany::Many(items.iter().map(f).collect()),
        }
    }

    /// Iterate items in order. A single value yields exactly once.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item).iter(),
            OneOrMany::Many(items) => items.iter(),
        }
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    /// True only for a directly-constructed `Many` with no items; mutation
    /// through `push` never produces one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(item: T) -> Self {
        OneOrMany::One(item)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}
