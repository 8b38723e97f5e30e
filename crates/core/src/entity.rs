//! Entity trait: identity + continuity across state changes.

use std::collections::HashMap;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Build a borrowed id -> entity lookup over a snapshot slice.
///
/// When the same id appears more than once, the first occurrence wins.
pub fn index_by_id<E: Entity>(items: &[E]) -> HashMap<&E::Id, &E> {
    let mut index = HashMap::with_capacity(items.len());
    for item in items {
        index.entry(item.id()).or_insert(item);
    }
    index
}
