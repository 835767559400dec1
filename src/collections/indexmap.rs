//! Strategies for the `indexmap` containers (feature `indexmap`).
//!
//! Insertion order in the built map matches declaration order in the list.

use core::hash::{BuildHasher, Hash};

use indexmap::{IndexMap, IndexSet};

use crate::{Construct, Destination, Element, Elements};

impl<K: 'static, V: 'static, S> Destination for IndexMap<K, V, S> {
    type Element = (K, V);
}

impl<K: Eq + Hash + 'static, V: 'static, S: BuildHasher + Default> Construct for IndexMap<K, V, S> {
    fn construct(elements: Elements<'_, (K, V)>, (): ()) -> Self {
        Self::construct(elements, (S::default(),))
    }
}

/// Hasher-taking strategy, for hashers without a `Default`. Used through
/// [`to_with`](crate::InitList::to_with).
impl<K: Eq + Hash + 'static, V: 'static, S: BuildHasher> Construct<(S,)> for IndexMap<K, V, S> {
    fn construct(elements: Elements<'_, (K, V)>, (hasher,): (S,)) -> Self {
        let mut map = IndexMap::with_capacity_and_hasher(elements.len(), hasher);
        map.extend(elements.map(Element::take));
        map
    }
}

impl<T: 'static, S> Destination for IndexSet<T, S> {
    type Element = T;
}

impl<T: Eq + Hash + 'static, S: BuildHasher + Default> Construct for IndexSet<T, S> {
    fn construct(elements: Elements<'_, T>, (): ()) -> Self {
        Self::construct(elements, (S::default(),))
    }
}

/// Hasher-taking strategy, for hashers without a `Default`. Used through
/// [`to_with`](crate::InitList::to_with).
impl<T: Eq + Hash + 'static, S: BuildHasher> Construct<(S,)> for IndexSet<T, S> {
    fn construct(elements: Elements<'_, T>, (hasher,): (S,)) -> Self {
        let mut set = IndexSet::with_capacity_and_hasher(elements.len(), hasher);
        set.extend(elements.map(Element::take));
        set
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use std::hash::RandomState;

    use indexmap::{IndexMap, IndexSet};

    use crate::init;

    #[test]
    fn test_index_map_keeps_declaration_order() {
        let map: IndexMap<i32, &str, RandomState> =
            init!((3, "three"), (1, "one"), (2, "two")).to();
        let keys: Vec<i32> = map.keys().copied().collect();
        assert_eq!(keys, [3, 1, 2]);
    }

    #[test]
    fn test_index_set_with_explicit_hasher() {
        let set: IndexSet<i64, RandomState> =
            init!(2u8, 1u16, 2u32).to_with((RandomState::new(),));
        let values: Vec<i64> = set.iter().copied().collect();
        assert_eq!(values, [2, 1]);
    }
}
