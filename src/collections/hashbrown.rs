//! Strategies for the `hashbrown` containers (feature `hashbrown`).

use core::hash::{BuildHasher, Hash};

use hashbrown::{HashMap, HashSet};

use crate::{Construct, Destination, Element, Elements};

impl<K: 'static, V: 'static, S> Destination for HashMap<K, V, S> {
    type Element = (K, V);
}

impl<K: Eq + Hash + 'static, V: 'static, S: BuildHasher + Default> Construct for HashMap<K, V, S> {
    fn construct(elements: Elements<'_, (K, V)>, (): ()) -> Self {
        Self::construct(elements, (S::default(),))
    }
}

/// Hasher-taking strategy, for hashers without a `Default`. Used through
/// [`to_with`](crate::InitList::to_with).
impl<K: Eq + Hash + 'static, V: 'static, S: BuildHasher> Construct<(S,)> for HashMap<K, V, S> {
    fn construct(elements: Elements<'_, (K, V)>, (hasher,): (S,)) -> Self {
        let mut map = HashMap::with_capacity_and_hasher(elements.len(), hasher);
        map.extend(elements.map(Element::take));
        map
    }
}

impl<T: 'static, S> Destination for HashSet<T, S> {
    type Element = T;
}

impl<T: Eq + Hash + 'static, S: BuildHasher + Default> Construct for HashSet<T, S> {
    fn construct(elements: Elements<'_, T>, (): ()) -> Self {
        Self::construct(elements, (S::default(),))
    }
}

/// Hasher-taking strategy, for hashers without a `Default`. Used through
/// [`to_with`](crate::InitList::to_with).
impl<T: Eq + Hash + 'static, S: BuildHasher> Construct<(S,)> for HashSet<T, S> {
    fn construct(elements: Elements<'_, T>, (hasher,): (S,)) -> Self {
        let mut set = HashSet::with_capacity_and_hasher(elements.len(), hasher);
        set.extend(elements.map(Element::take));
        set
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::{HashMap, HashSet};

    use crate::init;

    #[test]
    fn test_hash_map() {
        let map: HashMap<i32, &str> = init!((1, "one"), (2, "two")).to();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], "one");
        assert_eq!(map[&2], "two");
    }

    #[test]
    fn test_hash_set() {
        let set: HashSet<i64> = init!(1u8, 2u16, 2u32).to();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
    }
}
