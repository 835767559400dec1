//! Strategies for the `alloc` containers.

use alloc::{
    boxed::Box,
    collections::{BTreeMap, BTreeSet, VecDeque},
    string::String,
    vec::Vec,
};

use crate::{Construct, Destination, Element, Elements};

impl<T: 'static> Destination for Vec<T> {
    type Element = T;
}

/// `Vec` gets the in-place strategy: the buffer is sized to the exact
/// element count once, and each element is materialized straight into its
/// final address in the buffer. The length is bumped per element so a
/// panicking conversion drops exactly the elements built so far.
impl<T: 'static> Construct for Vec<T> {
    fn construct(elements: Elements<'_, T>, (): ()) -> Self {
        let mut vec: Vec<T> = Vec::with_capacity(elements.len());
        for element in elements {
            let index = vec.len();
            // SAFETY: capacity was reserved for the whole view up front and
            // never shrinks, so `index` is within the allocation.
            let slot = unsafe { vec.as_mut_ptr().add(index) };
            // SAFETY: `slot` points into the spare capacity reserved above.
            unsafe { slot.write(element.take()) };
            // SAFETY: the element at `index` was just initialized.
            unsafe { vec.set_len(index + 1) };
        }
        vec
    }
}

impl<T: 'static> Destination for VecDeque<T> {
    type Element = T;
}

impl<T: 'static> Construct for VecDeque<T> {
    fn construct(elements: Elements<'_, T>, (): ()) -> Self {
        elements.map(Element::take).collect()
    }
}

impl<T: 'static> Destination for Box<[T]> {
    type Element = T;
}

impl<T: 'static> Construct for Box<[T]> {
    fn construct(elements: Elements<'_, T>, (): ()) -> Self {
        Vec::construct(elements, ()).into_boxed_slice()
    }
}

impl<T: 'static> Destination for BTreeSet<T> {
    type Element = T;
}

impl<T: Ord + 'static> Construct for BTreeSet<T> {
    fn construct(elements: Elements<'_, T>, (): ()) -> Self {
        elements.map(Element::take).collect()
    }
}

impl<K: 'static, V: 'static> Destination for BTreeMap<K, V> {
    type Element = (K, V);
}

impl<K: Ord + 'static, V: 'static> Construct for BTreeMap<K, V> {
    fn construct(elements: Elements<'_, (K, V)>, (): ()) -> Self {
        elements.map(Element::take).collect()
    }
}

impl Destination for String {
    type Element = char;
}

impl Construct for String {
    fn construct(elements: Elements<'_, char>, (): ()) -> Self {
        elements.map(Element::take).collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{borrow::ToOwned, boxed::Box, collections::BTreeMap, string::String, vec::Vec};

    use crate::init;

    #[test]
    fn test_vec_from_heterogeneous_slots() {
        let values: Vec<i64> = init!(1u8, 2u16, 3u32, 4i32).to();
        assert_eq!(values, [1, 2, 3, 4]);
    }

    #[test]
    fn test_vec_of_move_only_values() {
        let boxes: Vec<Box<i32>> = init!(Box::new(1), 2, 3).to();
        assert_eq!(*boxes[0], 1);
        assert_eq!(*boxes[1], 2);
        assert_eq!(*boxes[2], 3);
    }

    #[test]
    fn test_empty_list_makes_empty_containers() {
        let vec: Vec<Box<i32>> = init!().to();
        assert!(vec.is_empty());

        let string: String = init!().to();
        assert!(string.is_empty());
    }

    #[test]
    fn test_boxed_slice() {
        let values: Box<[i64]> = init!(1u8, 2u16).to();
        assert_eq!(&*values, [1, 2]);
    }

    #[test]
    fn test_string_from_chars() {
        let text: String = init!('a', 'b', 'c').to();
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_btree_map_from_pairs() {
        let map: BTreeMap<String, i64> = init!(("one".to_owned(), 1i64), ("two".to_owned(), 2i64))
            .into_elements()
            .collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map["one"], 1);
        assert_eq!(map["two"], 2);
    }

    #[test]
    fn test_btree_map_to() {
        let map: BTreeMap<i32, &str> = init!((1, "one"), (2, "two")).to();
        assert_eq!(map[&1], "one");
        assert_eq!(map[&2], "two");
    }
}
