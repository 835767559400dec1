//! Owning iterator bridging an initializer list to `FromIterator`.

use core::{marker::PhantomData, mem::ManuallyDrop};

use initlist_internals::{Dispatch, Pack, RawSlots, drop_slots_in_place};

/// Owning iterator over the values of an [`InitList`](crate::InitList),
/// each converted to `E`.
///
/// Created by [`InitList::into_elements`](crate::InitList::into_elements).
/// Yields the converted values directly, which makes any
/// `FromIterator<E>` container a valid destination through `collect`.
///
/// Values not yet yielded when the iterator is dropped are dropped in
/// place, exactly once.
pub struct IntoElements<P: Pack, E> {
    /// The pack, owned by the iterator. Slots in `front..back` are still
    /// initialized; slots outside that range have been moved out.
    pack: ManuallyDrop<P>,
    /// Next position to yield from the front.
    front: usize,
    /// One past the last position to yield from the back.
    back: usize,
    /// The element type is chosen by the caller, not stored.
    _marker: PhantomData<fn() -> E>,
}

impl<P: Pack, E> IntoElements<P, E> {
    /// Takes ownership of a pack whose every slot is still initialized.
    pub(crate) fn new(pack: ManuallyDrop<P>) -> Self {
        Self {
            pack,
            front: 0,
            back: P::LEN,
            _marker: PhantomData,
        }
    }
}

impl<P: Dispatch<E>, E: 'static> Iterator for IntoElements<P, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        let slots = RawSlots::new(&mut self.pack);
        // SAFETY: `front` only moves forward, so this is the single take of
        // slot `index`, and the drop glue excludes it afterwards.
        Some(unsafe { slots.take(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<P: Dispatch<E>, E: 'static> DoubleEndedIterator for IntoElements<P, E> {
    fn next_back(&mut self) -> Option<E> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        let slots = RawSlots::new(&mut self.pack);
        // SAFETY: `back` only moves backward, so this is the single take of
        // slot `back`, and the drop glue excludes it afterwards.
        Some(unsafe { slots.take(self.back) })
    }
}

impl<P: Dispatch<E>, E: 'static> ExactSizeIterator for IntoElements<P, E> {}

impl<P: Dispatch<E>, E: 'static> core::iter::FusedIterator for IntoElements<P, E> {}

impl<P: Pack, E> Drop for IntoElements<P, E> {
    fn drop(&mut self) {
        // SAFETY: slots in `front..back` were never yielded, so they are
        // still initialized; each is dropped exactly once and the pack is
        // never touched again.
        unsafe { drop_slots_in_place(&mut self.pack, self.front..self.back) }
    }
}

impl<P: Pack, E> core::fmt::Debug for IntoElements<P, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntoElements")
            .field("len", &(self.back - self.front))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, vec::Vec};
    use core::cell::Cell;

    use crate::InitList;

    #[test]
    fn test_collects_in_declaration_order() {
        let values: Vec<i64> = InitList::new((1u8, 2u16, 3u32)).into_elements().collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_double_ended() {
        let mut elements = InitList::new((1u8, 2u16, 3u32)).into_elements::<i64>();
        assert_eq!(elements.next_back(), Some(3));
        assert_eq!(elements.next(), Some(1));
        assert_eq!(elements.next(), Some(2));
        assert_eq!(elements.next(), None);
        assert_eq!(elements.next_back(), None);
    }

    #[test]
    fn test_partial_consumption_drops_the_rest() {
        struct Counted(Rc<Cell<u32>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let counted = || Counted(Rc::clone(&drops));

        let mut elements = InitList::new((counted(), counted(), counted()))
            .into_elements::<Counted>();
        let first = elements.next().unwrap();
        drop(elements);
        assert_eq!(drops.get(), 2);

        drop(first);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_empty_list() {
        let mut elements = InitList::new(()).into_elements::<i64>();
        assert_eq!(elements.len(), 0);
        assert_eq!(elements.next(), None);
    }
}
