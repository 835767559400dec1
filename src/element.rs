//! The element proxy and the view iterator handed to construction
//! strategies.

use initlist_internals::RawSlots;

/// A single not-yet-materialized element of an initializer list.
///
/// An `Element` stands for "the value in slot `index`, not yet committed to
/// the element type". Calling [`take`](Element::take) runs the one dispatch
/// thunk generated for that slot's original type, moving the value out and
/// converting it to `E`.
///
/// The proxy is deliberately neither `Copy` nor `Clone`: it represents the
/// single permission to move its slot's value out. A proxy that is dropped
/// without being taken drops the underlying value in place, so abandoning
/// part of a view never leaks and never double-drops.
pub struct Element<'a, E: 'static> {
    /// Erased view of the pack this element's slot lives in.
    slots: RawSlots<'a, E>,
    /// Position of this element's slot.
    index: usize,
}

impl<'a, E> Element<'a, E> {
    /// Position of this element within the list, in declaration order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Materializes the element, moving the captured value out of its slot
    /// and converting it to `E`.
    #[must_use]
    pub fn take(self) -> E {
        let this = core::mem::ManuallyDrop::new(self);
        // SAFETY: `Elements` yields each position at most once, and `take`
        // consumes the proxy without running its `Drop`, so this is the
        // single take of slot `index`.
        unsafe { this.slots.take(this.index) }
    }
}

impl<E> Drop for Element<'_, E> {
    fn drop(&mut self) {
        // SAFETY: the proxy was never taken (`take` suppresses this impl),
        // so the slot is still initialized, and no code touches it again.
        unsafe { self.slots.drop_in_place(self.index) }
    }
}

impl<E> core::fmt::Debug for Element<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Element")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// View over the elements of an initializer list, as passed to
/// [`Construct`](crate::Construct) strategies.
///
/// Yields one [`Element`] proxy per slot, in declaration order. The view is
/// double-ended, fused, and reports its exact length, so destination
/// containers can reserve up front.
///
/// Slots that are never yielded — because the view is dropped early, or an
/// adapter like `nth` skipped over them via their proxies — have their
/// values dropped exactly once.
pub struct Elements<'a, E: 'static> {
    /// Erased view of the pack.
    slots: RawSlots<'a, E>,
    /// Next position to yield from the front.
    front: usize,
    /// One past the last position to yield from the back.
    back: usize,
}

impl<'a, E> Elements<'a, E> {
    /// Creates a view spanning every slot of `slots`.
    pub(crate) fn new(slots: RawSlots<'a, E>) -> Self {
        Self {
            slots,
            front: 0,
            back: slots.len(),
        }
    }

    /// Number of elements not yet yielded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.back - self.front
    }

    /// Returns `true` if every element has been yielded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front == self.back
    }
}

impl<'a, E> Iterator for Elements<'a, E> {
    type Item = Element<'a, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        Some(Element {
            slots: self.slots,
            index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<E> DoubleEndedIterator for Elements<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(Element {
            slots: self.slots,
            index: self.back,
        })
    }
}

impl<E> ExactSizeIterator for Elements<'_, E> {}

impl<E> core::iter::FusedIterator for Elements<'_, E> {}

impl<E> Drop for Elements<'_, E> {
    fn drop(&mut self) {
        for index in self.front..self.back {
            // SAFETY: positions in `front..back` were never yielded, so
            // their slots are still initialized; each is dropped exactly
            // once and never touched again.
            unsafe { self.slots.drop_in_place(index) }
        }
    }
}

impl<E> core::fmt::Debug for Elements<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Elements")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, string::String, vec::Vec};
    use core::{cell::Cell, mem::ManuallyDrop};

    use initlist_internals::RawSlots;

    use super::*;

    #[test]
    fn test_yields_in_declaration_order() {
        let mut pack = ManuallyDrop::new((1u8, 2u16, 3u32));
        let elements = Elements::<i64>::new(RawSlots::new(&mut pack));

        let values: Vec<i64> = elements.map(Element::take).collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_exact_size_and_double_ended() {
        let mut pack = ManuallyDrop::new((1u8, 2u16, 3u32, 4i64));
        let mut elements = Elements::<i64>::new(RawSlots::new(&mut pack));

        assert_eq!(elements.len(), 4);
        assert_eq!(elements.size_hint(), (4, Some(4)));

        let first = elements.next().unwrap();
        assert_eq!(first.index(), 0);
        assert_eq!(first.take(), 1);

        let last = elements.next_back().unwrap();
        assert_eq!(last.index(), 3);
        assert_eq!(last.take(), 4);

        assert_eq!(elements.len(), 2);
        assert_eq!(elements.next().unwrap().take(), 2);
        assert_eq!(elements.next().unwrap().take(), 3);
        assert!(elements.next().is_none());
        // Fused: stays exhausted.
        assert!(elements.next().is_none());
        assert!(elements.next_back().is_none());
    }

    #[test]
    fn test_nth_releases_skipped_slots() {
        struct Counted(Rc<Cell<u32>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let counted = || Counted(Rc::clone(&drops));

        let mut pack = ManuallyDrop::new((counted(), counted(), counted()));
        let mut elements = Elements::<Counted>::new(RawSlots::new(&mut pack));

        // `nth(2)` skips two proxies; their values are released.
        let third = elements.nth(2).unwrap();
        assert_eq!(drops.get(), 2);

        drop(third);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_dropping_the_view_releases_remaining_slots() {
        struct Counted(Rc<Cell<u32>>);
        impl Drop for Counted {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Rc::new(Cell::new(0));
        let counted = || Counted(Rc::clone(&drops));

        let mut pack = ManuallyDrop::new((counted(), counted(), counted()));
        let mut elements = Elements::<Counted>::new(RawSlots::new(&mut pack));

        let first = elements.next().unwrap().take();
        drop(elements);
        assert_eq!(drops.get(), 2);

        drop(first);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_empty_view() {
        let mut pack = ManuallyDrop::new(());
        let mut elements = Elements::<String>::new(RawSlots::new(&mut pack));
        assert_eq!(elements.len(), 0);
        assert!(elements.is_empty());
        assert!(elements.next().is_none());
        assert!(elements.next_back().is_none());
    }

    #[test]
    fn test_proxies_are_not_copyable() {
        static_assertions::assert_not_impl_any!(Element<'static, i32>: Copy, Clone);
        static_assertions::assert_not_impl_any!(Elements<'static, i32>: Copy, Clone);
    }
}
