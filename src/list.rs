//! The initializer-list adapter itself.

use core::mem::ManuallyDrop;

use initlist_internals::{Dispatch, Pack, RawSlots};

use crate::{
    construct::Construct,
    element::Elements,
    into_elements::IntoElements,
};

/// A heterogeneous initializer list: a fixed-length pack of independently
/// typed values, waiting to be converted into a container.
///
/// Build one with the [`init!`](crate::init) macro rather than by naming a
/// tuple directly:
///
/// ```
/// use initlist::prelude::*;
///
/// let list = init!(Box::new(1), 2);
/// assert_eq!(list.len(), 2);
///
/// let boxes: Vec<Box<i32>> = list.to();
/// assert_eq!(*boxes[1], 2);
/// ```
///
/// The list owns its captured values. It is consumed at most once: every
/// conversion takes `self` by value, so a second conversion of the same list
/// is a compile error, not a runtime hazard. A list that is dropped without
/// being consumed drops its values in declaration order.
pub struct InitList<P> {
    /// The captured pack. Wrapped in [`ManuallyDrop`] so consuming methods
    /// can transfer the values out without a double drop; [`InitList`]'s own
    /// `Drop` impl releases it on the never-consumed path.
    slots: ManuallyDrop<P>,
}

impl<P: Pack> InitList<P> {
    /// Creates a list from an already-built pack of values.
    ///
    /// Prefer the [`init!`](crate::init) macro, which builds the pack for
    /// you.
    #[must_use]
    pub fn new(values: P) -> Self {
        Self {
            slots: ManuallyDrop::new(values),
        }
    }

    /// Number of values in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        P::LEN
    }

    /// Returns `true` if the list captured no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        P::LEN == 0
    }

    /// Converts the list into the destination container `C`.
    ///
    /// Each captured value is moved out exactly once and converted to
    /// `C`'s element type through the `Into` implementation of the value's
    /// original type. The conversion only compiles when every slot has such
    /// an implementation and `C` has a no-extra-argument construction
    /// strategy.
    ///
    /// ```
    /// use initlist::prelude::*;
    ///
    /// let strings: Vec<String> = init!("borrowed", String::from("owned")).to();
    /// assert_eq!(strings, ["borrowed", "owned"]);
    /// ```
    #[must_use]
    pub fn to<C>(self) -> C
    where
        C: Construct,
        P: Dispatch<C::Element>,
    {
        self.to_with(())
    }

    /// Converts the list into `C`, forwarding extra construction arguments
    /// to `C`'s [`Construct`] strategy unmodified.
    ///
    /// This is the explicit path for destinations whose construction shape
    /// takes more than the elements themselves (a hasher, a capacity
    /// policy, ...). It only compiles when `C` implements
    /// [`Construct`] for exactly the given argument types.
    #[must_use]
    pub fn to_with<C, A>(self, args: A) -> C
    where
        C: Construct<A>,
        P: Dispatch<C::Element>,
    {
        let mut this = ManuallyDrop::new(self);
        let slots = RawSlots::new(&mut this.slots);
        C::construct(Elements::new(slots), args)
    }

    /// Consumes the list into an iterator over its values, each converted
    /// to `E`.
    ///
    /// This is the bridge to the native `FromIterator` facility: any
    /// container that would accept a homogeneous iterator of `E` can
    /// `collect` the list.
    ///
    /// ```
    /// use initlist::prelude::*;
    ///
    /// let values: Vec<i64> = init!(1u8, 2u16, 3i32).into_elements().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    #[must_use]
    pub fn into_elements<E: 'static>(self) -> IntoElements<P, E>
    where
        P: Dispatch<E>,
    {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so ownership of the pack moves
        // into the iterator without a double drop.
        let pack = unsafe { core::ptr::read(&this.slots) };
        IntoElements::new(pack)
    }
}

impl<P> Drop for InitList<P> {
    fn drop(&mut self) {
        // SAFETY: the consuming methods wrap `self` in `ManuallyDrop` and
        // never run this impl, so reaching it means the pack is still fully
        // initialized and this is its only drop.
        unsafe { ManuallyDrop::drop(&mut self.slots) }
    }
}

impl<P: Pack> core::fmt::Debug for InitList<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InitList")
            .field("len", &P::LEN)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{boxed::Box, format, rc::Rc, vec::Vec};
    use core::cell::Cell;

    use super::*;

    struct Counted {
        drops: Rc<Cell<u32>>,
    }

    impl Drop for Counted {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    #[test]
    fn test_len_and_is_empty() {
        let list = InitList::new((1u8, 2i32, "three"));
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());

        let empty = InitList::new(());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_unconsumed_list_drops_values() {
        let drops = Rc::new(Cell::new(0));
        let list = InitList::new((
            Counted {
                drops: Rc::clone(&drops),
            },
            Counted {
                drops: Rc::clone(&drops),
            },
        ));
        assert_eq!(drops.get(), 0);
        drop(list);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_consumed_list_moves_each_value_once() {
        let drops = Rc::new(Cell::new(0));
        let list = InitList::new((
            Counted {
                drops: Rc::clone(&drops),
            },
            Counted {
                drops: Rc::clone(&drops),
            },
        ));

        let values: Vec<Counted> = list.to();
        assert_eq!(drops.get(), 0);
        drop(values);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_auto_traits_follow_the_pack() {
        static_assertions::assert_impl_all!(InitList<(i32, Box<i32>)>: Send, Sync);
        static_assertions::assert_not_impl_any!(InitList<(Rc<i32>,)>: Send, Sync);
    }

    #[test]
    fn test_debug() {
        let list = InitList::new((1u8, 2u16));
        assert_eq!(format!("{list:?}"), "InitList { len: 2, .. }");
    }
}
