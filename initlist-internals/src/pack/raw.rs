//! Type-erased pack pointer type.
//!
//! This module encapsulates the fields of [`RawSlots`], ensuring they are
//! only visible within this module. This visibility restriction guarantees
//! the safety invariant: **the base pointer always points to a live pack of
//! the type the vtable was created for**.
//!
//! # Safety Invariant
//!
//! Since the fields can only be set via [`RawSlots::new`] (which derives
//! both from the same pack reference and pack type), and cannot be modified
//! afterwards (no `pub` or `pub(crate)` fields), the pairing remains valid
//! for the value's lifetime.
//!
//! What this module does *not* track is which slots have already been moved
//! out: that is the documented obligation of the callers of
//! [`RawSlots::take`] and [`RawSlots::drop_in_place`]. The safe iterators in
//! the `initlist` crate uphold it by yielding each position exactly once.

use core::{marker::PhantomData, mem::ManuallyDrop, ops::Range, ptr::NonNull};

use crate::{
    pack::{
        tuple::{Dispatch, Pack},
        vtable::PackVtable,
    },
    util::Erased,
};

/// A lifetime-bound, type-erased pointer to a live pack, paired with the
/// dispatch vtable generated for exactly that pack type.
///
/// We cannot use a `&'a mut P` directly, because the element type an
/// individual slot converts to is only chosen at the point of conversion,
/// after the pack type has left the caller's scope.
///
/// `RawSlots` is `Copy`: the iterators built on top of it hand out one copy
/// per element proxy. Slot-level consume-at-most-once discipline is carried
/// by the unsafe contracts of [`take`](RawSlots::take) and
/// [`drop_in_place`](RawSlots::drop_in_place), not by this type.
pub struct RawSlots<'a, E: 'static> {
    /// Pointer to the first byte of the pack.
    ///
    /// # Safety
    ///
    /// The following safety invariants are guaranteed to be upheld as long
    /// as this struct exists:
    ///
    /// 1. The pointer was created from a `&'a mut ManuallyDrop<P>` for the
    ///    pack type `P` that `vtable` was created for.
    /// 2. The pointee remains borrowed for `'a`, so it cannot move or be
    ///    repurposed while any copy of this value exists.
    base: NonNull<Erased>,
    /// Dispatch tables of the pack behind `base`.
    vtable: &'static PackVtable<E>,
    /// Marker to tell the compiler that we behave like a mutable borrow of
    /// the pack.
    _marker: PhantomData<&'a mut Erased>,
}

// Derived impls would require `E: Copy`, but the view is a pointer and a
// table reference regardless of `E`.
impl<E> Clone for RawSlots<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for RawSlots<'_, E> {}

impl<'a, E> RawSlots<'a, E> {
    /// Creates a new [`RawSlots`] view over `pack`.
    ///
    /// The vtable is derived from `P` here, in the only constructor, so the
    /// base pointer and the dispatch tables can never disagree about the
    /// pack's type.
    #[inline]
    pub fn new<P: Dispatch<E>>(pack: &'a mut ManuallyDrop<P>) -> Self {
        Self {
            base: NonNull::from(pack).cast::<Erased>(),
            vtable: PackVtable::new::<P>(),
            _marker: PhantomData,
        }
    }

    /// Returns the number of slots in the pack.
    #[inline]
    pub fn len(self) -> usize {
        self.vtable.len()
    }

    /// Returns `true` if the pack has no slots.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Moves the value out of slot `index` and converts it into `E` through
    /// the thunk statically bound to that slot's original type.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `index < self.len()`.
    /// 2. Slot `index` has not previously been taken or dropped, and will
    ///    not be taken or dropped again.
    #[inline]
    pub unsafe fn take(self, index: usize) -> E {
        // SAFETY: The vtable matches the pack behind `base` (invariant of
        // this type), the pack outlives `'a`, and requirement 2 is
        // guaranteed by the caller.
        unsafe { self.vtable.take(self.base, index) }
    }

    /// Drops the value in slot `index` in place.
    ///
    /// # Safety
    ///
    /// Same contract as [`RawSlots::take`].
    #[inline]
    pub unsafe fn drop_in_place(self, index: usize) {
        // SAFETY: As in `RawSlots::take`.
        unsafe { self.vtable.drop_in_place(self.base, index) }
    }
}

impl<E> core::fmt::Debug for RawSlots<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawSlots")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Drops the slots of `pack` in `range` in place, without requiring an
/// element type to be chosen.
///
/// This is the drop glue used by owning iterators that abandon part of a
/// pack.
///
/// # Safety
///
/// The caller must ensure that every slot in `range` is in range for `P`,
/// is still initialized (never taken or dropped), and is never taken or
/// dropped again afterwards.
pub unsafe fn drop_slots_in_place<P: Pack>(pack: &mut ManuallyDrop<P>, range: Range<usize>) {
    let base = NonNull::from(pack).cast::<Erased>();
    for index in range {
        let Some(thunk) = P::DROP_TABLE.get(index) else {
            unreachable!("no slot at index {index} in a pack of {} slots", P::LEN)
        };
        // SAFETY: `base` points to a live `P` borrowed for the duration of
        // this call, and the caller guarantees slot `index` is initialized
        // and not touched again.
        unsafe { (*thunk)(base) }
    }
}
