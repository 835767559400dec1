//! Vtable for type-erased pack operations.
//!
//! This module contains the [`PackVtable`], which enables moving slots out of
//! a pack (or dropping them in place) after the pack's concrete tuple type
//! `P` has been erased. The vtable stores the two per-slot dispatch tables
//! that were generated for `P`.
//!
//! This module encapsulates the fields of [`PackVtable`] so they cannot be
//! accessed directly. This visibility restriction guarantees the safety
//! invariant: **both tables always come from the same `Dispatch<E>`
//! implementation**, so they agree on the slot count and on every slot's
//! original type.
//!
//! # Safety Invariant
//!
//! This invariant is maintained because vtables are created as `&'static`
//! references via [`PackVtable::new`], which pairs both tables with one
//! specific pack type `P` at compile time.

use core::ptr::NonNull;

use crate::{
    pack::tuple::{Dispatch, DropFn, TakeFn},
    util::Erased,
};

/// Vtable for type-erased pack operations.
///
/// Contains the position-indexed dispatch tables for one `(pack, element)`
/// instantiation.
///
/// # Safety Invariant
///
/// The fields `take` and `drop` are guaranteed to be the
/// [`TAKE_TABLE`](Dispatch::TAKE_TABLE) and
/// [`DROP_TABLE`](crate::Pack::DROP_TABLE) of the pack type `P` that was
/// used to create this [`PackVtable`], and therefore have identical length.
pub(crate) struct PackVtable<E: 'static> {
    /// Position-indexed conversion thunks of the pack.
    take: &'static [TakeFn<E>],
    /// Position-indexed in-place drop functions of the pack.
    drop: &'static [DropFn],
}

impl<E> PackVtable<E> {
    /// Creates the [`PackVtable`] for the pack type `P` and element type `E`.
    pub(super) const fn new<P: Dispatch<E>>() -> &'static Self {
        const {
            &Self {
                take: P::TAKE_TABLE,
                drop: P::DROP_TABLE,
            }
        }
    }

    /// Returns the number of slots in the pack this vtable was created for.
    pub(super) const fn len(&self) -> usize {
        self.take.len()
    }

    /// Moves the value out of slot `index` and converts it into `E`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Through the safe iterator API this
    /// is unreachable by construction (an empty pack produces an empty range
    /// that never asks for an element); the check guards the structural
    /// invariant rather than a reachable error path.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This [`PackVtable`] is the vtable for the pack stored behind
    ///    `base`, and the pack is live.
    /// 2. Slot `index` has not previously been taken or dropped, and will
    ///    not be taken or dropped again.
    #[inline]
    pub(super) unsafe fn take(&self, base: NonNull<Erased>, index: usize) -> E {
        let Some(thunk) = self.take.get(index) else {
            unreachable!("no slot at index {index} in a pack of {} slots", self.len())
        };
        // SAFETY: We know that `thunk` is entry `index` of `P::TAKE_TABLE`.
        // Its contract is upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        unsafe { (*thunk)(base) }
    }

    /// Drops the value in slot `index` in place.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; see [`PackVtable::take`].
    ///
    /// # Safety
    ///
    /// Same contract as [`PackVtable::take`].
    #[inline]
    pub(super) unsafe fn drop_in_place(&self, base: NonNull<Erased>, index: usize) {
        let Some(thunk) = self.drop.get(index) else {
            unreachable!("no slot at index {index} in a pack of {} slots", self.len())
        };
        // SAFETY: We know that `thunk` is entry `index` of `P::DROP_TABLE`.
        // Its contract is upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        unsafe { (*thunk)(base) }
    }
}
