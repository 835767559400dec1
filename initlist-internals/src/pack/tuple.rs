//! The pack traits and their tuple implementations.
//!
//! A *pack* is a tuple of independently typed values captured by an
//! initializer list. The traits here attach two compile-time-generated
//! `&'static` tables to every tuple type:
//!
//! - a *drop table* ([`Pack::DROP_TABLE`]), used to release slots that were
//!   never moved out
//! - a *take table* ([`Dispatch::TAKE_TABLE`]), used to move a slot out and
//!   convert it to the element type `E` chosen at the point of conversion
//!
//! Entry `i` of each table is statically bound to slot `i`'s original type:
//! the tables are generated field by field from the tuple itself, so the
//! correct `Into` implementation is selected at compile time, not looked up
//! dynamically.
//!
//! Implementations are provided for tuple arities 0 through 16.

use core::ptr::NonNull;

use crate::util::Erased;

/// One entry of a take table.
///
/// Moves the value out of one specific slot of a pack and converts it into
/// `E`.
///
/// # Safety
///
/// May only be called with a pointer to a live value of the pack type the
/// table was generated for, and only while the thunk's slot is still
/// initialized. Calling the thunk moves the slot's value out, so the slot
/// must not be taken or dropped again afterwards.
pub type TakeFn<E> = unsafe fn(NonNull<Erased>) -> E;

/// One entry of a drop table.
///
/// Drops the value in one specific slot of a pack in place.
///
/// # Safety
///
/// Same contract as [`TakeFn`], except that the slot's value is dropped
/// rather than returned.
pub type DropFn = unsafe fn(NonNull<Erased>);

/// A fixed-arity heterogeneous pack of captured values.
///
/// Implemented for tuples of arity 0 through 16. The slot count is fixed at
/// the type level and never changes.
///
/// # Safety
///
/// Implementations must guarantee that [`DROP_TABLE`](Pack::DROP_TABLE) has
/// exactly [`LEN`](Pack::LEN) entries and that entry `i`, when called
/// according to the [`DropFn`] contract, drops the value in slot `i` in
/// place and touches nothing else.
pub unsafe trait Pack: Sized {
    /// Number of slots in the pack.
    const LEN: usize;

    /// Per-slot in-place drop functions, in declaration order.
    const DROP_TABLE: &'static [DropFn];
}

/// Capability of a pack to have every slot moved out as an `E`.
///
/// This holds exactly when every slot's original type implements `Into<E>`,
/// which makes "this list can initialize a container of `E`" a compile-time
/// capability check: code that requires an impossible conversion fails to
/// compile rather than at runtime.
///
/// The empty pack `()` implements `Dispatch<E>` for every `E`; its tables
/// are empty and indexing them is structurally unreachable through the safe
/// API.
///
/// # Safety
///
/// Implementations must guarantee that
/// [`TAKE_TABLE`](Dispatch::TAKE_TABLE) has exactly [`LEN`](Pack::LEN)
/// entries and that entry `i`, when called according to the [`TakeFn`]
/// contract, reads slot `i` exactly once and converts the value into `E`.
pub unsafe trait Dispatch<E: 'static>: Pack {
    /// Position-indexed conversion thunks, in declaration order.
    const TAKE_TABLE: &'static [TakeFn<E>];
}

/// Implements [`Pack`] and [`Dispatch`] for one tuple arity.
///
/// Invoked once per arity with `(index name)` pairs for every slot.
macro_rules! impl_pack_for_tuple {
    ($(($idx:tt $slot:ident))*) => {
        // SAFETY: the tables below are generated field by field from the
        // tuple itself, so they have exactly `LEN` entries and entry `i`
        // only touches slot `i`.
        unsafe impl<$($slot),*> Pack for ($($slot,)*) {
            const LEN: usize = Self::DROP_TABLE.len();

            const DROP_TABLE: &'static [DropFn] = &[
                $(
                    |base: NonNull<Erased>| {
                        let tuple = base.cast::<Self>().as_ptr();
                        // SAFETY: the `DropFn` contract guarantees `base`
                        // points to a live `Self` whose slot is still
                        // initialized.
                        let slot = unsafe { &raw mut (*tuple).$idx };
                        // SAFETY: same contract; the slot is initialized and
                        // is never touched again after this call.
                        unsafe { core::ptr::drop_in_place(slot) }
                    }
                ),*
            ];
        }

        // SAFETY: the take table mirrors the drop table entry for entry;
        // thunk `i` reads slot `i` exactly once and converts it with the
        // `Into` implementation selected at compile time for that slot's
        // original type.
        unsafe impl<E: 'static, $($slot: Into<E>),*> Dispatch<E> for ($($slot,)*) {
            const TAKE_TABLE: &'static [TakeFn<E>] = &[
                $(
                    |base: NonNull<Erased>| -> E {
                        let tuple = base.cast::<Self>().as_ptr();
                        // SAFETY: the `TakeFn` contract guarantees `base`
                        // points to a live `Self` whose slot has not been
                        // taken or dropped yet.
                        let slot = unsafe { &raw const (*tuple).$idx };
                        // SAFETY: same contract; this is the single read of
                        // the slot, which transfers the value out.
                        let value = unsafe { core::ptr::read(slot) };
                        value.into()
                    }
                ),*
            ];
        }
    };
}

impl_pack_for_tuple!();
impl_pack_for_tuple!((0 P0));
impl_pack_for_tuple!((0 P0) (1 P1));
impl_pack_for_tuple!((0 P0) (1 P1) (2 P2));
impl_pack_for_tuple!((0 P0) (1 P1) (2 P2) (3 P3));
impl_pack_for_tuple!((0 P0) (1 P1) (2 P2) (3 P3) (4 P4));
impl_pack_for_tuple!((0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5));
impl_pack_for_tuple!((0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6));
impl_pack_for_tuple!((0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7));
impl_pack_for_tuple!((0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8));
impl_pack_for_tuple!((0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9));
impl_pack_for_tuple!(
    (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10)
);
impl_pack_for_tuple!(
    (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11)
);
impl_pack_for_tuple!(
    (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11)
    (12 P12)
);
impl_pack_for_tuple!(
    (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11)
    (12 P12) (13 P13)
);
impl_pack_for_tuple!(
    (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11)
    (12 P12) (13 P13) (14 P14)
);
impl_pack_for_tuple!(
    (0 P0) (1 P1) (2 P2) (3 P3) (4 P4) (5 P5) (6 P6) (7 P7) (8 P8) (9 P9) (10 P10) (11 P11)
    (12 P12) (13 P13) (14 P14) (15 P15)
);

#[cfg(test)]
mod tests {
    use core::mem::ManuallyDrop;

    use super::*;

    #[test]
    fn test_len_matches_arity() {
        assert_eq!(<() as Pack>::LEN, 0);
        assert_eq!(<(u8,) as Pack>::LEN, 1);
        assert_eq!(<(u8, i32) as Pack>::LEN, 2);
        assert_eq!(<(u8, i32, &str, [u64; 4]) as Pack>::LEN, 4);
    }

    #[test]
    fn test_tables_have_len_entries() {
        assert_eq!(<() as Pack>::DROP_TABLE.len(), 0);
        assert_eq!(<() as Dispatch<i64>>::TAKE_TABLE.len(), 0);

        assert_eq!(<(u8, u16, u32) as Pack>::DROP_TABLE.len(), 3);
        assert_eq!(<(u8, u16, u32) as Dispatch<i64>>::TAKE_TABLE.len(), 3);
    }

    #[test]
    fn test_take_converts_each_slot() {
        let mut pack = ManuallyDrop::new((1u8, 2u16, 3u32));
        let base = NonNull::from(&mut pack).cast::<Erased>();
        let table = <(u8, u16, u32) as Dispatch<i64>>::TAKE_TABLE;

        // SAFETY: `pack` is live and each slot is taken exactly once.
        let a = unsafe { table[0](base) };
        // SAFETY: as above.
        let b = unsafe { table[1](base) };
        // SAFETY: as above.
        let c = unsafe { table[2](base) };

        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_drop_table_drops_in_place() {
        use core::cell::Cell;

        struct Counted<'a>(&'a Cell<u32>);
        impl Drop for Counted<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let drops = Cell::new(0);
        let mut pack = ManuallyDrop::new((Counted(&drops), 7u8, Counted(&drops)));
        let base = NonNull::from(&mut pack).cast::<Erased>();
        let table = <(Counted<'_>, u8, Counted<'_>) as Pack>::DROP_TABLE;

        // SAFETY: `pack` is live and each slot is dropped exactly once.
        unsafe { table[0](base) };
        assert_eq!(drops.get(), 1);
        // SAFETY: as above.
        unsafe { table[2](base) };
        assert_eq!(drops.get(), 2);
        // SAFETY: as above.
        unsafe { table[1](base) };
        assert_eq!(drops.get(), 2);
    }
}
