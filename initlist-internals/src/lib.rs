#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`initlist`].
//!
//! # Overview
//!
//! This crate contains the low-level, type-erased machinery that powers the
//! [`initlist`] heterogeneous initializer-list library. It provides zero-cost
//! per-position dispatch over a tuple of independently typed values, so that
//! each value can be moved out and converted to a single element type chosen
//! only at the point of conversion.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`initlist`] crate, not
//! this one.
//!
//! # Architecture
//!
//! The crate is organized around one type hierarchy in [`pack`]:
//!
//! - [`Pack`]: a tuple of up to 16 captured values, with a per-slot table of
//!   in-place drop functions
//! - [`Dispatch<E>`]: the capability of a pack to have every slot moved out
//!   and converted into the element type `E`, expressed as a per-slot table
//!   of conversion thunks
//! - [`PackVtable`]: the `&'static` record pairing one pack's take table and
//!   drop table, with private fields and documented unsafe accessors
//! - [`RawSlots`]: a lifetime-bound, type-erased pointer to a live pack
//!   together with its vtable, exposing index-level `take` and
//!   `drop_in_place` operations
//!
//! # Safety Strategy
//!
//! Erasing the pack type behind a `NonNull` pointer requires that the
//! dispatch tables used on that pointer always match the tuple actually
//! stored in memory. This crate maintains that property through:
//!
//! - **Module-based encapsulation**: [`RawSlots`] and [`PackVtable`] keep
//!   their fields module-private, and the only constructor pairs a pack with
//!   the vtable generated for exactly that pack type, so the pairing cannot
//!   be violated from outside
//! - **Macro-generated tables**: the per-slot tables are generated field by
//!   field from the tuple itself, so entry `i` is statically bound to slot
//!   `i`'s original type
//! - **Documented contracts**: every `unsafe fn` specifies exactly when it
//!   may be called, and slot-level consume-at-most-once discipline is the
//!   caller's documented obligation
//!
//! [`initlist`]: https://docs.rs/initlist/latest/initlist/
//! [`Pack`]: pack::Pack
//! [`Dispatch<E>`]: pack::Dispatch
//! [`PackVtable`]: pack::vtable::PackVtable
//! [`RawSlots`]: pack::RawSlots

mod pack;
mod util;

pub use pack::{Dispatch, DropFn, Pack, RawSlots, TakeFn, drop_slots_in_place};
pub use util::Erased;
