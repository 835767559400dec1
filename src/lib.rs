#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Heterogeneous initializer lists that convert into arbitrary containers.
//!
//! ## Overview
//!
//! Rust's native list literals are homogeneous: `vec![a, b, c]` requires all
//! three expressions to have the same type, and building a collection of
//! move-only or non-defaultable values often forces a `push`-by-`push`
//! dance. This crate provides [`init!`], a literal-looking list of
//! *differently typed* expressions that converts into any container-like
//! destination, moving each value exactly once and converting it to the
//! destination's element type on the way in:
//!
//! ```
//! use initlist::prelude::*;
//!
//! // A `Box<i32>` and a plain `i32` both land in `Vec<Box<i32>>`.
//! let boxes: Vec<Box<i32>> = init!(Box::new(1), 2, 3).to();
//! assert_eq!(*boxes[0], 1);
//! assert_eq!(*boxes[2], 3);
//! ```
//!
//! The elements never pass through a temporary homogeneous sequence: the
//! list captures the values as a heterogeneous pack, and conversion moves
//! each one straight into the destination. That makes element types work
//! that the native facility cannot handle at all, such as atomics:
//!
//! ```
//! use std::sync::atomic::{AtomicI32, Ordering};
//!
//! use initlist::prelude::*;
//!
//! let atomics: Vec<AtomicI32> = init!(1, 2, 3).to();
//! assert_eq!(atomics[1].load(Ordering::Relaxed), 2);
//! ```
//!
//! ## Core Concepts
//!
//! - [`InitList`] is the adapter produced by [`init!`]. It owns the captured
//!   values and is consumed at most once; a list that is dropped without
//!   being consumed drops its values normally.
//! - A slot's value is converted to the destination's element type `E`
//!   through the `Into<E>` implementation of the slot's *original* type,
//!   selected at compile time per position. A conversion that is impossible
//!   for any slot fails to compile; there is no runtime error path.
//! - [`Destination`] picks the element type for a destination container, and
//!   [`Construct`] is the strategy that builds the container from a view of
//!   the elements plus optional extra arguments
//!   ([`to_with`](InitList::to_with)).
//! - Containers that implement the native `FromIterator` facility can also
//!   consume the list through [`into_elements`](InitList::into_elements) and
//!   `collect`, so the adapter is never more permissive than what it
//!   replaces.
//!
//! For implementation details, see the [`initlist-internals`] crate.
//!
//! [`initlist-internals`]: initlist_internals
//!
//! ## Feature Flags
//!
//! - `std`: construction strategies for `std::collections::{HashMap,
//!   HashSet}`.
//! - `hashbrown`: construction strategies for `hashbrown` maps and sets,
//!   including hasher-carrying extra arguments.
//! - `indexmap`: construction strategies for `indexmap` maps and sets.
//!
//! All features are off by default and the crate is `no_std` (with `alloc`).

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod collections;
mod construct;
mod element;
mod into_elements;
mod list;
mod macros;
pub mod prelude;

pub use initlist_internals::{Dispatch, Pack};

pub use crate::{
    construct::{Construct, Destination},
    element::{Element, Elements},
    into_elements::IntoElements,
    list::InitList,
};
