//! Module containing the pack capture and dispatch machinery

mod raw;
mod tuple;
pub(crate) mod vtable;

pub use self::{
    raw::{RawSlots, drop_slots_in_place},
    tuple::{Dispatch, DropFn, Pack, TakeFn},
};
