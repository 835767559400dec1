//! Construction strategies for common container types.
//!
//! Every implementation here follows the same shape: [`Destination`] names
//! the element type (pairs for map-like containers), and
//! [`Construct`] feeds the materialized elements in, reserving up front
//! where the container supports it.
//!
//! [`Destination`]: crate::Destination
//! [`Construct`]: crate::Construct

mod alloc;

#[cfg(feature = "hashbrown")]
mod hashbrown;

#[cfg(feature = "indexmap")]
mod indexmap;

#[cfg(feature = "std")]
mod std;
