//! Convenience re-export of the items used at every call site.
//!
//! ```
//! use initlist::prelude::*;
//!
//! let values: Vec<i64> = init!(1u8, 2u16, 3u32).to();
//! assert_eq!(values, [1, 2, 3]);
//! ```

pub use crate::{Construct, Destination, Element, Elements, InitList, init};
