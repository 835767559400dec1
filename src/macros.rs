//! The [`init!`](crate::init) entry-point macro.

/// Builds an [`InitList`](crate::InitList) from a list of differently typed
/// expressions.
///
/// Each expression is moved into the list at the position it was written;
/// conversion to a destination's element type happens later, when the list
/// is consumed. Up to 16 elements are supported, and a trailing comma is
/// allowed.
///
/// ```
/// use initlist::prelude::*;
///
/// let values: Vec<i64> = init!(1u8, 2u16, 3u32).to();
/// assert_eq!(values, [1, 2, 3]);
/// ```
///
/// The empty invocation produces a list that converts into the empty
/// instance of any destination:
///
/// ```
/// use initlist::prelude::*;
///
/// let empty: Vec<String> = init!().to();
/// assert!(empty.is_empty());
/// ```
///
/// Like any macro, it can be renamed on import:
///
/// ```
/// use initlist::init as list;
///
/// let values: Vec<i64> = list!(1u8, 2u16).to();
/// assert_eq!(values, [1, 2]);
/// ```
#[macro_export]
macro_rules! init {
    ($($value:expr),* $(,)?) => {
        $crate::InitList::new(($($value,)*))
    };
}
