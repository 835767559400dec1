//! Customization points for building destination containers.

use crate::element::Elements;

/// Selects the element type an initializer list materializes when it
/// converts into `Self`.
///
/// This is the first of the two customization points consulted during a
/// conversion: it plays the role a nested element-type alias plays on
/// ordinary containers, and it is what lets `list.to()` infer the element
/// type from the destination alone.
///
/// Implementations are provided for the common `alloc` containers, for
/// `std`'s hash containers (feature `std`), and for `hashbrown` and
/// `indexmap` (optional features). Map-like destinations use `(K, V)`
/// pairs as their element type.
pub trait Destination {
    /// Element type the destination is built from.
    type Element: 'static;
}

/// Construction strategy: builds `Self` from a view of materializable
/// elements, plus extra arguments.
///
/// The default argument shape is `()`, used by [`to`](crate::InitList::to).
/// Destinations whose construction needs more than the elements — a
/// hasher, for example — implement `Construct<Args>` for the extra-argument
/// tuple and are built with [`to_with`](crate::InitList::to_with). A
/// destination may implement several argument shapes side by side.
///
/// There is no registration and no runtime lookup: the strategy for a
/// conversion is resolved entirely at compile time, and a conversion
/// without a matching strategy does not compile.
///
/// # Implementing for your own container
///
/// Strategies receive an [`Elements`] view. Each yielded
/// [`Element`](crate::Element) is materialized with
/// [`take`](crate::Element::take); the view's exact length is available up
/// front for reservation.
///
/// ```
/// use initlist::prelude::*;
///
/// struct Sorted {
///     values: Vec<i32>,
/// }
///
/// impl Destination for Sorted {
///     type Element = i32;
/// }
///
/// impl Construct for Sorted {
///     fn construct(elements: Elements<'_, i32>, (): ()) -> Self {
///         let mut values: Vec<i32> = elements.map(Element::take).collect();
///         values.sort_unstable();
///         Sorted { values }
///     }
/// }
///
/// let sorted: Sorted = init!(3u8, 1u8, 2u16).to();
/// assert_eq!(sorted.values, [1, 2, 3]);
/// ```
pub trait Construct<Args = ()>: Destination + Sized {
    /// Builds `Self`, materializing each element of `elements` at most
    /// once and consuming `args`.
    fn construct(elements: Elements<'_, Self::Element>, args: Args) -> Self;
}
