//! Internal utility types.

/// Marker type used when type-erasing a pack of captured values.
///
/// This zero-sized type serves as a placeholder pointee when the actual
/// concrete tuple type has been erased. For example, `NonNull<Erased>`
/// represents a pointer to a pack whose concrete type is unknown at the
/// current scope.
///
/// Using a distinct marker type (rather than `()`) makes the intent clearer
/// in type signatures and error messages.
#[derive(Clone, Copy)]
pub struct Erased;
