//! Declarative opt-in macros.

// =============================================================================
// impl_selectable! - Marker conformance for a list of types
// =============================================================================

/// Opt one or more types into [`Selectable`](crate::Selectable).
///
/// Expands to an empty `impl Selectable for Ty {}` per type.
///
/// # Example
///
/// ```
/// use tola_branch::{impl_selectable, Selectable};
///
/// #[derive(Debug, PartialEq)]
/// struct Padding(u8);
/// #[derive(Debug, PartialEq)]
/// struct Tint(&'static str);
///
/// impl_selectable!(Padding, Tint);
///
/// assert_eq!(Padding::select_unless(true, Padding(8), Padding(4)), Padding(4));
/// ```
#[macro_export]
macro_rules! impl_selectable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Selectable for $ty {}
        )*
    };
}
