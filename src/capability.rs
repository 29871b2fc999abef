//! The `Selectable` marker capability.
//!
//! A type gains `select_if` / `select_unless` / `select_resolved` as
//! associated functions by declaring an empty impl:
//!
//! ```
//! use tola_branch::Selectable;
//!
//! #[derive(Debug, PartialEq)]
//! enum Corner { Round, Square }
//!
//! impl Selectable for Corner {}
//!
//! assert_eq!(Corner::select_if(false, Corner::Round, Corner::Square), Corner::Square);
//! ```
//!
//! `impl_selectable!(A, B)` and `#[derive(Selectable)]` produce the same
//! empty impl.

use crate::primitives::Condition;
use crate::select;

/// Opt-in capability for static, condition-driven value selection.
///
/// Every method has a default body; implementors write nothing.
pub trait Selectable: Sized {
    /// `primary` if `condition` holds, else `fallback`.
    #[inline]
    fn select_if<C: Condition>(condition: C, primary: Self, fallback: Self) -> Self {
        select::select_if(condition, primary, fallback)
    }

    /// `primary` if `condition` does NOT hold, else `fallback`.
    #[inline]
    fn select_unless<C: Condition>(condition: C, primary: Self, fallback: Self) -> Self {
        select::select_unless(condition, primary, fallback)
    }

    /// Invoke `resolver` once and return its value verbatim.
    #[inline]
    fn select_resolved<F: FnOnce() -> Self>(resolver: F) -> Self {
        select::select_resolved(resolver)
    }
}

// =============================================================================
// Core / Std Types
// =============================================================================

crate::impl_selectable!(
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    core::cmp::Ordering,
    core::time::Duration,
);

impl Selectable for &str {}
impl<T> Selectable for &[T] {}
impl<T> Selectable for Option<T> {}
impl<T, E> Selectable for Result<T, E> {}
impl<T, const N: usize> Selectable for [T; N] {}

#[cfg(feature = "alloc")]
mod alloc_types {
    use super::Selectable;
    use alloc::borrow::{Cow, ToOwned};
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    impl Selectable for String {}
    impl<T> Selectable for Vec<T> {}
    impl<T: ?Sized> Selectable for Box<T> {}
    impl<B: ?Sized + ToOwned> Selectable for Cow<'_, B> {}
}
