//! Free-function value selection.
//!
//! These work for any `T` without opting in. [`Selectable`](crate::Selectable)
//! exposes the same operations as associated functions on the type itself.

use crate::primitives::{Condition, Not};

/// Returns `primary` if `condition` holds, else `fallback`.
///
/// ```
/// use tola_branch::select::select_if;
///
/// assert_eq!(select_if(true, "A", "B"), "A");
/// assert_eq!(select_if(|| false, "A", "B"), "B");
/// ```
#[inline]
pub fn select_if<T, C: Condition>(condition: C, primary: T, fallback: T) -> T {
    if condition.evaluate() { primary } else { fallback }
}

/// Returns `primary` if `condition` does NOT hold, else `fallback`.
#[inline]
pub fn select_unless<T, C: Condition>(condition: C, primary: T, fallback: T) -> T {
    select_if(Not(condition), primary, fallback)
}

/// Calls `resolver` once and returns its result.
///
/// For selections with more than two tiers:
///
/// ```
/// use tola_branch::select::select_resolved;
///
/// let major = 16;
/// let style = select_resolved(|| {
///     if major >= 17 {
///         "glass"
///     } else if major >= 15 {
///         "material"
///     } else {
///         "plain"
///     }
/// });
/// assert_eq!(style, "material");
/// ```
#[inline]
pub fn select_resolved<T, F: FnOnce() -> T>(resolver: F) -> T {
    resolver()
}
