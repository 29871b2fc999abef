//! Two-armed result type.
//!
//! `Branch<T, E>` carries the outcome of a conditional transform whose arms
//! produce different types. When both arms agree (`Branch<T, T>`),
//! `into_inner` collapses it back to a plain value.

/// Result of a branch: `Then` when the condition held, `Else` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch<T, E> {
    Then(T),
    Else(E),
}

impl<T, E> Branch<T, E> {
    #[inline]
    pub fn is_then(&self) -> bool {
        matches!(self, Branch::Then(_))
    }

    #[inline]
    pub fn is_else(&self) -> bool {
        matches!(self, Branch::Else(_))
    }

    /// The `Then` value, if taken.
    pub fn then(self) -> Option<T> {
        match self {
            Branch::Then(t) => Some(t),
            Branch::Else(_) => None,
        }
    }

    /// The `Else` value, if taken.
    pub fn otherwise(self) -> Option<E> {
        match self {
            Branch::Then(_) => None,
            Branch::Else(e) => Some(e),
        }
    }

    pub fn as_ref(&self) -> Branch<&T, &E> {
        match self {
            Branch::Then(t) => Branch::Then(t),
            Branch::Else(e) => Branch::Else(e),
        }
    }

    pub fn map_then<U, F: FnOnce(T) -> U>(self, f: F) -> Branch<U, E> {
        match self {
            Branch::Then(t) => Branch::Then(f(t)),
            Branch::Else(e) => Branch::Else(e),
        }
    }

    pub fn map_else<U, F: FnOnce(E) -> U>(self, f: F) -> Branch<T, U> {
        match self {
            Branch::Then(t) => Branch::Then(t),
            Branch::Else(e) => Branch::Else(f(e)),
        }
    }

    /// Fold both arms into a common type. Only the matching closure runs.
    pub fn either<R, F, G>(self, on_then: F, on_else: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Branch::Then(t) => on_then(t),
            Branch::Else(e) => on_else(e),
        }
    }
}

impl<T> Branch<T, T> {
    /// Collapse a branch whose arms share a type.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Branch::Then(t) | Branch::Else(t) => t,
        }
    }
}
