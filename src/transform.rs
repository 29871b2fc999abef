//! Conditional transforms on values.
//!
//! `Transformable` is blanket-implemented for every sized type, so any value
//! (builders, styles, strings, ...) can be decorated in a chain:
//!
//! ```
//! use tola_branch::Transformable;
//!
//! let dense = true;
//! let label = String::from("Save")
//!     .transform_if(dense, |s| s.to_uppercase())
//!     .transform_if_present(Some("⌘S"), |s, key| format!("{s} ({key})"));
//! assert_eq!(label, "SAVE (⌘S)");
//! ```
//!
//! Exactly one closure runs per call, and only after the condition has been
//! evaluated. Closures on the untaken side are dropped without being called.

use crate::primitives::{Branch, Condition, Not};

/// Extension methods for conditionally transforming `self`.
pub trait Transformable: Sized {
    /// `transform(self)` if `condition` holds, else `self` untouched.
    #[inline]
    fn transform_if<C, F>(self, condition: C, transform: F) -> Self
    where
        C: Condition,
        F: FnOnce(Self) -> Self,
    {
        if condition.evaluate() { transform(self) } else { self }
    }

    /// `transform(self)` if `condition` does NOT hold, else `self` untouched.
    #[inline]
    fn transform_unless<C, F>(self, condition: C, transform: F) -> Self
    where
        C: Condition,
        F: FnOnce(Self) -> Self,
    {
        self.transform_if(Not(condition), transform)
    }

    /// Apply exactly one of `transform` / `fallback`.
    #[inline]
    fn transform_if_else<C, U, F, G>(self, condition: C, transform: F, fallback: G) -> U
    where
        C: Condition,
        F: FnOnce(Self) -> U,
        G: FnOnce(Self) -> U,
    {
        if condition.evaluate() { transform(self) } else { fallback(self) }
    }

    /// `transform(self, value)` if `optional` is `Some(value)`, else `self`.
    #[inline]
    fn transform_if_present<V, F>(self, optional: Option<V>, transform: F) -> Self
    where
        F: FnOnce(Self, V) -> Self,
    {
        match optional {
            Some(value) => transform(self, value),
            None => self,
        }
    }

    /// Like `transform_if`, but the transform may change the type.
    ///
    /// ```
    /// use tola_branch::{Branch, Transformable};
    ///
    /// let width: Branch<String, u32> = 42u32.branch_if(true, |w| format!("{w}px"));
    /// assert_eq!(width, Branch::Then("42px".to_string()));
    /// ```
    #[inline]
    fn branch_if<C, U, F>(self, condition: C, transform: F) -> Branch<U, Self>
    where
        C: Condition,
        F: FnOnce(Self) -> U,
    {
        if condition.evaluate() {
            Branch::Then(transform(self))
        } else {
            Branch::Else(self)
        }
    }

    /// Like `transform_if_present`, but the transform may change the type.
    #[inline]
    fn branch_if_present<V, U, F>(self, optional: Option<V>, transform: F) -> Branch<U, Self>
    where
        F: FnOnce(Self, V) -> U,
    {
        match optional {
            Some(value) => Branch::Then(transform(self, value)),
            None => Branch::Else(self),
        }
    }

    /// In-place variant for `&mut self` builders.
    ///
    /// ```
    /// use tola_branch::Transformable;
    ///
    /// let mut args = Vec::new();
    /// args.apply_if(true, |a| a.push("--color"))
    ///     .apply_if(false, |a| a.push("--quiet"));
    /// assert_eq!(args, ["--color"]);
    /// ```
    #[inline]
    fn apply_if<C, F>(&mut self, condition: C, f: F) -> &mut Self
    where
        C: Condition,
        F: FnOnce(&mut Self),
    {
        if condition.evaluate() {
            f(self);
        }
        self
    }
}

impl<T> Transformable for T {}
