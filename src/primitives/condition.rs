//! Lazily evaluated conditions.
//!
//! Core types: `Condition` trait, `Not` wrapper.
//!
//! A condition is consumed by `evaluate`, so every operation that takes one
//! evaluates it at most once. Plain `bool`s are already evaluated; wrap any
//! expression with side effects in a closure to defer it to the call.

/// Something that resolves to a `bool` exactly once.
pub trait Condition {
    fn evaluate(self) -> bool;
}

impl Condition for bool {
    #[inline(always)]
    fn evaluate(self) -> bool {
        self
    }
}

impl<F> Condition for F
where
    F: FnOnce() -> bool,
{
    #[inline(always)]
    fn evaluate(self) -> bool {
        self()
    }
}

/// Logical NOT of a condition.
///
/// `Not(c)` evaluates `c` once and negates the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<C>(pub C);

impl<C: Condition> Condition for Not<C> {
    #[inline(always)]
    fn evaluate(self) -> bool {
        !self.0.evaluate()
    }
}
