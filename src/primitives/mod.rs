//! # Layer 0: Primitives
//!
//! Basic building blocks for conditional selection:
//! - `condition.rs`: `Condition` (bool, closures, `Not`).
//! - `branch.rs`: `Branch<T, E>` for transforms whose arms differ in type.

pub mod condition;
pub mod branch;

// Re-export key types at this level
pub use condition::{Condition, Not};
pub use branch::Branch;
