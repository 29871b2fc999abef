#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables alloc types in no_std
// - derive: #[derive(Selectable)] and available!
// - platform: running OS version detection

//! # tola-branch
//!
//! Conditional value selection and conditional transforms, with OS version
//! gating.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Condition (bool, FnOnce() -> bool, Not), Branch<T, E>          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability                                              |
//! |  - select_if / select_unless / select_resolved (free functions)   |
//! |  - Selectable (marker opt-in), Transformable (blanket extension)  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Platform                                                |
//! |  - Platform, Version, VersionProbe, MinimumVersion, Availability  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Macros                                                  |
//! |  - impl_selectable!, #[derive(Selectable)], available!            |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Guarantees
//!
//! - A condition is evaluated exactly once per call, and before any closure.
//! - At most one caller closure runs; the others are dropped uncalled.
//! - Panics in caller closures propagate untouched.
//! - Version checks fail closed: unknown platform or version means `false`.
//!
//! ## Quick Start
//!
//! ```
//! use tola_branch::prelude::*;
//!
//! #[derive(Debug, PartialEq, Selectable)]
//! enum Backdrop { Blur, Solid }
//!
//! let compact = false;
//! let backdrop = Backdrop::select_if(compact, Backdrop::Solid, Backdrop::Blur);
//! assert_eq!(backdrop, Backdrop::Blur);
//!
//! let title = "Inbox".to_string().transform_unless(compact, |t| t + " (all)");
//! assert_eq!(title, "Inbox (all)");
//! ```
//!
//! Gate on the running OS:
//!
//! ```
//! use tola_branch::prelude::*;
//!
//! let radius = f32::select_if(available!(ios 26, macos 26), 24.0, 12.0);
//! # let _ = radius;
//! ```
//!
//! Conditions that change at runtime swap one value for another; nothing here
//! carries state across the swap.

// Allow `::tola_branch` to work inside the crate itself
extern crate self as tola_branch;

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability
// =============================================================================
pub mod select;
pub mod capability;
pub mod transform;

// =============================================================================
// Layer 2: Platform
// =============================================================================
#[cfg(feature = "platform")]
pub mod platform;

// =============================================================================
// Layer 3: Macros
// =============================================================================
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Branch, Condition, Not};
pub use select::{select_if, select_unless, select_resolved};
pub use capability::Selectable;
pub use transform::Transformable;

#[cfg(feature = "platform")]
pub use platform::{meets_minimum_version, MinimumVersion, Platform, Version};

// Re-export proc-macros
#[cfg(feature = "derive")]
pub use macros::Selectable;
#[cfg(all(feature = "derive", feature = "platform"))]
pub use macros::available;

/// Common items for conditional selection.
pub mod prelude {
    pub use crate::primitives::{Branch, Condition, Not};
    pub use crate::capability::Selectable;
    pub use crate::transform::Transformable;
    #[cfg(feature = "derive")]
    pub use macros::Selectable;
    #[cfg(all(feature = "derive", feature = "platform"))]
    pub use macros::available;
    // Note: impl_selectable! is #[macro_export] so it's at crate root
}
