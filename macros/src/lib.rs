//! Procedural macros for tola-branch
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Selectable)]` | struct/enum/union | Opt a type into `Selectable` |
//! | `available!()` | expression | Platform availability condition |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Selectable)]
//! enum Chrome { Glass, Flat }
//!
//! let chrome = Chrome::select_if(available!(ios 26, macos 26, *), Chrome::Glass, Chrome::Flat);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-Facing Macros (user/)
// =============================================================================

/// Derive macro to opt a type into `Selectable`.
///
/// Generics and where clauses are carried over unchanged.
///
/// # Example
/// ```ignore
/// #[derive(Selectable)]
/// struct Inset<T> { edge: T }
///
/// let inset = Inset::select_if(compact, Inset { edge: 4 }, Inset { edge: 12 });
/// ```
#[proc_macro_derive(Selectable)]
pub fn derive_selectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_selectable(input).into()
}

/// Build an `Availability` from `platform version` pairs.
///
/// Versions are `major` or `major.minor`. A trailing `*` makes the condition
/// true on any detected platform not listed. Evaluating it on a platform whose
/// version cannot be detected yields `false`.
///
/// # Example
/// ```ignore
/// let glass = available!(ios 26, macos 26.1, *);
/// if glass.evaluate_with(&probe) { ... }
/// ```
#[proc_macro]
pub fn available(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::AvailableInput);
    user::expand_available(input).into()
}
