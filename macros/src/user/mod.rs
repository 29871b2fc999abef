//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Selectable)]` | on struct/enum/union | Marker opt-in to `Selectable` |
//! | `available!` | function macro | Build a platform `Availability` |

mod available;
mod selectable;

pub use available::expand_available;
pub use selectable::expand_derive_selectable;
