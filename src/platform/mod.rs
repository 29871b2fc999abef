//! # Layer 2: Platform Version Gating
//!
//! Answers "is the running OS at least version N?" and feeds the answer into
//! selections as a [`Condition`](crate::Condition).
//!
//! ## Module Structure
//!
//! ```text
//! platform/
//! ├── kind.rs         - Platform enum, compile-target lookup
//! ├── version.rs      - Version (major.minor.patch), parsing
//! ├── probe.rs        - VersionProbe: SystemProbe, FixedProbe, CachedProbe
//! ├── requirement.rs  - MinimumVersion, meets_minimum_version, <os>_at_least
//! └── availability.rs - Availability (several platforms + wildcard)
//! ```
//!
//! ## Usage
//!
//! ```
//! use tola_branch::prelude::*;
//! use tola_branch::platform::{MinimumVersion, Platform};
//!
//! let corner_radius = f32::select_if(MinimumVersion::new(Platform::Ios, 26), 20.0, 12.0);
//! # let _ = corner_radius;
//! ```

pub mod kind;
pub mod version;
pub mod probe;
pub mod requirement;
pub mod availability;

pub use kind::{Platform, ParsePlatformError};
pub use version::{Version, ParseVersionError};
pub use probe::{RunningPlatform, VersionProbe, SystemProbe, FixedProbe, CachedProbe};
pub use requirement::{
    MinimumVersion, meets_minimum_version, meets_minimum_version_with,
    ios_at_least, macos_at_least, tvos_at_least, watchos_at_least, visionos_at_least,
    android_at_least, windows_at_least, linux_at_least, freebsd_at_least,
};
pub use availability::Availability;
