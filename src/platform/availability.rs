//! Multi-platform availability sets.
//!
//! ```
//! use tola_branch::platform::{Availability, FixedProbe, MinimumVersion, Platform, Version};
//!
//! const GLASS: Availability<'static> = Availability::new(
//!     &[
//!         MinimumVersion::new(Platform::Ios, 26),
//!         MinimumVersion::new(Platform::MacOs, 26),
//!     ],
//!     false,
//! );
//!
//! let phone = FixedProbe::new(Platform::Ios, Version::new(26, 1));
//! let desktop = FixedProbe::new(Platform::Windows, Version::new(10, 0));
//! assert!(GLASS.evaluate_with(&phone));
//! assert!(!GLASS.evaluate_with(&desktop));
//! ```

use super::{MinimumVersion, RunningPlatform, SystemProbe, VersionProbe};
use crate::primitives::Condition;

/// Per-platform minimums, plus what to answer on platforms not listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability<'a> {
    requirements: &'a [MinimumVersion],
    others: bool,
}

impl<'a> Availability<'a> {
    /// `others` is the answer for a known platform absent from `requirements`.
    pub const fn new(requirements: &'a [MinimumVersion], others: bool) -> Self {
        Availability { requirements, others }
    }

    pub fn requirements(&self) -> &'a [MinimumVersion] {
        self.requirements
    }

    pub fn allows_others(&self) -> bool {
        self.others
    }

    /// First requirement naming the running platform decides.
    pub fn is_met_by(&self, running: &RunningPlatform) -> bool {
        self.requirements
            .iter()
            .find(|req| req.platform == running.platform)
            .map_or(self.others, |req| req.is_met_by(running))
    }

    /// An undetectable platform is `false`, wildcard or not.
    pub fn evaluate_with<P: VersionProbe + ?Sized>(&self, probe: &P) -> bool {
        probe.running().is_some_and(|running| self.is_met_by(&running))
    }
}

impl Condition for Availability<'_> {
    fn evaluate(self) -> bool {
        self.evaluate_with(&SystemProbe)
    }
}
