//! Minimum-version checks.
//!
//! Every check fails closed: a different platform, an unknown platform, or an
//! undetectable version all answer `false`.

use log::trace;

use super::{Platform, RunningPlatform, SystemProbe, Version, VersionProbe};
use crate::primitives::Condition;

/// "At least `version` on `platform`".
///
/// As a [`Condition`] it reads the running platform through [`SystemProbe`]
/// when evaluated; use [`evaluate_with`](Self::evaluate_with) to supply a
/// different probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinimumVersion {
    pub platform: Platform,
    pub version: Version,
}

impl MinimumVersion {
    /// `major.0` on `platform`.
    pub const fn new(platform: Platform, major: u64) -> Self {
        MinimumVersion { platform, version: Version::new(major, 0) }
    }

    pub const fn at(platform: Platform, version: Version) -> Self {
        MinimumVersion { platform, version }
    }

    pub const fn minor(self, minor: u64) -> Self {
        MinimumVersion {
            version: Version::new(self.version.major, minor).with_patch(self.version.patch),
            ..self
        }
    }

    pub fn is_met_by(&self, running: &RunningPlatform) -> bool {
        running.platform == self.platform && running.version >= self.version
    }

    /// Reads the running platform from `probe` once and compares.
    pub fn evaluate_with<P: VersionProbe + ?Sized>(&self, probe: &P) -> bool {
        match probe.running() {
            Some(running) => {
                let met = self.is_met_by(&running);
                trace!(
                    "{} {} >= {} {}: {met}",
                    running.platform, running.version, self.platform, self.version
                );
                met
            }
            None => {
                trace!("running platform unknown, {} {} treated as unmet", self.platform, self.version);
                false
            }
        }
    }
}

impl Condition for MinimumVersion {
    fn evaluate(self) -> bool {
        self.evaluate_with(&SystemProbe)
    }
}

/// Is the running OS `platform` at `major.minor` or later?
///
/// Queries the OS once per call.
pub fn meets_minimum_version(platform: Platform, major: u64, minor: u64) -> bool {
    meets_minimum_version_with(&SystemProbe, platform, major, minor)
}

/// [`meets_minimum_version`] against an explicit probe.
pub fn meets_minimum_version_with<P: VersionProbe + ?Sized>(
    probe: &P,
    platform: Platform,
    major: u64,
    minor: u64,
) -> bool {
    MinimumVersion::new(platform, major).minor(minor).evaluate_with(probe)
}

/// Generate `<name>_at_least(major)` shorthands.
macro_rules! platform_shorthands {
    ($($variant:ident => $name:ident),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc = concat!("`meets_minimum_version(Platform::", stringify!($variant), ", major, 0)`.")]
                #[inline]
                pub fn [<$name _at_least>](major: u64) -> bool {
                    meets_minimum_version(Platform::$variant, major, 0)
                }
            }
        )*
    };
}

platform_shorthands! {
    Ios => ios,
    MacOs => macos,
    TvOs => tvos,
    WatchOs => watchos,
    VisionOs => visionos,
    Android => android,
    Windows => windows,
    Linux => linux,
    FreeBsd => freebsd,
}
