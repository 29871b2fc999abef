//! Sources of the running platform and its version.

use std::sync::OnceLock;

use log::debug;

use super::{Platform, Version};

/// The platform the process is running on, with its detected version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunningPlatform {
    pub platform: Platform,
    pub version: Version,
}

impl RunningPlatform {
    pub const fn new(platform: Platform, version: Version) -> Self {
        RunningPlatform { platform, version }
    }
}

/// Answers "what are we running on?".
///
/// `None` means the platform or its version could not be determined.
pub trait VersionProbe {
    fn running(&self) -> Option<RunningPlatform>;
}

impl<P: VersionProbe + ?Sized> VersionProbe for &P {
    fn running(&self) -> Option<RunningPlatform> {
        (**self).running()
    }
}

impl<P: VersionProbe + ?Sized> VersionProbe for Box<P> {
    fn running(&self) -> Option<RunningPlatform> {
        (**self).running()
    }
}

// =============================================================================
// SystemProbe
// =============================================================================

/// Queries the OS through `os_info` on every call.
///
/// On Linux the reported version is the distribution's release version.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl VersionProbe for SystemProbe {
    fn running(&self) -> Option<RunningPlatform> {
        let Some(platform) = Platform::current() else {
            debug!("running platform is not one tola-branch recognizes");
            return None;
        };

        let info = os_info::get();
        let version = match info.version() {
            os_info::Version::Semantic(major, minor, patch) => {
                Version::new(*major, *minor).with_patch(*patch)
            }
            os_info::Version::Custom(raw) => match raw.parse() {
                Ok(version) => version,
                Err(err) => {
                    debug!("{platform}: unparsable OS version {raw:?}: {err}");
                    return None;
                }
            },
            other => {
                debug!("{platform}: OS version not available ({other:?})");
                return None;
            }
        };

        Some(RunningPlatform { platform, version })
    }
}

// =============================================================================
// FixedProbe
// =============================================================================

/// Always reports the same answer.
///
/// Useful for simulating a platform in tests, or pinning a snapshot taken
/// once at launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe(pub Option<RunningPlatform>);

impl FixedProbe {
    pub const fn new(platform: Platform, version: Version) -> Self {
        FixedProbe(Some(RunningPlatform::new(platform, version)))
    }

    pub const fn unknown() -> Self {
        FixedProbe(None)
    }

    /// Capture whatever `probe` reports right now.
    pub fn snapshot<P: VersionProbe + ?Sized>(probe: &P) -> Self {
        FixedProbe(probe.running())
    }
}

impl VersionProbe for FixedProbe {
    fn running(&self) -> Option<RunningPlatform> {
        self.0
    }
}

// =============================================================================
// CachedProbe
// =============================================================================

/// Asks the inner probe once and replays that answer afterwards.
#[derive(Debug, Default)]
pub struct CachedProbe<P> {
    inner: P,
    answer: OnceLock<Option<RunningPlatform>>,
}

impl<P: VersionProbe> CachedProbe<P> {
    pub const fn new(inner: P) -> Self {
        CachedProbe { inner, answer: OnceLock::new() }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: VersionProbe> VersionProbe for CachedProbe<P> {
    fn running(&self) -> Option<RunningPlatform> {
        *self.answer.get_or_init(|| self.inner.running())
    }
}
