//! Operating system families.

use core::fmt;
use core::str::FromStr;

/// An operating system family whose version can gate a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    MacOs,
    TvOs,
    WatchOs,
    VisionOs,
    Android,
    Windows,
    Linux,
    FreeBsd,
}

impl Platform {
    pub const ALL: [Platform; 9] = [
        Platform::Ios,
        Platform::MacOs,
        Platform::TvOs,
        Platform::WatchOs,
        Platform::VisionOs,
        Platform::Android,
        Platform::Windows,
        Platform::Linux,
        Platform::FreeBsd,
    ];

    /// The platform this binary was compiled for, if it is one we know.
    pub const fn current() -> Option<Platform> {
        if cfg!(target_os = "ios") {
            Some(Platform::Ios)
        } else if cfg!(target_os = "macos") {
            Some(Platform::MacOs)
        } else if cfg!(target_os = "tvos") {
            Some(Platform::TvOs)
        } else if cfg!(target_os = "watchos") {
            Some(Platform::WatchOs)
        } else if cfg!(target_os = "visionos") {
            Some(Platform::VisionOs)
        } else if cfg!(target_os = "android") {
            Some(Platform::Android)
        } else if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else if cfg!(target_os = "linux") {
            Some(Platform::Linux)
        } else if cfg!(target_os = "freebsd") {
            Some(Platform::FreeBsd)
        } else {
            None
        }
    }

    /// Lowercase name, as accepted by `FromStr` and `available!`.
    pub const fn name(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::MacOs => "macos",
            Platform::TvOs => "tvos",
            Platform::WatchOs => "watchos",
            Platform::VisionOs => "visionos",
            Platform::Android => "android",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::FreeBsd => "freebsd",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a platform name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform `{0}`")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Platform::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParsePlatformError(wanted.to_string()))
    }
}
