//! Dotted `major.minor.patch` versions.

use core::fmt;
use core::str::FromStr;

/// An OS version. Ordering is lexicographic on `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64) -> Self {
        Version { major, minor, patch: 0 }
    }

    pub const fn with_patch(self, patch: u64) -> Self {
        Version { patch, ..self }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.patch == 0 {
            write!(f, "{}.{}", self.major, self.minor)
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVersionError {
    #[error("empty version string")]
    Empty,
    #[error("invalid version component `{0}`")]
    InvalidComponent(String),
    #[error("expected at most 3 version components, found {0}")]
    TooManyComponents(usize),
}

impl FromStr for Version {
    type Err = ParseVersionError;

    /// Accepts `"17"`, `"14.2"` and `"10.0.19045"`. Missing components are 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseVersionError::Empty);
        }

        let count = s.split('.').count();
        if count > 3 {
            return Err(ParseVersionError::TooManyComponents(count));
        }

        let mut parts = [0u64; 3];
        for (slot, component) in parts.iter_mut().zip(s.split('.')) {
            *slot = component
                .parse()
                .map_err(|_| ParseVersionError::InvalidComponent(component.to_string()))?;
        }

        let [major, minor, patch] = parts;
        Ok(Version { major, minor, patch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_forms() {
        assert_eq!("17".parse(), Ok(Version::new(17, 0)));
        assert_eq!("14.2".parse(), Ok(Version::new(14, 2)));
        assert_eq!(" 10.0.19045 ".parse(), Ok(Version::new(10, 0).with_patch(19045)));
    }

    #[test]
    fn rejects_malformed() {
        assert_eq!("".parse::<Version>(), Err(ParseVersionError::Empty));
        assert_eq!(
            "17.x".parse::<Version>(),
            Err(ParseVersionError::InvalidComponent("x".into()))
        );
        assert_eq!(
            "1..2".parse::<Version>(),
            Err(ParseVersionError::InvalidComponent("".into()))
        );
        assert_eq!(
            "1.2.3.4".parse::<Version>(),
            Err(ParseVersionError::TooManyComponents(4))
        );
    }

    #[test]
    fn orders_by_components() {
        assert!(Version::new(17, 0) > Version::new(16, 9).with_patch(9));
        assert!(Version::new(14, 2) > Version::new(14, 1));
        assert!(Version::new(14, 2).with_patch(1) > Version::new(14, 2));
    }

    #[test]
    fn displays_without_zero_patch() {
        assert_eq!(Version::new(14, 2).to_string(), "14.2");
        assert_eq!(Version::new(10, 0).with_patch(19045).to_string(), "10.0.19045");
    }
}
