use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version of a released transform.
///
/// Ordering is lexicographic on `(major, minor, patch)`, which the derived
/// `Ord` provides through field declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Fallback used when a project has never been released
    pub const ZERO: Version = Version::new(0, 0, 0);

    /// Create a new version
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from text (e.g., "v1.2.3" or "1.2.3" -> Version(1,2,3))
    ///
    /// A single lowercase `v` prefix is accepted. Every component must be a
    /// non-empty run of ASCII digits.
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text.strip_prefix('v').unwrap_or(text);

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 {
            return Err(ReleaseError::format(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            )));
        }

        let major = parse_component(text, "major", parts[0])?;
        let minor = parse_component(text, "minor", parts[1])?;
        let patch = parse_component(text, "patch", parts[2])?;

        Ok(Version::new(major, minor, patch))
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        match bump_type {
            VersionBump::Major => self.next_major(),
            VersionBump::Minor => self.next_minor(),
            VersionBump::Patch => self.next_patch(),
        }
    }

    pub fn next_major(&self) -> Result<Self> {
        Ok(Version::new(increment(self, "major", self.major)?, 0, 0))
    }

    pub fn next_minor(&self) -> Result<Self> {
        Ok(Version::new(self.major, increment(self, "minor", self.minor)?, 0))
    }

    pub fn next_patch(&self) -> Result<Self> {
        Ok(Version::new(
            self.major,
            self.minor,
            increment(self, "patch", self.patch)?,
        ))
    }
}

fn increment(version: &Version, name: &str, component: u64) -> Result<u64> {
    component.checked_add(1).ok_or_else(|| {
        ReleaseError::format(format!(
            "Cannot bump {} version of {}: component overflows",
            name, version
        ))
    })
}

fn parse_component(text: &str, name: &str, part: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReleaseError::format(format!(
            "Invalid {} version '{}' in '{}'",
            name, part, text
        )));
    }
    part.parse::<u64>().map_err(|e| {
        ReleaseError::format(format!(
            "Invalid {} version '{}' in '{}': {}",
            name, part, text, e
        ))
    })
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_without_v() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_canonical_form_regardless_of_prefix() {
        for input in ["0.10.2", "v0.10.2"] {
            assert_eq!(Version::parse(input).unwrap().to_string(), "v0.10.2");
        }
        assert_eq!(Version::parse("v007.0.1").unwrap().to_string(), "v7.0.1");
    }

    #[test]
    fn test_version_parse_wrong_part_count() {
        for input in ["1.2", "v1.2.3.4", "", "v", "1"] {
            let err = Version::parse(input).unwrap_err();
            assert!(
                matches!(err, ReleaseError::Format(_)),
                "expected format error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_version_parse_non_integer_parts() {
        for input in ["v1.x.3", "1..3", "1.2.-3", "1.2.+3", "1.2.3-rc1", " 1.2.3", "V1.2.3", "vv1.2.3"] {
            assert!(
                matches!(Version::parse(input), Err(ReleaseError::Format(_))),
                "expected format error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_version_parse_overflow() {
        assert!(Version::parse("v1.2.99999999999999999999999").is_err());
    }

    #[test]
    fn test_bump_at_component_limit_is_error() {
        let top = Version::parse(&format!("v{}.0.0", u64::MAX)).unwrap();
        assert!(matches!(
            top.bump(VersionBump::Major),
            Err(ReleaseError::Format(_))
        ));

        let minor_top = Version::new(1, u64::MAX, 7);
        assert!(minor_top.next_minor().is_err());
        assert_eq!(minor_top.next_major().unwrap(), Version::new(2, 0, 0));

        let patch_top = Version::new(1, 2, u64::MAX);
        assert!(patch_top.next_patch().is_err());
        assert_eq!(patch_top.next_minor().unwrap(), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_from_str() {
        let v: Version = "v4.5.6".parse().unwrap();
        assert_eq!(v, Version::new(4, 5, 6));
    }

    #[test]
    fn test_version_ordering() {
        let mut versions = vec![
            Version::new(1, 2, 0),
            Version::new(0, 9, 9),
            Version::new(1, 10, 0),
            Version::new(1, 2, 1),
        ];
        versions.sort();
        assert_eq!(
            versions,
            vec![
                Version::new(0, 9, 9),
                Version::new(1, 2, 0),
                Version::new(1, 2, 1),
                Version::new(1, 10, 0),
            ]
        );
        assert_eq!(versions.iter().max(), Some(&Version::new(1, 10, 0)));
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(VersionBump::Major).unwrap();
        assert_eq!(bumped, Version::new(2, 0, 0));
        assert!(bumped > v);
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(VersionBump::Minor).unwrap();
        assert_eq!(bumped, Version::new(1, 3, 0));
        assert!(bumped > v);
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        let bumped = v.bump(VersionBump::Patch).unwrap();
        assert_eq!(bumped, Version::new(1, 2, 4));
        assert!(bumped > v);
    }

    #[test]
    fn test_bump_does_not_mutate_original() {
        let v = Version::new(3, 1, 4);
        let _ = v.next_major();
        let _ = v.next_minor();
        let _ = v.next_patch();
        assert_eq!(v, Version::new(3, 1, 4));
    }

    #[test]
    fn test_zero_version_patch_bump() {
        assert_eq!(Version::ZERO, Version::default());
        assert_eq!(Version::ZERO.bump(VersionBump::Patch).unwrap().to_string(), "v0.0.1");
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "v1.2.3");
        assert_eq!(Version::ZERO.to_string(), "v0.0.0");
    }

    #[test]
    fn test_version_bump_display() {
        assert_eq!(VersionBump::Major.to_string(), "major");
        assert_eq!(VersionBump::Minor.to_string(), "minor");
        assert_eq!(VersionBump::Patch.to_string(), "patch");
    }
}
