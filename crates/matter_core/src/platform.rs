//! Host platform version and the capabilities derived from it
//!
//! Capabilities are resolved once, when a widget is created, from the version
//! the host reports. Widgets consult the resolved flags instead of comparing
//! versions at every call site.

use std::fmt;

/// Version reported by the host operating system
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PlatformVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dotted version string such as `"13"`, `"13.4"` or `"13.4.1"`.
    ///
    /// Missing components default to zero.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(part) => part.parse().ok()?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(major, minor, patch))
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// First version with the large content viewer accessibility interaction
const LARGE_CONTENT_VIEWER_SINCE: PlatformVersion = PlatformVersion::new(13, 0, 0);

/// Feature flags resolved from a [`PlatformVersion`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Long-press magnified previews of bar items
    pub large_content_viewer: bool,
}

impl Capabilities {
    /// Resolve capabilities for a host version
    pub fn resolve(version: PlatformVersion) -> Self {
        let caps = Self {
            large_content_viewer: version >= LARGE_CONTENT_VIEWER_SINCE,
        };
        tracing::debug!("Capabilities::resolve - {} -> {:?}", version, caps);
        caps
    }

    /// Capabilities of a host that supports nothing optional
    pub const fn minimal() -> Self {
        Self {
            large_content_viewer: false,
        }
    }
}

impl Default for Capabilities {
    /// Assumes a current host
    fn default() -> Self {
        Self {
            large_content_viewer: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(PlatformVersion::parse("13"), Some(PlatformVersion::new(13, 0, 0)));
        assert_eq!(
            PlatformVersion::parse("12.4.1"),
            Some(PlatformVersion::new(12, 4, 1))
        );
        assert_eq!(PlatformVersion::parse("12.x"), None);
        assert_eq!(PlatformVersion::parse("1.2.3.4"), None);
        assert_eq!(PlatformVersion::parse(""), None);
    }

    #[test]
    fn test_capabilities_by_version() {
        assert!(!Capabilities::resolve(PlatformVersion::new(12, 4, 0)).large_content_viewer);
        assert!(Capabilities::resolve(PlatformVersion::new(13, 0, 0)).large_content_viewer);
    }
}
