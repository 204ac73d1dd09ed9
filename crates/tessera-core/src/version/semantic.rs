use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::version::error::VersionError;

/// One dot-separated segment of a version notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// A concrete, non-negative component
    Number(u32),
    /// `x`, `X` or `*`: matches any value at this position
    Wildcard,
}

impl Component {
    /// Returns true for [`Component::Wildcard`]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Component::Wildcard)
    }

    /// Returns the numeric value, or `None` for a wildcard
    pub fn number(&self) -> Option<u32> {
        match self {
            Component::Number(n) => Some(*n),
            Component::Wildcard => None,
        }
    }

    fn from_notation(segment: &str) -> Option<Self> {
        match segment {
            "x" | "X" | "*" => Some(Component::Wildcard),
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Number(n) => write!(f, "{}", n),
            Component::Wildcard => write!(f, "x"),
        }
    }
}

/// A parsed semantic version, possibly carrying wildcard components.
///
/// Values are immutable once built. Equality and hashing consider the
/// components and the pre-release key only; the build key is informational.
///
/// `SemanticVersion` deliberately has no `Ord` implementation: a wildcard
/// compares equal to every value at its position, so the ordering produced
/// by [`compare`] is not an equivalence over wildcarded inputs. Sort with
/// `sort_by(compare)` where a sequence of versions needs ordering.
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    components: Vec<Component>,
    prerelease: Option<String>,
    build: Option<String>,
}

impl SemanticVersion {
    /// Creates a version from already validated parts.
    ///
    /// Returns `None` when `components` is empty.
    pub fn new(
        components: Vec<Component>,
        prerelease: Option<String>,
        build: Option<String>,
    ) -> Option<Self> {
        if components.is_empty() {
            return None;
        }
        Some(Self { components, prerelease, build })
    }

    /// Creates a plain `major.minor.patch` version
    pub fn from_numbers(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            components: vec![
                Component::Number(major),
                Component::Number(minor),
                Component::Number(patch),
            ],
            prerelease: None,
            build: None,
        }
    }

    /// Parses a notation such as `1.2.3`, `1.2.x`, `1.0.0-beta.1+build.5`
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        if version.is_empty() {
            return Err(VersionError::Empty);
        }

        let (rest, build) = match version.split_once('+') {
            Some((rest, build)) => (rest, Some(build.to_string())),
            None => (version, None),
        };
        let (core, prerelease) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre.to_string())),
            None => (rest, None),
        };

        if let Some(pre) = &prerelease {
            if !is_dot_separated_identifier(pre) {
                return Err(VersionError::InvalidPrerelease {
                    version: version.to_string(),
                    prerelease: pre.clone(),
                });
            }
        }

        if core.is_empty() {
            return Err(VersionError::EmptyComponent { version: version.to_string(), position: 0 });
        }
        if core.starts_with('.') || core.ends_with('.') {
            return Err(VersionError::StrayDot { version: version.to_string() });
        }

        let mut components = Vec::new();
        let mut first_wildcard: Option<usize> = None;
        for (position, segment) in core.split('.').enumerate() {
            if let Some(wildcard) = Component::from_notation(segment) {
                if prerelease.is_some() {
                    return Err(VersionError::WildcardWithPrerelease(version.to_string()));
                }
                first_wildcard.get_or_insert(position);
                components.push(wildcard);
                continue;
            }
            if first_wildcard.is_some() {
                return Err(VersionError::InterjacentWildcard(version.to_string()));
            }
            if segment.trim().is_empty() {
                return Err(VersionError::EmptyComponent { version: version.to_string(), position });
            }
            let number = segment.parse::<u32>().map_err(|_| VersionError::InvalidComponent {
                version: version.to_string(),
                component: segment.to_string(),
            })?;
            components.push(Component::Number(number));
        }

        // `x`, `x.x` and `*.X` all collapse to a single wildcard.
        if first_wildcard == Some(0) {
            return Err(VersionError::LoneWildcard(version.to_string()));
        }
        // Trailing wildcards after the first one carry no extra information.
        if let Some(idx) = first_wildcard {
            components.truncate(idx + 1);
        }

        Ok(Self { components, prerelease, build })
    }

    /// Number of declared components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Declared components, in order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Component at `pos`, padded past the declared length with a wildcard
    /// when this version has one and with zero otherwise.
    pub fn component(&self, pos: usize) -> Component {
        match self.components.get(pos) {
            Some(c) => *c,
            None if self.has_wildcard() => Component::Wildcard,
            None => Component::Number(0),
        }
    }

    /// Pre-release key (the part after `-`)
    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    /// Build key (the part after `+`)
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn has_wildcard(&self) -> bool {
        self.components.iter().any(Component::is_wildcard)
    }

    /// Compares against `other`; see [`compare`]
    pub fn compare_to(&self, other: &SemanticVersion) -> Ordering {
        compare(self, other)
    }
}

/// Orders two versions component by component, high order first.
///
/// Wildcard positions are skipped. When every position is equal or skipped
/// the pre-release keys decide: a version without a key sorts after one
/// with a key, unless the keyless side has a wildcard, in which case the two
/// are equal. Two keys compare as raw strings. Build keys never participate.
pub fn compare(a: &SemanticVersion, b: &SemanticVersion) -> Ordering {
    let n = a.component_count().max(b.component_count());
    for i in 0..n {
        let (first, second) = match (a.component(i), b.component(i)) {
            (Component::Number(x), Component::Number(y)) => (x, y),
            _ => continue,
        };
        match first.cmp(&second) {
            Ordering::Equal => {}
            unequal => {
                log::trace!("{} vs {}: decided at component {}", a, b, i);
                return unequal;
            }
        }
    }

    match (a.prerelease(), b.prerelease()) {
        (None, None) => Ordering::Equal,
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) if b.has_wildcard() => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) if a.has_wildcard() => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
    }
}

fn is_dot_separated_identifier(s: &str) -> bool {
    s.is_empty()
        || s.split('.').all(|id| {
            !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components && self.prerelease == other.prerelease
    }
}

impl Eq for SemanticVersion {}

impl Hash for SemanticVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
        self.prerelease.hash(state);
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", component)?;
        }
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// A plugin version: semantic when the notation allows it, an opaque
/// string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Version {
    Semantic(SemanticVersion),
    Opaque(String),
}

impl Version {
    /// Parses `version`, falling back to an opaque string when it is not a
    /// valid semantic notation. Only an empty string is rejected.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        if version.is_empty() {
            return Err(VersionError::Empty);
        }
        match SemanticVersion::parse(version) {
            Ok(v) => Ok(Version::Semantic(v)),
            Err(e) => {
                log::debug!("Treating '{}' as an opaque version: {}", version, e);
                Ok(Version::Opaque(version.to_string()))
            }
        }
    }

    pub fn as_semantic(&self) -> Option<&SemanticVersion> {
        match self {
            Version::Semantic(v) => Some(v),
            Version::Opaque(_) => None,
        }
    }

    /// User-facing representation
    pub fn friendly_string(&self) -> String {
        match self {
            Version::Semantic(v) => v.to_string(),
            Version::Opaque(s) => s.clone(),
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.friendly_string())
    }
}
