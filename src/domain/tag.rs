use crate::domain::Version;
use crate::error::Result;

/// Release tag of a single project, named `<project>-<version>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub project: String,
    pub version: Version,
}

impl ReleaseTag {
    /// Create a new tag for a project at a version
    pub fn new(project: impl Into<String>, version: Version) -> Self {
        ReleaseTag {
            project: project.into(),
            version,
        }
    }

    /// Prefix shared by every tag of `project`
    pub fn prefix(project: &str) -> String {
        format!("{}-", project)
    }

    /// Parse a tag name belonging to `project`.
    ///
    /// Returns `Ok(None)` when the tag does not carry the project prefix.
    /// A tag that carries the prefix but no valid version is an error.
    pub fn parse_for_project(project: &str, tag: &str) -> Result<Option<Self>> {
        let prefix = Self::prefix(project);
        match tag.strip_prefix(prefix.as_str()) {
            Some(rest) => Ok(Some(ReleaseTag::new(project, Version::parse(rest)?))),
            None => Ok(None),
        }
    }

    /// Full tag name (e.g., "regex-v1.4.0")
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.project, self.version)
    }
}
