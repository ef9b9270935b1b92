use crate::error::{ReleaseError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the default manifest file name looked up in each project directory.
fn default_manifest_file() -> String {
    "transform.yaml".to_string()
}

/// Returns the default package scope used in the deploy instructions.
fn default_deploy_scope() -> String {
    "redpanda-data".to_string()
}

/// Returns the default marker for manifest env entries without a default value.
fn default_required_marker() -> String {
    "<required>".to_string()
}

/// Names of the external command-line tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Version-control CLI used to sync and list tags
    pub git: String,
    /// Build CLI, also the deploy tool named in release notes
    pub build: String,
    /// Release-hosting CLI
    pub release: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            git: "git".to_string(),
            build: "rpk".to_string(),
            release: "gh".to_string(),
        }
    }
}

impl ToolsConfig {
    /// All tools in invocation order
    pub fn all(&self) -> [&str; 3] {
        [self.git.as_str(), self.build.as_str(), self.release.as_str()]
    }
}

/// Represents the complete configuration for transform-release.
///
/// There is no configuration file: every value is a fixed convention of the
/// transforms repository, with the root taken from the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository root containing one directory per project
    pub root: PathBuf,

    /// Manifest file that marks a directory as a releasable project
    pub manifest_file: String,

    pub tools: ToolsConfig,

    /// Scope of the deploy package, as in `@<scope>/<project>@<version>`
    pub deploy_scope: String,

    /// Manifest env value meaning "must be supplied at deploy time"
    pub required_marker: String,
}

impl Config {
    /// Configuration rooted at `root` with all other values defaulted
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Config {
            root: root.into(),
            manifest_file: default_manifest_file(),
            tools: ToolsConfig::default(),
            deploy_scope: default_deploy_scope(),
            required_marker: default_required_marker(),
        }
    }

    /// Directory of a single project
    pub fn project_dir(&self, project: &str) -> PathBuf {
        self.root.join(project)
    }
}

/// Loads configuration for the current working directory.
///
/// # Returns
/// * `Ok(Config)` - Configuration rooted at the working directory
/// * `Err` - If the working directory cannot be determined
pub fn load_config() -> Result<Config> {
    let root = std::env::current_dir()
        .map_err(|e| ReleaseError::config(format!("Cannot determine working directory: {}", e)))?;
    Ok(Config::for_root(root))
}

/// Lists the projects under `root`.
///
/// A project is a direct subdirectory containing `manifest_file`. Names are
/// sorted so the CLI shows a stable choice list.
///
/// # Arguments
/// * `root` - Repository root to scan
/// * `manifest_file` - File name that marks a project directory
///
/// # Returns
/// * `Ok(Vec<String>)` - Sorted project names (possibly empty)
/// * `Err` - If the root directory cannot be read
pub fn discover_projects(root: &Path, manifest_file: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(root).map_err(|e| {
        ReleaseError::config(format!("Cannot read directory '{}': {}", root.display(), e))
    })?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.join(manifest_file).is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            projects.push(name.to_string());
        }
    }

    projects.sort();
    Ok(projects)
}
